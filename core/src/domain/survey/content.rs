use crate::domain::{
    common::language::Language,
    survey::entities::{Survey, SurveyQuestion},
};

struct StaticSurvey {
    title: &'static str,
    description: &'static str,
    questions: [(&'static str, &'static str, [&'static str; 4]); 7],
}

const ENGLISH: StaticSurvey = StaticSurvey {
    title: "Questionnaire for Mid-Day Meal Observation",
    description: "Please answer the following questions for meal service monitoring.",
    questions: [
        (
            "q1",
            "🍽️ Was the meal served as per the pre-decided menu?",
            [
                "✅ Yes, exactly as per menu",
                "♻️ Minor changes",
                "⚠️ Major changes",
                "❌ Not at all as per menu",
            ],
        ),
        (
            "q2",
            "👨‍🍳 Was the quality of food served satisfactory?",
            ["🌟 Very good", "👍 Good", "😐 Average", "👎 Poor"],
        ),
        (
            "q3",
            "🍛 Was the quantity of food sufficient for all students?",
            [
                "✅ Yes, sufficient for all",
                "⚠️ Partially sufficient",
                "❗ Insufficient for some",
                "❌ Not sufficient at all",
            ],
        ),
        (
            "q4",
            "📊 What percentage of students consumed the major portion of their meal?",
            ["💯 100%", "📉 75–80%", "📉 50–60%", "📉 20–30%"],
        ),
        (
            "q5",
            "🙅‍♂️ Did any student refuse to eat the food served today?",
            [
                "😊 No student refused",
                "😐 1–2 students",
                "☹️ 3–5 students",
                "😠 More than 5 students",
            ],
        ),
        (
            "q6",
            "🧼 Were there any visible hygiene or cleanliness issues during food distribution?",
            [
                "✅ No issues",
                "⚠️ Minor concern",
                "🚫 Major concern",
                "🙈 Not Observed",
            ],
        ),
        (
            "q7",
            "😊 Did students appear happy and satisfied after the meal?",
            ["😄 All students", "🙂 Most students", "😐 Few students", "😞 None"],
        ),
    ],
};

const GUJARATI: StaticSurvey = StaticSurvey {
    title: "મધ્યાન ભોજન નનરીક્ષણ માટે પ્રશ્નાવલી",
    description: "ભોજન સેવા પર નિરીક્ષણ માટે નીચે આપેલા પ્રશ્નોના જવાબ આપો.",
    questions: [
        (
            "q1",
            "🍽️ ભોજન અગાઉ નક્કી કરેલ મેન્યુ મુજબ આપવામાં આવ્યું હતું કે નહીં?",
            [
                "✅ હા, મેન્યુ મુજબ સંપૂર્ણ",
                "♻️ થોડી ફેરફાર સાથે",
                "⚠️ મોટા ફેરફાર સાથે",
                "❌ મેન્યુ મુજબ નહોતું",
            ],
        ),
        (
            "q2",
            "👨‍🍳 આપેલા ભોજનની ગુણવત્તા સંતોષકારક હતી કે નહીં?",
            ["🌟 ખૂબ સારી", "👍 સારી", "😐 સરેરાશ", "👎 નબળી"],
        ),
        (
            "q3",
            "🍛 વિદ્યાર્થીઓ માટે ભોજનનું પ્રમાણ પૂરતું હતું કે નહીં?",
            [
                "✅ હા, બધાના માટે પૂરતું હતું",
                "⚠️ અંશતઃ પૂરતું હતું",
                "❗ થોડાક માટે ઓછું પડ્યું",
                "❌ બિલકુલ પૂરતું ન હતું",
            ],
        ),
        (
            "q4",
            "📊 કેટલાં ટકા વિદ્યાર્થીઓએ મોટાભાગનું ભોજન લીધું હતું?",
            ["💯 100%", "📉 75–80%", "📉 50–60%", "📉 20–30%"],
        ),
        (
            "q5",
            "🙅‍♂️ આજે આપેલું ભોજન કોઈ વિદ્યાર્થીએ ખાવાનું નકાર્યું હતું?",
            [
                "😊 કોઈએ ન નકારી",
                "😐 ૧–૨ વિદ્યાર્થીઓ",
                "☹️ ૩–૫ વિદ્યાર્થીઓ",
                "😠 ૫ કરતાં વધુ વિદ્યાર્થીઓ",
            ],
        ),
        (
            "q6",
            "🧼 ભોજન વહેંચણી દરમિયાન કોઈ સફાઈ અથવા સ્વચ્છતાની સમસ્યા જોવા મળી હતી?",
            ["✅ ના", "⚠️ હળવી સમસ્યા", "🚫 ગંભીર સમસ્યા", "🙈 ધ્યાનમાં નથી"],
        ),
        (
            "q7",
            "😊 ભોજન પછી વિદ્યાર્થીઓ સંતોષ અને આનંદિત લાગ્યા?",
            [
                "😄 બધા વિદ્યાર્થીઓ",
                "🙂 મોટા ભાગના વિદ્યાર્થીઓ",
                "😐 થોડાક વિદ્યાર્થીઓ",
                "😞 કોઈ નહિ",
            ],
        ),
    ],
};

impl StaticSurvey {
    fn to_survey(&self) -> Survey {
        Survey {
            survey_title: self.title.to_string(),
            description: self.description.to_string(),
            questions: self
                .questions
                .iter()
                .map(|(id, text, options)| SurveyQuestion {
                    id: id.to_string(),
                    text: text.to_string(),
                    options: options.iter().map(|option| option.to_string()).collect(),
                })
                .collect(),
        }
    }
}

pub(crate) fn survey_for(language: Language) -> Survey {
    match language {
        Language::En => ENGLISH.to_survey(),
        Language::Gu => GUJARATI.to_survey(),
    }
}
