use crate::domain::{
    common::{language::Language, services::Service},
    meal_verification::ports::LLMClient,
    survey::{content::survey_for, entities::Survey, ports::SurveyService},
    teacher::ports::TeacherRepository,
};

impl<TR, LLM> SurveyService for Service<TR, LLM>
where
    TR: TeacherRepository,
    LLM: LLMClient,
{
    fn get_survey(&self, language: Language) -> Survey {
        survey_for(language)
    }
}
