use bytes::Bytes;

use crate::domain::{
    common::language::Language,
    meal_verification::value_objects::GenerationRequest,
};

pub const SYSTEM_PROMPT: &str =
    "You are a food image detection expert. Identify all food items visible in the image.";

pub fn food_list_prompt(language: Language) -> &'static str {
    match language {
        Language::En => {
            "What food items do you see in this image? Just list them, one item per line. \
             Only list items that are actually visible in the image, do not guess extra dishes. \
             Please provide all information in the English language only."
        }
        Language::Gu => {
            "આ ચિત્રમાં દર્શાવાયેલ ખોરાકની ઓળખ કરો. દરેક ખોરાકનો સ્પષ્ટ ઉલ્લેખ કરો. \
             જો ચિત્રમાં રાંધેલા ચોખા હોય તો હંમેશા “ભાત” શબ્દ જ લખો — “ચોખા” શબ્દ નો ઉપયોગ ન કરો. \
             દરેક ખોરાકની સામે પીરસેલી અંદાજિત માત્રા લખો, ગ્રામ અથવા મિલી એકમમાં, અથવા સંખ્યામાં જો તે વસ્તુ ટુકડાઓમાં હોય (જેમ કે “૨ રોટલી”). \
             ફક્ત ચિત્રમાં દેખાતી વસ્તુઓ જ લખો, અંદાજથી નવી વસ્તુ ઉમેરશો નહીં. પરંતુ ક્રમાંક (૧, ૨, ૩...) નો ઉપયોગ ન કરો. \
             ફક્ત યાદી આપો. માહિતી માત્ર ગુજરાતી ભાષામાં આપો."
        }
    }
}

pub fn nutrition_prompt(language: Language) -> &'static str {
    match language {
        Language::En => {
            "For each food item visible in this image, give its approximate nutrition \
             (calories, protein, fat, carbs). Write the item name in bold on its own line, \
             like **item name**, followed by one '- nutrient: value' line per nutrient. \
             Please provide all information in the English language only."
        }
        Language::Gu => {
            "તમામ માહિતી કૃપા કરીને ફક્ત ગુજરાતી ભાષામાં આપો. \
             આ છબીમાં તમને કયા ખાદ્ય પદાર્થો દેખાય છે? \
             દરેક ખોરાક વસ્તુ માટે પહેલે તેનું નામ **નામ** રીતે બોલ્ડમાં લખો અને પછી તેની અંદાજિત પોષક માહિતી આપો — \
             જેમ કે કેલરી, પ્રોટીન. દરેક પોષક તત્વ અલગ લીટીમાં '- તત્વ: મૂલ્ય' રીતે લખો. \
             દરેક ખોરાક વસ્તુને અલગ રીતે જણાવો. \
             Finally, provide a total row for all detected items in the format: \
             '**કુલ (સર્વ કરેલી માત્રા માટે)**' followed by '- અંદાજિત કેલરી: ~XXX કિલોકેલરી' and '- પ્રોટીન: ~YY ગ્રામ'. \
             તમામ માહિતી કૃપા કરીને ફક્ત ગુજરાતી ભાષામાં આપો."
        }
    }
}

pub fn food_list_request(language: Language, image: Bytes, max_output_tokens: u32) -> GenerationRequest {
    GenerationRequest {
        system_prompt: SYSTEM_PROMPT.to_string(),
        user_prompt: food_list_prompt(language).to_string(),
        image,
        max_output_tokens,
    }
}

pub fn nutrition_request(language: Language, image: Bytes, max_output_tokens: u32) -> GenerationRequest {
    GenerationRequest {
        system_prompt: SYSTEM_PROMPT.to_string(),
        user_prompt: nutrition_prompt(language).to_string(),
        image,
        max_output_tokens,
    }
}
