use crate::domain::{common::language::Language, survey::entities::Survey};

pub trait SurveyService: Send + Sync {
    fn get_survey(&self, language: Language) -> Survey;
}
