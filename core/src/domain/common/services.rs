use std::sync::Arc;

use crate::domain::{
    meal_verification::{
        nutrition_parser::{NutritionParser, RegexNutritionParser},
        ports::LLMClient,
        value_objects::VerificationConfig,
    },
    teacher::ports::TeacherRepository,
};

/// Application service shared by every domain. Ports are injected so tests
/// can swap the database and the language model for mocks.
pub struct Service<TR, LLM>
where
    TR: TeacherRepository,
    LLM: LLMClient,
{
    pub(crate) teacher_repository: TR,
    pub(crate) llm_client: LLM,
    pub(crate) verification: VerificationConfig,
    pub(crate) nutrition_parser: Arc<dyn NutritionParser>,
}

impl<TR, LLM> Service<TR, LLM>
where
    TR: TeacherRepository,
    LLM: LLMClient,
{
    pub fn new(teacher_repository: TR, llm_client: LLM, verification: VerificationConfig) -> Self {
        Self {
            teacher_repository,
            llm_client,
            verification,
            nutrition_parser: Arc::new(RegexNutritionParser::new()),
        }
    }

    pub fn with_nutrition_parser(mut self, parser: Arc<dyn NutritionParser>) -> Self {
        self.nutrition_parser = parser;
        self
    }

    pub fn verification_config(&self) -> &VerificationConfig {
        &self.verification
    }
}
