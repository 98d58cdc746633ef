use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_verification::{
        entities::MenuVerification,
        value_objects::{GenerationRequest, VerifyMenuInput},
    },
};

/// Text generation capability: system instruction, user instruction and an
/// image in, generated text out.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for checking a served plate against the planned menu
#[cfg_attr(test, mockall::automock)]
pub trait MealVerificationService: Send + Sync {
    fn verify_menu(
        &self,
        input: VerifyMenuInput,
    ) -> impl Future<Output = Result<MenuVerification, CoreError>> + Send;
}
