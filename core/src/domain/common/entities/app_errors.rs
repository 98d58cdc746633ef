use thiserror::Error;

use crate::domain::common::language::Language;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid language. Use 'en' or 'gu'")]
    InvalidLanguage,

    #[error("Menu list is empty or invalid")]
    EmptyMenu,

    #[error("{0}")]
    InvalidInput(String),

    #[error("{}", .0.no_food_message())]
    NoFoodDetected(Language),

    #[error("Nutrition info could not be extracted")]
    NutritionUnavailable,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,
}
