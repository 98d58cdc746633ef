use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealcheck_core::domain::common::entities::app_errors::CoreError;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    BadGateway(String),
    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        let message = error.to_string();

        match error {
            CoreError::InvalidLanguage
            | CoreError::EmptyMenu
            | CoreError::InvalidInput(_)
            | CoreError::NoFoodDetected(_) => ApiError::BadRequest(message),
            CoreError::NutritionUnavailable => ApiError::UnprocessableEntity(message),
            CoreError::ExternalServiceError(_) => ApiError::BadGateway(message),
            CoreError::NotFound => ApiError::NotFound(message),
            CoreError::InternalServerError => ApiError::InternalServerError(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, "{}", self);
        }

        (
            status,
            Json(ApiErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(format!("Validation error: {}", e)))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use mealcheck_core::domain::common::language::Language;

    use super::*;

    #[test]
    fn test_core_errors_map_to_status_codes() {
        let cases = [
            (CoreError::InvalidLanguage, StatusCode::BAD_REQUEST),
            (CoreError::EmptyMenu, StatusCode::BAD_REQUEST),
            (
                CoreError::InvalidInput("Missing 'image' parameter".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::NoFoodDetected(Language::En),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::NutritionUnavailable,
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                CoreError::ExternalServiceError("timeout".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core).status(), status);
        }
    }

    #[test]
    fn test_messages_are_carried_over() {
        assert_eq!(
            ApiError::from(CoreError::NutritionUnavailable).to_string(),
            "Nutrition info could not be extracted"
        );
        assert_eq!(
            ApiError::from(CoreError::EmptyMenu).to_string(),
            "Menu list is empty or invalid"
        );
    }
}
