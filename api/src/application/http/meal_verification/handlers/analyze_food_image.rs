use axum::extract::{Multipart, State};
use mealcheck_core::domain::meal_verification::value_objects::MatchProfile;

use crate::application::http::{
    meal_verification::{
        handlers::verify_menu::{MenuVerificationResponse, run_verification},
        validators::VerifyMenuMultipart,
    },
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/food-image",
    tag = "meal-verification",
    summary = "Analyze a meal photo",
    description = "Same pipeline as menu verification with the lenient threshold. Photos without food are rejected in the request language.",
    request_body(content = VerifyMenuMultipart, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = MenuVerificationResponse),
        (status = 400, body = ApiErrorResponse, description = "Invalid form or no food in the photo"),
        (status = 422, body = ApiErrorResponse, description = "Nutrition info could not be extracted"),
        (status = 502, body = ApiErrorResponse, description = "Language model call failed")
    )
)]
pub async fn analyze_food_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<MenuVerificationResponse>, ApiError> {
    let response = run_verification(&state, multipart, MatchProfile::Lenient).await?;

    Ok(Response::OK(response))
}
