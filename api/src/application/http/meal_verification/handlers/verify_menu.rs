use axum::extract::{Multipart, State};
use mealcheck_core::domain::meal_verification::{
    entities::{MenuVerification, NutritionTable},
    ports::MealVerificationService,
    value_objects::{MatchProfile, VerifyMenuInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    meal_verification::validators::{VerifyMenuForm, VerifyMenuMultipart},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MenuVerificationResponse {
    /// Normalized food lines detected in the photo.
    pub items_food: Vec<String>,
    pub input_menu: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_items: Option<Vec<String>>,
    pub missing_items: Vec<String>,
    /// Item name to `{nutrient: value}`, in the order the narrative lists them.
    #[schema(value_type = Object)]
    pub nutritions: NutritionTable,
}

impl MenuVerificationResponse {
    pub fn new(verification: MenuVerification, expose_found: bool) -> Self {
        Self {
            items_food: verification.detected_items,
            input_menu: verification.input_menu,
            found_items: expose_found.then_some(verification.found_items),
            missing_items: verification.missing_items,
            nutritions: verification.nutritions,
        }
    }
}

pub(crate) async fn run_verification(
    state: &AppState,
    multipart: Multipart,
    profile: MatchProfile,
) -> Result<MenuVerificationResponse, ApiError> {
    let form = VerifyMenuForm::from_multipart(multipart).await?;

    let verification = state
        .service
        .verify_menu(VerifyMenuInput {
            language: form.language,
            menu: form.menu,
            image: form.image,
            profile,
        })
        .await
        .map_err(ApiError::from)?;

    let expose_found = state
        .service
        .verification_config()
        .profile(profile)
        .expose_found;

    Ok(MenuVerificationResponse::new(verification, expose_found))
}

#[utoipa::path(
    post,
    path = "/verify-menu",
    tag = "meal-verification",
    summary = "Verify a served meal against its menu",
    description = "Detects the food in the photo, reconciles it with the menu using the strict threshold and extracts per-item nutrition.",
    request_body(content = VerifyMenuMultipart, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = MenuVerificationResponse),
        (status = 400, body = ApiErrorResponse, description = "Invalid form or no food in the photo"),
        (status = 422, body = ApiErrorResponse, description = "Nutrition info could not be extracted"),
        (status = 502, body = ApiErrorResponse, description = "Language model call failed")
    )
)]
pub async fn verify_menu(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<MenuVerificationResponse>, ApiError> {
    let response = run_verification(&state, multipart, MatchProfile::Strict).await?;

    Ok(Response::OK(response))
}
