use super::handlers::{
    analyze_food_image::{__path_analyze_food_image, analyze_food_image},
    verify_menu::{__path_verify_menu, verify_menu},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(verify_menu, analyze_food_image))]
pub struct MealVerificationApiDoc;

pub fn meal_verification_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/verify-menu", state.args.server.root_path),
            post(verify_menu),
        )
        .route(
            &format!("{}/api/food-image", state.args.server.root_path),
            post(analyze_food_image),
        )
}
