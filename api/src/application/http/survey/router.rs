use super::handlers::get_survey::{
    __path_get_survey, __path_get_survey_by_language, get_survey, get_survey_by_language,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_survey, get_survey_by_language))]
pub struct SurveyApiDoc;

pub fn survey_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/survey", state.args.server.root_path),
            get(get_survey),
        )
        .route(
            &format!("{}/api/survey/{{lang}}", state.args.server.root_path),
            get(get_survey_by_language),
        )
}
