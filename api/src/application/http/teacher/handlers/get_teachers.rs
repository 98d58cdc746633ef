use crate::application::http::query_params::LanguageQuery;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use mealcheck_core::domain::teacher::entities::LocalizedTeacher;
use mealcheck_core::domain::teacher::ports::TeacherService;
use mealcheck_core::domain::teacher::value_objects::GetTeachersInput;

#[utoipa::path(
    get,
    path = "",
    tag = "teacher",
    summary = "List teachers",
    description = "Lists every teacher, localized to the requested language.",
    params(LanguageQuery),
    responses(
        (status = 200, body = Vec<LocalizedTeacher>),
        (status = 400, body = ApiErrorResponse, description = "Unsupported language")
    )
)]
pub async fn get_teachers(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<Response<Vec<LocalizedTeacher>>, ApiError> {
    let language = query.language()?;

    let teachers = state
        .service
        .get_teachers(GetTeachersInput { language })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(teachers))
}
