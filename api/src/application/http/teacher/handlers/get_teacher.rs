use crate::application::http::query_params::LanguageQuery;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, Query, State};
use mealcheck_core::domain::common::entities::app_errors::CoreError;
use mealcheck_core::domain::teacher::entities::LocalizedTeacher;
use mealcheck_core::domain::teacher::ports::TeacherService;
use mealcheck_core::domain::teacher::value_objects::GetTeacherInput;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/{teacher_id}",
    tag = "teacher",
    summary = "Get teacher",
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher ID"),
        LanguageQuery,
    ),
    responses(
        (status = 200, body = LocalizedTeacher),
        (status = 404, body = ApiErrorResponse, description = "Teacher not found")
    )
)]
pub async fn get_teacher(
    Path(teacher_id): Path<String>,
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<Response<LocalizedTeacher>, ApiError> {
    let language = query.language()?;
    // a malformed id cannot name a stored teacher
    let teacher_id = Uuid::parse_str(&teacher_id)
        .map_err(|_| ApiError::NotFound("Teacher not found".to_string()))?;

    let teacher = state
        .service
        .get_teacher(GetTeacherInput {
            language,
            teacher_id,
        })
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Teacher not found".to_string()),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(teacher))
}
