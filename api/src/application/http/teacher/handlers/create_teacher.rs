use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::teacher::validators::CreateTeacherValidator;
use axum::extract::State;
use mealcheck_core::domain::teacher::entities::Teacher;
use mealcheck_core::domain::teacher::ports::TeacherService;
use mealcheck_core::domain::teacher::value_objects::CreateTeacherInput;

#[utoipa::path(
    post,
    path = "",
    tag = "teacher",
    summary = "Create teacher",
    description = "Stores a teacher with English and Gujarati versions of every field.",
    responses(
        (status = 201, body = Teacher),
        (status = 400, body = ApiErrorResponse, description = "A field is missing or empty")
    ),
    request_body = CreateTeacherValidator
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateTeacherValidator>,
) -> Result<Response<Teacher>, ApiError> {
    let teacher = state
        .service
        .create_teacher(CreateTeacherInput {
            username_en: payload.username_en,
            username_gu: payload.username_gu,
            school_en: payload.school_en,
            school_gu: payload.school_gu,
            location_en: payload.location_en,
            location_gu: payload.location_gu,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(teacher))
}
