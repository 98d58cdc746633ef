use super::handlers::create_teacher::{__path_create_teacher, create_teacher};
use super::handlers::get_teacher::{__path_get_teacher, get_teacher};
use super::handlers::get_teachers::{__path_get_teachers, get_teachers};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_teachers, get_teacher, create_teacher))]
pub struct TeacherApiDoc;

pub fn teacher_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/teachers", state.args.server.root_path),
            get(get_teachers).post(create_teacher),
        )
        .route(
            &format!("{}/api/teachers/{{teacher_id}}", state.args.server.root_path),
            get(get_teacher),
        )
}
