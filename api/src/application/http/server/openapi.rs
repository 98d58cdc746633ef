use crate::application::http::{
    health::HealthApiDoc, meal_verification::router::MealVerificationApiDoc,
    survey::router::SurveyApiDoc, teacher::router::TeacherApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MealCheck API",
        description = "Mid-day meal observation: surveys, teachers and photo based menu verification."
    ),
    nest(
        (path = "/api/teachers", api = TeacherApiDoc),
        (path = "/api/survey", api = SurveyApiDoc),
        (path = "/api", api = MealVerificationApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
