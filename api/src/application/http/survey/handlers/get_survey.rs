use axum::extract::{Path, Query, State};
use mealcheck_core::domain::survey::{entities::Survey, ports::SurveyService};

use crate::application::http::{
    query_params::{LanguageQuery, parse_language},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "survey",
    summary = "Get survey",
    description = "Returns the meal observation questionnaire, English unless `lang=gu`.",
    params(LanguageQuery),
    responses(
        (status = 200, body = Survey),
        (status = 400, body = ApiErrorResponse, description = "Unsupported language")
    )
)]
pub async fn get_survey(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<Response<Survey>, ApiError> {
    let language = query.language()?;

    Ok(Response::OK(state.service.get_survey(language)))
}

#[utoipa::path(
    get,
    path = "/{lang}",
    tag = "survey",
    summary = "Get survey by language",
    params(
        ("lang" = String, Path, description = "`en` or `gu`"),
    ),
    responses(
        (status = 200, body = Survey),
        (status = 400, body = ApiErrorResponse, description = "Unsupported language")
    )
)]
pub async fn get_survey_by_language(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Response<Survey>, ApiError> {
    let language = parse_language(Some(&lang))?;

    Ok(Response::OK(state.service.get_survey(language)))
}
