use mealcheck_core::domain::common::language::Language;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::api_entities::api_error::ApiError;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LanguageQuery {
    /// `en` (default) or `gu`
    pub lang: Option<String>,
}

impl LanguageQuery {
    pub fn language(&self) -> Result<Language, ApiError> {
        parse_language(self.lang.as_deref())
    }
}

/// Absent means English. Anything but `en` or `gu` is rejected.
pub fn parse_language(lang: Option<&str>) -> Result<Language, ApiError> {
    match lang {
        None => Ok(Language::default()),
        Some(code) => code.parse::<Language>().map_err(ApiError::from),
    }
}
