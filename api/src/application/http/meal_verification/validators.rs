use axum::extract::Multipart;
use bytes::Bytes;
use mealcheck_core::domain::common::language::Language;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Documentation shape of the multipart body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyMenuMultipart {
    /// `en` or `gu`
    pub lang: String,
    /// JSON list of menu items as a string, e.g. `["poha", "sev"]`
    pub menu: String,
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

/// Validated multipart fields of a verification request.
#[derive(Debug)]
pub struct VerifyMenuForm {
    pub language: Language,
    pub menu: Vec<String>,
    pub image: Bytes,
}

impl VerifyMenuForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut lang: Option<String> = None;
        let mut menu: Option<String> = None;
        let mut image: Option<Bytes> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
        {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "lang" => {
                    let value = field.text().await.map_err(|e| {
                        ApiError::BadRequest(format!("Failed to read lang: {}", e))
                    })?;
                    lang = Some(value);
                }
                "menu" => {
                    let value = field.text().await.map_err(|e| {
                        ApiError::BadRequest(format!("Failed to read menu: {}", e))
                    })?;
                    menu = Some(value);
                }
                "image" => {
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                    if data.len() > MAX_IMAGE_SIZE {
                        return Err(ApiError::BadRequest(format!(
                            "Image too large. Max size is {} bytes",
                            MAX_IMAGE_SIZE
                        )));
                    }

                    image = Some(data);
                }
                _ => {}
            }
        }

        Self::validate(lang, menu, image)
    }

    /// Checks run in a fixed order: language, image, then menu.
    pub fn validate(
        lang: Option<String>,
        menu: Option<String>,
        image: Option<Bytes>,
    ) -> Result<Self, ApiError> {
        let lang = lang
            .filter(|lang| !lang.trim().is_empty())
            .ok_or_else(|| ApiError::BadRequest("Missing 'lang' parameter".to_string()))?;
        let language = lang.parse::<Language>().map_err(ApiError::from)?;

        let image = image
            .filter(|image| !image.is_empty())
            .ok_or_else(|| ApiError::BadRequest("Missing 'image' parameter".to_string()))?;

        let menu = parse_menu(menu.as_deref().unwrap_or("[]"))?;

        Ok(Self {
            language,
            menu,
            image,
        })
    }
}

/// The menu travels as a JSON encoded list of strings inside a form field.
pub fn parse_menu(raw: &str) -> Result<Vec<String>, ApiError> {
    serde_json::from_str::<Vec<String>>(raw).map_err(|_| {
        ApiError::BadRequest("Invalid 'menu' format. Must be a JSON list of strings.".to_string())
    })
}
