use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeacherValidator {
    #[validate(length(min = 1, max = 255, message = "username_en is required"))]
    pub username_en: String,

    #[validate(length(min = 1, max = 255, message = "username_gu is required"))]
    pub username_gu: String,

    #[validate(length(min = 1, max = 255, message = "school_en is required"))]
    pub school_en: String,

    #[validate(length(min = 1, max = 255, message = "school_gu is required"))]
    pub school_gu: String,

    #[validate(length(min = 1, max = 255, message = "location_en is required"))]
    pub location_en: String,

    #[validate(length(min = 1, max = 255, message = "location_gu is required"))]
    pub location_gu: String,
}
