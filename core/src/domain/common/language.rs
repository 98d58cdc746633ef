use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Languages the service answers in. `En` is the primary language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Gu,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Gu => "gu",
        }
    }

    /// User facing message returned when the photo does not show any food.
    pub fn no_food_message(&self) -> &'static str {
        match self {
            Language::En => {
                "No food items detected in the image. Please upload a new image that clearly includes food items."
            }
            Language::Gu => {
                "છબીમાં કોઈ ખોરાક વસ્તુ ઓળખી શકાયી નથી. કૃપા કરીને ખોરાક સમાવિષ્ટ નવી છબી અપલોડ કરો."
            }
        }
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" => Ok(Language::En),
            "gu" => Ok(Language::Gu),
            _ => Err(CoreError::InvalidLanguage),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_codes() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!(" gu ".parse::<Language>(), Ok(Language::Gu));
    }

    #[test]
    fn test_parse_rejects_unknown_code() {
        assert_eq!("fr".parse::<Language>(), Err(CoreError::InvalidLanguage));
        assert_eq!("EN".parse::<Language>(), Err(CoreError::InvalidLanguage));
        assert_eq!("".parse::<Language>(), Err(CoreError::InvalidLanguage));
    }

    #[test]
    fn test_no_food_message_is_localized() {
        assert!(Language::En.no_food_message().starts_with("No food items"));
        assert!(Language::Gu.no_food_message().contains("ખોરાક"));
        assert_eq!(
            CoreError::NoFoodDetected(Language::Gu).to_string(),
            Language::Gu.no_food_message()
        );
    }
}
