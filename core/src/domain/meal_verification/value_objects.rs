use bytes::Bytes;

use crate::domain::{
    common::{entities::app_errors::CoreError, language::Language},
    meal_verification::no_food::NoFoodKeywords,
};

/// One call to the text generation capability.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub image: Bytes,
    pub max_output_tokens: u32,
}

/// Caller supplied menu, trimmed and lower-cased, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuList(Vec<String>);

impl MenuList {
    pub fn new<S: AsRef<str>>(items: &[S]) -> Result<Self, CoreError> {
        let items: Vec<String> = items
            .iter()
            .map(|item| item.as_ref().trim().to_lowercase())
            .filter(|item| !item.is_empty())
            .collect();

        if items.is_empty() {
            return Err(CoreError::EmptyMenu);
        }

        Ok(Self(items))
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct VerifyMenuInput {
    pub language: Language,
    pub menu: Vec<String>,
    pub image: Bytes,
    pub profile: MatchProfile,
}

/// Which endpoint flavour the request came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchProfile {
    Strict,
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchProfileConfig {
    /// Minimum partial ratio score (0-100) for a menu item to count as served.
    pub threshold: u8,
    /// Whether `found_items` is part of the response.
    pub expose_found: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    #[default]
    Fuzzy,
    Contains,
}

#[derive(Debug, Clone)]
pub struct VerificationConfig {
    pub strict: MatchProfileConfig,
    pub lenient: MatchProfileConfig,
    pub strategy: MatchStrategy,
    pub max_parse_attempts: usize,
    pub food_max_tokens: u32,
    pub nutrition_max_tokens: u32,
    pub no_food_keywords: NoFoodKeywords,
}

impl VerificationConfig {
    pub fn profile(&self, profile: MatchProfile) -> MatchProfileConfig {
        match profile {
            MatchProfile::Strict => self.strict,
            MatchProfile::Lenient => self.lenient,
        }
    }
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            strict: MatchProfileConfig {
                threshold: 85,
                expose_found: true,
            },
            lenient: MatchProfileConfig {
                threshold: 50,
                expose_found: false,
            },
            strategy: MatchStrategy::Fuzzy,
            max_parse_attempts: 3,
            food_max_tokens: 150,
            nutrition_max_tokens: 300,
            no_food_keywords: NoFoodKeywords::default(),
        }
    }
}
