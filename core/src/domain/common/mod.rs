use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::meal_verification::value_objects::VerificationConfig;

pub mod entities;
pub mod language;
pub mod services;

#[derive(Clone, Debug)]
pub struct MealCheckConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub verification: VerificationConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    /// Credentials are percent-encoded so reserved characters survive.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.name
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LLMProviderKind {
    OpenAI,
    Gemini,
}

impl LLMProviderKind {
    pub fn default_model(&self) -> &'static str {
        match self {
            LLMProviderKind::OpenAI => "gpt-4o",
            LLMProviderKind::Gemini => "gemini-2.0-flash",
        }
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub provider: LLMProviderKind,
    pub api_key: String,
    pub model: String,
    /// Overrides the provider's public endpoint, e.g. for a proxy or a test server.
    pub base_url: Option<String>,
    pub timeout: Duration,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
