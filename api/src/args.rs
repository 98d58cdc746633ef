use std::time::Duration;

use clap::{Parser, ValueEnum};
use mealcheck_core::domain::{
    common::{DatabaseConfig, LLMConfig, LLMProviderKind, MealCheckConfig},
    meal_verification::{
        no_food::NoFoodKeywords,
        value_objects::{MatchProfileConfig, MatchStrategy, VerificationConfig},
    },
};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealcheck-api", version, about = "Mid-day meal verification API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub verification: VerificationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix for every route, e.g. `/mealcheck`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "mealcheck")]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmProviderArg {
    Openai,
    Gemini,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", value_enum, default_value_t = LlmProviderArg::Openai)]
    pub provider: LlmProviderArg,

    #[arg(long = "llm-api-key", env = "LLM_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Defaults to `gpt-4o` for OpenAI and `gemini-2.0-flash` for Gemini.
    #[arg(long = "llm-model", env = "LLM_MODEL")]
    pub model: Option<String>,

    #[arg(long = "llm-base-url", env = "LLM_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MatchStrategyArg {
    Fuzzy,
    Contains,
}

#[derive(Debug, Clone, clap::Args)]
pub struct VerificationArgs {
    /// Match threshold of `/api/verify-menu`.
    #[arg(
        long = "strict-threshold",
        env = "STRICT_THRESHOLD",
        default_value_t = 85,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub strict_threshold: u8,

    /// Match threshold of `/api/food-image`.
    #[arg(
        long = "lenient-threshold",
        env = "LENIENT_THRESHOLD",
        default_value_t = 50,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub lenient_threshold: u8,

    #[arg(long = "match-strategy", env = "MATCH_STRATEGY", value_enum, default_value_t = MatchStrategyArg::Fuzzy)]
    pub match_strategy: MatchStrategyArg,

    #[arg(
        long = "max-parse-attempts",
        env = "MAX_PARSE_ATTEMPTS",
        default_value_t = 3,
        value_parser = clap::value_parser!(u64).range(1..=10)
    )]
    pub max_parse_attempts: u64,

    #[arg(long = "food-max-tokens", env = "FOOD_MAX_TOKENS", default_value_t = 150)]
    pub food_max_tokens: u32,

    #[arg(long = "nutrition-max-tokens", env = "NUTRITION_MAX_TOKENS", default_value_t = 300)]
    pub nutrition_max_tokens: u32,

    /// Extra phrases that mark a detection reply as "no food".
    #[arg(long = "no-food-keywords", env = "NO_FOOD_KEYWORDS", value_delimiter = ',')]
    pub no_food_keywords: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<LlmProviderArg> for LLMProviderKind {
    fn from(value: LlmProviderArg) -> Self {
        match value {
            LlmProviderArg::Openai => LLMProviderKind::OpenAI,
            LlmProviderArg::Gemini => LLMProviderKind::Gemini,
        }
    }
}

impl From<MatchStrategyArg> for MatchStrategy {
    fn from(value: MatchStrategyArg) -> Self {
        match value {
            MatchStrategyArg::Fuzzy => MatchStrategy::Fuzzy,
            MatchStrategyArg::Contains => MatchStrategy::Contains,
        }
    }
}

impl From<Args> for MealCheckConfig {
    fn from(args: Args) -> Self {
        let provider = LLMProviderKind::from(args.llm.provider);

        let mut no_food_keywords = NoFoodKeywords::default();
        no_food_keywords.extend(args.verification.no_food_keywords);

        let defaults = VerificationConfig::default();

        MealCheckConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            llm: LLMConfig {
                provider,
                api_key: args.llm.api_key,
                model: args
                    .llm
                    .model
                    .unwrap_or_else(|| provider.default_model().to_string()),
                base_url: args.llm.base_url,
                timeout: Duration::from_secs(args.llm.timeout_secs),
            },
            verification: VerificationConfig {
                strict: MatchProfileConfig {
                    threshold: args.verification.strict_threshold,
                    ..defaults.strict
                },
                lenient: MatchProfileConfig {
                    threshold: args.verification.lenient_threshold,
                    ..defaults.lenient
                },
                strategy: args.verification.match_strategy.into(),
                max_parse_attempts: args.verification.max_parse_attempts as usize,
                food_max_tokens: args.verification.food_max_tokens,
                nutrition_max_tokens: args.verification.nutrition_max_tokens,
                no_food_keywords,
            },
        }
    }
}
