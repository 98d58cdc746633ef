use crate::{
    domain::{
        common::{LLMConfig, LLMProviderKind, entities::app_errors::CoreError},
        meal_verification::{ports::LLMClient, value_objects::GenerationRequest},
    },
    infrastructure::llm::{GeminiLLMClient, OpenAILLMClient},
};

/// The configured text generation backend.
#[derive(Debug, Clone)]
pub enum LLMProvider {
    OpenAI(OpenAILLMClient),
    Gemini(GeminiLLMClient),
}

impl LLMProvider {
    pub fn from_config(config: &LLMConfig) -> Self {
        let api_key = config.api_key.clone();
        let model = config.model.clone();
        let base_url = config.base_url.clone();

        match config.provider {
            LLMProviderKind::OpenAI => {
                Self::OpenAI(OpenAILLMClient::new(api_key, model, base_url, config.timeout))
            }
            LLMProviderKind::Gemini => {
                Self::Gemini(GeminiLLMClient::new(api_key, model, base_url, config.timeout))
            }
        }
    }
}

impl LLMClient for LLMProvider {
    async fn generate(&self, request: GenerationRequest) -> Result<String, CoreError> {
        match self {
            LLMProvider::OpenAI(client) => client.generate(request).await,
            LLMProvider::Gemini(client) => client.generate(request).await,
        }
    }
}
