use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        meal_verification::{ports::LLMClient, value_objects::GenerationRequest},
    },
    infrastructure::llm::image_mime_type,
};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat completions client for OpenAI compatible endpoints.
#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    timeout: Duration,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
    detail: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAILLMClient {
    pub fn new(
        api_key: String,
        model_name: String,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Self {
        let base_url = base_url.unwrap_or_else(|| OPENAI_BASE_URL.to_string());

        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client: Client::new(),
        }
    }

    fn build_request(&self, request: GenerationRequest) -> ChatCompletionRequest {
        let data_url = format!(
            "data:{};base64,{}",
            image_mime_type(&request.image),
            general_purpose::STANDARD.encode(&request.image)
        );

        ChatCompletionRequest {
            model: self.model_name.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(request.system_prompt),
                },
                ChatMessage {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: request.user_prompt,
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: data_url,
                                detail: "low",
                            },
                        },
                    ]),
                },
            ],
            max_tokens: request.max_output_tokens,
        }
    }

    async fn call_openai_api(&self, request: ChatCompletionRequest) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                tracing::error!("OpenAI API returned an empty completion");
                CoreError::ExternalServiceError("No response from LLM".to_string())
            })
    }
}

impl LLMClient for OpenAILLMClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, CoreError> {
        let request = self.build_request(request);
        self.call_openai_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use serde_json::{Value, json};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> OpenAILLMClient {
        OpenAILLMClient::new(
            "test-key".to_string(),
            "gpt-4o".to_string(),
            Some(format!("{}/v1/", server.uri())),
            Duration::from_secs(5),
        )
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            system_prompt: "You are a food image detection expert.".to_string(),
            user_prompt: "List the food items.".to_string(),
            image: Bytes::from_static(b"\x89PNG\r\n\x1a\nimage"),
            max_output_tokens: 150,
        }
    }

    fn completion(content: Value) -> Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
    }

    #[tokio::test]
    async fn test_generate_returns_completion_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!("- Rice\n- Dal"))))
            .expect(1)
            .mount(&server)
            .await;

        let text = client(&server).generate(request()).await.unwrap();

        assert_eq!(text, "- Rice\n- Dal");
    }

    #[tokio::test]
    async fn test_request_carries_prompts_image_and_token_limit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!("ok"))))
            .mount(&server)
            .await;

        client(&server).generate(request()).await.unwrap();

        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        let body: Value = serde_json::from_slice(&received[0].body).unwrap();

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 150);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(
            body["messages"][0]["content"],
            "You are a food image detection expert."
        );
        assert_eq!(body["messages"][1]["content"][0]["type"], "text");
        assert_eq!(body["messages"][1]["content"][0]["text"], "List the food items.");

        let image = &body["messages"][1]["content"][1];
        assert_eq!(image["type"], "image_url");
        assert_eq!(image["image_url"]["detail"], "low");
        let expected_url = format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(b"\x89PNG\r\n\x1a\nimage")
        );
        assert_eq!(image["image_url"]["url"], expected_url);
    }

    #[tokio::test]
    async fn test_upstream_error_status_is_external_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let result = client(&server).generate(request()).await;

        match result {
            Err(CoreError::ExternalServiceError(message)) => {
                assert!(message.contains("429"));
                assert!(message.contains("rate limited"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_completion_is_external_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(Value::Null)))
            .mount(&server)
            .await;

        let result = client(&server).generate(request()).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion(json!("late")))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = OpenAILLMClient::new(
            "test-key".to_string(),
            "gpt-4o".to_string(),
            Some(format!("{}/v1", server.uri())),
            Duration::from_millis(100),
        );

        let result = client.generate(request()).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }
}
