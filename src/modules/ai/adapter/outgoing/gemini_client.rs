use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{truncate_body, PROVIDER_TIMEOUT};
use crate::modules::ai::application::ai_config::GeminiConfig;
use crate::modules::ai::application::ports::outgoing::{ContentGenerator, ContentGeneratorError};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        (!text.trim().is_empty()).then_some(text)
    }
}

/// Gemini `generateContent` client in JSON response mode.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(PROVIDER_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_json(&self, prompt: &str) -> Result<String, ContentGeneratorError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ContentGeneratorError::NotConfigured)?;

        let body = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                temperature: 0.7,
            },
        };

        tracing::debug!(model = %self.config.model, "Calling Gemini");
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ContentGeneratorError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "Gemini request failed");
            return Err(ContentGeneratorError::Status {
                status: status.as_u16(),
                body: truncate_body(body),
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ContentGeneratorError::Request(e.to_string()))?;

        parsed.into_text().ok_or(ContentGeneratorError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer, api_key: Option<&str>) -> GeminiClient {
        GeminiClient::new(GeminiConfig {
            api_key: api_key.map(str::to_string),
            model: "test-model".to_string(),
            base_url: server.base_url(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn returns_candidate_text() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/test-model:generateContent")
                    .header("x-goog-api-key", "secret")
                    .body_contains("\"responseMimeType\":\"application/json\"")
                    .body_contains("write about rust");
                then.status(200).json_body(json!({
                    "candidates": [{
                        "content": { "parts": [{ "text": "{\"title\":" }, { "text": "\"T\"}" }] }
                    }]
                }));
            })
            .await;

        let text = client_for(&server, Some("secret"))
            .generate_json("write about rust")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(text, "{\"title\":\"T\"}");
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(429).body("quota exceeded");
            })
            .await;

        let err = client_for(&server, Some("secret"))
            .generate_json("x")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ContentGeneratorError::Status {
                status: 429,
                body: "quota exceeded".to_string()
            }
        );
    }

    #[tokio::test]
    async fn no_candidates_is_empty_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(json!({ "candidates": [] }));
            })
            .await;

        let err = client_for(&server, Some("secret"))
            .generate_json("x")
            .await
            .unwrap_err();

        assert_eq!(err, ContentGeneratorError::EmptyResponse);
    }

    #[tokio::test]
    async fn missing_key_never_calls_out() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200);
            })
            .await;

        let err = client_for(&server, None).generate_json("x").await.unwrap_err();

        assert_eq!(err, ContentGeneratorError::NotConfigured);
        mock.assert_hits_async(0).await;
    }
}
