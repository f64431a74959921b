use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    generation::{
        ports::LLMClient,
        value_objects::{GeneratedImage, ImageOptions},
    },
};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    text_model: String,
    image_model: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

#[derive(Debug, Serialize)]
struct ImagenRequest {
    instances: Vec<ImagenInstance>,
    parameters: ImagenParameters,
}

#[derive(Debug, Serialize)]
struct ImagenInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImagenParameters {
    sample_count: u8,
    aspect_ratio: String,
    output_options: ImagenOutputOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImagenOutputOptions {
    mime_type: String,
}

#[derive(Debug, Deserialize)]
struct ImagenResponse {
    #[serde(default)]
    predictions: Vec<ImagenPrediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImagenPrediction {
    bytes_base64_encoded: Option<String>,
    mime_type: Option<String>,
}

impl GeminiLLMClient {
    pub fn new(config: LLMConfig) -> Result<Self, CoreError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| {
            CoreError::ExternalServiceError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            api_key: config.gemini_api_key,
            text_model: config.text_model,
            image_model: config.image_model,
            base_url: GEMINI_BASE_URL.to_string(),
            client,
        })
    }

    /// Point the client at another host, e.g. a proxy in front of the API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.base_url, model, method, self.api_key
        )
    }

    async fn post_json<Req, Resp>(&self, url: &str, request: &Req) -> Result<Resp, CoreError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                // the url carries the api key
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json::<Resp>().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })
    }
}

fn build_text_request(prompt: String, response_schema: serde_json::Value) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema,
        }),
    }
}

fn build_image_request(prompt: String, options: ImageOptions) -> ImagenRequest {
    ImagenRequest {
        instances: vec![ImagenInstance { prompt }],
        parameters: ImagenParameters {
            sample_count: options.number_of_images,
            aspect_ratio: options.aspect_ratio,
            output_options: ImagenOutputOptions {
                mime_type: options.mime_type,
            },
        },
    }
}

fn first_text(response: GeminiResponse) -> Result<String, CoreError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
}

fn first_image(response: ImagenResponse, requested_mime: &str) -> Result<GeneratedImage, CoreError> {
    response
        .predictions
        .into_iter()
        .find_map(|p| {
            p.bytes_base64_encoded.map(|data| GeneratedImage {
                mime_type: p.mime_type.unwrap_or_else(|| requested_mime.to_string()),
                data_base64: data,
            })
        })
        .ok_or_else(|| CoreError::ImageUnavailable("No image returned".to_string()))
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let url = self.endpoint(&self.text_model, "generateContent");
        let request = build_text_request(prompt, response_schema);

        let response: GeminiResponse = self.post_json(&url, &request).await?;
        first_text(response)
    }

    async fn generate_image(
        &self,
        prompt: String,
        options: ImageOptions,
    ) -> Result<GeneratedImage, CoreError> {
        let url = self.endpoint(&self.image_model, "predict");
        let requested_mime = options.mime_type.clone();
        let request = build_image_request(prompt, options);

        let response: ImagenResponse = self
            .post_json(&url, &request)
            .await
            .map_err(|e| CoreError::ImageUnavailable(e.to_string()))?;
        first_image(response, &requested_mime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_text_request_shape() {
        let request = build_text_request("cook".to_string(), json!({"type": "array"}));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "cook");
        assert_eq!(
            value["generation_config"]["response_mime_type"],
            "application/json"
        );
        assert_eq!(value["generation_config"]["response_schema"]["type"], "array");
    }

    #[test]
    fn test_image_request_shape() {
        let request = build_image_request("a photo".to_string(), ImageOptions::default());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["instances"][0]["prompt"], "a photo");
        assert_eq!(value["parameters"]["sampleCount"], 1);
        assert_eq!(value["parameters"]["aspectRatio"], "4:3");
        assert_eq!(value["parameters"]["outputOptions"]["mimeType"], "image/jpeg");
    }

    #[test]
    fn test_first_text_takes_first_candidate() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "[]"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(first_text(response).unwrap(), "[]");
    }

    #[test]
    fn test_first_text_without_candidates_fails() {
        let response: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            first_text(response),
            Err(CoreError::ExternalServiceError(_))
        ));
    }

    #[test]
    fn test_first_image_defaults_mime_type() {
        let response: ImagenResponse = serde_json::from_value(json!({
            "predictions": [{"bytesBase64Encoded": "QUJD"}]
        }))
        .unwrap();
        let image = first_image(response, "image/jpeg").unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data_base64, "QUJD");
    }

    #[test]
    fn test_empty_predictions_are_image_unavailable() {
        let response: ImagenResponse =
            serde_json::from_value(json!({"predictions": []})).unwrap();
        assert!(matches!(
            first_image(response, "image/jpeg"),
            Err(CoreError::ImageUnavailable(_))
        ));
    }

    #[test]
    fn test_endpoint_uses_model_and_method() {
        let client = GeminiLLMClient::new(LLMConfig {
            gemini_api_key: "secret".to_string(),
            ..LLMConfig::default()
        })
        .unwrap()
        .with_base_url("http://localhost:8080/");
        assert_eq!(
            client.endpoint("imagen-4.0-generate-001", "predict"),
            "http://localhost:8080/models/imagen-4.0-generate-001:predict?key=secret"
        );
    }

    fn client_for(base_url: &str) -> GeminiLLMClient {
        GeminiLLMClient::new(LLMConfig {
            gemini_api_key: "secret".to_string(),
            ..LLMConfig::default()
        })
        .unwrap()
        .with_base_url(base_url)
    }

    #[tokio::test]
    async fn test_generate_with_text_returns_first_candidate() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .and(query_param("key", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "[]"}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server.uri())
            .generate_with_text("cook".to_string(), json!({"type": "array"}))
            .await
            .unwrap();

        assert_eq!(text, "[]");
    }

    #[tokio::test]
    async fn test_non_success_status_is_external_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let result = client_for(&server.uri())
            .generate_with_text("cook".to_string(), json!({}))
            .await;

        match result {
            Err(CoreError::ExternalServiceError(message)) => {
                assert!(message.contains("500"));
                assert!(message.contains("overloaded"));
                assert!(!message.contains("secret"));
            }
            other => panic!("expected ExternalServiceError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_image_error_status_is_image_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/imagen-4.0-generate-001:predict"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = client_for(&server.uri())
            .generate_image("a photo".to_string(), ImageOptions::default())
            .await;

        assert!(matches!(result, Err(CoreError::ImageUnavailable(_))));
    }

    #[tokio::test]
    async fn test_image_transport_error_is_image_unavailable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let result = client_for(&uri)
            .generate_image("a photo".to_string(), ImageOptions::default())
            .await;

        match result {
            Err(CoreError::ImageUnavailable(message)) => assert!(!message.contains("secret")),
            other => panic!("expected ImageUnavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_image_decodes_prediction() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/imagen-4.0-generate-001:predict"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "predictions": [{"bytesBase64Encoded": "SU1H", "mimeType": "image/png"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let image = client_for(&server.uri())
            .generate_image("a photo".to_string(), ImageOptions::default())
            .await
            .unwrap();

        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data_base64, "SU1H");
    }
}
