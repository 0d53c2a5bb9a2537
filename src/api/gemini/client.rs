use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::warn;

use super::models::{
    ApiError, Content, ErrorResponse, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Part,
};
use super::prompt;
use crate::api::QuoteModel;
use crate::models::{TripQuote, TripRequest};

/// Generative-language API client for itinerary generation and price-change
/// narration
pub struct GeminiClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    const DEFAULT_MODEL: &'static str = "gemini-1.5-flash";

    /// Create a new client for the given API key
    pub fn new(api_key: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.to_string()),
        }
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        // The API wraps errors as {"error": {"code", "message", "status"}}
        let message = serde_json::from_str::<ErrorResponse>(&body_text)
            .ok()
            .and_then(|e| e.error)
            .and_then(|d| d.message)
            .unwrap_or(body_text);

        match status_code {
            400 => ApiError::BadRequest(message),
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            429 => {
                warn!("Model API rate limited: {}", message);
                ApiError::RateLimited(message)
            }
            500..=599 => {
                warn!("Model API server error {}: {}", status_code, message);
                ApiError::ServerError(status_code as i32, message)
            }
            _ => ApiError::HttpError(status_code as i32, message),
        }
    }

    /// POST /models/{model}:generateContent
    async fn generate_content(
        &self,
        body: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .http_client
            .post(&url)
            .headers(Self::create_headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    fn user_turn(text: String) -> Content {
        Content {
            role: Some("user".to_string()),
            parts: vec![Part { text }],
        }
    }
}

impl QuoteModel for GeminiClient {
    /// Ask the model for a structured itinerary.
    ///
    /// The request declares `TripQuote` as the response schema, so the first
    /// candidate's text is parsed straight into it.
    async fn generate_quote(&self, request: &TripRequest) -> Result<TripQuote, ApiError> {
        let body = GenerateContentRequest {
            contents: vec![Self::user_turn(prompt::quote_prompt(request))],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Some(prompt::quote_response_schema()),
            }),
        };

        let response = self.generate_content(body).await?;
        let text = response.first_text().ok_or(ApiError::EmptyResponse)?;

        serde_json::from_str::<TripQuote>(text)
            .map_err(|e| ApiError::DeserializationError(format!("Quote did not match schema: {}", e)))
    }

    /// Ask the model for a one-sentence price-change narrative
    async fn narrate_price_change(
        &self,
        request: &TripRequest,
        previous: f64,
        current: f64,
    ) -> Result<String, ApiError> {
        let body = GenerateContentRequest {
            contents: vec![Self::user_turn(prompt::narration_prompt(
                request, previous, current,
            ))],
            generation_config: None,
        };

        let response = self.generate_content(body).await?;
        let text = response.first_text().ok_or(ApiError::EmptyResponse)?;

        Ok(text.trim().to_string())
    }
}
