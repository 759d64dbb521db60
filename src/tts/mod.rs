pub mod provider;

use std::time::Duration;

use crate::config::Config;
use crate::error::AppError;

pub use provider::SpeechPayload;

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

/// Outbound side of the proxy: forwards text to the external TTS cloud
/// function and unwraps whatever envelope it answers with.
pub struct TtsClient {
    http: reqwest::Client,
    provider_url: Option<String>,
    api_key: Option<String>,
}

impl TtsClient {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(PROVIDER_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            provider_url: config.provider_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn convert(&self, text: &str) -> Result<SpeechPayload, AppError> {
        // Checked per request so an unconfigured server still serves the UI
        let url = self
            .provider_url
            .as_deref()
            .ok_or(AppError::MissingProviderUrl)?;

        let mut request = self
            .http
            .post(url)
            .json(&provider::ProviderRequest { text });

        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(
                error = %e,
                request_url = url,
                request_text = text,
                "TTS provider request failed"
            );
            AppError::ProviderUnreachable(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let payload = serde_json::from_str(&raw)
                .unwrap_or_else(|_| serde_json::Value::String(raw.clone()));
            tracing::error!(
                status = status.as_u16(),
                payload = %payload,
                request_url = url,
                request_text = text,
                "TTS provider returned an error"
            );
            return Err(AppError::Provider {
                status: status.as_u16(),
                payload,
            });
        }

        let envelope: provider::ProviderResponse = response.json().await.map_err(|e| {
            tracing::error!(
                error = %e,
                request_url = url,
                "TTS provider response was not valid JSON"
            );
            AppError::MalformedResponse(format!("not valid JSON: {}", e))
        })?;

        envelope.into_payload()
    }
}
