use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct ProviderRequest<'a> {
    pub text: &'a str,
}

/// Raw response from the TTS cloud function. Depending on how the function
/// is fronted it answers either with the payload directly or with the
/// payload wrapped in a `body` field, and `body` itself may arrive as a
/// JSON-encoded string rather than an object.
#[derive(Debug, Deserialize)]
pub struct ProviderResponse {
    pub audio: Option<String>,
    pub filename: Option<String>,
    pub body: Option<ProviderBody>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProviderBody {
    Text(String),
    Object(InnerPayload),
}

#[derive(Debug, Deserialize)]
pub struct InnerPayload {
    pub audio: Option<String>,
    pub filename: Option<String>,
}

/// Normalized result of a provider call: exactly one base64 MP3 payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechPayload {
    pub audio: String,
    pub filename: Option<String>,
}

impl SpeechPayload {
    pub fn data_url(&self) -> String {
        format!("data:audio/mp3;base64,{}", self.audio)
    }
}

impl ProviderResponse {
    /// Unwraps the possible envelope shapes into a single payload.
    ///
    /// Resolution order: a top-level `audio` wins; otherwise `body` is
    /// consulted, parsing it as nested JSON when it is textual. A response
    /// with no `audio` anywhere is an error, never an empty payload.
    pub fn into_payload(self) -> Result<SpeechPayload, AppError> {
        if let Some(audio) = self.audio {
            return Ok(SpeechPayload {
                audio,
                filename: self.filename,
            });
        }

        let inner = match self.body {
            Some(ProviderBody::Text(text)) => {
                serde_json::from_str::<InnerPayload>(&text).map_err(|e| {
                    AppError::MalformedResponse(format!("body is not valid JSON: {}", e))
                })?
            }
            Some(ProviderBody::Object(inner)) => inner,
            None => return Err(AppError::MalformedResponse("missing audio field".into())),
        };

        match inner.audio {
            Some(audio) => Ok(SpeechPayload {
                audio,
                filename: inner.filename,
            }),
            None => Err(AppError::MalformedResponse(
                "missing audio field in body".into(),
            )),
        }
    }
}
