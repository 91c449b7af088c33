//! Optional image analysis of the first listing photo through an OpenAI-compatible
//! chat-completions endpoint. Failures never reach the caller: they log and yield
//! empty verdicts.

use crate::config::VisionConfig;
use crate::lqm::ListingData;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

const MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;
const MAX_REPLY_TOKENS: u32 = 300;

const SYSTEM_PROMPT: &str = "Je beoordeelt één foto van een vakantieaccommodatie. \
    Antwoord uitsluitend met een JSON-object met de keys is_exterior, has_watermark en \
    is_collage, elk true of false.";
const USER_PROMPT: &str = "is_exterior: toont de foto de buitenkant van het huis of het huis \
    in zijn omgeving (false bij woonkamer, keuken, slaapkamer of badkamer)? \
    has_watermark: staat er zichtbare tekst, een watermerk, logo of naam op de foto? \
    is_collage: zijn meerdere foto's tot één afbeelding samengevoegd?";

lazy_static! {
    static ref JSON_OBJECT: Regex = Regex::new(r"\{[^{}]*\}").unwrap();
}

/// Verdicts on the first photo. Each is independently unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisionVerdicts {
    pub is_exterior: Option<bool>,
    pub has_watermark: Option<bool>,
    pub is_collage: Option<bool>,
}

impl VisionVerdicts {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Store the known verdicts in the image-analysis fields of the record.
    pub fn apply_to(&self, data: &mut ListingData) {
        if let Some(exterior) = self.is_exterior {
            data.vision_is_exterior = Some(exterior);
        }
        if let Some(watermark) = self.has_watermark {
            data.vision_has_watermark = Some(watermark);
        }
        if let Some(collage) = self.is_collage {
            data.vision_is_collage = Some(collage);
        }
    }
}

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("'{content_type}' is not an image")]
    NotAnImage { content_type: String },
    #[error("image is empty")]
    EmptyImage,
    #[error("model endpoint answered HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("reply holds no JSON object")]
    NoJson,
    #[error("reply JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Read the verdicts from a model reply that may wrap its JSON in prose or a code fence.
pub fn parse_verdicts(reply: &str) -> Result<VisionVerdicts, VisionError> {
    let object = JSON_OBJECT.find(reply).ok_or(VisionError::NoJson)?;
    let map: Map<String, Value> = serde_json::from_str(object.as_str())?;
    let flag = |key: &str| map.get(key).and_then(Value::as_bool);
    Ok(VisionVerdicts {
        is_exterior: flag("is_exterior"),
        has_watermark: flag("has_watermark"),
        is_collage: flag("is_collage"),
    })
}

struct EncodedImage {
    mime: String,
    base64: String,
}

#[derive(Debug, Clone)]
pub struct VisionAnalyzer {
    client: Client,
    config: VisionConfig,
}

impl VisionAnalyzer {
    pub fn new(config: VisionConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    /// Analyse the photo at `image_url`. Disabled analysers and failures yield empty verdicts.
    pub async fn analyze(&self, image_url: &Url) -> VisionVerdicts {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return VisionVerdicts::default();
        };
        match self.try_analyze(api_key, image_url).await {
            Ok(verdicts) => {
                debug!(%image_url, ?verdicts, "image analysis finished");
                verdicts
            }
            Err(err) => {
                warn!(%image_url, error = %err, "image analysis skipped");
                VisionVerdicts::default()
            }
        }
    }

    async fn try_analyze(&self, api_key: &str, image_url: &Url) -> Result<VisionVerdicts, VisionError> {
        let image = self.download(image_url).await?;
        let body = json!({
            "model": self.config.model,
            "max_tokens": MAX_REPLY_TOKENS,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "image_url",
                            "image_url": { "url": format!("data:{};base64,{}", image.mime, image.base64) }
                        },
                        { "type": "text", "text": USER_PROMPT }
                    ]
                }
            ]
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .timeout(self.config.timeout)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(VisionError::Status(response.status()));
        }
        let reply: ChatResponse = response.json().await?;
        let content = reply
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .ok_or(VisionError::NoJson)?;
        parse_verdicts(&content)
    }

    /// Download at most `MAX_IMAGE_BYTES` of the image.
    async fn download(&self, image_url: &Url) -> Result<EncodedImage, VisionError> {
        let mut response = self
            .client
            .get(image_url.clone())
            .timeout(self.config.timeout)
            .send()
            .await?
            .error_for_status()?;
        let mime = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.split(';').next().unwrap_or_default().trim().to_lowercase())
            .unwrap_or_default();
        if !mime.starts_with("image/") {
            return Err(VisionError::NotAnImage { content_type: mime });
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            let room = MAX_IMAGE_BYTES - bytes.len();
            bytes.extend_from_slice(&chunk[..chunk.len().min(room)]);
            if bytes.len() >= MAX_IMAGE_BYTES {
                break;
            }
        }
        if bytes.is_empty() {
            return Err(VisionError::EmptyImage);
        }
        Ok(EncodedImage {
            mime,
            base64: STANDARD.encode(&bytes),
        })
    }
}
