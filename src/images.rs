use crate::config::Config;
use crate::constants::IMAGE_COUNT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseFormat {
    #[serde(rename = "b64_json")]
    Base64,
    /// Hosted link instead of inline data. Never requested here since it
    /// would need a second fetch to save the image.
    #[allow(dead_code)]
    #[serde(rename = "url")]
    Url,
}

#[derive(Debug, Serialize)]
pub struct ImageRequestBody {
    pub prompt: String,
    pub n: u8,
    pub size: String,
    pub response_format: ResponseFormat,
}

#[derive(Debug, Deserialize)]
pub struct ImageGeneration {
    pub b64_json: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImageApiResponse {
    #[serde(default)]
    pub created: Option<u64>,
    pub data: Vec<ImageGeneration>,
}

/// Always asks for a single inline base64 image so the run never needs a
/// second fetch.
pub fn build_image_request(config: &Config) -> ImageRequestBody {
    ImageRequestBody {
        prompt: config.prompt.clone(),
        n: IMAGE_COUNT,
        size: config.size.clone(),
        response_format: ResponseFormat::Base64,
    }
}
