//! HTTP client for the Allyson animation API.
//!
//! Uploads the source file and prompt as a multipart form and hands back the
//! raw status and body. Classification of the response is left to the caller.

use std::borrow::Cow;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::core::config::ApiConfig;

/// Raw response from the animation API.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status of the response.
    pub status: StatusCode,

    /// Response body exactly as received.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body decoded as UTF-8, invalid sequences replaced.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Reason phrase for the status, empty when the code has none.
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }
}

/// Client for the `/mcp` upload endpoint.
#[derive(Debug, Clone)]
pub struct AnimationClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl AnimationClient {
    /// Build a client from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().user_agent(config.user_agent.clone()).build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
        })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload `content` under `file_name` together with `prompt`.
    #[instrument(skip(self, content, prompt), fields(endpoint = %self.endpoint, size = content.len()))]
    pub async fn upload(
        &self,
        content: Vec<u8>,
        file_name: String,
        prompt: &str,
    ) -> Result<ApiResponse, reqwest::Error> {
        let mime = mime_for(&file_name);
        let file = Part::bytes(content).file_name(file_name).mime_str(mime)?;
        let form = Form::new()
            .part("file", file)
            .text("prompt", prompt.to_string());

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();
        debug!("Animation API answered {} ({} bytes)", status, body.len());

        Ok(ApiResponse { status, body })
    }
}

/// Content type for the uploaded file part.
fn mime_for(file_name: &str) -> &'static str {
    let is_svg = file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        "image/svg+xml"
    } else {
        "application/octet-stream"
    }
}
