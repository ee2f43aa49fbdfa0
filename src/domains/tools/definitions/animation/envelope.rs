//! Result envelope returned for every operational outcome of an animation call.

use serde::Serialize;
use serde_json::Value;

use super::client::ApiResponse;
use super::error::{AnimationError, FailureKind};

/// Message reported when the remote call succeeded and the output was written.
pub const SUCCESS_MESSAGE: &str = "Animation file generated successfully";

/// Remote response body: parsed JSON when possible, otherwise raw text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Structured(Value),
    Raw(String),
}

impl Payload {
    /// Parse `text` as JSON, keeping it verbatim if it is not valid JSON.
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => Self::Structured(value),
            Err(_) => Self::Raw(text.to_string()),
        }
    }
}

/// Uniform result object handed back to the calling agent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    pub status: u16,
    pub status_text: String,
    pub success: bool,
    pub message: String,
    pub output_file: String,

    /// Only set on the failure path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Base name of the source file, only set on the failure path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,

    pub data: Option<Payload>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Payload>,
}

impl ResultEnvelope {
    /// Build the envelope for a response the API actually returned.
    pub fn from_response(response: &ApiResponse, output_path: &str) -> Self {
        let payload = Payload::parse(&response.body_text());
        let status = response.status.as_u16();
        let status_text = response.status_text().to_string();

        if response.is_success() {
            Self {
                status,
                status_text,
                success: true,
                message: SUCCESS_MESSAGE.to_string(),
                output_file: output_path.to_string(),
                prompt: None,
                source_file: None,
                data: Some(payload),
                error: None,
            }
        } else {
            Self {
                message: format!("API Error {}: {}", status, status_text),
                status,
                status_text,
                success: false,
                output_file: output_path.to_string(),
                prompt: None,
                source_file: None,
                data: None,
                error: Some(payload),
            }
        }
    }

    /// Record that the remote call succeeded but persisting the body failed.
    pub fn mark_write_failed(&mut self, err: &std::io::Error) {
        let detail = format!("{}: {}", err, self.output_file);
        self.success = false;
        self.message = format!("Failed to write output file: {}", detail);
        self.error = Some(Payload::Raw(detail));
    }

    /// Build the envelope for a failure that prevented a usable API response.
    pub fn from_failure(
        failure: &AnimationError,
        prompt: &str,
        svg_path: &str,
        output_path: &str,
        endpoint: &str,
    ) -> Self {
        let detail = failure.to_string();
        let (message, error) = match failure.kind() {
            FailureKind::SourceNotFound => (
                format!("File not found: {}", svg_path),
                format!("The specified file path does not exist: {}", svg_path),
            ),
            FailureKind::PermissionDenied => (
                format!("Permission denied accessing file: {}", svg_path),
                format!("No permission to read the file: {}", svg_path),
            ),
            FailureKind::Unreachable => (
                "Cannot connect to animation API server".to_string(),
                format!(
                    "Connection refused to {} - make sure the server is running",
                    endpoint
                ),
            ),
            FailureKind::Network => ("Network error connecting to animation API".to_string(), detail),
            FailureKind::Other => (format!("Animation generation failed: {}", detail), detail),
        };

        Self {
            status: 500,
            status_text: "Internal Error".to_string(),
            success: false,
            message,
            output_file: output_path.to_string(),
            prompt: Some(prompt.to_string()),
            source_file: Some(super::source_file_name(svg_path).unwrap_or_else(|| "unknown".to_string())),
            data: None,
            error: Some(Payload::Raw(error)),
        }
    }

    /// Pretty-printed JSON form sent to the client.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::io::{Error as IoError, ErrorKind};

    fn response(status: StatusCode, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    fn read_failure(kind: ErrorKind) -> AnimationError {
        AnimationError::ReadSource {
            path: "/tmp/in.svg".into(),
            source: IoError::from(kind),
        }
    }

    fn failure_json(failure: &AnimationError) -> Value {
        let envelope = ResultEnvelope::from_failure(
            failure,
            "wave",
            "/tmp/in.svg",
            "/tmp/out.tsx",
            "http://localhost:3001/api/mcp",
        );
        serde_json::to_value(&envelope).unwrap()
    }

    #[test]
    fn test_payload_parse() {
        assert_eq!(
            Payload::parse("{\"frames\":3}"),
            Payload::Structured(json!({"frames": 3}))
        );
        assert_eq!(
            Payload::parse("<svg>...</svg>"),
            Payload::Raw("<svg>...</svg>".to_string())
        );
    }

    #[test]
    fn test_success_envelope_shape() {
        let envelope = ResultEnvelope::from_response(&response(StatusCode::OK, "<svg/>"), "/tmp/out.tsx");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "status": 200,
                "statusText": "OK",
                "success": true,
                "message": SUCCESS_MESSAGE,
                "outputFile": "/tmp/out.tsx",
                "data": "<svg/>"
            })
        );
    }

    #[test]
    fn test_error_response_envelope() {
        let envelope = ResultEnvelope::from_response(
            &response(StatusCode::PAYMENT_REQUIRED, "{\"error\":\"out of credits\"}"),
            "/tmp/out.tsx",
        );
        assert!(!envelope.success);
        assert_eq!(envelope.message, "API Error 402: Payment Required");
        assert!(envelope.data.is_none());

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["data"], Value::Null);
        assert_eq!(value["error"], json!({"error": "out of credits"}));
    }

    #[test]
    fn test_write_failure_keeps_data() {
        let mut envelope =
            ResultEnvelope::from_response(&response(StatusCode::OK, "<svg/>"), "/nope/out.tsx");
        envelope.mark_write_failed(&IoError::new(ErrorKind::NotFound, "No such file or directory"));

        assert!(!envelope.success);
        assert_eq!(envelope.status, 200);
        assert_eq!(
            envelope.message,
            "Failed to write output file: No such file or directory: /nope/out.tsx"
        );
        assert_eq!(envelope.data, Some(Payload::Raw("<svg/>".to_string())));
        assert_eq!(
            envelope.error,
            Some(Payload::Raw("No such file or directory: /nope/out.tsx".to_string()))
        );
    }

    #[test]
    fn test_failure_not_found() {
        let value = failure_json(&read_failure(ErrorKind::NotFound));
        assert_eq!(value["status"], 500);
        assert_eq!(value["statusText"], "Internal Error");
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "File not found: /tmp/in.svg");
        assert_eq!(value["error"], "The specified file path does not exist: /tmp/in.svg");
        assert_eq!(value["prompt"], "wave");
        assert_eq!(value["sourceFile"], "in.svg");
        assert_eq!(value["outputFile"], "/tmp/out.tsx");
        assert_eq!(value["data"], Value::Null);
    }

    #[test]
    fn test_failure_permission_denied() {
        let value = failure_json(&read_failure(ErrorKind::PermissionDenied));
        assert_eq!(value["message"], "Permission denied accessing file: /tmp/in.svg");
        assert_eq!(value["error"], "No permission to read the file: /tmp/in.svg");
    }

    #[test]
    fn test_failure_other_read_error() {
        let value = failure_json(&read_failure(ErrorKind::InvalidData));
        let message = value["message"].as_str().unwrap();
        assert!(message.starts_with("Animation generation failed: "));
    }
}
