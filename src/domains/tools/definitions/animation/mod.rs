//! SVG animation generation through the Allyson API.

pub mod client;
pub mod envelope;
pub mod error;
pub mod generate;

use std::path::Path;

pub use client::{AnimationClient, ApiResponse};
pub use envelope::{Payload, ResultEnvelope};
pub use error::{AnimationError, FailureKind};
pub use generate::{GenerateAnimationParams, GenerateAnimationTool};

/// Last path segment of `path`, used as the uploaded file name.
pub fn source_file_name(path: &str) -> Option<String> {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
