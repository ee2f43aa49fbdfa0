//! Failures on the animation path that are reported inside the envelope.

use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

/// A failure that prevented the call from producing an API response.
#[derive(Debug, Error)]
pub enum AnimationError {
    /// The source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request could not be sent or its response could not be read.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Coarse classification used to word the failure envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    SourceNotFound,
    PermissionDenied,
    Unreachable,
    Network,
    Other,
}

impl AnimationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::ReadSource { source, .. } => match source.kind() {
                ErrorKind::NotFound => FailureKind::SourceNotFound,
                ErrorKind::PermissionDenied => FailureKind::PermissionDenied,
                _ => FailureKind::Other,
            },
            Self::Transport(e) if e.is_connect() => FailureKind::Unreachable,
            Self::Transport(e) if e.is_builder() => FailureKind::Other,
            Self::Transport(_) => FailureKind::Network,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Error as IoError;

    fn read_error(kind: ErrorKind) -> AnimationError {
        AnimationError::ReadSource {
            path: PathBuf::from("/tmp/x.svg"),
            source: IoError::from(kind),
        }
    }

    #[test]
    fn test_read_error_kinds() {
        assert_eq!(read_error(ErrorKind::NotFound).kind(), FailureKind::SourceNotFound);
        assert_eq!(
            read_error(ErrorKind::PermissionDenied).kind(),
            FailureKind::PermissionDenied
        );
        assert_eq!(read_error(ErrorKind::InvalidInput).kind(), FailureKind::Other);
    }

    #[test]
    fn test_read_error_message_names_path() {
        let message = read_error(ErrorKind::NotFound).to_string();
        assert!(message.contains("/tmp/x.svg"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_unreachable() {
        // Port 1 is reserved and nothing listens on it.
        let err = reqwest::Client::new()
            .post("http://127.0.0.1:1/api/mcp")
            .send()
            .await
            .unwrap_err();
        assert_eq!(AnimationError::from(err).kind(), FailureKind::Unreachable);
    }
}
