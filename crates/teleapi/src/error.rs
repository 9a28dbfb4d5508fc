//! Error type shared by request building, dispatch and response decoding.

use std::fmt;
use std::io;
use std::path::PathBuf;

use teleapi_types::ResponseParameters;

/// Failure reported by the remote API (`"ok": false`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Remote-assigned error code (mirrors the HTTP status).
    pub code: i64,
    /// Human-readable description from the server.
    pub description: String,
    /// Optional structured hints.
    pub parameters: Option<ResponseParameters>,
}

impl ApiError {
    /// Seconds to wait before retrying, when the server asked for flood control.
    pub fn retry_after(&self) -> Option<i64> {
        self.parameters.and_then(|p| p.retry_after)
    }

    /// New identifier of a group that was migrated to a supergroup.
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        self.parameters.and_then(|p| p.migrate_to_chat_id)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error {}: {}", self.code, self.description)
    }
}

#[derive(Debug)]
pub enum Error {
    /// A parameter value could not be encoded to its wire form.
    Serialization {
        key: String,
        source: serde_json::Error,
    },
    /// A required parameter was absent or had no valid candidate.
    InvalidParameter { key: String },
    /// A local file could not be opened or read for upload.
    Io {
        path: Option<PathBuf>,
        source: io::Error,
    },
    /// The server rejected the request.
    Api(ApiError),
    /// The response did not have the expected shape.
    Decode {
        method: String,
        source: serde_json::Error,
    },
    /// The transport could not complete the call.
    Transport {
        method: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn invalid_parameter(key: impl Into<String>) -> Self {
        Self::InvalidParameter { key: key.into() }
    }

    pub(crate) fn transport(
        method: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transport {
            method: method.into(),
            source: source.into(),
        }
    }

    /// The remote error, if the server rejected the request.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialization { key, source } => {
                write!(f, "failed to encode parameter `{key}`: {source}")
            }
            Self::InvalidParameter { key } => {
                write!(f, "missing or empty required parameter `{key}`")
            }
            Self::Io {
                path: Some(path),
                source,
            } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Io { path: None, source } => write!(f, "failed to read upload: {source}"),
            Self::Api(err) => err.fmt(f),
            Self::Decode { method, source } => {
                write!(f, "failed to decode {method} response: {source}")
            }
            Self::Transport { method, source } => write!(f, "{method} request failed: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization { source, .. } | Self::Decode { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::Transport { source, .. } => Some(&**source),
            Self::InvalidParameter { .. } | Self::Api(_) => None,
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_hints() {
        let err = ApiError {
            code: 400,
            description: "Bad Request: group chat was upgraded to a supergroup chat".to_string(),
            parameters: Some(ResponseParameters {
                migrate_to_chat_id: Some(-1_001_234),
                retry_after: None,
            }),
        };
        assert_eq!(err.migrate_to_chat_id(), Some(-1_001_234));
        assert_eq!(err.retry_after(), None);
        assert_eq!(
            Error::from(err).to_string(),
            "API error 400: Bad Request: group chat was upgraded to a supergroup chat"
        );
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = Error::Io {
            path: Some(PathBuf::from("/tmp/missing.jpg")),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to read /tmp/missing.jpg: not found");
        assert!(std::error::Error::source(&err).is_some());
    }
}
