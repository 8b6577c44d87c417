//! Errors surfaced by the remote API client.

use derive_more::{Display, Error};
use serde::Deserialize;
use tracing::instrument;

/// Failure of a single request against the game API.
///
/// Every variant is recoverable: the caller shows the message and the user
/// re-triggers the action.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ApiError {
    /// No bearer token is stored for an authenticated call.
    #[display("No authentication token found")]
    MissingCredential,
    /// The server answered with a non-2xx status.
    #[display("{detail}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-provided `detail` message.
        detail: String,
    },
    /// The request could not complete.
    #[display("Connection error: {message}")]
    Transport {
        /// Transport failure description.
        message: String,
    },
    /// A 2xx body did not match the expected shape.
    #[display("Unexpected response: {message}")]
    Decode {
        /// Decoding failure description.
        message: String,
    },
    /// Reading or writing the local token file failed.
    #[display("Token storage error: {message}")]
    Storage {
        /// I/O failure description.
        message: String,
    },
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl ApiError {
    /// Builds an [`ApiError::Api`] from a non-2xx response body.
    ///
    /// Uses the `detail` field when present. Structured details (validation
    /// errors) are kept as their JSON text.
    #[instrument(skip(body))]
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.detail)
            .map(|detail| match detail {
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            })
            .unwrap_or_else(|| format!("API error ({status})"));
        Self::Api { status, detail }
    }

    /// Returns true if the failure is the server rejecting our credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::Api { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode {
                message: err.to_string(),
            }
        } else {
            Self::Transport {
                message: err.to_string(),
            }
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage {
            message: err.to_string(),
        }
    }
}
