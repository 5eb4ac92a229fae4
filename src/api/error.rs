use serde::Deserialize;

/// Error enum for the DodoPayments API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid parameters, rejected before any request was sent
    #[error("Invalid Input Parameters: {0}")]
    InvalidParams(String),
    /// No API key configured
    #[error("Missing API key, set DODO_PAYMENTS_API_KEY or pass it in the client options")]
    MissingApiKey,
    /// API error - the server answered with a non-success status
    #[error("API Error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error code reported by the API, if any
        code: Option<String>,
        /// Error message reported by the API or the raw body
        message: String,
    },
    /// Transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Body did not match the expected model
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Malformed base URL
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
    /// Webhook verification failure
    #[error("Webhook error: {0}")]
    Webhook(#[from] WebhookError),
}

impl Error {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Builds an [`Error::Api`] from a non-success response body
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Error::Api {
                status,
                code: parsed.code,
                message: parsed.message.unwrap_or_else(|| body.to_string()),
            },
            Err(_) => Error::Api {
                status,
                code: None,
                message: body.to_string(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Webhook verification errors
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WebhookError {
    /// A required header is missing
    #[error("missing header {0}")]
    MissingHeader(&'static str),
    /// Timestamp header is not a unix timestamp
    #[error("invalid timestamp header")]
    InvalidTimestamp,
    /// Timestamp is outside the allowed tolerance
    #[error("message timestamp outside of tolerance")]
    TimestampOutOfTolerance,
    /// Secret is not valid base64
    #[error("invalid webhook secret")]
    InvalidSecret,
    /// No signature matched the payload
    #[error("no matching signature found")]
    SignatureMismatch,
    /// No webhook key was configured
    #[error("no webhook key configured")]
    MissingKey,
}

/// A specialized `Result` type for DodoPayments operations.
pub type Result<T> = std::result::Result<T, Error>;
