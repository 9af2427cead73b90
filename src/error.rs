use serde::{Deserialize, Serialize};
use std::fmt;

/// In-band error payload returned by the Alpha Vantage API.
///
/// The API reports request errors inside a `200 OK` body rather than
/// through the HTTP status code.
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    #[serde(rename = "Error Message")]
    pub error_message: String,
}

#[derive(Debug)]
pub enum AlphaVantageError {
    /// Represents an Alpha Vantage API error returned in the response body
    Api(ApiErrorResponse),
    /// Represents HTTP/network errors
    Http(reqwest::Error),
    /// Represents JSON parsing errors
    Parse(serde_json::Error),
    /// Represents missing environment variable errors
    MissingEnvVar(String),
    /// Represents a parameter map missing a mandatory key
    MissingRequiredParam(&'static str),
    /// Represents a director invoked without an attached builder
    InvalidBuilder,
}

impl std::error::Error for AlphaVantageError {}

impl fmt::Display for AlphaVantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphaVantageError::Api(e) => {
                write!(f, "Alpha Vantage API error: {}", e.error_message)
            }
            AlphaVantageError::Http(e) => write!(f, "HTTP error: {e}"),
            AlphaVantageError::Parse(e) => write!(f, "Parse error: {e}"),
            AlphaVantageError::MissingEnvVar(var) => write!(
                f,
                "Missing required environment variable: {var}\n\
                 Please set it in your environment or .env file"
            ),
            AlphaVantageError::MissingRequiredParam(key) => {
                write!(f, "Missing required parameter: {key}")
            }
            AlphaVantageError::InvalidBuilder => {
                write!(f, "No URL builder attached to the director")
            }
        }
    }
}

impl From<reqwest::Error> for AlphaVantageError {
    fn from(err: reqwest::Error) -> Self {
        AlphaVantageError::Http(err)
    }
}

impl From<serde_json::Error> for AlphaVantageError {
    fn from(err: serde_json::Error) -> Self {
        AlphaVantageError::Parse(err)
    }
}

/// Helper type for Result with `AlphaVantageError`
pub type Result<T> = std::result::Result<T, AlphaVantageError>;
