use actix_web::http::StatusCode;
use thiserror::Error;

pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please try again in a moment.";
pub const QUOTA_MESSAGE: &str = "Service temporarily unavailable. Please try again later.";
pub const GENERIC_MESSAGE: &str = "Failed to generate itinerary";
pub const MISCONFIGURED_MESSAGE: &str = "Itinerary service is not configured";

const LOG_BODY_LIMIT: usize = 500;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompletionError {
    #[error("Configuration error: {0}")]
    Misconfigured(String),

    #[error("Completion gateway rate limit exceeded")]
    RateLimited,

    #[error("Completion gateway quota exceeded")]
    QuotaExceeded,

    #[error("Completion gateway returned {status}: {body}")]
    UpstreamError { status: u16, body: String },

    #[error("Completion gateway did not answer in time")]
    UpstreamTimeout,

    #[error("Completion gateway request failed: {0}")]
    Transport(String),

    #[error("No content in completion response")]
    EmptyCompletion,
}

impl CompletionError {
    /// Classifies a non-success gateway status.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            429 => CompletionError::RateLimited,
            402 => CompletionError::QuotaExceeded,
            _ => CompletionError::UpstreamError { status, body },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            CompletionError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            CompletionError::QuotaExceeded => StatusCode::PAYMENT_REQUIRED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the browser. Upstream details stay in the logs.
    pub fn client_message(&self) -> &'static str {
        match self {
            CompletionError::RateLimited => RATE_LIMIT_MESSAGE,
            CompletionError::QuotaExceeded => QUOTA_MESSAGE,
            CompletionError::Misconfigured(_) => MISCONFIGURED_MESSAGE,
            _ => GENERIC_MESSAGE,
        }
    }

    /// Same as `Display` but with the upstream body cut down for log lines.
    pub fn log_summary(&self) -> String {
        match self {
            CompletionError::UpstreamError { status, body } => format!(
                "Completion gateway returned {}: {}",
                status,
                truncate_for_log(body, LOG_BODY_LIMIT)
            ),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CompletionError::UpstreamTimeout
        } else {
            CompletionError::Transport(err.to_string())
        }
    }
}

/// A backend able to turn a system and a user prompt into model text.
///
/// One call is one upstream attempt: implementations must not retry.
#[allow(async_fn_in_trait)]
pub trait CompletionOperations {
    async fn complete(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, CompletionError>;

    /// Whether startup configuration allows calls at all.
    fn is_configured(&self) -> bool;

    /// Short human readable description for the health endpoint.
    fn describe(&self) -> String;
}

pub fn truncate_for_log(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}... ({} bytes total)", &text[..cut], text.len()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(CompletionError::from_status(429, String::new()), CompletionError::RateLimited);
        assert_eq!(CompletionError::from_status(402, String::new()), CompletionError::QuotaExceeded);
        assert_eq!(
            CompletionError::from_status(503, "down".to_string()),
            CompletionError::UpstreamError {
                status: 503,
                body: "down".to_string()
            }
        );
    }

    #[test]
    fn test_http_mapping() {
        assert_eq!(CompletionError::RateLimited.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(CompletionError::QuotaExceeded.status_code(), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(CompletionError::EmptyCompletion.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(CompletionError::UpstreamTimeout.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            CompletionError::Misconfigured("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_message_hides_upstream_body() {
        let err = CompletionError::UpstreamError {
            status: 500,
            body: "stack trace from the gateway".to_string(),
        };

        assert_eq!(err.client_message(), GENERIC_MESSAGE);
        assert!(err.to_string().contains("stack trace"));
    }

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("short", 10), "short");

        let long = "é".repeat(20);
        let cut = truncate_for_log(&long, 5);
        assert!(cut.starts_with("ééééé..."));
        assert!(cut.ends_with("(40 bytes total)"));
    }
}
