//! Error handling for the student API client

use thiserror::Error;

/// The one failure kind of the API client.
///
/// The variants only exist so the activity log can say what went wrong;
/// views treat every variant the same way.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Network unreachable, DNS failure, timeout, or any other transport problem.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status outside the 2xx range.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not the JSON shape we expected.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request body could not be serialized.
    #[error("Encoding error: {0}")]
    Encode(serde_json::Error),
}

impl RequestError {
    pub async fn from_response(response: reqwest::Response) -> RequestError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        RequestError::Http { status, message }
    }

    /// HTTP status code, when the server answered at all.
    #[cfg(test)]
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Http { status, .. } => Some(*status),
            RequestError::Transport(e) => e.status().map(|s| s.as_u16()),
            RequestError::Decode(_) | RequestError::Encode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display_includes_status() {
        let err = RequestError::Http {
            status: 404,
            message: r#"{"error":"Student not found"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let err: RequestError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("Decoding error"));
    }
}
