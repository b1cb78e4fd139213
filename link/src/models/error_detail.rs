use serde::{Deserialize, Serialize};

/// Best-effort parse of a backend error payload.
///
/// The query service reports failures as JSON with a `detail` or
/// `message` field; anything else falls back to the raw body text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// FastAPI-style error field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Generic message field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorDetail {
    /// Extract a human-readable message from a raw error body.
    pub fn message_from_body(body: &str) -> String {
        if let Ok(parsed) = serde_json::from_str::<ErrorDetail>(body) {
            if let Some(detail) = parsed.detail {
                return detail;
            }
            if let Some(message) = parsed.message {
                return message;
            }
        }
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_detail_field() {
        let body = r#"{"detail": "no such table: users"}"#;
        assert_eq!(
            ErrorDetail::message_from_body(body),
            "no such table: users"
        );
    }

    #[test]
    fn test_message_falls_back_to_raw_body() {
        assert_eq!(
            ErrorDetail::message_from_body("internal server error"),
            "internal server error"
        );
    }
}
