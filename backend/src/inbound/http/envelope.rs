//! Response envelope shared by the JSON endpoints.
//!
//! Every payload carries a `status` discriminant so clients can branch
//! without inspecting HTTP status codes: `{"status":"success","data":...}`
//! on success and `{"status":"error","message":...}` on failure.

use serde::Serialize;
use utoipa::ToSchema;

/// Envelope discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    /// The request succeeded and the payload is present.
    Success,
    /// The request failed and `message` describes why.
    Error,
}

/// Error envelope rendered for every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always [`EnvelopeStatus::Error`].
    pub status: EnvelopeStatus,
    /// Human-readable failure description.
    pub message: String,
}

impl ErrorEnvelope {
    /// Build an error envelope carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for envelope serialisation.
    use super::*;
    use serde_json::json;

    #[test]
    fn status_serialises_lowercase() {
        assert_eq!(
            serde_json::to_value(EnvelopeStatus::Success).expect("serialise status"),
            json!("success")
        );
        assert_eq!(
            serde_json::to_value(EnvelopeStatus::Error).expect("serialise status"),
            json!("error")
        );
    }

    #[test]
    fn error_envelope_has_exactly_status_and_message() {
        let value =
            serde_json::to_value(ErrorEnvelope::new("boom")).expect("serialise envelope");
        assert_eq!(value, json!({ "status": "error", "message": "boom" }));
    }
}
