//! The uniform `{ success, data, message, pagination }` response envelope.
//!
//! Responses are decoded into [`Envelope`] first and then turned into a
//! `Result` so callers match on `Ok(Payload)` / `Err(ApiError)` instead of
//! probing `success`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use eduadmin_core::pagination::Pagination;

use crate::error::ApiError;

fn default_success() -> bool {
    true
}

/// Raw envelope as sent by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Decoded payload of a successful envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload<T> {
    pub data: T,
    pub message: Option<String>,
    pub pagination: Option<Pagination>,
}

impl<T> Payload<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Payload<U> {
        Payload {
            data: f(self.data),
            message: self.message,
            pagination: self.pagination,
        }
    }
}

impl Envelope {
    /// Best human-readable message carried by the envelope.
    pub fn message_text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|m| !m.trim().is_empty())
    }

    /// Convert into a typed result. `success: false` becomes
    /// [`ApiError::Rejected`].
    pub fn into_result<T: DeserializeOwned>(self) -> Result<Payload<T>, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected {
                message: self
                    .message_text()
                    .unwrap_or("Request was not successful")
                    .to_string(),
                code: self.code,
            });
        }
        let data = serde_json::from_value(self.data)?;
        Ok(Payload {
            data,
            message: self.message,
            pagination: self.pagination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn envelope(value: Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn success_decodes_data_and_pagination() {
        let payload: Payload<Vec<String>> = envelope(json!({
            "success": true,
            "data": ["a", "b"],
            "pagination": {"page": 1, "limit": 10, "total": 2, "totalPages": 1}
        }))
        .into_result()
        .unwrap();
        assert_eq!(payload.data, vec!["a", "b"]);
        assert_eq!(payload.pagination.unwrap().total, 2);
    }

    #[test]
    fn failure_becomes_rejected() {
        let result: Result<Payload<Value>, _> = envelope(json!({
            "success": false,
            "message": "FAQ not found",
            "code": "NOT_FOUND"
        }))
        .into_result();
        assert_matches!(
            result,
            Err(ApiError::Rejected { ref message, ref code })
                if message == "FAQ not found" && code.as_deref() == Some("NOT_FOUND")
        );
    }

    #[test]
    fn missing_data_decodes_as_unit() {
        let payload: Payload<()> = envelope(json!({"success": true, "message": "Deleted"}))
            .into_result()
            .unwrap();
        assert_eq!(payload.message.as_deref(), Some("Deleted"));
    }

    #[test]
    fn wrong_shape_is_decode_error() {
        let result: Result<Payload<Vec<String>>, _> =
            envelope(json!({"success": true, "data": {"not": "a list"}})).into_result();
        assert_matches!(result, Err(ApiError::Decode(_)));
    }

    #[test]
    fn error_field_is_used_when_message_missing() {
        let env = envelope(json!({"success": false, "error": "Trainer not available"}));
        assert_eq!(env.message_text(), Some("Trainer not available"));
    }
}
