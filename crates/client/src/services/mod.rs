//! Resource services: thin typed mappings of REST verbs onto
//! [`ApiClient`](crate::http::ApiClient). No business interpretation
//! happens here beyond envelope decoding and time normalization.

mod bookings;
mod leads;
mod resource;
mod trainers;

pub use bookings::BookingService;
pub use leads::LeadService;
pub use resource::{list_from_value, Resource};
pub use trainers::TrainerService;

use eduadmin_core::datetime::to_iso_string;

use crate::error::ApiError;

/// Normalize a user-entered time to ISO-8601 before it goes on the wire.
/// Unparseable input fails before any request is made.
pub(crate) fn normalize_time(field: &str, value: &str) -> Result<String, ApiError> {
    to_iso_string(value).ok_or_else(|| ApiError::InvalidInput(format!("{field} is not a valid date/time")))
}

/// Reject empty ids before they turn into `/resource/` requests.
pub(crate) fn require_id<'a>(entity: &str, id: &'a str) -> Result<&'a str, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::InvalidInput(format!("{entity} id is required")));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn normalize_time_accepts_local_input() {
        assert_eq!(
            normalize_time("startTime", "2025-07-01T09:30").unwrap(),
            "2025-07-01T09:30:00.000Z"
        );
    }

    #[test]
    fn normalize_time_rejects_garbage() {
        assert_matches!(
            normalize_time("startTime", "tomorrow-ish"),
            Err(ApiError::InvalidInput(ref m)) if m == "startTime is not a valid date/time"
        );
    }

    #[test]
    fn require_id_trims_and_rejects_blank() {
        assert_eq!(require_id("FAQ", " f1 ").unwrap(), "f1");
        assert_matches!(require_id("FAQ", "  "), Err(ApiError::InvalidInput(_)));
    }
}
