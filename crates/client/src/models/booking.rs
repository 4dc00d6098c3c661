use serde::{Deserialize, Serialize};

use eduadmin_core::booking::{BookingStatus, TimeInterval};
use eduadmin_core::types::Timestamp;

/// Trainer summary embedded in a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingTrainer {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A trainer booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerBooking {
    #[serde(alias = "_id")]
    pub id: String,
    pub trainer_id: String,
    #[serde(default)]
    pub trainer: Option<BookingTrainer>,
    #[serde(default)]
    pub created_by: Option<String>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: BookingStatus,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl TrainerBooking {
    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start_time, self.end_time)
    }

    /// Trainer display name, falling back to the id.
    pub fn trainer_name(&self) -> &str {
        self.trainer
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or(&self.trainer_id)
    }
}

/// Create body. Times are ISO-8601 strings produced by
/// [`eduadmin_core::datetime::to_iso_string`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub trainer_id: String,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Update body used by the booking edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: BookingStatus,
}

/// Body of the cancel call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn booking_json() -> serde_json::Value {
        json!({
            "id": "b1",
            "trainerId": "t1",
            "trainer": {"_id": "t1", "name": "Ravi"},
            "startTime": "2025-07-01T09:00:00.000Z",
            "endTime": "2025-07-01T10:00:00.000Z",
            "title": "Rust workshop",
            "status": "ACTIVE"
        })
    }

    #[test]
    fn booking_decodes() {
        let booking: TrainerBooking = serde_json::from_value(booking_json()).unwrap();
        assert_eq!(booking.trainer_name(), "Ravi");
        assert_eq!(booking.interval().duration(), chrono::Duration::hours(1));
        assert_eq!(booking.status, BookingStatus::Active);
    }
}
