//! Trainer and booking status enums, the booking status state machine, and
//! booking interval validation.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Trainer status
// ---------------------------------------------------------------------------

/// Coarse trainer availability status, set through the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainerStatus {
    Available,
    Busy,
    Booked,
    NotAvailable,
    Inactive,
}

impl TrainerStatus {
    pub const ALL: [TrainerStatus; 5] = [
        TrainerStatus::Available,
        TrainerStatus::Busy,
        TrainerStatus::Booked,
        TrainerStatus::NotAvailable,
        TrainerStatus::Inactive,
    ];

    /// Human-readable label for badges and selects.
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
            Self::Booked => "Booked",
            Self::NotAvailable => "Not Available",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for TrainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Delivery modes a trainer offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingMode {
    Online,
    Offline,
    Hybrid,
}

impl TrainingMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::Hybrid => "Hybrid",
        }
    }
}

// ---------------------------------------------------------------------------
// Booking status state machine
// ---------------------------------------------------------------------------

/// Lifecycle status of a trainer booking.
///
/// Bookings are created `Active`. `Cancelled` is a user action; `Completed`
/// is normally set server-side but may be chosen in edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Statuses reachable from `self`. Terminal statuses return an empty
    /// slice.
    pub fn valid_transitions(self) -> &'static [BookingStatus] {
        match self {
            Self::Active => &[Self::Completed, Self::Cancelled],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    pub fn can_transition(self, to: BookingStatus) -> bool {
        self.valid_transitions().contains(&to)
    }

    pub fn is_terminal(self) -> bool {
        self.valid_transitions().is_empty()
    }

    /// Validate a transition, returning a message for invalid ones.
    pub fn validate_transition(self, to: BookingStatus) -> Result<(), String> {
        if self == to || self.can_transition(to) {
            Ok(())
        } else {
            Err(format!(
                "Invalid transition: {} -> {}",
                self.label(),
                to.label()
            ))
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Interval validation
// ---------------------------------------------------------------------------

/// Reasons a booking interval is rejected before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    #[error("Start time must be in the future")]
    StartNotInFuture,
    #[error("End time must be after start time")]
    EndNotAfterStart,
}

/// A half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Validate the interval for a new booking: start strictly after `now`
    /// and end strictly after start.
    pub fn validate_for_booking(&self, now: DateTime<Utc>) -> Result<(), IntervalError> {
        validate_booking_interval(self.start, self.end, now)
    }
}

/// Validate a booking interval against `now`.
pub fn validate_booking_interval(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), IntervalError> {
    if start <= now {
        return Err(IntervalError::StartNotInFuture);
    }
    if end <= start {
        return Err(IntervalError::EndNotAfterStart);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    // -----------------------------------------------------------------------
    // Interval validation
    // -----------------------------------------------------------------------

    #[test]
    fn start_equal_to_now_is_rejected() {
        let result = validate_booking_interval(now(), now() + Duration::hours(1), now());
        assert_matches!(result, Err(IntervalError::StartNotInFuture));
    }

    #[test]
    fn start_in_past_is_rejected() {
        let start = now() - Duration::minutes(5);
        let result = validate_booking_interval(start, now() + Duration::hours(1), now());
        assert_matches!(result, Err(IntervalError::StartNotInFuture));
    }

    #[test]
    fn end_equal_to_start_is_rejected() {
        let start = now() + Duration::hours(1);
        let result = validate_booking_interval(start, start, now());
        assert_matches!(result, Err(IntervalError::EndNotAfterStart));
    }

    #[test]
    fn end_before_start_is_rejected() {
        let start = now() + Duration::hours(2);
        let result = validate_booking_interval(start, start - Duration::hours(1), now());
        assert_matches!(result, Err(IntervalError::EndNotAfterStart));
    }

    #[test]
    fn future_ordered_interval_passes() {
        let interval = TimeInterval::new(
            now() + Duration::minutes(1),
            now() + Duration::minutes(61),
        );
        assert!(interval.validate_for_booking(now()).is_ok());
        assert_eq!(interval.duration(), Duration::hours(1));
    }

    // -----------------------------------------------------------------------
    // Status state machine
    // -----------------------------------------------------------------------

    #[test]
    fn active_can_complete_or_cancel() {
        assert!(BookingStatus::Active.can_transition(BookingStatus::Completed));
        assert!(BookingStatus::Active.can_transition(BookingStatus::Cancelled));
    }

    #[test]
    fn terminal_statuses_are_final() {
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(!BookingStatus::Cancelled.can_transition(BookingStatus::Active));
    }

    #[test]
    fn unchanged_status_is_allowed() {
        assert!(BookingStatus::Completed
            .validate_transition(BookingStatus::Completed)
            .is_ok());
    }

    #[test]
    fn invalid_transition_message() {
        let err = BookingStatus::Cancelled
            .validate_transition(BookingStatus::Active)
            .unwrap_err();
        assert_eq!(err, "Invalid transition: Cancelled -> Active");
    }

    // -----------------------------------------------------------------------
    // Wire spellings
    // -----------------------------------------------------------------------

    #[test]
    fn statuses_use_backend_spellings() {
        assert_eq!(
            serde_json::to_value(TrainerStatus::NotAvailable).unwrap(),
            "NOT_AVAILABLE"
        );
        assert_eq!(
            serde_json::from_value::<BookingStatus>("CANCELLED".into()).unwrap(),
            BookingStatus::Cancelled
        );
        assert_eq!(serde_json::to_value(TrainingMode::Hybrid).unwrap(), "HYBRID");
    }
}
