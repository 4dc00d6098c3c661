//! Availability models: the point-in-time check result, and the
//! slot-based "comprehensive" availability set with an optional recurring
//! pattern.
//!
//! The coarse [`TrainerStatus`] and the slot list are two independent
//! representations; nothing here reconciles them.

use serde::{Deserialize, Serialize};

use crate::booking::TrainerStatus;
use crate::datetime::to_iso_string;
use crate::nested::{BlankRow, Repeatable};
use crate::validation::FieldErrors;

// ---------------------------------------------------------------------------
// Check result
// ---------------------------------------------------------------------------

/// Transient response of an availability check. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityCheckResult {
    pub is_available: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default, alias = "status")]
    pub trainer_status: Option<TrainerStatus>,
}

// ---------------------------------------------------------------------------
// Slots and recurrence
// ---------------------------------------------------------------------------

/// A single availability slot as sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Recurrence sub-object of an availability set request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPattern {
    pub is_recurring: bool,
    pub frequency: Frequency,
    /// Only meaningful for [`Frequency::Weekly`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<DayOfWeek>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Body of the comprehensive "set availability" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAvailabilityRequest {
    pub slots: Vec<AvailabilitySlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_pattern: Option<RecurringPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

/// A slot row as typed into the advanced availability editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDraft {
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
    pub notes: String,
}

impl Default for SlotDraft {
    fn default() -> Self {
        Self {
            start_time: String::new(),
            end_time: String::new(),
            is_available: true,
            notes: String::new(),
        }
    }
}

impl BlankRow for SlotDraft {
    fn is_blank(&self) -> bool {
        self.start_time.trim().is_empty() && self.end_time.trim().is_empty()
    }
}

/// The recurrence controls of the advanced editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceDraft {
    pub is_recurring: bool,
    pub frequency: Frequency,
    pub days_of_week: Vec<DayOfWeek>,
    pub end_date: String,
}

impl Default for RecurrenceDraft {
    fn default() -> Self {
        Self {
            is_recurring: false,
            frequency: Frequency::Weekly,
            days_of_week: Vec::new(),
            end_date: String::new(),
        }
    }
}

impl RecurrenceDraft {
    /// Toggle a weekday tag on or off.
    pub fn toggle_day(&mut self, day: DayOfWeek) {
        if let Some(pos) = self.days_of_week.iter().position(|d| *d == day) {
            self.days_of_week.remove(pos);
        } else {
            self.days_of_week.push(day);
            self.days_of_week.sort();
        }
    }
}

/// Everything the advanced availability editor holds before submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityDraft {
    pub slots: Repeatable<SlotDraft>,
    pub recurrence: RecurrenceDraft,
    pub timezone: String,
}

impl AvailabilityDraft {
    /// Build the request body: drop blank slots, normalize times to ISO-8601,
    /// drop weekday tags unless the pattern is weekly, and omit the pattern
    /// entirely when it is not recurring.
    ///
    /// Field errors are keyed `slots.{index}.startTime` / `.endTime` using the
    /// index in the editor, plus `slots` when nothing remains and
    /// `recurrence.endDate` for a bad end date.
    pub fn to_request(&self) -> Result<SetAvailabilityRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut slots = Vec::new();

        for (index, slot) in self.slots.rows().iter().enumerate() {
            if slot.is_blank() {
                continue;
            }
            let start = to_iso_string(&slot.start_time);
            let end = to_iso_string(&slot.end_time);
            if start.is_none() {
                errors.insert(
                    format!("slots.{index}.startTime"),
                    "Start time is not a valid date/time",
                );
            }
            if end.is_none() {
                errors.insert(
                    format!("slots.{index}.endTime"),
                    "End time is not a valid date/time",
                );
            }
            if let (Some(start_time), Some(end_time)) = (start, end) {
                let notes = slot.notes.trim();
                slots.push(AvailabilitySlot {
                    start_time,
                    end_time,
                    is_available: slot.is_available,
                    notes: (!notes.is_empty()).then(|| notes.to_string()),
                });
            }
        }

        if slots.is_empty() && errors.is_empty() {
            errors.insert("slots", "Add at least one availability slot");
        }

        let recurring_pattern = if self.recurrence.is_recurring {
            let end_date = match self.recurrence.end_date.trim() {
                "" => None,
                raw => {
                    let normalized = to_iso_string(raw);
                    if normalized.is_none() {
                        errors.insert("recurrence.endDate", "End date is not a valid date");
                    }
                    normalized
                }
            };
            let days_of_week = if self.recurrence.frequency == Frequency::Weekly {
                self.recurrence.days_of_week.clone()
            } else {
                Vec::new()
            };
            Some(RecurringPattern {
                is_recurring: true,
                frequency: self.recurrence.frequency,
                days_of_week,
                end_date,
            })
        } else {
            None
        };

        errors.into_result()?;

        let timezone = self.timezone.trim();
        Ok(SetAvailabilityRequest {
            slots,
            recurring_pattern,
            timezone: (!timezone.is_empty()).then(|| timezone.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn slot(start: &str, end: &str) -> SlotDraft {
        SlotDraft {
            start_time: start.into(),
            end_time: end.into(),
            ..SlotDraft::default()
        }
    }

    #[test]
    fn blank_slots_are_dropped_and_times_normalized() {
        let mut draft = AvailabilityDraft::default();
        draft.slots.push(slot("2025-07-01T09:00", "2025-07-01T12:00"));
        draft.slots.add();

        let request = draft.to_request().unwrap();
        assert_eq!(request.slots.len(), 1);
        assert_eq!(request.slots[0].start_time, "2025-07-01T09:00:00.000Z");
        assert_eq!(request.slots[0].end_time, "2025-07-01T12:00:00.000Z");
        assert!(request.slots[0].is_available);
        assert!(request.recurring_pattern.is_none());
        assert!(request.timezone.is_none());
    }

    #[test]
    fn malformed_slot_times_are_field_errors() {
        let mut draft = AvailabilityDraft::default();
        draft.slots.add();
        draft.slots.push(slot("soon", "2025-07-01T12:00"));

        let errors = draft.to_request().unwrap_err();
        assert!(errors.contains("slots.1.startTime"));
        assert!(!errors.contains("slots.1.endTime"));
    }

    #[test]
    fn empty_slot_list_is_rejected() {
        let errors = AvailabilityDraft::default().to_request().unwrap_err();
        assert_eq!(errors.get("slots"), Some("Add at least one availability slot"));
    }

    #[test]
    fn weekday_tags_only_kept_for_weekly_patterns() {
        let mut draft = AvailabilityDraft::default();
        draft.slots.push(slot("2025-07-01T09:00", "2025-07-01T12:00"));
        draft.recurrence.is_recurring = true;
        draft.recurrence.toggle_day(DayOfWeek::Wednesday);
        draft.recurrence.toggle_day(DayOfWeek::Monday);

        let weekly = draft.to_request().unwrap();
        let pattern = weekly.recurring_pattern.unwrap();
        assert_eq!(pattern.days_of_week, vec![DayOfWeek::Monday, DayOfWeek::Wednesday]);

        draft.recurrence.frequency = Frequency::Daily;
        let daily = draft.to_request().unwrap();
        assert!(daily.recurring_pattern.unwrap().days_of_week.is_empty());
    }

    #[test]
    fn toggle_day_removes_existing_tag() {
        let mut recurrence = RecurrenceDraft::default();
        recurrence.toggle_day(DayOfWeek::Friday);
        recurrence.toggle_day(DayOfWeek::Friday);
        assert!(recurrence.days_of_week.is_empty());
    }

    #[test]
    fn request_serializes_with_camel_case() {
        let mut draft = AvailabilityDraft {
            timezone: "Asia/Kolkata".into(),
            ..AvailabilityDraft::default()
        };
        draft.slots.push(SlotDraft {
            notes: "Morning only".into(),
            ..slot("2025-07-01T09:00", "2025-07-01T12:00")
        });
        draft.recurrence.is_recurring = true;
        draft.recurrence.toggle_day(DayOfWeek::Monday);
        draft.recurrence.end_date = "2025-09-30".into();

        let value = serde_json::to_value(draft.to_request().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "slots": [{
                    "startTime": "2025-07-01T09:00:00.000Z",
                    "endTime": "2025-07-01T12:00:00.000Z",
                    "isAvailable": true,
                    "notes": "Morning only"
                }],
                "recurringPattern": {
                    "isRecurring": true,
                    "frequency": "WEEKLY",
                    "daysOfWeek": ["MONDAY"],
                    "endDate": "2025-09-30T00:00:00.000Z"
                },
                "timezone": "Asia/Kolkata"
            })
        );
    }

    #[test]
    fn check_result_accepts_status_alias() {
        let result: AvailabilityCheckResult = serde_json::from_value(json!({
            "isAvailable": false,
            "reason": "Trainer already booked",
            "status": "BOOKED"
        }))
        .unwrap();
        assert!(!result.is_available);
        assert_eq!(result.trainer_status, Some(TrainerStatus::Booked));
    }

    #[test]
    fn drafts_compare_by_rows() {
        fn assert_eq_type<T: Eq>(_: &T) {}

        let mut a = AvailabilityDraft::default();
        a.slots.push(slot("2025-07-01T09:00", "2025-07-01T12:00"));
        let b = a.clone();
        assert_eq_type(&a);
        assert_eq!(a, b);

        let mut c = b.clone();
        c.slots.update(0, |s| s.notes = "Morning only".into());
        assert_ne!(a, c);
    }
}
