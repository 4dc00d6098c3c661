//! Editing and cancelling existing bookings.

use eduadmin_client::models::booking::{TrainerBooking, UpdateBookingRequest};
use eduadmin_client::services::BookingService;
use eduadmin_core::booking::BookingStatus;
use eduadmin_core::datetime::{format_iso, parse_datetime};
use eduadmin_core::error::CoreError;
use eduadmin_core::validation::{require_text, FieldErrors};

use crate::context::PageContext;
use crate::forms::{optional, SubmitOutcome};
use crate::pages::scope::PageScope;
use crate::shell::routes::Section;

pub const CANCEL_PROMPT: &str = "Are you sure you want to cancel this booking?";

/// Editable copy of a loaded booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingEditDraft {
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
}

impl From<&TrainerBooking> for BookingEditDraft {
    fn from(booking: &TrainerBooking) -> Self {
        Self {
            title: booking.title.clone(),
            description: booking.description.clone().unwrap_or_default(),
            start_time: format_iso(&booking.start_time),
            end_time: format_iso(&booking.end_time),
            status: booking.status,
        }
    }
}

pub struct BookingEditor {
    bookings: BookingService,
    ctx: PageContext,
    scope: PageScope,
    id: String,
    original: Option<TrainerBooking>,
    draft: Option<BookingEditDraft>,
    errors: FieldErrors,
    busy: bool,
}

impl BookingEditor {
    pub fn new(bookings: BookingService, ctx: PageContext, id: impl Into<String>) -> Self {
        Self {
            bookings,
            ctx,
            scope: PageScope::new(),
            id: id.into(),
            original: None,
            draft: None,
            errors: FieldErrors::new(),
            busy: false,
        }
    }

    pub fn booking(&self) -> Option<&TrainerBooking> {
        self.original.as_ref()
    }

    pub fn draft(&self) -> Option<&BookingEditDraft> {
        self.draft.as_ref()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn scope(&self) -> &PageScope {
        &self.scope
    }

    /// Statuses the status picker offers: the current one plus its legal
    /// successors.
    pub fn status_options(&self) -> Vec<BookingStatus> {
        let Some(booking) = &self.original else {
            return Vec::new();
        };
        let mut options = vec![booking.status];
        options.extend_from_slice(booking.status.valid_transitions());
        options
    }

    pub async fn load(&mut self) {
        self.busy = true;
        let result = self.scope.run(self.bookings.get(&self.id)).await;
        self.busy = false;

        match result {
            None => {}
            Some(Ok(payload)) => {
                self.draft = Some(BookingEditDraft::from(&payload.data));
                self.original = Some(payload.data);
            }
            Some(Err(e)) => {
                self.ctx
                    .errors
                    .surface_with("booking.load", &e, "Failed to load booking");
                self.ctx.navigate(&Section::Bookings.list_path());
            }
        }
    }

    /// Edit a text field of the draft. `field` is the error key to clear.
    pub fn edit(&mut self, field: &str, apply: impl FnOnce(&mut BookingEditDraft)) -> bool {
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };
        apply(draft);
        self.errors.clear(field);
        true
    }

    /// Pick a new status. Only transitions out of the loaded status are
    /// accepted; terminal bookings keep their status.
    pub fn set_status(&mut self, to: BookingStatus) -> bool {
        let (Some(original), Some(draft)) = (&self.original, self.draft.as_mut()) else {
            return false;
        };
        match original.status.validate_transition(to) {
            Ok(()) => {
                draft.status = to;
                self.errors.clear("status");
                true
            }
            Err(msg) => {
                let err = CoreError::Conflict(msg);
                tracing::warn!(booking_id = %original.id, error = %err, "Rejected status change");
                self.errors.insert("status", err.detail());
                false
            }
        }
    }

    pub async fn save(&mut self) -> SubmitOutcome {
        if self.busy {
            return SubmitOutcome::Ignored;
        }
        let Some(draft) = self.draft.clone() else {
            return SubmitOutcome::Ignored;
        };

        let errors = validate(&draft);
        if !errors.is_empty() {
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }

        let request = UpdateBookingRequest {
            start_time: draft.start_time.clone(),
            end_time: draft.end_time.clone(),
            title: draft.title.trim().to_string(),
            description: optional(&draft.description),
            status: draft.status,
        };

        self.busy = true;
        let result = self.bookings.update(&self.id, &request).await;
        self.busy = false;

        match result {
            Ok(payload) => {
                self.ctx.toaster.success("Booking updated successfully");
                self.ctx.navigate(&Section::Bookings.list_path());
                SubmitOutcome::Saved(Some(payload.data.id))
            }
            Err(e) => {
                self.ctx.fail("booking.update", &e);
                SubmitOutcome::Failed
            }
        }
    }

    /// Cancel the loaded booking after confirmation.
    pub async fn cancel(&mut self, reason: Option<String>) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        let cancelled = cancel_booking(&self.bookings, &self.ctx, &self.id, reason).await;
        self.busy = false;
        if let Some(booking) = cancelled {
            self.draft = Some(BookingEditDraft::from(&booking));
            self.original = Some(booking);
            return true;
        }
        false
    }

    pub fn close(&self) {
        self.scope.close();
    }
}

/// Cancel a booking from anywhere (list row or editor). Asks for
/// confirmation first; declining makes no request.
pub async fn cancel_booking(
    bookings: &BookingService,
    ctx: &PageContext,
    id: &str,
    reason: Option<String>,
) -> Option<TrainerBooking> {
    if !ctx.confirm.confirm(CANCEL_PROMPT) {
        return None;
    }
    match bookings.cancel(id, reason).await {
        Ok(payload) => {
            ctx.toaster.success("Booking cancelled successfully");
            Some(payload.data)
        }
        Err(e) => {
            ctx.fail("booking.cancel", &e);
            None
        }
    }
}

fn validate(draft: &BookingEditDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "title", "Title", &draft.title);
    match (parse_datetime(&draft.start_time), parse_datetime(&draft.end_time)) {
        (None, _) => errors.insert("startTime", "Start time is required"),
        (_, None) => errors.insert("endTime", "End time is required"),
        (Some(start), Some(end)) if end <= start => {
            errors.insert("endTime", "End time must be after start time")
        }
        _ => {}
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BookingEditDraft {
        BookingEditDraft {
            title: "Mock interview".into(),
            description: String::new(),
            start_time: "2025-03-07T09:00:00.000Z".into(),
            end_time: "2025-03-07T10:00:00.000Z".into(),
            status: BookingStatus::Active,
        }
    }

    #[test]
    fn past_interval_is_editable() {
        assert!(validate(&draft()).is_empty());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut d = draft();
        d.end_time = "2025-03-07T08:00:00.000Z".into();
        let errors = validate(&d);
        assert_eq!(errors.get("endTime"), Some("End time must be after start time"));
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut d = draft();
        d.title = "  ".into();
        assert!(validate(&d).contains("title"));
    }
}
