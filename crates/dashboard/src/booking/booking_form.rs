//! New-booking form.
//!
//! ```text
//! CollectingInputs ──trainer+interval──▶ AwaitingCheck ──check──▶ Available
//!        ▲                                   ▲                   └▶ Unavailable
//!        └──────── trainer / start / end changed ─────────────────────┘
//! ```
//!
//! Submit is only enabled in `Available`, and only for the trainer and
//! interval the check was made for.

use std::fmt;

use chrono::Utc;

use eduadmin_client::models::booking::CreateBookingRequest;
use eduadmin_client::services::BookingService;
use eduadmin_core::booking::{validate_booking_interval, IntervalError};
use eduadmin_core::datetime::parse_datetime;
use eduadmin_core::validation::{require_text, FieldErrors};

use crate::context::PageContext;
use crate::forms::{optional, returned_id, SubmitOutcome};
use crate::shell::routes::Section;

use super::availability_checker::{AvailabilityChecker, CheckKey, CheckState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPhase {
    CollectingInputs,
    AwaitingCheck,
    Available,
    Unavailable,
    Submitting,
    Submitted,
}

impl fmt::Display for BookingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CollectingInputs => "CollectingInputs",
            Self::AwaitingCheck => "AwaitingCheck",
            Self::Available => "Available",
            Self::Unavailable => "Unavailable",
            Self::Submitting => "Submitting",
            Self::Submitted => "Submitted",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub trainer_id: String,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    pub description: String,
}

impl BookingDraft {
    fn key(&self) -> Option<CheckKey> {
        CheckKey::new(&self.trainer_id, &self.start_time, &self.end_time)
    }
}

pub struct BookingForm {
    bookings: BookingService,
    checker: AvailabilityChecker,
    ctx: PageContext,
    draft: BookingDraft,
    errors: FieldErrors,
    submitting: bool,
    submitted: bool,
}

impl BookingForm {
    pub fn new(bookings: BookingService, checker: AvailabilityChecker, ctx: PageContext) -> Self {
        Self {
            bookings,
            checker,
            ctx,
            draft: BookingDraft::default(),
            errors: FieldErrors::new(),
            submitting: false,
            submitted: false,
        }
    }

    /// Start with a trainer preselected (booking from a trainer page).
    pub fn for_trainer(mut self, trainer_id: &str) -> Self {
        self.draft.trainer_id = trainer_id.to_string();
        self
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn check_state(&self) -> &CheckState {
        self.checker.state()
    }

    pub fn phase(&self) -> BookingPhase {
        if self.submitted {
            return BookingPhase::Submitted;
        }
        if self.submitting {
            return BookingPhase::Submitting;
        }
        let Some(key) = self.draft.key() else {
            return BookingPhase::CollectingInputs;
        };
        if self.checker.checked_key() != Some(&key) {
            return BookingPhase::AwaitingCheck;
        }
        match self.checker.state() {
            CheckState::Available => BookingPhase::Available,
            CheckState::Unavailable { .. } => BookingPhase::Unavailable,
            CheckState::NotChecked | CheckState::Checking => BookingPhase::AwaitingCheck,
        }
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase() == BookingPhase::Available
    }

    // ---- inputs ----

    pub fn set_trainer(&mut self, trainer_id: &str) {
        self.draft.trainer_id = trainer_id.to_string();
        self.invalidate("trainerId");
    }

    pub fn set_start_time(&mut self, value: &str) {
        self.draft.start_time = value.to_string();
        self.invalidate("startTime");
    }

    pub fn set_end_time(&mut self, value: &str) {
        self.draft.end_time = value.to_string();
        self.invalidate("endTime");
    }

    pub fn set_title(&mut self, value: &str) {
        self.draft.title = value.to_string();
        self.errors.clear("title");
    }

    pub fn set_description(&mut self, value: &str) {
        self.draft.description = value.to_string();
    }

    // ---- actions ----

    /// Check the current trainer and interval.
    pub async fn check_availability(&mut self) -> BookingPhase {
        let draft = self.draft.clone();
        self.checker
            .check(&draft.trainer_id, &draft.start_time, &draft.end_time)
            .await;
        self.phase()
    }

    /// Validate and create the booking. Refused unless the latest check
    /// matches the current inputs and was positive.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.submitting || self.submitted {
            return SubmitOutcome::Ignored;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }
        if !self.can_submit() {
            self.ctx
                .toaster
                .error("Please check trainer availability before booking");
            return SubmitOutcome::Ignored;
        }

        let request = CreateBookingRequest {
            trainer_id: self.draft.trainer_id.trim().to_string(),
            start_time: self.draft.start_time.clone(),
            end_time: self.draft.end_time.clone(),
            title: self.draft.title.trim().to_string(),
            description: optional(&self.draft.description),
        };

        self.submitting = true;
        let result = self.bookings.create_raw(&request).await;
        self.submitting = false;

        match result {
            Ok(payload) => {
                self.submitted = true;
                self.ctx.toaster.success("Booking created successfully");
                self.ctx.navigate(&Section::Bookings.list_path());
                SubmitOutcome::Saved(returned_id(&payload.data))
            }
            Err(e) => {
                self.ctx.fail("booking.create", &e);
                SubmitOutcome::Failed
            }
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "trainerId", "Trainer", &self.draft.trainer_id);
        require_text(&mut errors, "title", "Title", &self.draft.title);

        let start = parse_datetime(&self.draft.start_time);
        let end = parse_datetime(&self.draft.end_time);
        match (start, end) {
            (None, _) => errors.insert("startTime", "Start time is required"),
            (_, None) => errors.insert("endTime", "End time is required"),
            (Some(start), Some(end)) => {
                if let Err(e) = validate_booking_interval(start, end, Utc::now()) {
                    let field = match e {
                        IntervalError::StartNotInFuture => "startTime",
                        IntervalError::EndNotAfterStart => "endTime",
                    };
                    errors.insert(field, e.to_string());
                }
            }
        }
        errors
    }

    /// A changed trainer or bound voids the previous check.
    fn invalidate(&mut self, field: &str) {
        self.errors.clear(field);
        if self.checker.checked_key().is_some() {
            tracing::debug!(field, "Inputs changed, availability must be re-checked");
        }
        self.checker.reset();
    }
}
