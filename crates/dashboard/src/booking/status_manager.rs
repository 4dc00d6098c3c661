//! Trainer status and availability management.
//!
//! Two independent saves: the coarse status (with an optional note) and
//! the advanced slot set with an optional recurrence. Switching between the
//! simple and advanced editors is a view toggle only; saving one does not
//! touch what the other displays until the next load.

use eduadmin_client::models::trainer::{Trainer, TrainerAvailability};
use eduadmin_client::services::TrainerService;
use eduadmin_core::availability::{AvailabilityDraft, SlotDraft};
use eduadmin_core::booking::TrainerStatus;
use eduadmin_core::validation::FieldErrors;

use crate::context::PageContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Simple,
    Advanced,
}

pub struct TrainerStatusManager {
    trainers: TrainerService,
    ctx: PageContext,
    trainer_id: String,
    mode: EditorMode,
    trainer: Option<Trainer>,
    stored: Option<TrainerAvailability>,
    status: TrainerStatus,
    notes: String,
    advanced: AvailabilityDraft,
    errors: FieldErrors,
    saving: bool,
}

impl TrainerStatusManager {
    pub fn new(trainers: TrainerService, ctx: PageContext, trainer_id: impl Into<String>) -> Self {
        Self {
            trainers,
            ctx,
            trainer_id: trainer_id.into(),
            mode: EditorMode::Simple,
            trainer: None,
            stored: None,
            status: TrainerStatus::Available,
            notes: String::new(),
            advanced: AvailabilityDraft::default(),
            errors: FieldErrors::new(),
            saving: false,
        }
    }

    pub fn trainer(&self) -> Option<&Trainer> {
        self.trainer.as_ref()
    }

    /// Availability as last fetched.
    pub fn stored_availability(&self) -> Option<&TrainerAvailability> {
        self.stored.as_ref()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn status(&self) -> TrainerStatus {
        self.status
    }

    /// Choices for the simple-mode status select.
    pub fn status_options(&self) -> &'static [TrainerStatus] {
        &TrainerStatus::ALL
    }

    pub fn advanced(&self) -> &AvailabilityDraft {
        &self.advanced
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Fetch the trainer and its stored availability.
    pub async fn load(&mut self) {
        match self.trainers.get(&self.trainer_id).await {
            Ok(payload) => {
                self.status = payload.data.status;
                self.trainer = Some(payload.data);
            }
            Err(e) => {
                self.ctx.fail("trainer.load", &e);
                return;
            }
        }

        match self.trainers.get_availability(&self.trainer_id).await {
            Ok(payload) => {
                let stored = payload.data;
                if !stored.slots.is_empty() {
                    self.advanced.slots = stored
                        .slots
                        .iter()
                        .map(|slot| SlotDraft {
                            start_time: slot.start_time.clone(),
                            end_time: slot.end_time.clone(),
                            is_available: slot.is_available,
                            notes: slot.notes.clone().unwrap_or_default(),
                        })
                        .collect::<Vec<_>>()
                        .into();
                }
                if let Some(tz) = &stored.timezone {
                    self.advanced.timezone = tz.clone();
                }
                self.stored = Some(stored);
            }
            Err(e) => {
                // Older trainers have no availability document.
                tracing::warn!(trainer_id = %self.trainer_id, error = %e, "No stored availability");
            }
        }
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    pub fn set_status(&mut self, status: TrainerStatus) {
        self.status = status;
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_string();
    }

    /// Edit the advanced draft. `field` is the error key to clear.
    pub fn edit_advanced(&mut self, field: &str, apply: impl FnOnce(&mut AvailabilityDraft)) {
        apply(&mut self.advanced);
        self.errors.clear(field);
    }

    /// Save the coarse status.
    pub async fn save_status(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        let notes = Some(self.notes.clone());
        let result = self
            .trainers
            .update_status(&self.trainer_id, self.status, notes)
            .await;
        self.saving = false;

        match result {
            Ok(payload) => {
                self.ctx.toaster.success(format!(
                    "Trainer status updated to {}",
                    payload.data.status.label()
                ));
                self.trainer = Some(payload.data);
                self.notes.clear();
                true
            }
            Err(e) => {
                self.ctx.fail("trainer.status", &e);
                false
            }
        }
    }

    /// Save the advanced slot set.
    pub async fn save_availability(&mut self) -> bool {
        if self.saving {
            return false;
        }
        let request = match self.advanced.to_request() {
            Ok(request) => request,
            Err(errors) => {
                self.errors = errors;
                return false;
            }
        };

        self.saving = true;
        let result = self
            .trainers
            .set_availability(&self.trainer_id, &request)
            .await;
        self.saving = false;

        match result {
            Ok(_) => {
                self.ctx.toaster.success("Availability updated successfully");
                true
            }
            Err(e) => {
                self.ctx.fail("trainer.availability.set", &e);
                false
            }
        }
    }
}
