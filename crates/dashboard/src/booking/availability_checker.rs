//! Point-in-time availability check for one trainer and interval.

use std::fmt;

use eduadmin_client::services::TrainerService;
use eduadmin_client::session::SessionStore;
use eduadmin_core::booking::TrainerStatus;
use eduadmin_core::datetime::to_iso_string;
use eduadmin_core::validation::is_uuid_shaped;

use crate::context::PageContext;

/// The trainer + interval a check was made for. Times are normalized so
/// equivalent inputs compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckKey {
    pub trainer_id: String,
    pub start_time: String,
    pub end_time: String,
}

impl CheckKey {
    /// `None` unless the id is UUID-shaped and both times parse.
    pub fn new(trainer_id: &str, start_time: &str, end_time: &str) -> Option<Self> {
        let trainer_id = trainer_id.trim();
        if !is_uuid_shaped(trainer_id) {
            return None;
        }
        Some(Self {
            trainer_id: trainer_id.to_string(),
            start_time: to_iso_string(start_time)?,
            end_time: to_iso_string(end_time)?,
        })
    }
}

impl fmt::Display for CheckKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{} - {}]", self.trainer_id, self.start_time, self.end_time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckState {
    NotChecked,
    Checking,
    Available,
    Unavailable {
        reason: String,
        status: Option<TrainerStatus>,
    },
}

impl CheckState {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

type ResultCallback = Box<dyn Fn(&CheckKey, bool) + Send + Sync>;

pub struct AvailabilityChecker {
    trainers: TrainerService,
    session: SessionStore,
    ctx: PageContext,
    state: CheckState,
    checked: Option<CheckKey>,
    on_result: Option<ResultCallback>,
}

impl AvailabilityChecker {
    pub fn new(trainers: TrainerService, session: SessionStore, ctx: PageContext) -> Self {
        Self {
            trainers,
            session,
            ctx,
            state: CheckState::NotChecked,
            checked: None,
            on_result: None,
        }
    }

    /// Called with the key and the verdict after every completed check.
    pub fn on_result(mut self, callback: impl Fn(&CheckKey, bool) + Send + Sync + 'static) -> Self {
        self.on_result = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &CheckState {
        &self.state
    }

    /// Key of the last completed check.
    pub fn checked_key(&self) -> Option<&CheckKey> {
        self.checked.as_ref()
    }

    pub fn reset(&mut self) {
        self.state = CheckState::NotChecked;
        self.checked = None;
    }

    /// Run a check. Invalid ids or times and a missing session toast an error
    /// and leave the checker in [`CheckState::NotChecked`] without any request.
    pub async fn check(&mut self, trainer_id: &str, start_time: &str, end_time: &str) -> &CheckState {
        self.reset();

        let Some(key) = CheckKey::new(trainer_id, start_time, end_time) else {
            tracing::debug!(trainer_id, "Availability check skipped, invalid input");
            let message = if trainer_id.trim().is_empty() || is_uuid_shaped(trainer_id.trim()) {
                "Please select a trainer, start time and end time"
            } else {
                "Invalid trainer ID"
            };
            self.ctx.toaster.error(message);
            return &self.state;
        };
        if !self.session.is_authenticated() {
            self.ctx.toaster.error("Please log in to check availability");
            return &self.state;
        }

        self.state = CheckState::Checking;
        let result = self
            .trainers
            .check_availability(&key.trainer_id, &key.start_time, &key.end_time)
            .await;

        self.state = match result {
            Ok(payload) if payload.data.is_available => CheckState::Available,
            Ok(payload) => CheckState::Unavailable {
                reason: payload
                    .data
                    .reason
                    .filter(|r| !r.trim().is_empty())
                    .unwrap_or_else(|| "Trainer is not available for this time".to_string()),
                status: payload.data.trainer_status,
            },
            Err(e) => {
                self.ctx.fail("trainer.availability", &e);
                CheckState::NotChecked
            }
        };

        if !matches!(self.state, CheckState::NotChecked) {
            let available = self.state.is_available();
            tracing::info!(key = %key, available, "Availability checked");
            if let Some(callback) = &self.on_result {
                callback(&key, available);
            }
            self.checked = Some(key);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "3f2504e0-4f89-41d3-9a0c-0305e82c3301";

    #[test]
    fn key_normalizes_times() {
        let a = CheckKey::new(ID, "2099-01-01T09:00", "2099-01-01T10:00").unwrap();
        let b = CheckKey::new(ID, "2099-01-01T09:00:00Z", "2099-01-01 10:00").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn key_rejects_bad_input() {
        assert!(CheckKey::new("t-1", "2099-01-01T09:00", "2099-01-01T10:00").is_none());
        assert!(CheckKey::new(ID, "", "2099-01-01T10:00").is_none());
    }
}
