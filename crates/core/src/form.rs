//! Create/edit form state machine shared by every entity form.
//!
//! ```text
//! create:  IdleNew ──edit──▶ Editing ──submit──▶ Submitting ──▶ Succeeded
//!                                ▲                    │
//!                                └──────error─────────┘
//! edit:    Fetching ──loaded──▶ Editing ...   Fetching ──failed──▶ LoadFailed
//! ```

use std::fmt;

use crate::types::EntityId;

/// Whether a form creates a new entity or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntityId),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    pub fn entity_id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormPhase {
    /// Create mode with an untouched blank draft.
    IdleNew,
    /// Edit mode, waiting for the by-id fetch.
    Fetching,
    /// The user is changing fields.
    Editing,
    /// A create/update request is in flight; submit is disabled.
    Submitting,
    /// Saved; the form has navigated away.
    Succeeded,
    /// The by-id fetch failed; the form has navigated back to the list.
    LoadFailed,
}

impl FormPhase {
    pub fn initial(mode: &FormMode) -> Self {
        match mode {
            FormMode::Create => Self::IdleNew,
            FormMode::Edit(_) => Self::Fetching,
        }
    }

    /// Phases reachable from `self`. Terminal phases return an empty slice.
    pub fn valid_transitions(self) -> &'static [FormPhase] {
        match self {
            Self::IdleNew => &[Self::Editing, Self::Submitting],
            Self::Fetching => &[Self::Editing, Self::LoadFailed],
            Self::Editing => &[Self::Editing, Self::Submitting],
            Self::Submitting => &[Self::Succeeded, Self::Editing],
            Self::Succeeded | Self::LoadFailed => &[],
        }
    }

    pub fn can_transition(self, to: FormPhase) -> bool {
        self.valid_transitions().contains(&to)
    }

    /// Validate a transition, returning a message for invalid ones.
    pub fn validate_transition(self, to: FormPhase) -> Result<(), String> {
        if self.can_transition(to) {
            Ok(())
        } else {
            Err(format!("Invalid form transition: {self} -> {to}"))
        }
    }

    /// Whether the draft accepts edits in this phase.
    pub fn accepts_edits(self) -> bool {
        matches!(self, Self::IdleNew | Self::Editing)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(self) -> bool {
        matches!(self, Self::IdleNew | Self::Editing)
    }

    pub fn is_busy(self) -> bool {
        matches!(self, Self::Fetching | Self::Submitting)
    }
}

impl fmt::Display for FormPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::IdleNew => "IdleNew",
            Self::Fetching => "Fetching",
            Self::Editing => "Editing",
            Self::Submitting => "Submitting",
            Self::Succeeded => "Succeeded",
            Self::LoadFailed => "LoadFailed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_phase_follows_mode() {
        assert_eq!(FormPhase::initial(&FormMode::Create), FormPhase::IdleNew);
        assert_eq!(
            FormPhase::initial(&FormMode::Edit("42".into())),
            FormPhase::Fetching
        );
    }

    #[test]
    fn submit_error_returns_to_editing() {
        assert!(FormPhase::Submitting.can_transition(FormPhase::Editing));
        assert!(FormPhase::Submitting.can_transition(FormPhase::Succeeded));
    }

    #[test]
    fn fetching_cannot_submit() {
        assert!(!FormPhase::Fetching.can_transition(FormPhase::Submitting));
        assert!(!FormPhase::Fetching.can_submit());
        assert!(FormPhase::Fetching.is_busy());
    }

    #[test]
    fn terminal_phases_are_final() {
        assert!(FormPhase::Succeeded.valid_transitions().is_empty());
        assert!(FormPhase::LoadFailed.valid_transitions().is_empty());
    }

    #[test]
    fn invalid_transition_message() {
        let err = FormPhase::Succeeded
            .validate_transition(FormPhase::Editing)
            .unwrap_err();
        assert_eq!(err, "Invalid form transition: Succeeded -> Editing");
    }

    #[test]
    fn submitting_disables_edits_and_submit() {
        assert!(!FormPhase::Submitting.accepts_edits());
        assert!(!FormPhase::Submitting.can_submit());
    }

    #[test]
    fn mode_exposes_entity_id() {
        assert_eq!(FormMode::Edit("abc".into()).entity_id(), Some("abc"));
        assert_eq!(FormMode::Create.entity_id(), None);
    }
}
