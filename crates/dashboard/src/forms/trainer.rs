//! Trainer profile form. Status is not part of the profile; it is changed
//! through the status manager.

use eduadmin_client::http::ApiClient;
use eduadmin_client::models::trainer::{Trainer, TrainerPayload};
use eduadmin_client::services::Resource;
use eduadmin_core::booking::TrainingMode;
use eduadmin_core::nested::Repeatable;
use eduadmin_core::validation::{check_number, parse_number, require_text, FieldErrors, NumberRule};

use super::{filled_strings, optional, FormSchema};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub specializations: Repeatable<String>,
    pub training_modes: Vec<TrainingMode>,
    pub languages: Repeatable<String>,
    pub bio: String,
    pub hourly_rate: String,
    pub experience_years: String,
}

impl TrainerDraft {
    /// Toggle a training mode checkbox. Modes keep the order they were
    /// ticked in.
    pub fn toggle_mode(&mut self, mode: TrainingMode) {
        if let Some(pos) = self.training_modes.iter().position(|m| *m == mode) {
            self.training_modes.remove(pos);
        } else {
            self.training_modes.push(mode);
        }
    }
}

pub struct TrainerForm;

impl FormSchema for TrainerForm {
    type Record = Trainer;
    type Draft = TrainerDraft;
    type Payload = TrainerPayload;

    const ENTITY: &'static str = "Trainer";

    fn resource(client: &ApiClient) -> Resource<Trainer> {
        client.trainers().records().clone()
    }

    fn validate(draft: &TrainerDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", "Name", &draft.name);
        require_text(&mut errors, "email", "Email", &draft.email);
        check_number(
            &mut errors,
            "hourlyRate",
            "Hourly rate",
            &draft.hourly_rate,
            NumberRule::optional().min(0.0),
        );
        check_number(
            &mut errors,
            "experienceYears",
            "Experience",
            &draft.experience_years,
            NumberRule::optional().min(0.0),
        );
        errors
    }

    fn to_payload(draft: &TrainerDraft) -> TrainerPayload {
        TrainerPayload {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: optional(&draft.phone),
            location: optional(&draft.location),
            specializations: filled_strings(&draft.specializations),
            training_modes: draft.training_modes.clone(),
            languages: filled_strings(&draft.languages),
            bio: optional(&draft.bio),
            hourly_rate: parse_number(&draft.hourly_rate),
            experience_years: parse_number(&draft.experience_years),
        }
    }

    fn from_record(t: &Trainer) -> TrainerDraft {
        TrainerDraft {
            name: t.name.clone(),
            email: t.email.clone(),
            phone: t.phone.clone().unwrap_or_default(),
            location: t.location.clone().unwrap_or_default(),
            specializations: Repeatable::from_rows(t.specializations.clone()),
            training_modes: t.training_modes.clone(),
            languages: Repeatable::from_rows(t.languages.clone()),
            bio: t.bio.clone().unwrap_or_default(),
            hourly_rate: t.hourly_rate.map(|r| r.to_string()).unwrap_or_default(),
            experience_years: t.experience_years.map(|y| y.to_string()).unwrap_or_default(),
        }
    }
}
