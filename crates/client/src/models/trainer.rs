use serde::{Deserialize, Serialize};

use eduadmin_core::availability::{AvailabilitySlot, RecurringPattern};
use eduadmin_core::booking::{TrainerStatus, TrainingMode};
use eduadmin_core::types::Timestamp;

/// A trainer profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub training_modes: Vec<TrainingMode>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub experience_years: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    pub status: TrainerStatus,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// Create/update body for a trainer profile. Status is changed separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub specializations: Vec<String>,
    pub training_modes: Vec<TrainingMode>,
    pub languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<f64>,
}

/// Body of the simple status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: TrainerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Stored availability of a trainer: the coarse status and, when the
/// advanced editor was used, the slot list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerAvailability {
    #[serde(default)]
    pub status: Option<TrainerStatus>,
    #[serde(default)]
    pub slots: Vec<AvailabilitySlot>,
    #[serde(default)]
    pub recurring_pattern: Option<RecurringPattern>,
    #[serde(default)]
    pub timezone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trainer_accepts_mongo_id_and_sparse_fields() {
        let trainer: Trainer = serde_json::from_value(json!({
            "_id": "3f2504e0-4f89-41d3-9a0c-0305e82c3301",
            "name": "Ravi",
            "email": "ravi@example.com",
            "trainingModes": ["ONLINE", "HYBRID"],
            "status": "AVAILABLE"
        }))
        .unwrap();
        assert_eq!(trainer.id, "3f2504e0-4f89-41d3-9a0c-0305e82c3301");
        assert_eq!(trainer.training_modes, vec![TrainingMode::Online, TrainingMode::Hybrid]);
        assert!(trainer.specializations.is_empty());
        assert_eq!(trainer.status, TrainerStatus::Available);
    }

    #[test]
    fn status_update_omits_empty_notes() {
        let body = StatusUpdate {
            status: TrainerStatus::Busy,
            notes: None,
        };
        assert_eq!(serde_json::to_value(body).unwrap(), json!({"status": "BUSY"}));
    }
}
