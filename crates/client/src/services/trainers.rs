use chrono::{DateTime, Utc};
use serde_json::Value;

use eduadmin_core::availability::{AvailabilityCheckResult, SetAvailabilityRequest};
use eduadmin_core::booking::TrainerStatus;
use eduadmin_core::datetime::format_iso;
use eduadmin_core::pagination::ListQuery;
use eduadmin_core::validation::is_uuid_shaped;

use crate::envelope::Payload;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::booking::TrainerBooking;
use crate::models::trainer::{StatusUpdate, Trainer, TrainerAvailability, TrainerPayload};

use super::{list_from_value, normalize_time, require_id, Resource};

/// `/trainers` plus the status, availability and calendar sub-resources.
#[derive(Clone)]
pub struct TrainerService {
    records: Resource<Trainer>,
}

impl TrainerService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            records: Resource::new(client, "/trainers", "Trainer"),
        }
    }

    /// The plain CRUD resource.
    pub fn records(&self) -> &Resource<Trainer> {
        &self.records
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Payload<Vec<Trainer>>, ApiError> {
        self.records.list(query).await
    }

    pub async fn get(&self, id: &str) -> Result<Payload<Trainer>, ApiError> {
        self.records.get(id).await
    }

    pub async fn create(&self, body: &TrainerPayload) -> Result<Payload<Trainer>, ApiError> {
        self.records.create(body).await
    }

    pub async fn update(&self, id: &str, body: &TrainerPayload) -> Result<Payload<Trainer>, ApiError> {
        self.records.update(id, body).await
    }

    pub async fn delete(&self, id: &str) -> Result<Payload<()>, ApiError> {
        self.records.delete(id).await
    }

    /// `PATCH /trainers/{id}/status`
    pub async fn update_status(
        &self,
        id: &str,
        status: TrainerStatus,
        notes: Option<String>,
    ) -> Result<Payload<Trainer>, ApiError> {
        let id = require_id("Trainer", id)?;
        tracing::info!(trainer_id = %id, status = %status, "Updating trainer status");
        let body = StatusUpdate {
            status,
            notes: notes.filter(|n| !n.trim().is_empty()),
        };
        self.client().patch(&self.sub_path(id, "status"), &body).await
    }

    /// `GET /trainers/{id}/availability/check?startTime&endTime`
    ///
    /// The id must be UUID-shaped and both times parseable; otherwise the
    /// call fails with [`ApiError::InvalidInput`] without touching the
    /// network.
    pub async fn check_availability(
        &self,
        id: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<Payload<AvailabilityCheckResult>, ApiError> {
        let id = id.trim();
        if !is_uuid_shaped(id) {
            return Err(ApiError::InvalidInput(format!("Invalid trainer id: {id}")));
        }
        let query = vec![
            ("startTime".to_string(), normalize_time("startTime", start_time)?),
            ("endTime".to_string(), normalize_time("endTime", end_time)?),
        ];
        self.client()
            .get(&self.sub_path(id, "availability/check"), &query)
            .await
    }

    /// `PUT /trainers/{id}/availability` with the full slot set.
    pub async fn set_availability(
        &self,
        id: &str,
        request: &SetAvailabilityRequest,
    ) -> Result<Payload<Value>, ApiError> {
        let id = require_id("Trainer", id)?;
        let mut body = request.clone();
        for (i, slot) in body.slots.iter_mut().enumerate() {
            slot.start_time = normalize_time(&format!("slots[{i}].startTime"), &slot.start_time)?;
            slot.end_time = normalize_time(&format!("slots[{i}].endTime"), &slot.end_time)?;
        }
        tracing::info!(trainer_id = %id, slots = body.slots.len(), "Setting trainer availability");
        self.client().put(&self.sub_path(id, "availability"), &body).await
    }

    /// `GET /trainers/{id}/availability`
    pub async fn get_availability(&self, id: &str) -> Result<Payload<TrainerAvailability>, ApiError> {
        let id = require_id("Trainer", id)?;
        self.client().get(&self.sub_path(id, "availability"), &[]).await
    }

    /// `GET /trainers/{id}/calendar?startDate&endDate`
    pub async fn get_calendar(
        &self,
        id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Payload<Vec<TrainerBooking>>, ApiError> {
        let id = require_id("Trainer", id)?;
        let query = vec![
            ("startDate".to_string(), format_iso(&start)),
            ("endDate".to_string(), format_iso(&end)),
        ];
        let payload: Payload<Value> =
            self.client().get(&self.sub_path(id, "calendar"), &query).await?;
        list_from_value(payload)
    }

    /// `GET /trainers/{id}/bookings`
    pub async fn get_bookings(
        &self,
        id: &str,
        query: &ListQuery,
    ) -> Result<Payload<Vec<TrainerBooking>>, ApiError> {
        let id = require_id("Trainer", id)?;
        let payload: Payload<Value> = self
            .client()
            .get(&self.sub_path(id, "bookings"), &query.to_pairs())
            .await?;
        list_from_value(payload)
    }

    fn client(&self) -> &ApiClient {
        self.records.client()
    }

    fn sub_path(&self, id: &str, tail: &str) -> String {
        format!("{}/{}", self.records.item_path(id), tail)
    }
}
