use eduadmin_core::pagination::ListQuery;

use crate::envelope::Payload;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::lead::{Lead, LeadStatus, LeadStatusUpdate};

use super::{require_id, Resource};

/// `/leads`. Leads are created by the public site, so there is no create.
#[derive(Clone)]
pub struct LeadService {
    records: Resource<Lead>,
}

impl LeadService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            records: Resource::new(client, "/leads", "Lead"),
        }
    }

    pub fn records(&self) -> &Resource<Lead> {
        &self.records
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Payload<Vec<Lead>>, ApiError> {
        self.records.list(query).await
    }

    pub async fn get(&self, id: &str) -> Result<Payload<Lead>, ApiError> {
        self.records.get(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<Payload<()>, ApiError> {
        self.records.delete(id).await
    }

    /// `PATCH /leads/{id}/status`
    pub async fn update_status(
        &self,
        id: &str,
        status: LeadStatus,
        notes: Option<String>,
    ) -> Result<Payload<Lead>, ApiError> {
        let id = require_id("Lead", id)?;
        tracing::info!(lead_id = %id, status = %status, "Updating lead status");
        let body = LeadStatusUpdate {
            status,
            notes: notes.filter(|n| !n.trim().is_empty()),
        };
        self.records
            .client()
            .patch(&format!("{}/status", self.records.item_path(id)), &body)
            .await
    }
}
