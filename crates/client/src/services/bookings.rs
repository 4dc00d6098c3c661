use serde_json::Value;

use eduadmin_core::booking::BookingStatus;
use eduadmin_core::pagination::ListQuery;

use crate::envelope::Payload;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::booking::{
    CancelBookingRequest, CreateBookingRequest, TrainerBooking, UpdateBookingRequest,
};

use super::{list_from_value, normalize_time, require_id, Resource};

/// `/trainer-bookings`
#[derive(Clone)]
pub struct BookingService {
    records: Resource<TrainerBooking>,
}

impl BookingService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            records: Resource::new(client, "/trainer-bookings", "Booking"),
        }
    }

    pub fn records(&self) -> &Resource<TrainerBooking> {
        &self.records
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Payload<Vec<TrainerBooking>>, ApiError> {
        self.records.list(query).await
    }

    pub async fn get(&self, id: &str) -> Result<Payload<TrainerBooking>, ApiError> {
        self.records.get(id).await
    }

    /// Create a booking. Times are normalized first; the server decides
    /// whether the trainer is actually free.
    pub async fn create(
        &self,
        request: &CreateBookingRequest,
    ) -> Result<Payload<TrainerBooking>, ApiError> {
        let payload = self.create_raw(request).await?;
        let Payload {
            data,
            message,
            pagination,
        } = payload;
        Ok(Payload {
            data: serde_json::from_value(data)?,
            message,
            pagination,
        })
    }

    /// Like [`BookingService::create`] but leaves the created record
    /// undecoded. A 2xx here means the booking exists, whatever shape the
    /// server echoed back.
    pub async fn create_raw(&self, request: &CreateBookingRequest) -> Result<Payload<Value>, ApiError> {
        require_id("Trainer", &request.trainer_id)?;
        let body = CreateBookingRequest {
            start_time: normalize_time("startTime", &request.start_time)?,
            end_time: normalize_time("endTime", &request.end_time)?,
            ..request.clone()
        };
        tracing::info!(trainer_id = %body.trainer_id, start = %body.start_time, "Creating booking");
        self.client().post(self.records.path(), &body).await
    }

    pub async fn update(
        &self,
        id: &str,
        request: &UpdateBookingRequest,
    ) -> Result<Payload<TrainerBooking>, ApiError> {
        let body = UpdateBookingRequest {
            start_time: normalize_time("startTime", &request.start_time)?,
            end_time: normalize_time("endTime", &request.end_time)?,
            ..request.clone()
        };
        self.records.update(id, &body).await
    }

    pub async fn delete(&self, id: &str) -> Result<Payload<()>, ApiError> {
        self.records.delete(id).await
    }

    /// `PATCH /trainer-bookings/{id}/cancel`
    pub async fn cancel(
        &self,
        id: &str,
        reason: Option<String>,
    ) -> Result<Payload<TrainerBooking>, ApiError> {
        let id = require_id("Booking", id)?;
        tracing::info!(booking_id = %id, "Cancelling booking");
        let body = CancelBookingRequest {
            reason: reason.filter(|r| !r.trim().is_empty()),
        };
        self.client()
            .patch(&format!("{}/cancel", self.records.item_path(id)), &body)
            .await
    }

    /// `PATCH /trainer-bookings/{id}/status`
    pub async fn update_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> Result<Payload<TrainerBooking>, ApiError> {
        let id = require_id("Booking", id)?;
        tracing::info!(booking_id = %id, status = %status, "Updating booking status");
        self.client()
            .patch(
                &format!("{}/status", self.records.item_path(id)),
                &serde_json::json!({ "status": status }),
            )
            .await
    }

    /// `GET /trainer-bookings/trainer/{trainerId}`
    pub async fn by_trainer(
        &self,
        trainer_id: &str,
        query: &ListQuery,
    ) -> Result<Payload<Vec<TrainerBooking>>, ApiError> {
        let trainer_id = require_id("Trainer", trainer_id)?;
        let payload: Payload<Value> = self
            .client()
            .get(
                &format!("{}/trainer/{}", self.records.path(), trainer_id),
                &query.to_pairs(),
            )
            .await?;
        list_from_value(payload)
    }

    fn client(&self) -> &ApiClient {
        self.records.client()
    }
}
