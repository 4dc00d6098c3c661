#![allow(dead_code)]

use serde_json::{json, Value};
use uuid::Uuid;

pub use eduadmin_client::testing::{ok_envelope, Navigation, TestClient, TEST_BASE_URL};

/// A fresh UUID-shaped trainer id.
pub fn trainer_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn trainer_json(id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "name": "Ravi Kumar",
        "email": "ravi@example.com",
        "specializations": ["Rust", "Go"],
        "trainingModes": ["ONLINE"],
        "languages": ["English"],
        "hourlyRate": 80,
        "status": status
    })
}

pub fn booking_json(id: &str, trainer_id: &str, start: &str, end: &str) -> Value {
    json!({
        "_id": id,
        "trainerId": trainer_id,
        "trainer": {"_id": trainer_id, "name": "Ravi Kumar"},
        "startTime": start,
        "endTime": end,
        "title": "Workshop",
        "status": "ACTIVE"
    })
}

pub fn url(path: &str) -> String {
    format!("{TEST_BASE_URL}{path}")
}
