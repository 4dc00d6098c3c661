#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use uuid::Uuid;

use eduadmin_dashboard::context::PageContext;
use eduadmin_dashboard::pages::confirm::ScriptedConfirm;
use eduadmin_dashboard::shell::toast::{ToastKind, Toaster};

pub use eduadmin_client::testing::{ok_envelope, rejected_envelope, Navigation, TestClient};

/// Scripted client plus the page collaborators built over it.
pub struct Harness {
    pub h: TestClient,
    pub toaster: Toaster,
    pub confirm: Arc<ScriptedConfirm>,
    pub ctx: PageContext,
}

impl Harness {
    /// Signed in as `admin`; confirmation prompts answered from `answers`.
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self::over(TestClient::signed_in("admin"), answers)
    }

    pub fn over(h: TestClient, answers: impl IntoIterator<Item = bool>) -> Self {
        let toaster = Toaster::new();
        let confirm = Arc::new(ScriptedConfirm::new(answers));
        let ctx = PageContext::new(toaster.clone(), h.navigator.clone(), confirm.clone());
        Self {
            h,
            toaster,
            confirm,
            ctx,
        }
    }

    pub fn successes(&self) -> Vec<String> {
        self.toaster.messages(ToastKind::Success)
    }

    pub fn failures(&self) -> Vec<String> {
        self.toaster.messages(ToastKind::Error)
    }

    pub fn last_navigation(&self) -> Option<Navigation> {
        self.h.navigator.last()
    }
}

pub fn trainer_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn trainer_json(id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "name": "Ravi Kumar",
        "email": "ravi@example.com",
        "specializations": ["Rust"],
        "trainingModes": ["ONLINE", "HYBRID"],
        "languages": ["English"],
        "status": status
    })
}

pub fn booking_json(id: &str, trainer_id: &str, start: &str, end: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "trainerId": trainer_id,
        "trainer": {"_id": trainer_id, "name": "Ravi Kumar"},
        "startTime": start,
        "endTime": end,
        "title": "Workshop",
        "status": status
    })
}

pub fn faq_json(id: &str, question: &str) -> Value {
    json!({"_id": id, "question": question, "answer": "Yes.", "status": "active"})
}
