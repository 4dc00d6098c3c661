use serde::{Deserialize, Serialize};

use eduadmin_core::roles;
use eduadmin_core::types::Timestamp;

use super::ActiveStatus;

/// A dashboard user account as listed by `/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub status: ActiveStatus,
    #[serde(default)]
    pub last_login_at: Option<Timestamp>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl User {
    pub fn is_staff(&self) -> bool {
        roles::is_staff(&self.role)
    }
}
