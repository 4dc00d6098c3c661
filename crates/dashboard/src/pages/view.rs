//! Generic read-only view page with Edit/Delete actions.

use serde::de::DeserializeOwned;

use eduadmin_client::services::Resource;
use eduadmin_core::error::CoreError;

use crate::context::PageContext;

use super::confirm::delete_prompt;
use super::detail::{Detail, DetailField};
use super::scope::PageScope;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
    /// Rendered as a "not found" panel linking back to the list.
    NotFound(String),
    Failed(String),
}

pub struct ViewPage<T> {
    resource: Resource<T>,
    ctx: PageContext,
    scope: PageScope,
    id: String,
    state: ViewState<T>,
    deleting: bool,
}

impl<T: Detail + DeserializeOwned> ViewPage<T> {
    pub fn new(resource: Resource<T>, ctx: PageContext, id: impl Into<String>) -> Self {
        Self {
            resource,
            ctx,
            scope: PageScope::new(),
            id: id.into(),
            state: ViewState::Loading,
            deleting: false,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn record(&self) -> Option<&T> {
        match &self.state {
            ViewState::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// Display fields of the loaded record.
    pub fn fields(&self) -> Vec<DetailField> {
        self.record().map(Detail::fields).unwrap_or_default()
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn scope(&self) -> &PageScope {
        &self.scope
    }

    pub fn list_path(&self) -> &'static str {
        self.resource.path()
    }

    /// Fetch the record by id.
    pub async fn load(&mut self) {
        self.state = ViewState::Loading;
        let Some(result) = self.scope.run(self.resource.get(&self.id)).await else {
            return;
        };

        self.state = match result {
            Ok(payload) => ViewState::Loaded(payload.data),
            Err(e) if e.is_not_found() => {
                let err = CoreError::NotFound {
                    entity: self.resource.entity(),
                    id: self.id.clone(),
                };
                tracing::warn!(error = %err, "View target missing");
                ViewState::NotFound(err.detail())
            }
            Err(e) => {
                self.ctx.fail(&format!("{}.view", self.resource.entity()), &e);
                ViewState::Failed(e.user_message())
            }
        };
    }

    pub fn edit(&self) {
        self.ctx
            .navigate(&format!("{}/{}/edit", self.resource.path(), self.id));
    }

    pub fn back_to_list(&self) {
        self.ctx.navigate(self.resource.path());
    }

    /// Confirm, delete, then return to the list.
    pub async fn delete(&mut self) -> bool {
        let entity = self.resource.entity();
        if self.deleting || !self.ctx.confirm.confirm(&delete_prompt(entity)) {
            return false;
        }

        self.deleting = true;
        let result = self.resource.delete(&self.id).await;
        self.deleting = false;

        match result {
            Ok(_) => {
                self.ctx.toaster.success(format!("{entity} deleted successfully"));
                self.back_to_list();
                true
            }
            Err(e) => {
                self.ctx.fail(&format!("{entity}.delete"), &e);
                false
            }
        }
    }

    pub fn close(&self) {
        self.scope.close();
    }
}
