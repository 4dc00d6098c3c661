//! Collaborators every page view-model receives from the composition root.

use std::sync::Arc;

use eduadmin_client::navigation::Navigator;
use eduadmin_client::ApiError;

use crate::pages::confirm::Confirm;
use crate::shell::error_handler::ErrorHandler;
use crate::shell::toast::Toaster;

/// Cheap to clone.
#[derive(Clone)]
pub struct PageContext {
    pub toaster: Toaster,
    pub errors: ErrorHandler,
    pub navigator: Arc<dyn Navigator>,
    pub confirm: Arc<dyn Confirm>,
}

impl PageContext {
    pub fn new(toaster: Toaster, navigator: Arc<dyn Navigator>, confirm: Arc<dyn Confirm>) -> Self {
        Self {
            errors: ErrorHandler::new(toaster.clone()),
            toaster,
            navigator,
            confirm,
        }
    }

    pub fn navigate(&self, path: &str) {
        tracing::debug!(path, "Navigate");
        self.navigator.navigate(path);
    }

    pub fn fail(&self, context: &str, error: &ApiError) {
        self.errors.surface(context, error);
    }
}
