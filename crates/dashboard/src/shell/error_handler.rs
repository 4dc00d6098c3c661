//! Global error handler installed by the composition root.
//!
//! Page boundaries hand every caught failure here: it is logged and turned
//! into a toast. Uncaught runtime errors reported by the shell go through
//! [`ErrorHandler::report`], which drops the benign media-playback aborts
//! the browser raises when a video element is paused or removed mid-load.

use eduadmin_client::ApiError;

use super::toast::Toaster;

/// An uncaught error as reported by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub name: String,
    pub message: String,
}

impl ErrorReport {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Media aborts that carry no actionable information.
    pub fn is_benign(&self) -> bool {
        self.name == "AbortError"
            || self.message.contains("The play() request was interrupted")
            || self.message.contains("play() request was interrupted by a call to pause()")
    }
}

/// What the handler did with a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Suppressed,
    Logged,
}

#[derive(Debug, Clone)]
pub struct ErrorHandler {
    toaster: Toaster,
}

impl ErrorHandler {
    pub fn new(toaster: Toaster) -> Self {
        Self { toaster }
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    /// Handle an uncaught runtime error.
    pub fn report(&self, report: &ErrorReport) -> Disposition {
        if report.is_benign() {
            tracing::debug!(name = %report.name, "Suppressed benign media error");
            return Disposition::Suppressed;
        }
        tracing::error!(name = %report.name, message = %report.message, "Uncaught error");
        Disposition::Logged
    }

    /// Surface a failed call at a page boundary: log it and toast the
    /// user-facing message. An ended session has already redirected, so it
    /// only gets logged.
    pub fn surface(&self, context: &str, error: &ApiError) {
        tracing::warn!(context, error = %error, "Request failed");
        if matches!(error, ApiError::SessionExpired) {
            return;
        }
        self.toaster.error(error.user_message());
    }

    /// Like [`ErrorHandler::surface`] but with a fixed toast text.
    pub fn surface_with(&self, context: &str, error: &ApiError, message: &str) {
        tracing::warn!(context, error = %error, "Request failed");
        if matches!(error, ApiError::SessionExpired) {
            return;
        }
        self.toaster.error(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::toast::ToastKind;

    #[test]
    fn media_aborts_are_suppressed() {
        let handler = ErrorHandler::new(Toaster::new());
        assert_eq!(
            handler.report(&ErrorReport::new("AbortError", "The operation was aborted.")),
            Disposition::Suppressed
        );
        assert_eq!(
            handler.report(&ErrorReport::new(
                "DOMException",
                "The play() request was interrupted by a call to pause()."
            )),
            Disposition::Suppressed
        );
        assert_eq!(
            handler.report(&ErrorReport::new("TypeError", "x is undefined")),
            Disposition::Logged
        );
    }

    #[tokio::test]
    async fn surface_toasts_user_message() {
        let toaster = Toaster::new();
        let handler = ErrorHandler::new(toaster.clone());
        handler.surface(
            "faq.load",
            &ApiError::Rejected {
                message: "FAQ not found".into(),
                code: None,
            },
        );
        handler.surface("faq.load", &ApiError::SessionExpired);
        assert_eq!(toaster.messages(ToastKind::Error), vec!["FAQ not found"]);
    }
}
