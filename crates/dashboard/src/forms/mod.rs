//! Create/edit forms.
//!
//! Every entity form is a [`FormController`] over a [`FormSchema`]: the
//! schema knows the draft shape, its validation and the payload transform;
//! the controller runs the shared phase machine (fetch, edit, submit) and
//! talks to the service.

pub mod blog;
pub mod college;
pub mod course;
pub mod faq;
pub mod refer_partner;
pub mod testimonial;
pub mod trainer;
pub mod video;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use eduadmin_client::http::ApiClient;
use eduadmin_client::services::Resource;
use eduadmin_core::form::{FormMode, FormPhase};
use eduadmin_core::slug::validate_slug;
use eduadmin_core::validation::{require_text, FieldErrors};

use crate::context::PageContext;
use crate::pages::scope::PageScope;

/// Per-entity half of a form.
pub trait FormSchema {
    type Record: DeserializeOwned;
    type Draft: Clone + Default;
    type Payload: Serialize;

    /// Display name used in toasts ("Course", "FAQ", ...).
    const ENTITY: &'static str;

    fn resource(client: &ApiClient) -> Resource<Self::Record>;

    /// Field checks run on submit. Keys match the field names passed to
    /// [`FormController::edit`].
    fn validate(draft: &Self::Draft) -> FieldErrors;

    /// Build the request body from a draft that passed [`FormSchema::validate`]:
    /// parse numbers, drop blank nested rows, default optional fields.
    fn to_payload(draft: &Self::Draft) -> Self::Payload;

    fn from_record(record: &Self::Record) -> Self::Draft;

    /// Derived-field hook run after every edit of `field`.
    fn after_edit(_draft: &mut Self::Draft, _field: &str) {}
}

/// Result of [`FormController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submit is disabled in the current phase.
    Ignored,
    /// Client-side validation failed; nothing was sent.
    Invalid,
    /// Saved. Carries the id the server returned, if any.
    Saved(Option<String>),
    /// The request failed; the draft is intact and editable.
    Failed,
}

pub struct FormController<S: FormSchema> {
    resource: Resource<S::Record>,
    ctx: PageContext,
    scope: PageScope,
    mode: FormMode,
    phase: FormPhase,
    draft: S::Draft,
    errors: FieldErrors,
}

impl<S: FormSchema> FormController<S> {
    pub fn new(client: &ApiClient, ctx: PageContext, mode: FormMode) -> Self {
        Self {
            resource: S::resource(client),
            ctx,
            scope: PageScope::new(),
            phase: FormPhase::initial(&mode),
            mode,
            draft: S::Draft::default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn create(client: &ApiClient, ctx: PageContext) -> Self {
        Self::new(client, ctx, FormMode::Create)
    }

    pub fn edit_existing(client: &ApiClient, ctx: PageContext, id: impl Into<String>) -> Self {
        Self::new(client, ctx, FormMode::Edit(id.into()))
    }

    // ---- state ----

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &S::Draft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn can_submit(&self) -> bool {
        self.phase.can_submit()
    }

    pub fn scope(&self) -> &PageScope {
        &self.scope
    }

    // ---- actions ----

    /// Edit mode: fetch the record and fill the draft. On failure the form
    /// goes back to the list with an error toast. No-op in create mode.
    pub async fn load(&mut self) {
        let Some(id) = self.mode.entity_id().map(str::to_string) else {
            return;
        };
        let Some(result) = self.scope.run(self.resource.get(&id)).await else {
            return;
        };

        match result {
            Ok(payload) => {
                self.draft = S::from_record(&payload.data);
                self.errors.clear_all();
                self.transition(FormPhase::Editing);
            }
            Err(e) => {
                self.ctx.errors.surface_with(
                    &format!("{}.load", S::ENTITY),
                    &e,
                    &format!("Failed to load {}", S::ENTITY.to_lowercase()),
                );
                self.transition(FormPhase::LoadFailed);
                self.ctx.navigate(self.resource.path());
            }
        }
    }

    /// Change the draft through `apply`. The error on `field` is cleared and
    /// derived fields are refreshed. Returns `false` when the phase does not
    /// accept edits.
    pub fn edit(&mut self, field: &str, apply: impl FnOnce(&mut S::Draft)) -> bool {
        if !self.phase.accepts_edits() {
            return false;
        }
        apply(&mut self.draft);
        self.errors.clear(field);
        S::after_edit(&mut self.draft, field);
        if self.phase == FormPhase::IdleNew {
            self.transition(FormPhase::Editing);
        }
        true
    }

    /// Validate, then create or update.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.phase.can_submit() {
            return SubmitOutcome::Ignored;
        }

        let errors = S::validate(&self.draft);
        if !errors.is_empty() {
            tracing::debug!(entity = S::ENTITY, errors = %errors, "Form validation failed");
            self.errors = errors;
            if self.phase == FormPhase::IdleNew {
                self.transition(FormPhase::Editing);
            }
            return SubmitOutcome::Invalid;
        }
        self.errors.clear_all();

        let payload = S::to_payload(&self.draft);
        self.transition(FormPhase::Submitting);

        let client = self.resource.client();
        let result = match &self.mode {
            FormMode::Create => client.post::<Value, _>(self.resource.path(), &payload).await,
            FormMode::Edit(id) => {
                client
                    .put::<Value, _>(&format!("{}/{}", self.resource.path(), id), &payload)
                    .await
            }
        };

        match result {
            Ok(response) => {
                let verb = if self.mode.is_edit() { "updated" } else { "created" };
                self.ctx
                    .toaster
                    .success(format!("{} {verb} successfully", S::ENTITY));
                self.transition(FormPhase::Succeeded);

                let id = returned_id(&response.data)
                    .or_else(|| self.mode.entity_id().map(str::to_string));
                match &id {
                    Some(id) => self.ctx.navigate(&format!("{}/{}", self.resource.path(), id)),
                    None => self.ctx.navigate(self.resource.path()),
                }
                SubmitOutcome::Saved(id)
            }
            Err(e) => {
                self.ctx.fail(&format!("{}.submit", S::ENTITY), &e);
                self.transition(FormPhase::Editing);
                SubmitOutcome::Failed
            }
        }
    }

    pub fn cancel(&self) {
        self.scope.close();
        self.ctx.navigate(self.resource.path());
    }

    fn transition(&mut self, to: FormPhase) {
        match self.phase.validate_transition(to) {
            Ok(()) => self.phase = to,
            Err(msg) => tracing::error!(entity = S::ENTITY, "{msg}"),
        }
    }
}

/// Id of the saved record, if the response carries one.
pub(crate) fn returned_id(data: &Value) -> Option<String> {
    ["_id", "id"]
        .iter()
        .find_map(|key| data.get(key))
        .and_then(|v| match v {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

// ---------------------------------------------------------------------------
// Draft helpers
// ---------------------------------------------------------------------------

/// Trimmed text, `None` when blank.
pub(crate) fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Split a comma separated input into trimmed, non-empty items.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Required slug in the canonical lowercase-hyphen shape.
pub(crate) fn check_slug(errors: &mut FieldErrors, value: &str) {
    if !require_text(errors, "slug", "Slug", value) {
        return;
    }
    if let Err(e) = validate_slug(value.trim()) {
        errors.insert("slug", e.detail());
    }
}

/// Filled rows of a string section, trimmed.
pub(crate) fn filled_strings(rows: &eduadmin_core::nested::Repeatable<String>) -> Vec<String> {
    rows.filled().into_iter().map(|s| s.trim().to_string()).collect()
}
