//! Client-side field validation.
//!
//! Three classes of check exist and nothing else is validated before a
//! submit: required text, numeric range, and URL well-formedness. Failures
//! are collected into a [`FieldErrors`] map keyed by field name so a form
//! can annotate each offending input and leave the other drafts untouched.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateUrl;

// ---------------------------------------------------------------------------
// Field error map
// ---------------------------------------------------------------------------

/// Per-field validation messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message for a field wins.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Drop the message for `field`, returning whether one existed.
    pub fn clear(&mut self, field: &str) -> bool {
        self.errors.remove(field).is_some()
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `other` into `self`, keeping existing messages.
    pub fn extend(&mut self, other: FieldErrors) {
        for (field, message) in other.errors {
            self.insert(field, message);
        }
    }

    /// `Ok(())` when no field failed, otherwise the map itself.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Parse a numeric text input. Blank input is `None`.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Require `value` to contain something other than whitespace.
pub fn require_text(errors: &mut FieldErrors, field: &str, label: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.insert(field, format!("{label} is required"));
        return false;
    }
    true
}

/// Numeric bounds for [`check_number`]. Both ends are inclusive.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberRule {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumberRule {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn optional() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Check a numeric text input against `rule`, returning the parsed value
/// when it passes.
pub fn check_number(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: &str,
    rule: NumberRule,
) -> Option<f64> {
    if value.trim().is_empty() {
        if rule.required {
            errors.insert(field, format!("{label} is required"));
        }
        return None;
    }

    let Some(number) = parse_number(value) else {
        errors.insert(field, format!("{label} must be a number"));
        return None;
    };

    match (rule.min, rule.max) {
        (Some(min), Some(max)) if number < min || number > max => {
            errors.insert(field, format!("{label} must be between {min} and {max}"));
            None
        }
        (Some(min), None) if number < min => {
            errors.insert(field, format!("{label} must be at least {min}"));
            None
        }
        (None, Some(max)) if number > max => {
            errors.insert(field, format!("{label} must be at most {max}"));
            None
        }
        _ => Some(number),
    }
}

/// Whether `value` parses as an absolute URL.
pub fn is_valid_url(value: &str) -> bool {
    value.trim().to_string().validate_url()
}

/// Check a URL input. Blank input only fails when `required`.
pub fn check_url(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: &str,
    required: bool,
) -> bool {
    if value.trim().is_empty() {
        if required {
            errors.insert(field, format!("{label} is required"));
            return false;
        }
        return true;
    }
    if !is_valid_url(value) {
        errors.insert(field, format!("{label} must be a valid URL"));
        return false;
    }
    true
}

// ---------------------------------------------------------------------------
// Identifier shape
// ---------------------------------------------------------------------------

static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("valid regex")
});

/// Whether `value` has the canonical hyphenated UUID shape.
pub fn is_uuid_shaped(value: &str) -> bool {
    UUID_RE.is_match(value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("title", "Title is required");
        errors.insert("title", "something else");
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn clear_removes_only_that_field() {
        let mut errors = FieldErrors::new();
        errors.insert("title", "Title is required");
        errors.insert("price", "Price must be a number");
        assert!(errors.clear("title"));
        assert!(!errors.clear("title"));
        assert!(errors.contains("price"));
    }

    #[test]
    fn require_text_rejects_whitespace() {
        let mut errors = FieldErrors::new();
        assert!(!require_text(&mut errors, "question", "Question", "   "));
        assert_eq!(errors.get("question"), Some("Question is required"));
        assert!(require_text(&mut errors, "answer", "Answer", "Yes"));
        assert!(!errors.contains("answer"));
    }

    #[test]
    fn rating_range_is_inclusive() {
        let rule = NumberRule::required().min(0.0).max(5.0);
        let mut errors = FieldErrors::new();
        assert_eq!(check_number(&mut errors, "rating", "Rating", "5", rule), Some(5.0));
        assert_eq!(check_number(&mut errors, "rating", "Rating", "0", rule), Some(0.0));
        assert!(errors.is_empty());
        assert_eq!(check_number(&mut errors, "rating", "Rating", "5.5", rule), None);
        assert_eq!(errors.get("rating"), Some("Rating must be between 0 and 5"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut errors = FieldErrors::new();
        let rule = NumberRule::optional().min(0.0);
        assert_eq!(check_number(&mut errors, "price", "Price", "-1", rule), None);
        assert_eq!(errors.get("price"), Some("Price must be at least 0"));
    }

    #[test]
    fn optional_blank_number_passes() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            check_number(&mut errors, "price", "Price", "  ", NumberRule::optional()),
            None
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        let mut errors = FieldErrors::new();
        check_number(&mut errors, "hours", "Hours", "ten", NumberRule::required());
        assert_eq!(errors.get("hours"), Some("Hours must be a number"));
    }

    #[test]
    fn url_checks() {
        assert!(is_valid_url("https://example.com/video.mp4"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("not a url"));

        let mut errors = FieldErrors::new();
        assert!(check_url(&mut errors, "website", "Website", "", false));
        assert!(!check_url(&mut errors, "videoUrl", "Video URL", "", true));
        assert!(!check_url(&mut errors, "website", "Website", "nope", false));
        assert_eq!(errors.get("website"), Some("Website must be a valid URL"));
    }

    #[test]
    fn uuid_shape() {
        assert!(is_uuid_shaped("3f2504e0-4f89-41d3-9a0c-0305e82c3301"));
        assert!(is_uuid_shaped("3F2504E0-4F89-41D3-9A0C-0305E82C3301"));
        assert!(!is_uuid_shaped("3f2504e04f8941d39a0c0305e82c3301"));
        assert!(!is_uuid_shaped("trainer-42"));
        assert!(!is_uuid_shaped(""));
    }

    #[test]
    fn generated_ids_are_uuid_shaped() {
        let id = uuid::Uuid::new_v4().to_string();
        assert!(is_uuid_shaped(&id));
    }

    #[test]
    fn display_joins_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("b", "second");
        errors.insert("a", "first");
        assert_eq!(errors.to_string(), "a: first; b: second");
    }
}
