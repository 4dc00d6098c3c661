//! URL slug derivation for titled content (courses, blogs, videos).
//!
//! Forms derive the slug from the title on every title edit; the slug field
//! stays editable afterwards and is validated on submit.

use crate::error::CoreError;

/// Generate a URL-safe slug from a title.
///
/// Lower-cases, drops every character that is not ASCII alphanumeric, a
/// hyphen or whitespace, turns whitespace runs into hyphens, collapses
/// consecutive hyphens, and trims leading/trailing hyphens.
///
/// ```
/// use eduadmin_core::slug::generate_slug;
///
/// assert_eq!(generate_slug("Intro to AI & ML!!"), "intro-to-ai-ml");
/// ```
pub fn generate_slug(title: &str) -> String {
    let mapped: String = title
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                Some(c)
            } else if c.is_whitespace() {
                Some('-')
            } else {
                None
            }
        })
        .collect();

    // Collapse consecutive hyphens.
    let mut result = String::with_capacity(mapped.len());
    let mut prev_hyphen = false;
    for c in mapped.chars() {
        if c == '-' {
            if !prev_hyphen {
                result.push('-');
            }
            prev_hyphen = true;
        } else {
            result.push(c);
            prev_hyphen = false;
        }
    }

    result.trim_matches('-').to_string()
}

/// Validate a slug (non-empty, only lowercase alphanumeric + hyphens).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(())
}
