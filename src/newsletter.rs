//! Newsletter sign-up form.
//!
//! ## States
//!
//! - `Idle` - form visible, no message
//! - `Invalid` - form visible with an inline message; submitting again is allowed
//! - `Submitted` - thank-you view, terminal for the form's lifetime
//!
//! A valid submission appends the address to the persisted subscriber list
//! unless it is already there.

use crate::constants::{INVALID_EMAIL_MESSAGE, STORAGE_FAILURE_MESSAGE, SUBSCRIBERS_STORAGE_KEY};
use crate::error::StorageResult;
use crate::storage::{KeyValueStore, save_json};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, error, info};

// Substring match, not anchored: "x y@z.io" passes on its "y@z.io" part.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex should compile"));

/// Loose email check: some non-space text around an `@` and a later `.`.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum NewsletterForm {
    #[default]
    Idle,
    Invalid(String),
    Submitted,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, NewsletterForm::Submitted)
    }

    /// Inline message to show under the form, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            NewsletterForm::Invalid(message) => Some(message),
            _ => None,
        }
    }

    /// Handle a form submission.
    ///
    /// Storage failures never escape: they leave the form in `Invalid` with a
    /// generic message.
    pub fn submit<S: KeyValueStore + ?Sized>(&mut self, email: &str, store: &S) {
        if self.is_submitted() {
            return;
        }

        if !is_valid_email(email) {
            *self = NewsletterForm::Invalid(INVALID_EMAIL_MESSAGE.to_string());
            return;
        }

        match add_subscriber(store, email) {
            Ok(added) => {
                if added {
                    info!("New newsletter subscriber");
                } else {
                    debug!("Subscriber already on the list");
                }
                *self = NewsletterForm::Submitted;
            }
            Err(e) => {
                error!("Failed to save subscriber to storage: {}", e);
                *self = NewsletterForm::Invalid(STORAGE_FAILURE_MESSAGE.to_string());
            }
        }
    }
}

/// Persisted subscriber list, empty when nothing (or an empty string) was stored.
pub fn subscribers<S: KeyValueStore + ?Sized>(store: &S) -> StorageResult<Vec<String>> {
    match store.get(SUBSCRIBERS_STORAGE_KEY)? {
        Some(raw) if raw.is_empty() => Ok(Vec::new()),
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// Append `email` unless present. Returns whether the list changed.
fn add_subscriber<S: KeyValueStore + ?Sized>(store: &S, email: &str) -> StorageResult<bool> {
    let mut list = subscribers(store)?;
    if list.iter().any(|existing| existing == email) {
        return Ok(false);
    }
    list.push(email.to_string());
    save_json(store, SUBSCRIBERS_STORAGE_KEY, &list)?;
    Ok(true)
}
