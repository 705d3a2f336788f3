//! Submitted job form and its validation rules.

use serde::{Deserialize, Serialize};
use validator::{ValidateEmail, ValidateUrl};

use super::model::Job;
use super::validation::FieldErrors;

/// Form payload for creating or editing a job.
///
/// Missing form fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewJob {
    /// Position title.
    pub position: String,
    /// Hiring organization.
    pub organization: String,
    /// Link to the full posting.
    pub url: String,
    /// Markdown description.
    pub description: String,
    /// Contact email. Only read on creation.
    pub email: String,
}

impl NewJob {
    /// Validate the form.
    ///
    /// `update` skips the email rules, which only apply on creation.
    /// Returns every failing field; an empty result means the form is valid.
    pub fn validate(&self, update: bool) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if is_blank(&self.position) {
            errors.insert("position", "Must provide a Position");
        }

        if is_blank(&self.organization) {
            errors.insert("organization", "Must provide a Organization");
        }

        if is_blank(&self.url) && is_blank(&self.description) {
            errors.insert("url", "Must provide either a Url or a Description");
        } else if is_blank(&self.description) && !self.url.validate_url() {
            errors.insert("url", "Must provide a valid Url");
        }

        if !update {
            if is_blank(&self.email) {
                errors.insert("email", "Must provide an Email Address");
            } else if !self.email.validate_email() {
                errors.insert("email", "Must provide a valid Email");
            }
        }

        errors
    }
}

impl From<&Job> for NewJob {
    fn from(job: &Job) -> Self {
        Self {
            position: job.position.clone(),
            organization: job.organization.clone(),
            url: job.url.clone().unwrap_or_default(),
            description: job.description.clone().unwrap_or_default(),
            email: job.email.clone(),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
