//! Submission entities: raw draft and validated request.

use url::Url;
use validator::Validate;

use crate::error::AppError;
use crate::utils::article_url::{parse_article_url, validate_article_url};

/// Unvalidated submission exactly as received from a client.
///
/// Surrounding whitespace is stripped on construction; nothing else is
/// touched until [`SubmissionDraft::into_submission`] runs the field rules.
#[derive(Debug, Clone, Validate)]
pub struct SubmissionDraft {
    /// Article to summarize. Must be an absolute HTTP or HTTPS URL with a host.
    #[validate(custom(function = "validate_article_url"))]
    pub url: String,

    /// Mailbox that receives the summary.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

impl SubmissionDraft {
    pub fn new(url: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            url: url.into().trim().to_string(),
            email: email.into().trim().to_string(),
        }
    }

    /// Validates both fields and produces an immutable [`Submission`].
    ///
    /// Pure: performs no I/O and never inspects the downstream engine.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming every offending field.
    pub fn into_submission(self) -> Result<Submission, AppError> {
        self.validate()?;

        let url = parse_article_url(&self.url)
            .map_err(|e| AppError::invalid_field("url", e.to_string()))?;

        Ok(Submission {
            url,
            email: self.email,
        })
    }
}

/// A validated request to summarize an article and mail the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    url: Url,
    email: String,
}

impl Submission {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
