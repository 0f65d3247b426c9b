//! Core domain entities for article submissions.
//!
//! # Entity Types
//!
//! - [`SubmissionDraft`] - Raw, unvalidated input
//! - [`Submission`] - Validated, immutable request to summarize an article
//! - [`CorrelationId`] - Per-submission identity shared with the automation engine
//! - [`DispatchPayload`] - Body of the outbound webhook call
//! - [`DispatchOutcome`] - Classified result of a single dispatch
//! - [`HealthStatus`] - Liveness snapshot of the process

pub mod correlation;
pub mod dispatch;
pub mod health;
pub mod submission;

pub use correlation::CorrelationId;
pub use dispatch::{DispatchErrorKind, DispatchOutcome, DispatchPayload, DispatchStatus};
pub use health::HealthStatus;
pub use submission::{Submission, SubmissionDraft};
