//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Field rules
//! live on [`crate::domain::entities::SubmissionDraft`].

pub mod health;
pub mod service_info;
pub mod submit;
