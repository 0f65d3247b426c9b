//! Business logic services for the application layer.

pub mod health_service;
pub mod submission_service;

pub use health_service::HealthService;
pub use submission_service::SubmissionService;
