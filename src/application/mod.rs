//! Application layer services implementing the intake pipeline.
//!
//! # Available Services
//!
//! - [`services::submission_service::SubmissionService`] - Validation, correlation and dispatch
//! - [`services::health_service::HealthService`] - Process liveness

pub mod services;
