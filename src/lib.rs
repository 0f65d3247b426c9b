//! # Article Intake
//!
//! Validating, correlating front door for an article summary workflow.
//!
//! The service accepts `{ url, email }`, checks both fields, issues a
//! correlation ID and forwards the work to an external automation engine
//! (an n8n webhook) that scrapes, summarizes, stores and mails the result.
//! It never does any of that work itself.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Submission model and the dispatcher trait
//! - **Application Layer** ([`application`]) - Intake pipeline and health reporting
//! - **Infrastructure Layer** ([`infrastructure`]) - Webhook HTTP client
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export N8N_WEBHOOK_URL="https://n8n.example.com/webhook/summarize"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{HealthService, SubmissionService};
    pub use crate::domain::dispatcher::Dispatcher;
    pub use crate::domain::entities::{
        CorrelationId, DispatchErrorKind, DispatchOutcome, DispatchPayload, Submission,
        SubmissionDraft,
    };
    pub use crate::error::AppError;
    pub use crate::infrastructure::dispatch::{DispatchConfig, HttpDispatcher};
    pub use crate::state::AppState;
}
