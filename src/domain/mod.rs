//! Domain layer containing the submission model and the dispatch seam.
//!
//! Nothing in here performs I/O. The only contract with the outside world is
//! the [`dispatcher::Dispatcher`] trait, implemented by the infrastructure layer.
//!
//! # Architecture
//!
//! - [`entities`] - Submissions, correlation IDs, dispatch payloads and outcomes
//! - [`dispatcher`] - Trait for handing validated work to the automation engine
//!
//! # Submission Flow
//!
//! 1. HTTP handler deserializes a [`entities::SubmissionDraft`]
//! 2. The draft is validated into an immutable [`entities::Submission`]
//! 3. A fresh [`entities::CorrelationId`] is issued
//! 4. A [`entities::DispatchPayload`] is handed to the [`dispatcher::Dispatcher`]
//! 5. The resulting [`entities::DispatchOutcome`] decides the HTTP response

pub mod dispatcher;
pub mod entities;
