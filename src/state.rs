//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{HealthService, SubmissionService};
use crate::domain::dispatcher::Dispatcher;

#[derive(Clone)]
pub struct AppState {
    pub submission_service: Arc<SubmissionService>,
    pub health_service: HealthService,
}

impl AppState {
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            submission_service: Arc::new(SubmissionService::new(dispatcher)),
            health_service: HealthService::new(),
        }
    }
}
