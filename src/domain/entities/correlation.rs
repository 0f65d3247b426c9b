//! Correlation identifier issued to every accepted submission.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Opaque identifier tying a client request to the asynchronous work
/// performed later by the automation engine.
///
/// Backed by a random (v4) UUID: 122 bits of entropy drawn from the OS
/// generator, so issuing needs no shared counter and no locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// Issues a fresh identifier.
    pub fn issue() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
