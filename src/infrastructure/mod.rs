//! Infrastructure layer: concrete adapters for domain traits.
//!
//! - [`dispatch`] - HTTP webhook client for the automation engine

pub mod dispatch;
