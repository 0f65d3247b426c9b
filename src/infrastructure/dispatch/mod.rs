//! Outbound dispatch to the automation engine.

mod error;
mod http_dispatcher;

pub use error::DispatchError;
pub use http_dispatcher::{DispatchConfig, HttpDispatcher};
