//! HTTP request handlers for API endpoints.

pub mod docs;
pub mod health;
pub mod index;
pub mod submit;

pub use docs::docs_handler;
pub use health::health_handler;
pub use index::index_handler;
pub use submit::submit_handler;
