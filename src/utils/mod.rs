//! Utility functions for URL handling and log-safe formatting.
//!
//! - [`article_url`] - Article URL parsing and validation
//! - [`mask`] - Credential masking for logged URLs

pub mod article_url;
pub mod mask;
