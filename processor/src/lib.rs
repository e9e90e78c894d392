//! License metafield processor service
//!
//! Waits for the commerce platform to populate an order's licenses
//! metafield, renders it as an HTML table, and writes the result back to
//! the same order as a derived metafield.

pub mod config;
pub mod core;
pub mod error;
pub mod processor_impl;
pub mod services;
pub mod traits;
pub mod web;

// Re-export main types
pub use config::{RetryPolicy, StoreConfig};
pub use error::{ParseErrorKind, ProcessorError, ProcessorResult};
pub use processor_impl::LicenseProcessor;
pub use services::ShopifyStore;
pub use traits::{MetafieldStore, MockMetafieldStore};
