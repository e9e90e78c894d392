//! Shared types for the license metafield processor
//!
//! Contains the commerce platform's wire types, the store failure taxonomy,
//! and tracing setup. Component-internal types (workflow outcomes, the
//! service's own error taxonomy) are kept in the service crate.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::StoreFailure;
pub use types::{
    LicenseEntry, Metafield, MetafieldPage, NewMetafield, LICENSE_HTML_KEY, LICENSE_KEY,
    LICENSE_NAMESPACE, MULTI_LINE_TEXT,
};
