//! Service implementations backed by the real commerce store

pub mod shopify_store;

pub use shopify_store::ShopifyStore;
