//! Service trait definitions for dependency injection

use async_trait::async_trait;

use shared::{Metafield, NewMetafield, StoreFailure};

/// Remote metafield store scoped to order-owned records
#[mockall::automock]
#[async_trait]
pub trait MetafieldStore: Send + Sync {
    /// Fetch the full metafield collection attached to an order
    async fn fetch_order_metafields(&self, order_id: &str)
        -> Result<Vec<Metafield>, StoreFailure>;

    /// Create a new metafield on an order
    async fn create_order_metafield(&self, metafield: NewMetafield) -> Result<(), StoreFailure>;
}
