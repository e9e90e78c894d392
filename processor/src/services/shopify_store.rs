//! Commerce store client for order metafields
//!
//! Wraps the store's Admin REST API: one GET for an order's metafield page,
//! one POST to create the derived metafield.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::traits::MetafieldStore;
use shared::{Metafield, MetafieldPage, NewMetafield, StoreFailure};

/// Real metafield store talking to the platform's Admin API
pub struct ShopifyStore {
    client: Client,
    config: StoreConfig,
}

impl ShopifyStore {
    /// Create a new store client from connection settings
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn order_metafields_url(&self, order_id: &str) -> String {
        format!(
            "{}/admin/api/{}/orders/{}/metafields.json",
            self.config.base_url, self.config.api_version, order_id
        )
    }

    fn metafields_url(&self) -> String {
        format!(
            "{}/admin/api/{}/metafields.json",
            self.config.base_url, self.config.api_version
        )
    }
}

#[async_trait]
impl MetafieldStore for ShopifyStore {
    async fn fetch_order_metafields(
        &self,
        order_id: &str,
    ) -> Result<Vec<Metafield>, StoreFailure> {
        let response = self
            .client
            .get(self.order_metafields_url(order_id))
            .header("X-Shopify-Access-Token", &self.config.access_token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| StoreFailure::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!(
                "metafield fetch for order {} returned HTTP {}",
                order_id, status
            );
            return Err(StoreFailure::Http { status });
        }

        let page: MetafieldPage = response.json().await.map_err(|e| {
            StoreFailure::InvalidResponse(format!("failed to decode metafield page: {e}"))
        })?;

        debug!(
            "fetched {} metafields for order {}",
            page.metafields.len(),
            order_id
        );
        Ok(page.metafields)
    }

    async fn create_order_metafield(&self, metafield: NewMetafield) -> Result<(), StoreFailure> {
        let response = self
            .client
            .post(self.metafields_url())
            .header("X-Shopify-Access-Token", &self.config.access_token)
            .header("Content-Type", "application/json")
            .json(&json!({ "metafield": &metafield }))
            .send()
            .await
            .map_err(|e| StoreFailure::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!(
                "metafield create on order {} returned HTTP {}",
                metafield.owner_id, status
            );
            return Err(StoreFailure::Http { status });
        }

        debug!(
            "created {} metafield on order {}",
            metafield.key, metafield.owner_id
        );
        Ok(())
    }
}
