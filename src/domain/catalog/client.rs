//! Catalog sub-client — product list and detail, with a TTL cache for details.

use crate::client::StorefrontClient;
use crate::domain::catalog::wire::ItemResponse;
use crate::domain::catalog::{self, Item};
use crate::error::SdkError;
use crate::http::Endpoint;
use crate::shared::ItemId;
use std::time::Instant;

/// Sub-client for catalog reads. Public endpoints: no credential needed.
pub struct Catalog<'a> {
    pub(crate) client: &'a StorefrontClient,
}

impl<'a> Catalog<'a> {
    /// List all products. Entries that fail validation are skipped.
    pub async fn list(&self) -> Result<Vec<Item>, SdkError> {
        let resp: Vec<ItemResponse> = self.client.http.get(&Endpoint::Products).await?;
        let mut items = Vec::with_capacity(resp.len());
        for entry in resp {
            match Item::try_from(entry) {
                Ok(item) => items.push(item),
                Err(e) => tracing::warn!("Skipping invalid catalog item: {}", e),
            }
        }
        Ok(items)
    }

    /// Get a product with its variations. Uses TTL cache.
    pub async fn get(&self, id: &ItemId) -> Result<Item, SdkError> {
        {
            let cache = self.client.item_cache.read().await;
            if let Some((item, fetched_at)) = cache.get(id) {
                if fetched_at.elapsed() < self.client.item_cache_ttl {
                    return Ok(item.clone());
                }
            }
        }

        let resp: ItemResponse = self
            .client
            .http
            .get(&Endpoint::Product { id: id.clone() })
            .await?;
        let item: Item = resp
            .try_into()
            .map_err(|e: catalog::ValidationError| SdkError::Validation(e.to_string()))?;

        self.client
            .item_cache
            .write()
            .await
            .insert(item.id.clone(), (item.clone(), Instant::now()));
        Ok(item)
    }

    /// Invalidate a cached item.
    pub async fn invalidate(&self, id: &ItemId) {
        self.client.item_cache.write().await.remove(id);
    }

    pub async fn clear_cache(&self) {
        self.client.item_cache.write().await.clear();
    }
}
