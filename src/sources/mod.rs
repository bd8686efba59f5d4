mod remote;

pub use remote::RemoteCatalog;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CatalogFilter, Company, Product, ProductPatch};

/// One upstream catalog service, queried per company. The production
/// implementation talks HTTP; tests substitute their own.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Top products of one company for the given filter. Records are partial;
    /// missing fields keep their seed values during aggregation.
    async fn top_products(
        &self,
        company: Company,
        filter: &CatalogFilter,
    ) -> Result<Vec<ProductPatch>>;

    /// Single-product lookup. `Ok(None)` means the upstream has no such record.
    async fn product(&self, id: i32) -> Result<Option<Product>>;
}
