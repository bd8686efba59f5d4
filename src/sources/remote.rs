use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::UpstreamConfig;
use crate::error::Result;
use crate::models::{CatalogFilter, Company, Product, ProductPatch};
use crate::sources::CatalogBackend;

pub struct RemoteCatalog {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteCatalog {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    // an unselected category is sent as an empty path segment, as the
    // frontend always did; the upstream owns the semantics of that query
    fn products_url(&self, company: Company, category: Option<&str>) -> String {
        format!(
            "{}/companies/{}/categories/{}/products",
            self.base_url,
            company,
            category.unwrap_or("")
        )
    }

    fn product_url(&self, id: i32) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

#[async_trait]
impl CatalogBackend for RemoteCatalog {
    async fn top_products(
        &self,
        company: Company,
        filter: &CatalogFilter,
    ) -> Result<Vec<ProductPatch>> {
        let min_price = filter
            .min_price
            .map(|p| p.to_string())
            .unwrap_or_default();
        let max_price = filter
            .max_price
            .map(|p| p.to_string())
            .unwrap_or_default();

        let records = self
            .http
            .get(self.products_url(company, filter.category.as_deref()))
            .query(&[
                ("top", filter.top.to_string()),
                ("minPrice", min_price),
                ("maxPrice", max_price),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<ProductPatch>>()
            .await?;

        Ok(records)
    }

    async fn product(&self, id: i32) -> Result<Option<Product>> {
        let response = self.http.get(self.product_url(id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let product = response.error_for_status()?.json::<Product>().await?;
        Ok(Some(product))
    }
}
