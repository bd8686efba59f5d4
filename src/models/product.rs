use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Company;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub company: String,
    pub category: String,
    pub price: Decimal,
    pub image_url: String,
    pub rating: i32,
    pub discount: i32,
    pub available: bool,
}

/// Partial product record returned by the upstream catalogs. Only `id` is
/// guaranteed; every other field may be absent and leaves the corresponding
/// seed value untouched when applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub id: i32,
    pub name: Option<String>,
    pub company: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
    pub rating: Option<i32>,
    pub discount: Option<i32>,
    pub available: Option<bool>,
}

impl ProductPatch {
    pub fn apply(&self, product: &mut Product) {
        if let Some(ref name) = self.name {
            product.name = name.clone();
        }
        if let Some(ref company) = self.company {
            product.company = company.clone();
        }
        if let Some(ref category) = self.category {
            product.category = category.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(ref image_url) = self.image_url {
            product.image_url = image_url.clone();
        }
        if let Some(rating) = self.rating {
            product.rating = rating;
        }
        if let Some(discount) = self.discount {
            product.discount = discount;
        }
        if let Some(available) = self.available {
            product.available = available;
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub company: Option<Company>,
    pub top: Option<u32>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub company: Option<Company>,
    pub top: u32,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<Product>,
    pub loading: bool,
}
