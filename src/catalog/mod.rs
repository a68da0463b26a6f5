//! Catalog Client
//!
//! Read-only access to the tree catalog API. Responses are shape-checked
//! and normalized into `Category` / `Product` records here, so nothing
//! downstream deals with raw JSON or missing fields.

mod client;
mod decode;

use std::fmt;

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::{Category, CategoryId, Product, ProductId, ProductRecord, Selection};

pub use client::HttpTransport;
pub use decode::{decode_list, decode_one};

/// Logical API endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Categories,
    AllProducts,
    ProductsByCategory(CategoryId),
    ProductDetail(ProductId),
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Categories => "/categories".to_string(),
            Endpoint::AllProducts => "/plants".to_string(),
            Endpoint::ProductsByCategory(id) => format!("/category/{}", id),
            Endpoint::ProductDetail(id) => format!("/plant/{}", id),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Categories => write!(f, "categories"),
            Endpoint::AllProducts => write!(f, "all plants"),
            Endpoint::ProductsByCategory(id) => write!(f, "category {}", id),
            Endpoint::ProductDetail(id) => write!(f, "plant {}", id),
        }
    }
}

/// Raw GET returning the body of a 2xx response
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, endpoint: Endpoint) -> CatalogResult<String>;
}

pub struct Catalog<T> {
    transport: T,
}

impl Catalog<HttpTransport> {
    pub fn http(base_url: &str) -> Self {
        Self::new(HttpTransport::new(base_url))
    }
}

impl<T: Transport> Catalog<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn fetch_categories(&self) -> CatalogResult<Vec<Category>> {
        let body = self.transport.get(Endpoint::Categories).await?;
        decode_list(&body)
    }

    pub async fn fetch_all_products(&self) -> CatalogResult<Vec<Product>> {
        let body = self.transport.get(Endpoint::AllProducts).await?;
        Ok(normalize(decode_list(&body)?))
    }

    /// JSON of the wrong shape degrades to an empty list; unparsable bodies
    /// and network failures still propagate
    pub async fn fetch_products_by_category(&self, id: CategoryId) -> CatalogResult<Vec<Product>> {
        let body = self.transport.get(Endpoint::ProductsByCategory(id)).await?;
        match decode_list(&body) {
            Ok(records) => Ok(normalize(records)),
            Err(e) if e.is_malformed() => {
                log::warn!("category {}: {}; showing no results", id, e);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    pub async fn fetch_product_detail(&self, id: ProductId) -> CatalogResult<Product> {
        let body = self.transport.get(Endpoint::ProductDetail(id)).await?;
        decode_one::<ProductRecord>(&body).map(Product::from)
    }

    /// Listing for the grid
    pub async fn fetch_products(&self, selection: Selection) -> CatalogResult<Vec<Product>> {
        match selection {
            Selection::All => self.fetch_all_products().await,
            Selection::Category(id) => self.fetch_products_by_category(id).await,
        }
    }
}

fn normalize(records: Vec<ProductRecord>) -> Vec<Product> {
    records.into_iter().map(Product::from).collect()
}
