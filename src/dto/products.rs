use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: i64,
    pub purchase_cost: i64,
}

/// Full-record replacement; the id comes in the body, not the path.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceProductRequest {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub purchase_cost: i64,
}

/// Public view of a product: everything except the purchase cost.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    pub price: i64,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductSummaryList {
    #[schema(value_type = Vec<ProductSummary>)]
    pub items: Vec<ProductSummary>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct MarginReport {
    #[schema(value_type = BTreeMap<String, String>)]
    pub entries: BTreeMap<String, String>,
}

/// Map each product's display form to its margin, rendered as a string.
/// Products with identical display forms overwrite each other; the map
/// keeps unique keys only.
pub fn margin_report(products: Vec<Product>) -> MarginReport {
    let entries = products
        .into_iter()
        .map(|p| (p.to_string(), p.margin().to_string()))
        .collect();
    MarginReport { entries }
}
