use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub purchase_cost: i64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn margin(&self) -> i64 {
        self.price - self.purchase_cost
    }
}

/// Display form used as the margin-report key. The purchase cost stays
/// internal, so it is not part of the representation.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product{{id={}, name='{}', price={}}}",
            self.id, self.name, self.price
        )
    }
}
