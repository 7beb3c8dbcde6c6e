use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Persisted product row. `id` comes from the database sequence on insert
/// and is immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// Exact decimal price, NUMERIC(18, 2) in the store. Serialized as a
    /// plain JSON number (9.99, not "9.99") without passing through f64.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

// ── Wire shapes ──────────────────────────────────────────────────────────────
//
// Request/response bodies are kept separate from the row struct; they are
// built per request and discarded after serialization.

/// Response body for every read path.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

/// Create input. No `id` — the server assigns one.
#[derive(Debug, Deserialize)]
pub struct CreateProductDto {
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

/// Update input. `id` must match the path parameter.
#[derive(Debug, Deserialize)]
pub struct EditProductDto {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
        }
    }
}
