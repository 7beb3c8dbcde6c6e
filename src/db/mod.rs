use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::{CreateProductDto, EditProductDto, Product};

// ── Products ──────────────────────────────────────────────────────────────────

pub async fn fetch_all_products(pool: &PgPool) -> AppResult<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT id, name, price FROM products ORDER BY id")
            .fetch_all(pool)
            .await?;

    Ok(products)
}

/// Point lookup by primary key. Absence is `None`, never an error.
pub async fn fetch_product_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Product>> {
    let product =
        sqlx::query_as::<_, Product>("SELECT id, name, price FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(product)
}

/// Inserts a new row; the generated key is visible on the returned product.
pub async fn insert_product(pool: &PgPool, payload: &CreateProductDto) -> AppResult<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id, name, price",
    )
    .bind(&payload.name)
    .bind(payload.price)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Overwrites both mutable columns. Returns whether a row matched `id`.
pub async fn update_product(pool: &PgPool, id: i32, payload: &EditProductDto) -> AppResult<bool> {
    let result = sqlx::query("UPDATE products SET name = $1, price = $2 WHERE id = $3")
        .bind(&payload.name)
        .bind(payload.price)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Returns whether a row matched `id`.
pub async fn delete_product(pool: &PgPool, id: i32) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
