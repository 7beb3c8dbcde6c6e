use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult},
    models::{CreateProductDto, EditProductDto, ProductDto},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<ProductDto>>> {
    let products = db::fetch_all_products(&state.db).await?;

    info!(count = products.len(), "Listed products");

    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ProductDto>> {
    let Some(product) = db::fetch_product_by_id(&state.db, id).await? else {
        return Err(AppError::NotFound("Product not found.".to_string()));
    };

    info!(id, "Fetched product");

    Ok(Json(ProductDto::from(product)))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductDto>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<ProductDto>)> {
    let product = db::insert_product(&state.db, &payload).await?;

    info!(id = product.id, name = %product.name, "Created product");

    let location = format!("/products/{}", product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProductDto::from(product)),
    ))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<EditProductDto>,
) -> AppResult<StatusCode> {
    // Mismatch wins over existence: a bad pair is 400 even when neither
    // id is in the store.
    if id != payload.id {
        return Err(AppError::BadRequest("Product ID mismatch.".to_string()));
    }

    if !db::update_product(&state.db, id, &payload).await? {
        return Err(AppError::NotFound("Product not found.".to_string()));
    }

    info!(id, "Updated product");

    Ok(StatusCode::NO_CONTENT)
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    if !db::delete_product(&state.db, id).await? {
        // Bodiless 404 on this route.
        return Err(AppError::NotFound(String::new()));
    }

    info!(id, "Deleted product");

    Ok(StatusCode::NO_CONTENT)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
