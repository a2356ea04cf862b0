use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
};

use crate::{
    dto::products::{
        CreateProductRequest, MarginReport, ProductList, ProductSummary, ProductSummaryList,
        ReplaceProductRequest, margin_report,
    },
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(list_products))
        .route("/", axum::routing::post(create_product))
        .route("/", axum::routing::put(replace_product))
        .route("/sorted", axum::routing::get(sorted_products))
        .route("/admin-margin", axum::routing::get(admin_margin))
        .route(
            "/above-price/{threshold}",
            axum::routing::get(products_above_price),
        )
        .route("/{id}", axum::routing::get(get_product))
        .route("/{id}", axum::routing::delete(delete_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List products without their purchase cost", body = ApiResponse<ProductSummaryList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductSummaryList>>> {
    let products = product_service::find_all(&state).await?;
    let total = products.len() as i64;
    let items = products.into_iter().map(ProductSummary::from).collect();

    Ok(Json(ApiResponse::success(
        "Products",
        ProductSummaryList { items },
        Some(Meta::with_total(total)),
    )))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = product_service::find_by_id(&state, id)
        .await?
        .ok_or(AppError::NotFound(id))?;

    Ok(Json(ApiResponse::success("Product", product, None)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Created product, Location header carries the new id", body = ApiResponse<Product>),
        (status = 422, description = "Sale price is zero"),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<ApiResponse<Product>>)> {
    let product = product_service::create(&state, payload).await?;
    let location = format!("/api/products/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(
            "Product created",
            product,
            Some(Meta::empty()),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/products",
    request_body = ReplaceProductRequest,
    responses(
        (status = 204, description = "Product replaced, or inserted when the id was unknown")
    ),
    tag = "Products"
)]
pub async fn replace_product(
    State(state): State<AppState>,
    Json(payload): Json<ReplaceProductRequest>,
) -> AppResult<StatusCode> {
    product_service::replace(&state, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Deleted product; a missing id is a no-op")
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    product_service::delete(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/products/admin-margin",
    responses(
        (status = 200, description = "Margin per product, keyed by its display form", body = ApiResponse<MarginReport>)
    ),
    tag = "Products"
)]
pub async fn admin_margin(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<MarginReport>>> {
    let products = product_service::find_all(&state).await?;
    let report = margin_report(products);

    Ok(Json(ApiResponse::success(
        "Margin report",
        report,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/products/sorted",
    responses(
        (status = 200, description = "Products in ascending name order", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn sorted_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let items = product_service::find_all_ordered_by_name(&state).await?;
    let total = items.len() as i64;

    Ok(Json(ApiResponse::success(
        "Products by name",
        ProductList { items },
        Some(Meta::with_total(total)),
    )))
}

#[utoipa::path(
    get,
    path = "/api/products/above-price/{threshold}",
    params(
        ("threshold" = i64, Path, description = "Minimum sale price, inclusive")
    ),
    responses(
        (status = 200, description = "Products with price at or above the threshold", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn products_above_price(
    State(state): State<AppState>,
    Path(threshold): Path<i64>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let items = product_service::find_above_or_equal_price(&state, threshold).await?;
    let total = items.len() as i64;

    Ok(Json(ApiResponse::success(
        "Products above price",
        ProductList { items },
        Some(Meta::with_total(total)),
    )))
}
