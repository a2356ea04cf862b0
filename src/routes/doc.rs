use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::products::{
        CreateProductRequest, MarginReport, ProductList, ProductSummary, ProductSummaryList,
        ReplaceProductRequest,
    },
    models::Product,
    response::{ApiResponse, Meta},
    routes::{health, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::create_product,
        products::replace_product,
        products::delete_product,
        products::admin_margin,
        products::sorted_products,
        products::products_above_price,
    ),
    components(
        schemas(
            Product,
            ProductSummary,
            ProductSummaryList,
            ProductList,
            MarginReport,
            CreateProductRequest,
            ReplaceProductRequest,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductSummaryList>,
            ApiResponse<ProductList>,
            ApiResponse<MarginReport>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product catalog CRUD and reporting endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
