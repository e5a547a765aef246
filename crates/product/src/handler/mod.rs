mod product;

use crate::{domain::response::product::DeleteResponse, model::Product, state::AppState};
use anyhow::{Context, Result};
use axum::{Json, Router, ServiceExt, extract::Request, routing::get};
use shared::{errors::ErrorResponse, utils::shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, normalize_path::NormalizePath, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;

pub use self::product::{
    PRODUCT_NOT_FOUND, create_product, delete_product, get_product, list_products,
    product_routes, update_product,
};

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::list_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,
    ),
    components(schemas(Product, DeleteResponse, ErrorResponse)),
    tags(
        (name = "Product", description = "Product endpoints"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub struct AppRouter;

impl AppRouter {
    /// Full application: routes, tracing and body limit, with trailing
    /// slashes trimmed before routing.
    pub fn build(app_state: Arc<AppState>) -> NormalizePath<Router> {
        let router = Router::new()
            .route("/api-docs/openapi.json", get(openapi_handler))
            .merge(product_routes(app_state))
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

        NormalizePath::trim_trailing_slash(router)
    }

    pub async fn serve(addr: &str, app_state: Arc<AppState>) -> Result<()> {
        let app = Self::build(app_state);

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 OpenAPI document at /api-docs/openapi.json");

        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated with an error")?;

        Ok(())
    }
}
