use crate::{
    abstract_trait::{DynProductCommandRepository, DynProductQueryRepository},
    domain::response::product::DeleteResponse,
    middleware::{PayloadJson, ProductId},
    model::Product,
    state::AppState,
};
use axum::{
    Extension, Router,
    http::StatusCode,
    response::Response,
    routing::{get, post},
};
use shared::{
    errors::{ErrorResponse, HttpError, RepositoryError},
    utils::send_response,
};
use std::sync::Arc;

pub const PRODUCT_NOT_FOUND: &str = "product not found";

#[utoipa::path(
    get,
    path = "/products",
    tag = "Product",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_products(
    Extension(query): Extension<DynProductQueryRepository>,
) -> Result<Response, HttpError> {
    let products = query.find_all().await?;
    Ok(send_response(StatusCode::OK, &products))
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(query): Extension<DynProductQueryRepository>,
    ProductId(id): ProductId,
) -> Result<Response, HttpError> {
    let product = query.find_by_id(id).await.map_err(|err| match err {
        RepositoryError::NotFound => HttpError::NotFound(PRODUCT_NOT_FOUND.into()),
        other => HttpError::from(other),
    })?;

    Ok(send_response(StatusCode::OK, &product))
}

#[utoipa::path(
    post,
    path = "/product",
    tag = "Product",
    request_body = Product,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Malformed payload", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(command): Extension<DynProductCommandRepository>,
    PayloadJson(body): PayloadJson<Product>,
) -> Result<Response, HttpError> {
    let product = command.create_product(&body).await?;
    Ok(send_response(StatusCode::CREATED, &product))
}

#[utoipa::path(
    put,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = Product,
    responses(
        (status = 200, description = "Product updated (also when no row had this id)", body = Product),
        (status = 400, description = "Malformed id or payload", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(command): Extension<DynProductCommandRepository>,
    ProductId(id): ProductId,
    PayloadJson(mut body): PayloadJson<Product>,
) -> Result<Response, HttpError> {
    body.id = id;
    let product = command.update_product(&body).await?;
    Ok(send_response(StatusCode::OK, &product))
}

#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted (also when no row had this id)", body = DeleteResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(command): Extension<DynProductCommandRepository>,
    ProductId(id): ProductId,
) -> Result<Response, HttpError> {
    command.delete_product(id).await?;
    Ok(send_response(StatusCode::OK, &DeleteResponse::deleted()))
}

pub fn product_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/product", post(create_product))
        .route(
            "/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(Extension(app_state.di_container.product_repository.query.clone()))
        .layer(Extension(app_state.di_container.product_repository.command.clone()))
}
