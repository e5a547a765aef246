use crate::model::Product as ProductModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

/// Update and delete do not check rows affected: an unknown id succeeds.
#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, product: &ProductModel)
    -> Result<ProductModel, RepositoryError>;
    async fn update_product(&self, product: &ProductModel)
    -> Result<ProductModel, RepositoryError>;
    async fn delete_product(&self, id: i64) -> Result<(), RepositoryError>;
}
