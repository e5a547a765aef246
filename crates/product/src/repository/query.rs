use crate::{abstract_trait::ProductQueryRepositoryTrait, model::Product as ProductModel};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching all products");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let products =
            sqlx::query_as::<_, ProductModel>("SELECT id, name, price FROM products")
                .fetch_all(&mut *conn)
                .await
                .map_err(|e| {
                    error!("❌ Failed to fetch products: {:?}", e);
                    RepositoryError::from(e)
                })?;

        info!("✅ Fetched {} products", products.len());
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<ProductModel, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row: Option<(String, f64)> =
            sqlx::query_as("SELECT name, price FROM products WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await
                .map_err(|e| {
                    error!("❌ Failed to fetch product {}: {:?}", id, e);
                    RepositoryError::from(e)
                })?;

        let (name, price) = row.ok_or(RepositoryError::NotFound)?;

        Ok(ProductModel { id, name, price })
    }
}
