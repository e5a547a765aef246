use crate::{abstract_trait::ProductCommandRepositoryTrait, model::Product as ProductModel};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        product: &ProductModel,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("INSERT INTO products (name, price) VALUES (?, ?)")
            .bind(&product.name)
            .bind(product.price)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to create product {}: {:?}", product.name, err);
                RepositoryError::from(err)
            })?;

        // MySQL reports the id with the result; SQLite only on the connection.
        let id = match result.last_insert_id() {
            Some(id) => id,
            None => {
                let (id,): (i64,) = sqlx::query_as("SELECT last_insert_rowid()")
                    .fetch_one(&mut *conn)
                    .await
                    .map_err(|err| {
                        error!(
                            "❌ Failed to read id of created product {}: {:?}",
                            product.name, err
                        );
                        RepositoryError::from(err)
                    })?;
                id
            }
        };

        info!("✅ Created product ID {} ({})", id, product.name);

        Ok(ProductModel {
            id,
            name: product.name.clone(),
            price: product.price,
        })
    }

    async fn update_product(
        &self,
        product: &ProductModel,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(&product.name)
            .bind(product.price)
            .bind(product.id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update product ID {}: {:?}", product.id, err);
                RepositoryError::from(err)
            })?;

        info!("🔄 Updated product ID {}", product.id);
        Ok(product.clone())
    }

    async fn delete_product(&self, id: i64) -> Result<(), RepositoryError> {
        info!("❌ Deleting product: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        info!("✅ Product ID {} deleted", id);
        Ok(())
    }
}
