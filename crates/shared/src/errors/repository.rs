use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,
}
