use crate::di::DependenciesInject;
use shared::config::ConnectionPool;
use std::fmt;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub pool: ConnectionPool,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("pool_size", &self.pool.size())
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        let di_container = DependenciesInject::new(pool.clone());

        Self { di_container, pool }
    }

    /// Waits for checked-out connections to return, then closes the pool.
    pub async fn shutdown(&self) {
        self.pool.close().await;
    }
}
