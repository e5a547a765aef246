use crate::repository::ProductRepository;
use shared::config::ConnectionPool;
use std::fmt;

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_repository: ProductRepository,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_repository", &"ProductRepository")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            product_repository: ProductRepository::new(pool),
        }
    }
}
