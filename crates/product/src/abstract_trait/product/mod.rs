pub mod repository;

pub use self::repository::{
    DynProductCommandRepository, DynProductQueryRepository, ProductCommandRepositoryTrait,
    ProductQueryRepositoryTrait,
};
