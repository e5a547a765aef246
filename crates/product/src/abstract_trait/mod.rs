pub mod product;

pub use self::product::{
    DynProductCommandRepository, DynProductQueryRepository, ProductCommandRepositoryTrait,
    ProductQueryRepositoryTrait,
};
