pub mod extract;

pub use self::extract::{INVALID_PAYLOAD, INVALID_PRODUCT_ID, PayloadJson, ProductId};
