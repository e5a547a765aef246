use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a successful delete, `{"result": "deleted"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "deleted")]
    pub result: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            result: "deleted".into(),
        }
    }
}
