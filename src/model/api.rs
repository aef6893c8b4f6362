use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned with every error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
