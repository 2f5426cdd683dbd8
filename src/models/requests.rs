use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank event suggestions for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankSuggestionsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: u32,
    #[validate(range(min = 1))]
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}
