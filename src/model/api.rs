use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Query string shared by every paginated listing.
#[derive(Deserialize, Debug, Clone, IntoParams)]
pub struct PageQuery {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page, between 1 and 100.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Case-insensitive substring to filter by.
    pub search: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    10
}
