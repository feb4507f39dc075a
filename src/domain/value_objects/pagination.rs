use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: usize,
    pub limit: usize,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

/// Slices an already filtered collection into the requested page.
pub fn paginate<T>(items: Vec<T>, params: Option<PaginationParams>) -> PaginatedResponse<T> {
    let params = params.unwrap_or_default();
    let page = params.page.max(DEFAULT_PAGE);
    let limit = params.limit.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(limit);

    let data = items
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();

    PaginatedResponse {
        data,
        total,
        page,
        limit,
        total_pages,
    }
}
