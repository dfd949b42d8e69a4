use serde::Deserialize;

use crate::server::model::game::GetPaginatedGamesParam;

/// Largest page a client may request; bigger sizes are clamped down.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Query parameters for the game list endpoint.
///
/// Values arrive unvalidated; `into_param` clamps them into a usable range instead of
/// rejecting the request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePageParam {
    #[serde(default = "default_page_number")]
    pub page_number: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page_number() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

impl GamePageParam {
    /// Clamps the page number to at least 1 and the page size into `1..=MAX_PAGE_SIZE`.
    pub fn into_param(self) -> GetPaginatedGamesParam {
        GetPaginatedGamesParam {
            page_number: self.page_number.max(1) as u64,
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE) as u64,
        }
    }
}
