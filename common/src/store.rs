//! リモートストアの抽象
//!
//! CLIは`reqwest`、Web(WASM)はブラウザの`fetch`で実装する。

use crate::error::Result;
use crate::types::{Beer, BeerId, BeerPatch};

/// デフォルトのストアURL
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// ストア操作
///
/// PATCHのレスポンス本文は使わないので`update_beer`は成否のみ返す。
#[allow(async_fn_in_trait)]
pub trait CatalogStore {
    /// `GET /beers`
    async fn list_beers(&self) -> Result<Vec<Beer>>;

    /// `GET /beers/{id}`
    async fn get_beer(&self, id: BeerId) -> Result<Beer>;

    /// `PATCH /beers/{id}`
    async fn update_beer(&self, id: BeerId, patch: &BeerPatch) -> Result<()>;
}

/// 一覧URL
pub fn beers_url(base_url: &str) -> String {
    format!("{}/beers", base_url.trim_end_matches('/'))
}

/// 個別URL
pub fn beer_url(base_url: &str, id: BeerId) -> String {
    format!("{}/{}", beers_url(base_url), id)
}
