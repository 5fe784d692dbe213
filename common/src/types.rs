//! カタログの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Beer: ストアが返すアイテム
//! - BeerPatch: PATCHで送る部分更新

use serde::{Deserialize, Serialize};

/// アイテムID
pub type BeerId = u64;

/// カタログのアイテム
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beer {
    pub id: BeerId,

    pub name: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub description: String,

    /// 表示順 = 編集時の位置。重複あり
    #[serde(default)]
    pub reviews: Vec<String>,
}

/// 部分更新。指定したフィールドだけがJSONに出る
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// レビュー列の全置換
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<String>>,
}

impl BeerPatch {
    /// 説明文のみ置換
    pub fn description(text: impl Into<String>) -> Self {
        Self {
            description: Some(text.into()),
            reviews: None,
        }
    }

    /// レビュー列のみ置換
    pub fn reviews(reviews: Vec<String>) -> Self {
        Self {
            description: None,
            reviews: Some(reviews),
        }
    }
}
