//! 表示状態
//!
//! 選択中のID・一覧・詳細をまとめた不変の値。
//! コントローラの各操作は`ViewState`を受け取り、次の`ViewState`を返す。

use crate::types::{Beer, BeerId};

/// 起動時に表示するアイテム
pub const INITIAL_BEER_ID: BeerId = 1;

/// 一覧の1行
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListEntry {
    pub id: BeerId,
    pub name: String,
}

impl From<&Beer> for ListEntry {
    fn from(beer: &Beer) -> Self {
        Self {
            id: beer.id,
            name: beer.name.clone(),
        }
    }
}

/// 詳細ペインのレビュー1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry<'a> {
    /// 描画時点での位置（削除時の識別子）
    pub index: usize,
    pub text: &'a str,
}

/// 詳細ペイン
///
/// 取得したアイテムをそのまま保持する。レビューの追加・削除は
/// 描画時点のレビュー列から組み立てる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    beer: Beer,
}

impl DetailView {
    pub fn new(beer: Beer) -> Self {
        Self { beer }
    }

    pub fn beer(&self) -> &Beer {
        &self.beer
    }

    pub fn id(&self) -> BeerId {
        self.beer.id
    }

    pub fn reviews(&self) -> impl Iterator<Item = ReviewEntry<'_>> {
        self.beer
            .reviews
            .iter()
            .enumerate()
            .map(|(index, text)| ReviewEntry { index, text })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    selection: BeerId,
    list: Vec<ListEntry>,
    detail: Option<DetailView>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(INITIAL_BEER_ID)
    }
}

impl ViewState {
    /// 何も描画していない状態
    pub fn new(selection: BeerId) -> Self {
        Self {
            selection,
            list: Vec::new(),
            detail: None,
        }
    }

    pub fn selection(&self) -> BeerId {
        self.selection
    }

    pub fn list(&self) -> &[ListEntry] {
        &self.list
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub fn with_selection(self, selection: BeerId) -> Self {
        Self { selection, ..self }
    }

    /// 一覧をクリアして作り直す
    pub fn with_list(self, beers: &[Beer]) -> Self {
        Self {
            list: beers.iter().map(ListEntry::from).collect(),
            ..self
        }
    }

    /// 詳細を上書き（後着のレスポンスが勝つ）
    pub fn with_detail(self, beer: Beer) -> Self {
        Self {
            detail: Some(DetailView::new(beer)),
            ..self
        }
    }
}
