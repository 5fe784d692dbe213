//! ターミナル表示

use beer_catalog_common::{DetailView, ViewState};

/// 一覧（選択中の行に▶）
pub fn render_list(state: &ViewState) -> String {
    if state.list().is_empty() {
        return "（アイテムなし）\n".to_string();
    }

    state
        .list()
        .iter()
        .map(|entry| {
            let marker = if entry.id == state.selection() { "▶" } else { " " };
            format!("{} {}: {}\n", marker, entry.id, entry.name)
        })
        .collect()
}

/// 詳細ペイン
pub fn render_detail(detail: &DetailView) -> String {
    let beer = detail.beer();
    let mut out = String::new();

    out.push_str(&format!("🍺 {}\n", beer.name));
    if !beer.image_url.is_empty() {
        out.push_str(&format!("   画像: {}\n", beer.image_url));
    }
    out.push_str(&format!("   説明: {}\n", beer.description));
    out.push_str("\nレビュー:\n");

    if beer.reviews.is_empty() {
        out.push_str("  （まだありません）\n");
    }
    for review in detail.reviews() {
        out.push_str(&format!("  [{}] {}\n", review.index, review.text));
    }
    out
}

/// 一覧 + 詳細
pub fn render_state(state: &ViewState) -> String {
    let mut out = render_list(state);
    out.push('\n');
    match state.detail() {
        Some(detail) => out.push_str(&render_detail(detail)),
        None => out.push_str(&format!("ID {} の詳細を取得できませんでした\n", state.selection())),
    }
    out
}
