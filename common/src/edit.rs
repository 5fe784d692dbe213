//! レビュー列の編集
//!
//! 送信するのは常にレビュー列全体。位置で削除するため、描画後に
//! リモート側で列が変わっていると別のレビューが消える可能性がある。

/// 末尾に1件追加した列
pub fn append_review(current: &[String], review: impl Into<String>) -> Vec<String> {
    let mut reviews = current.to_vec();
    reviews.push(review.into());
    reviews
}

/// `index`番目を除いた列（範囲外なら元のまま）
pub fn remove_review(current: &[String], index: usize) -> Vec<String> {
    current
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, review)| review.clone())
        .collect()
}
