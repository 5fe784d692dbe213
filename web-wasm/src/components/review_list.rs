//! レビュー一覧・追加フォーム

use leptos::prelude::*;

/// クリックでそのレビューを削除（描画時の位置で指定）
#[component]
pub fn ReviewList<F>(reviews: Vec<(usize, String)>, on_delete: F) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    view! {
        <ul id="review-list">
            {reviews
                .into_iter()
                .map(|(index, text)| {
                    let on_delete = on_delete.clone();
                    view! {
                        <li data-index=index.to_string() on:click=move |_| on_delete(index)>
                            {text}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn ReviewForm<F>(on_submit: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let (text, set_text) = signal(String::new());

    view! {
        <form
            id="review-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit(text.get_untracked());
            }
        >
            <label for="review">"Your Review:"</label>
            <textarea
                id="review"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            ></textarea>
            <button type="submit">"Add review"</button>
        </form>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use crate::testing::{container, find, find_all, Recorder};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn reviews() -> Vec<(usize, String)> {
        ["A", "B", "A"]
            .iter()
            .enumerate()
            .map(|(index, text)| (index, text.to_string()))
            .collect()
    }

    #[wasm_bindgen_test]
    fn items_carry_position() {
        let root = container();
        let _handle = leptos::mount::mount_to(root.clone(), move || {
            view! { <ReviewList reviews=reviews() on_delete=|_: usize| {} /> }
        });

        let indexes: Vec<_> = find_all(&root, "#review-list li")
            .iter()
            .map(|li| li.get_attribute("data-index").unwrap_or_default())
            .collect();
        assert_eq!(indexes, vec!["0", "1", "2"]);
    }

    #[wasm_bindgen_test]
    fn click_deletes_clicked_position() {
        let root = container();
        let deleted = Recorder::new();
        let on_delete = {
            let deleted = deleted.clone();
            move |index: usize| deleted.push(index)
        };
        let _handle = leptos::mount::mount_to(root.clone(), move || {
            view! { <ReviewList reviews=reviews() on_delete=on_delete /> }
        });

        // 重複した文言でも位置で区別する
        find(&root, "#review-list li[data-index='2']").click();

        assert_eq!(deleted.values(), vec![2]);
    }
}
