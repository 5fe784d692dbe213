//! 詳細ペインコンポーネント
//!
//! 詳細が変わるたびに中身ごと作り直す。フォームの入力値も描画した
//! アイテムの値に戻る。

use beer_catalog_common::{DetailView, UserAction};
use leptos::prelude::*;

use super::review_list::{ReviewForm, ReviewList};

#[component]
pub fn BeerDetail<F>(#[prop(into)] detail: Signal<Option<DetailView>>, on_action: F) -> impl IntoView
where
    F: Fn(UserAction) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="beer-details">
            {move || {
                let on_action = on_action.clone();
                detail.get().map(|detail| {
                    let beer = detail.beer().clone();
                    let reviews: Vec<(usize, String)> = detail
                        .reviews()
                        .map(|r| (r.index, r.text.to_string()))
                        .collect();

                    let on_description = {
                        let on_action = on_action.clone();
                        move |text: String| on_action(UserAction::EditDescription(text))
                    };
                    let on_delete = {
                        let on_action = on_action.clone();
                        move |index: usize| on_action(UserAction::DeleteReview(index))
                    };
                    let on_review = move |text: String| on_action(UserAction::AddReview(text));

                    view! {
                        <h2>{beer.name.clone()}</h2>
                        <img src=beer.image_url.clone() alt=beer.name.clone() />
                        <p><em>{beer.description.clone()}</em></p>
                        <DescriptionForm initial=beer.description.clone() on_submit=on_description />
                        <h3>"Customer Reviews"</h3>
                        <ReviewList reviews=reviews on_delete=on_delete />
                        <ReviewForm on_submit=on_review />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn DescriptionForm<F>(initial: String, on_submit: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let (text, set_text) = signal(initial);

    view! {
        <form
            id="description-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit(text.get_untracked());
            }
        >
            <label for="description">"Edited Description:"</label>
            <textarea
                id="description"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            ></textarea>
            <button type="submit">"Update Beer"</button>
        </form>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use crate::testing::{container, find, find_all, Recorder};
    use beer_catalog_common::Beer;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn moretti() -> DetailView {
        DetailView::new(Beer {
            id: 1,
            name: "Birra Moretti".to_string(),
            image_url: "https://example.com/moretti.png".to_string(),
            description: "Lager".to_string(),
            reviews: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        })
    }

    #[wasm_bindgen_test]
    fn renders_rendered_beer() {
        let root = container();
        let detail = moretti();
        let _handle = leptos::mount::mount_to(root.clone(), move || {
            view! { <BeerDetail detail=Signal::derive(move || Some(detail.clone())) on_action=|_: UserAction| {} /> }
        });

        assert_eq!(find(&root, ".beer-details h2").text_content().as_deref(), Some("Birra Moretti"));
        assert_eq!(
            find(&root, ".beer-details img").get_attribute("src").as_deref(),
            Some("https://example.com/moretti.png")
        );
        assert_eq!(find(&root, ".beer-details p em").text_content().as_deref(), Some("Lager"));
        assert_eq!(find_all(&root, "#review-list li").len(), 3);
        find(&root, "#description-form");
        find(&root, "#review-form");
    }

    #[wasm_bindgen_test]
    fn empty_without_detail() {
        let root = container();
        let _handle = leptos::mount::mount_to(root.clone(), move || {
            view! { <BeerDetail detail=Signal::derive(|| None) on_action=|_: UserAction| {} /> }
        });

        assert!(find_all(&root, ".beer-details *").is_empty());
    }

    #[wasm_bindgen_test]
    fn review_click_dispatches_delete_by_position() {
        let root = container();
        let detail = moretti();
        let actions = Recorder::new();
        let on_action = {
            let actions = actions.clone();
            move |action: UserAction| actions.push(action)
        };
        let _handle = leptos::mount::mount_to(root.clone(), move || {
            view! { <BeerDetail detail=Signal::derive(move || Some(detail.clone())) on_action=on_action /> }
        });

        find(&root, "#review-list li[data-index='1']").click();

        assert_eq!(actions.values(), vec![UserAction::DeleteReview(1)]);
    }
}
