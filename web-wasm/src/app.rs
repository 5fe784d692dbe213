//! メインアプリケーションコンポーネント

use crate::api::FetchStore;
use crate::components::{beer_detail::BeerDetail, beer_list::BeerList, header::Header};
use beer_catalog_common::{CatalogController, DetailView, UserAction, ViewState, DEFAULT_BASE_URL};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// `<body data-store-url="...">`があればそれを使う
pub fn store_url() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute("data-store-url"))
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// 詳細ペインの入力。選択だけが変わった書き込みでは通知しない
fn detail_of(view_state: ReadSignal<ViewState>) -> Memo<Option<DetailView>> {
    Memo::new(move |_| view_state.with(|s| s.detail().cloned()))
}

/// メインアプリケーションコンポーネント
///
/// 表示状態は`ViewState`のシグナル1つ。操作ごとにその時点の状態を
/// コントローラへ渡し、返ってきた状態で置き換える（後着優先）。
#[component]
pub fn App() -> impl IntoView {
    let controller = CatalogController::new(FetchStore::new(store_url()));
    let (view_state, set_view_state) = signal(ViewState::default());

    // 初回ロード
    {
        let controller = controller.clone();
        let state = view_state.get_untracked();
        spawn_local(async move {
            let next = controller.load_list(state).await;
            set_view_state.set(next);
        });
    }

    let on_action = move |action: UserAction| {
        let controller = controller.clone();
        let state = view_state.get_untracked();
        spawn_local(async move {
            let next = controller.dispatch(state, action).await;
            set_view_state.set(next);
        });
    };

    let entries = Signal::derive(move || view_state.with(|s| s.list().to_vec()));
    let selection = Signal::derive(move || view_state.with(|s| s.selection()));
    let detail = detail_of(view_state);

    let on_select = {
        let on_action = on_action.clone();
        move |id| on_action(UserAction::Select(id))
    };

    view! {
        <div class="container">
            <Header />
            <div class="catalog">
                <BeerList entries=entries selection=selection on_select=on_select />
                <BeerDetail detail=detail on_action=on_action />
            </div>
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use crate::testing::{container, find, next_tick};
    use beer_catalog_common::Beer;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlTextAreaElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn beer(id: u64, reviews: &[&str]) -> Beer {
        Beer {
            id,
            name: format!("Beer {}", id),
            reviews: reviews.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    #[wasm_bindgen_test]
    async fn detail_pane_kept_when_only_selection_changes() {
        let root = container();
        let (view_state, set_view_state) =
            signal(ViewState::default().with_detail(beer(1, &["A"])));
        let detail = detail_of(view_state);
        let _handle = leptos::mount::mount_to(root.clone(), move || {
            view! { <BeerDetail detail=detail on_action=|_: UserAction| {} /> }
        });

        let draft: HtmlTextAreaElement = find(&root, "#review").unchecked_into();
        draft.set_value("half typed");

        // 詳細取得に失敗した選択: selectionだけが変わる
        set_view_state.update(|s| *s = s.clone().with_selection(99));
        next_tick().await;

        assert!(draft.is_connected());
        let current: HtmlTextAreaElement = find(&root, "#review").unchecked_into();
        assert_eq!(current.value(), "half typed");

        // 詳細が変われば作り直す
        set_view_state.update(|s| *s = s.clone().with_detail(beer(2, &[])));
        next_tick().await;

        assert!(!draft.is_connected());
        assert_eq!(find(&root, "h2").text_content().as_deref(), Some("Beer 2"));
    }
}
