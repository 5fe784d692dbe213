//! ブラウザテスト用ヘルパー

use std::sync::{Arc, Mutex};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// body直下に空のdivを追加して返す（テストごとのマウント先）
pub fn container() -> HtmlElement {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document がない");
    let div = document.create_element("div").expect("div 作成失敗");
    document
        .body()
        .expect("body がない")
        .append_child(&div)
        .expect("div 追加失敗");
    div.unchecked_into()
}

pub fn find(root: &HtmlElement, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .expect("セレクタ不正")
        .unwrap_or_else(|| panic!("{} がない", selector))
        .unchecked_into()
}

pub fn find_all(root: &HtmlElement, selector: &str) -> Vec<Element> {
    let nodes = root.query_selector_all(selector).expect("セレクタ不正");
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.unchecked_into())
        .collect()
}

/// マイクロタスクで走るエフェクトが流れ切るまで待つ
pub async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .expect("window がない")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .expect("setTimeout 失敗");
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .expect("待機失敗");
}

/// ハンドラに渡された値を記録する
pub struct Recorder<T>(Arc<Mutex<Vec<T>>>);

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: Clone> Recorder<T> {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }

    pub fn push(&self, value: T) {
        self.0.lock().unwrap().push(value);
    }

    pub fn values(&self) -> Vec<T> {
        self.0.lock().unwrap().clone()
    }
}
