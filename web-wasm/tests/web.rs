//! ブラウザ上のテスト（wasm-pack test --headless）

#![cfg(target_arch = "wasm32")]

use beer_catalog_wasm::store_url;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn store_url_defaults_without_attribute() {
    assert_eq!(store_url(), "http://localhost:3000");
}

#[wasm_bindgen_test]
fn store_url_from_body_attribute() {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .expect("body がない");
    body.set_attribute("data-store-url", "http://beers.test:8080")
        .expect("属性設定失敗");

    assert_eq!(store_url(), "http://beers.test:8080");

    body.remove_attribute("data-store-url").expect("属性削除失敗");
}
