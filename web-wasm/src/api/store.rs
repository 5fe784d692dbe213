//! ブラウザのfetchによるストアクライアント

use beer_catalog_common::{
    beer_url, beers_url, Beer, BeerId, BeerPatch, CatalogStore, Cause, Error, Operation, Result,
};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Clone)]
pub struct FetchStore {
    base_url: String,
}

impl FetchStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// リクエスト送信（共通処理）
    ///
    /// ネットワークエラーと非2xxはどちらもリクエスト失敗
    async fn send(
        &self,
        operation: Operation,
        url: &str,
        method: &str,
        json_body: Option<String>,
    ) -> Result<Response> {
        let network = |e: JsValue| Error::request_failed(operation, Cause::Network(format!("{:?}", e)));

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &json_body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(network)?;
        if json_body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(network)?;
        }

        let window = web_sys::window()
            .ok_or_else(|| Error::request_failed(operation, Cause::Network("window がありません".into())))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network)?;
        let resp: Response = resp_value.dyn_into().map_err(network)?;

        if !resp.ok() {
            return Err(Error::request_failed(operation, Cause::Status(resp.status())));
        }
        Ok(resp)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, operation: Operation, url: &str) -> Result<T> {
        let decode = |e: String| Error::request_failed(operation, Cause::Decode(e));

        let resp = self.send(operation, url, "GET", None).await?;
        let promise = resp.json().map_err(|e| decode(format!("{:?}", e)))?;
        let json = JsFuture::from(promise)
            .await
            .map_err(|e| decode(format!("{:?}", e)))?;
        serde_wasm_bindgen::from_value(json).map_err(|e| decode(e.to_string()))
    }
}

impl CatalogStore for FetchStore {
    async fn list_beers(&self) -> Result<Vec<Beer>> {
        self.fetch_json(Operation::ListBeers, &beers_url(&self.base_url))
            .await
    }

    async fn get_beer(&self, id: BeerId) -> Result<Beer> {
        self.fetch_json(Operation::GetBeer(id), &beer_url(&self.base_url, id))
            .await
    }

    async fn update_beer(&self, id: BeerId, patch: &BeerPatch) -> Result<()> {
        let operation = Operation::UpdateBeer(id);
        let body = serde_json::to_string(patch)
            .map_err(|e| Error::request_failed(operation, Cause::Decode(e.to_string())))?;
        self.send(operation, &beer_url(&self.base_url, id), "PATCH", Some(body))
            .await?;
        Ok(())
    }
}
