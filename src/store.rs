//! reqwestによるストアクライアント

use crate::error::{CatalogError, Result};
use beer_catalog_common::{
    beer_url, beers_url, Beer, BeerId, BeerPatch, CatalogStore, Cause, Error, Operation,
};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 送信してステータスを確認
    async fn send(
        &self,
        operation: Operation,
        request: reqwest::RequestBuilder,
    ) -> beer_catalog_common::Result<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::request_failed(operation, Cause::Network(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::request_failed(operation, Cause::Status(status.as_u16())));
        }
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        url: String,
    ) -> beer_catalog_common::Result<T> {
        let response = self.send(operation, self.client.get(url)).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| Error::request_failed(operation, Cause::Decode(e.to_string())))
    }
}

impl CatalogStore for HttpStore {
    async fn list_beers(&self) -> beer_catalog_common::Result<Vec<Beer>> {
        self.fetch_json(Operation::ListBeers, beers_url(&self.base_url))
            .await
    }

    async fn get_beer(&self, id: BeerId) -> beer_catalog_common::Result<Beer> {
        self.fetch_json(Operation::GetBeer(id), beer_url(&self.base_url, id))
            .await
    }

    async fn update_beer(&self, id: BeerId, patch: &BeerPatch) -> beer_catalog_common::Result<()> {
        // 更新後のアイテムが返るが使わない
        let request = self.client.patch(beer_url(&self.base_url, id)).json(patch);
        self.send(Operation::UpdateBeer(id), request).await?;
        Ok(())
    }
}
