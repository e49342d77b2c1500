//! REST implementation of the subscription store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use hookbook_config::ApiConfig;
use hookbook_protocols::{
    NewSubscription, StoreError, SubscriptionId, SubscriptionStore, SubscriptionUpdate,
    WebhookSubscription,
};

use crate::api::{ErrorBody, ItemResponse, ListResponse};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Subscription store backed by the `/webhooks` REST routes.
pub struct HttpSubscriptionStore {
    base_url: Url,
    api_key: Option<String>,
    timeout_seconds: u64,
    client: reqwest::Client,
}

impl HttpSubscriptionStore {
    pub fn new(base_url: &str) -> Result<Self, StoreError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn with_timeout(base_url: &str, timeout_seconds: u64) -> Result<Self, StoreError> {
        let base_url =
            Url::parse(base_url).map_err(|e| StoreError::InvalidConfig(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::InvalidConfig(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| StoreError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            base_url,
            api_key: None,
            timeout_seconds,
            client,
        })
    }

    /// Build a store from the `[api]` config section.
    pub fn from_config(config: &ApiConfig) -> Result<Self, StoreError> {
        let store = Self::with_timeout(&config.base_url, config.timeout_seconds)?;
        Ok(match config.api_key {
            Some(ref key) => store.with_api_key(key.clone()),
            None => store,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// `{base}/webhooks`, or `{base}/webhooks/{id}` when `id` is given.
    fn endpoint(&self, id: Option<&SubscriptionId>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("webhooks");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.api_key {
            Some(ref key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = self
            .authorize(request)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorBody>(&text) {
                Ok(body) => body.message,
                Err(_) if text.trim().is_empty() => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
                Err(_) => text,
            };
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, StoreError> {
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;
        serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))
    }

    fn transport_error(&self, error: reqwest::Error) -> StoreError {
        if error.is_timeout() {
            StoreError::Timeout(self.timeout_seconds)
        } else {
            StoreError::Network(error.to_string())
        }
    }
}

#[async_trait]
impl SubscriptionStore for HttpSubscriptionStore {
    fn id(&self) -> &str {
        "http"
    }

    async fn list(&self) -> Result<Vec<WebhookSubscription>, StoreError> {
        let url = self.endpoint(None);
        debug!("GET {}", url);
        let response = self.send(self.client.get(url)).await?;
        let body: ListResponse = self.decode(response).await?;
        Ok(body.webhooks)
    }

    async fn create(&self, subscription: NewSubscription) -> Result<WebhookSubscription, StoreError> {
        let url = self.endpoint(None);
        debug!("POST {}", url);
        let response = self.send(self.client.post(url).json(&subscription)).await?;
        let body: ItemResponse = self.decode(response).await?;
        Ok(body.into_inner())
    }

    async fn update(
        &self,
        id: &SubscriptionId,
        update: SubscriptionUpdate,
    ) -> Result<WebhookSubscription, StoreError> {
        let url = self.endpoint(Some(id));
        debug!("PATCH {}", url);
        let response = self.send(self.client.patch(url).json(&update)).await?;
        let body: ItemResponse = self.decode(response).await?;
        Ok(body.into_inner())
    }

    async fn delete(&self, id: &SubscriptionId) -> Result<(), StoreError> {
        let url = self.endpoint(Some(id));
        debug!("DELETE {}", url);
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
