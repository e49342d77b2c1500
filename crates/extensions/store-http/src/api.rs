//! Webhook REST API wire types.

use serde::Deserialize;

use hookbook_protocols::WebhookSubscription;

/// `GET /webhooks` response.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub webhooks: Vec<WebhookSubscription>,
}

/// Single-record response; some deployments wrap it, some don't.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemResponse {
    Wrapped { webhook: WebhookSubscription },
    Bare(WebhookSubscription),
}

impl ItemResponse {
    pub fn into_inner(self) -> WebhookSubscription {
        match self {
            Self::Wrapped { webhook } => webhook,
            Self::Bare(webhook) => webhook,
        }
    }
}

/// Body of a non-2xx response.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
