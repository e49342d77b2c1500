//! Webhook subscription records and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::EventTrigger;

/// Opaque subscription identifier assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for SubscriptionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SubscriptionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A persisted webhook subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSubscription {
    pub id: SubscriptionId,

    /// Callback endpoint.
    pub subscriber_url: String,

    /// Triggers this build does not know are dropped when decoding.
    #[serde(default, deserialize_with = "known_triggers")]
    pub event_triggers: Vec<EventTrigger>,

    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

fn known_triggers<'de, D>(deserializer: D) -> Result<Vec<EventTrigger>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw.iter().filter_map(|t| t.parse().ok()).collect())
}

impl WebhookSubscription {
    pub fn new(
        id: impl Into<SubscriptionId>,
        subscriber_url: impl Into<String>,
        event_triggers: Vec<EventTrigger>,
    ) -> Self {
        Self {
            id: id.into(),
            subscriber_url: subscriber_url.into(),
            event_triggers,
            active: true,
            created_at: None,
        }
    }

    /// Whether the subscription listens for `trigger`.
    pub fn listens_to(&self, trigger: EventTrigger) -> bool {
        self.event_triggers.contains(&trigger)
    }

    /// Apply the set fields of `update` in place.
    pub fn apply(&mut self, update: &SubscriptionUpdate) {
        if let Some(ref url) = update.subscriber_url {
            self.subscriber_url = url.clone();
        }
        if let Some(ref triggers) = update.event_triggers {
            self.event_triggers = triggers.clone();
        }
        if let Some(active) = update.active {
            self.active = active;
        }
    }
}

/// Body of a create request. Has no id until the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    pub subscriber_url: String,
    pub event_triggers: Vec<EventTrigger>,
}

impl NewSubscription {
    pub fn new(subscriber_url: impl Into<String>, event_triggers: Vec<EventTrigger>) -> Self {
        Self {
            subscriber_url: subscriber_url.into(),
            event_triggers,
        }
    }
}

/// Partial replacement of a subscription's fields. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriber_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_triggers: Option<Vec<EventTrigger>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl SubscriptionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subscriber_url(mut self, url: impl Into<String>) -> Self {
        self.subscriber_url = Some(url.into());
        self
    }

    pub fn with_event_triggers(mut self, triggers: Vec<EventTrigger>) -> Self {
        self.event_triggers = Some(triggers);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.subscriber_url.is_none() && self.event_triggers.is_none() && self.active.is_none()
    }
}

/// Display projection of a subscription: triggers in lowercase form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionView {
    pub id: SubscriptionId,
    pub subscriber_url: String,
    pub event_triggers: Vec<String>,
    pub active: bool,
}

impl From<&WebhookSubscription> for SubscriptionView {
    fn from(sub: &WebhookSubscription) -> Self {
        Self {
            id: sub.id.clone(),
            subscriber_url: sub.subscriber_url.clone(),
            event_triggers: sub
                .event_triggers
                .iter()
                .map(|t| t.display_name().to_string())
                .collect(),
            active: sub.active,
        }
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
