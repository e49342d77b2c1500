//! Subscription store protocol.
//!
//! A store is the remote source of truth for a user's subscriptions. The
//! local registry never caches beyond what the last `list` returned.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{NewSubscription, SubscriptionId, SubscriptionUpdate, WebhookSubscription};

/// Core trait for remote subscription stores.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// Returns the store ID.
    fn id(&self) -> &str;

    /// List all subscriptions of the current user, in store order.
    async fn list(&self) -> Result<Vec<WebhookSubscription>, StoreError>;

    /// Persist a new subscription and return it with its assigned id.
    async fn create(&self, subscription: NewSubscription) -> Result<WebhookSubscription, StoreError>;

    /// Replace the set fields of a subscription.
    async fn update(
        &self,
        id: &SubscriptionId,
        update: SubscriptionUpdate,
    ) -> Result<WebhookSubscription, StoreError>;

    /// Delete a subscription.
    async fn delete(&self, id: &SubscriptionId) -> Result<(), StoreError>;
}
