//! Webhook registry.
//!
//! The registry owns the local view of a user's subscriptions and mediates
//! every read and write against the remote store. The store is the source of
//! truth: each mutation is followed by a full [`WebhookRegistry::refresh`],
//! so the local list never needs reconciling.
//!
//! Two modes exist. In [`Mode::Browse`] the list and the create flow are
//! available; in [`Mode::Editing`] only the editor for a single subscription
//! is. [`WebhookRegistry::edit`] is the only way in, and
//! [`WebhookRegistry::commit_edit`] / [`WebhookRegistry::cancel_edit`] the
//! only ways out.

use std::sync::Arc;

use tracing::{debug, info};

use hookbook_protocols::{
    EventTrigger, NewSubscription, StoreError, SubscriptionId, SubscriptionStore,
    SubscriptionUpdate, SubscriptionView, WebhookSubscription,
};

use crate::diagnostics::{Diagnostic, DiagnosticSink, Operation, TracingSink};
use crate::error::RegistryError;
use crate::selection::TriggerSelection;

/// Which projection of the registry is available.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// List and create flow.
    Browse,
    /// Editor for exactly one subscription.
    Editing(WebhookSubscription),
}

/// Result of a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The list was replaced; holds the new length.
    Updated(usize),
    /// The store call failed and the previous list was kept.
    Stale,
}

/// Local state for a user's webhook subscriptions.
pub struct WebhookRegistry {
    store: Arc<dyn SubscriptionStore>,
    sink: Arc<dyn DiagnosticSink>,
    subscriptions: Vec<WebhookSubscription>,
    views: Vec<SubscriptionView>,
    selection: TriggerSelection,
    mode: Mode,
    loading: bool,
}

impl WebhookRegistry {
    /// Create a registry that reports failures through `tracing`.
    pub fn new(store: Arc<dyn SubscriptionStore>) -> Self {
        Self::with_sink(store, Arc::new(TracingSink))
    }

    pub fn with_sink(store: Arc<dyn SubscriptionStore>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            store,
            sink,
            subscriptions: Vec::new(),
            views: Vec::new(),
            selection: TriggerSelection::default(),
            mode: Mode::Browse,
            loading: false,
        }
    }

    /// Subscriptions as of the last successful refresh, in store order.
    pub fn subscriptions(&self) -> &[WebhookSubscription] {
        &self.subscriptions
    }

    /// Display projection of [`Self::subscriptions`].
    pub fn views(&self) -> &[SubscriptionView] {
        &self.views
    }

    pub fn find(&self, id: &SubscriptionId) -> Option<&WebhookSubscription> {
        self.subscriptions.iter().find(|s| &s.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_browsing(&self) -> bool {
        matches!(self.mode, Mode::Browse)
    }

    pub fn edit_target(&self) -> Option<&WebhookSubscription> {
        match &self.mode {
            Mode::Editing(target) => Some(target),
            Mode::Browse => None,
        }
    }

    pub fn selection(&self) -> TriggerSelection {
        self.selection
    }

    pub fn selection_mut(&mut self) -> &mut TriggerSelection {
        &mut self.selection
    }

    pub fn set_selection(&mut self, selection: TriggerSelection) {
        self.selection = selection;
    }

    /// Triggers the next `create` would submit.
    pub fn pending_triggers(&self) -> Vec<EventTrigger> {
        self.selection.triggers()
    }

    /// Open the create flow with a fresh selection.
    pub fn begin_create(&mut self) {
        self.selection.reset();
    }

    /// Close the create flow without submitting.
    pub fn discard_create(&mut self) {
        self.selection.reset();
    }

    /// Payload the next `create` would submit for `subscriber_url`.
    pub fn pending_subscription(&self, subscriber_url: impl Into<String>) -> NewSubscription {
        NewSubscription::new(subscriber_url, self.selection.triggers())
    }

    /// Fetch the full list from the store and replace the local one.
    ///
    /// Failures are reported to the diagnostic sink and leave the previous
    /// list in place. The loading flag is cleared either way.
    pub async fn refresh(&mut self) -> RefreshOutcome {
        let result = {
            let _loading = LoadingGuard::start(&mut self.loading);
            self.store.list().await
        };

        match result {
            Ok(subscriptions) => {
                self.views = subscriptions.iter().map(SubscriptionView::from).collect();
                self.subscriptions = subscriptions;
                debug!("Refreshed {} webhook subscriptions", self.subscriptions.len());
                RefreshOutcome::Updated(self.subscriptions.len())
            }
            Err(e) => {
                self.report(Operation::Refresh, &e);
                RefreshOutcome::Stale
            }
        }
    }

    /// Submit a new subscription for `subscriber_url` with the pending
    /// trigger selection, then refresh.
    ///
    /// The refresh runs whether or not the store accepted the request. The
    /// selection is reset only when it did.
    pub async fn create(
        &mut self,
        subscriber_url: impl Into<String>,
    ) -> Result<WebhookSubscription, RegistryError> {
        if !self.is_browsing() {
            return Err(RegistryError::Editing);
        }

        let payload = self.pending_subscription(subscriber_url);
        validate_url(&payload.subscriber_url)?;
        validate_triggers(&payload.event_triggers)?;

        info!(
            "Creating webhook for {} ({} triggers)",
            payload.subscriber_url,
            payload.event_triggers.len()
        );

        let result = {
            let _loading = LoadingGuard::start(&mut self.loading);
            self.store.create(payload).await
        };

        match result {
            Ok(created) => {
                self.selection.reset();
                self.refresh().await;
                Ok(created)
            }
            Err(e) => {
                self.report(Operation::Create, &e);
                self.refresh().await;
                Err(e.into())
            }
        }
    }

    /// Enter edit mode for `subscription`.
    pub fn edit(&mut self, subscription: WebhookSubscription) -> Result<(), RegistryError> {
        if !self.is_browsing() {
            return Err(RegistryError::Editing);
        }

        debug!("Editing webhook {}", subscription.id);
        self.mode = Mode::Editing(subscription);
        Ok(())
    }

    /// Apply `update` to the edit target, leave edit mode and refresh.
    ///
    /// An invalid update is rejected before any store call and keeps the
    /// registry in edit mode. Once the store has answered, edit mode is left
    /// regardless of the outcome.
    pub async fn commit_edit(
        &mut self,
        update: SubscriptionUpdate,
    ) -> Result<WebhookSubscription, RegistryError> {
        let target_id = match &self.mode {
            Mode::Editing(target) => target.id.clone(),
            Mode::Browse => return Err(RegistryError::NotEditing),
        };

        if let Some(ref url) = update.subscriber_url {
            validate_url(url)?;
        }
        if let Some(ref triggers) = update.event_triggers {
            validate_triggers(triggers)?;
        }

        info!("Updating webhook {}", target_id);

        let result = {
            let _loading = LoadingGuard::start(&mut self.loading);
            self.store.update(&target_id, update).await
        };
        self.mode = Mode::Browse;

        if let Err(ref e) = result {
            self.report(Operation::Update, e);
        }
        self.refresh().await;

        result.map_err(RegistryError::from)
    }

    /// Leave edit mode without touching the store.
    ///
    /// Returns the subscription that was being edited, if any.
    pub fn cancel_edit(&mut self) -> Option<WebhookSubscription> {
        match std::mem::replace(&mut self.mode, Mode::Browse) {
            Mode::Editing(target) => {
                debug!("Cancelled edit of webhook {}", target.id);
                Some(target)
            }
            Mode::Browse => None,
        }
    }

    /// Delete a subscription, then refresh.
    pub async fn delete(&mut self, id: &SubscriptionId) -> Result<(), RegistryError> {
        if !self.is_browsing() {
            return Err(RegistryError::Editing);
        }

        info!("Deleting webhook {}", id);

        let result = {
            let _loading = LoadingGuard::start(&mut self.loading);
            self.store.delete(id).await
        };

        if let Err(ref e) = result {
            self.report(Operation::Delete, e);
        }
        self.refresh().await;

        result.map_err(RegistryError::from)
    }

    fn report(&self, operation: Operation, error: &StoreError) {
        self.sink
            .record(Diagnostic::from_store_error(operation, error));
    }
}

/// Holds the loading flag for the duration of one store call.
///
/// Clearing happens on drop, so a caller that abandons the future (for
/// example through `tokio::time::timeout`) does not leave the flag set.
struct LoadingGuard<'a>(&'a mut bool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

fn validate_url(url: &str) -> Result<(), RegistryError> {
    if url.trim().is_empty() {
        return Err(RegistryError::Validation(
            "subscriber URL cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_triggers(triggers: &[EventTrigger]) -> Result<(), RegistryError> {
    if triggers.is_empty() {
        return Err(RegistryError::Validation(
            "at least one event trigger is required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
