//! # Hookbook Protocols
//!
//! Domain types and the remote store protocol for webhook subscriptions.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Items
//!
//! - [`EventTrigger`] - The booking events a subscription can listen for
//! - [`WebhookSubscription`] - A persisted subscription as returned by the store
//! - [`SubscriptionStore`] - Trait for remote subscription stores

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::SubscriptionStore;
pub use types::*;
