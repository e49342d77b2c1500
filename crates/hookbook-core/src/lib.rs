//! # Hookbook Core
//!
//! Local state management for a user's webhook subscriptions.
//!
//! ## Components
//!
//! - [`WebhookRegistry`] - Mediates every read and write against a [`SubscriptionStore`]
//! - [`TriggerSelection`] - The three trigger flags and their derived trigger list
//! - [`DiagnosticSink`] - Where swallowed store failures are reported
//! - [`embed`] - Iframe and standalone HTML snippets for the public booking page
//!
//! [`SubscriptionStore`]: hookbook_protocols::SubscriptionStore

pub mod diagnostics;
pub mod embed;
pub mod error;
pub mod registry;
pub mod selection;

pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, Operation, TracingSink};
pub use embed::EmbedSnippets;
pub use error::RegistryError;
pub use registry::{Mode, RefreshOutcome, WebhookRegistry};
pub use selection::{derive_triggers, TriggerSelection};
