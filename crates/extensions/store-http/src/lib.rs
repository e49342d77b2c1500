//! REST webhook store for Hookbook.

mod api;
mod store;

pub use store::HttpSubscriptionStore;
