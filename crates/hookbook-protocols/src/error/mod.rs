//! Error types for the Hookbook protocol layer.

mod store;

pub use store::*;
