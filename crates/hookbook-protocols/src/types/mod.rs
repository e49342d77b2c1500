//! Webhook subscription domain types.

mod subscription;
mod trigger;

pub use subscription::*;
pub use trigger::*;
