//! Error types for vaultkit
//!
//! Uses `eyre` for ergonomic error handling with context.

pub use eyre::{eyre, Context, Report, Result};
