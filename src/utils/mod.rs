//! Utility module - shared helpers and types
//!
//! - [`AppError`] - API-level error type
//! - [`AppResponse`] - API response envelope
//! - slug derivation and time helpers

pub mod error;
pub mod slug;
pub mod time;

pub use error::{AppError, AppResponse, AppResult, ok};
pub use slug::slugify;
pub use time::now_millis;
