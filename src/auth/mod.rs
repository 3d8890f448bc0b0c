//! Capability catalog and access resolution

pub mod capability;
pub mod resolver;

pub use capability::{Capability, sanitize};
