//! cms-access - Admin access-control core
//!
//! Decides which administrative capabilities a role grants, which core roles
//! are protected from deletion, and which users belong to which groups.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/     # Configuration, application state
//! ├── auth/     # Capability catalog, access resolver
//! ├── db/       # SQLite pool, models, repositories
//! ├── api/      # HTTP routes and handlers
//! └── utils/    # Errors, slug and time helpers
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use auth::Capability;
pub use core::{AppState, Config};
pub use db::repository::{RepoError, RepoResult};
pub use utils::{AppError, AppResult};
