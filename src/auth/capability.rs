//! Capability Definitions
//!
//! The admin capability catalog is fixed and compiled in: 8 entries, not
//! user-extensible. Plugins register their own rights elsewhere; they never
//! land in this enum.
//!
//! Raw capability strings only exist at the boundaries (form/JSON payloads,
//! the serialized storage column). Everything in between works on the closed
//! [`Capability`] enum, so an unknown or legacy string can never flow into an
//! access decision.

use serde::{Deserialize, Serialize};

/// A single admin capability from the closed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ManagePosts,
    ManagePages,
    ManageUsers,
    ManagePlugins,
    ManageThemes,
    ManageSettings,
    ViewAnalytics,
    ManageMedia,
}

impl Capability {
    /// The full catalog, in display order.
    pub const ALL: [Capability; 8] = [
        Capability::ManagePosts,
        Capability::ManagePages,
        Capability::ManageUsers,
        Capability::ManagePlugins,
        Capability::ManageThemes,
        Capability::ManageSettings,
        Capability::ViewAnalytics,
        Capability::ManageMedia,
    ];

    /// Stable storage/wire key
    pub fn as_key(&self) -> &'static str {
        match self {
            Capability::ManagePosts => "manage_posts",
            Capability::ManagePages => "manage_pages",
            Capability::ManageUsers => "manage_users",
            Capability::ManagePlugins => "manage_plugins",
            Capability::ManageThemes => "manage_themes",
            Capability::ManageSettings => "manage_settings",
            Capability::ViewAnalytics => "view_analytics",
            Capability::ManageMedia => "manage_media",
        }
    }

    /// Human-readable label for admin UIs
    pub fn label(&self) -> &'static str {
        match self {
            Capability::ManagePosts => "Posts",
            Capability::ManagePages => "Pages",
            Capability::ManageUsers => "Users",
            Capability::ManagePlugins => "Plugins",
            Capability::ManageThemes => "Themes",
            Capability::ManageSettings => "Settings",
            Capability::ViewAnalytics => "Analytics",
            Capability::ManageMedia => "Media",
        }
    }

    /// Parse a raw key; `None` for anything outside the catalog
    pub fn from_key(key: &str) -> Option<Self> {
        Capability::ALL.iter().copied().find(|c| c.as_key() == key)
    }
}

/// Sanitize raw capability keys from a form/JSON payload or the storage
/// column.
///
/// Unknown keys are dropped, not rejected: input commonly comes from a
/// multi-select where stray values are expected. Duplicates collapse,
/// input order is preserved.
pub fn sanitize(raw: &[String]) -> Vec<Capability> {
    let mut caps = Vec::with_capacity(raw.len().min(Capability::ALL.len()));
    for key in raw {
        if let Some(cap) = Capability::from_key(key) {
            if !caps.contains(&cap) {
                caps.push(cap);
            }
        }
    }
    caps
}
