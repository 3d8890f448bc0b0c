//! Data model types shared between the repository and API layers

pub mod group;
pub mod role;
pub mod user;

pub use group::{Group, GroupCreate, GroupSummary, GroupUpdate};
pub use role::{Role, RoleCreate, RoleUpdate};
pub use user::{GroupMember, UserRef};
