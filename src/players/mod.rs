//! Players and roles.

pub mod player;
pub mod role;

pub use player::Player;
pub use role::{Role, RoleAbilities};
