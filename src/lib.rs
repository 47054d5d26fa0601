pub mod config;
pub mod engine;
pub mod games;

pub use engine::error::{UnknownGameError, UpdateError};
pub use engine::plugin::{GameDescriptor, GameEngine};
pub use games::{list_game_ids, resolve_game_type, resolve_protected_attributes, GameKind};
