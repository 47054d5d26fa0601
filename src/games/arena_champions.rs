//! Arena Champions: champions built from stat allocations fight head to head.
//!
//! Loaded on first resolution.

use crate::engine::lazy::LazyGameModule;
use crate::engine::plugin::{GameDescriptor, GameEngine};
use crate::games::GameKind;

// TODO: attack proportion can still be changed partway through a game; the
// engine has to lock it once a fight starts.
pub const PROTECTED_ATTRIBUTES: &[&str] = &[
    "name",
    "feedback",
    "wins",
    "losses",
    "max_health",
    "defense",
    "strength",
    "dexterity",
    "attack",
];

const DISPLAY_NAME: &str = "Arena Champions";
const DESCRIPTION: &str = "Allocate champion stats and battle every other champion in the arena";

pub(crate) static MODULE: LazyGameModule = LazyGameModule::new(load);

fn load() -> GameDescriptor {
    GameDescriptor::of::<ArenaChampionsGame>(GameKind::ArenaChampions, DISPLAY_NAME, DESCRIPTION)
}

#[derive(Debug, Default)]
pub struct ArenaChampionsGame;

impl GameEngine for ArenaChampionsGame {
    fn kind(&self) -> GameKind { GameKind::ArenaChampions }
    fn display_name(&self) -> &str { DISPLAY_NAME }
    fn description(&self) -> &str { DESCRIPTION }
}
