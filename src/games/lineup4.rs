//! Lineup 4: drop tokens into columns, first to connect four wins.
//!
//! Loaded on first resolution.

use crate::engine::lazy::LazyGameModule;
use crate::engine::plugin::{GameDescriptor, GameEngine};
use crate::games::GameKind;

pub const PROTECTED_ATTRIBUTES: &[&str] = &["name", "feedback", "symbol", "all_winning_sets"];

const DISPLAY_NAME: &str = "Lineup 4";
const DESCRIPTION: &str = "Drop tokens into columns and be first to line up four";

pub(crate) static MODULE: LazyGameModule = LazyGameModule::new(load);

fn load() -> GameDescriptor {
    GameDescriptor::of::<Lineup4Game>(GameKind::Lineup4, DISPLAY_NAME, DESCRIPTION)
}

#[derive(Debug, Default)]
pub struct Lineup4Game;

impl GameEngine for Lineup4Game {
    fn kind(&self) -> GameKind { GameKind::Lineup4 }
    fn display_name(&self) -> &str { DISPLAY_NAME }
    fn description(&self) -> &str { DESCRIPTION }
}
