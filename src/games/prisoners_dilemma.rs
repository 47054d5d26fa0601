//! Iterated Prisoner's Dilemma.

use crate::engine::plugin::{GameDescriptor, GameEngine};
use crate::games::GameKind;

pub const PROTECTED_ATTRIBUTES: &[&str] = &["name", "feedback"];

pub static DESCRIPTOR: GameDescriptor = GameDescriptor::of::<PrisonersDilemmaGame>(
    GameKind::PrisonersDilemma,
    "Prisoner's Dilemma",
    "Cooperate or defect over repeated rounds against every opponent",
);

#[derive(Debug, Default)]
pub struct PrisonersDilemmaGame;

impl GameEngine for PrisonersDilemmaGame {
    fn kind(&self) -> GameKind { GameKind::PrisonersDilemma }
    fn display_name(&self) -> &str { DESCRIPTOR.display_name() }
    fn description(&self) -> &str { DESCRIPTOR.description() }
}
