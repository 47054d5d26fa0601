//! Greedy Pig: push-your-luck dice game where players bank or keep rolling.

use crate::engine::plugin::{GameDescriptor, GameEngine};
use crate::games::GameKind;

/// Banked totals and turn bookkeeping are owned by the engine.
pub const PROTECTED_ATTRIBUTES: &[&str] = &[
    "banked_money",
    "unbanked_money",
    "has_banked_this_turn",
    "color",
    "name",
    "feedback",
];

pub static DESCRIPTOR: GameDescriptor = GameDescriptor::of::<GreedyPigGame>(
    GameKind::GreedyPig,
    "Greedy Pig",
    "Roll to grow your unbanked pot, bank before a one wipes it out",
);

#[derive(Debug, Default)]
pub struct GreedyPigGame;

impl GameEngine for GreedyPigGame {
    fn kind(&self) -> GameKind { GameKind::GreedyPig }
    fn display_name(&self) -> &str { DESCRIPTOR.display_name() }
    fn description(&self) -> &str { DESCRIPTOR.description() }
}
