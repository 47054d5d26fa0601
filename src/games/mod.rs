pub mod arena_champions;
pub mod greedy_pig;
pub mod lineup4;
pub mod prisoners_dilemma;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::error::UnknownGameError;
use crate::engine::plugin::GameDescriptor;

/// The closed set of games the platform can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameKind {
    #[serde(rename = "greedy_pig")]
    GreedyPig,
    #[serde(rename = "prisoners_dilemma")]
    PrisonersDilemma,
    #[serde(rename = "lineup4")]
    Lineup4,
    #[serde(rename = "arena_champions")]
    ArenaChampions,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::GreedyPig,
        GameKind::PrisonersDilemma,
        GameKind::Lineup4,
        GameKind::ArenaChampions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::GreedyPig => "greedy_pig",
            GameKind::PrisonersDilemma => "prisoners_dilemma",
            GameKind::Lineup4 => "lineup4",
            GameKind::ArenaChampions => "arena_champions",
        }
    }

    /// The engine type for this game. Loads the game module on first use for
    /// lazily loaded games.
    pub fn descriptor(&self) -> &'static GameDescriptor {
        match self {
            GameKind::GreedyPig => &greedy_pig::DESCRIPTOR,
            GameKind::PrisonersDilemma => &prisoners_dilemma::DESCRIPTOR,
            GameKind::Lineup4 => lineup4::MODULE.get(),
            GameKind::ArenaChampions => arena_champions::MODULE.get(),
        }
    }

    /// Attributes players may not set directly on their state.
    pub fn protected_attributes(&self) -> &'static [&'static str] {
        match self {
            GameKind::GreedyPig => greedy_pig::PROTECTED_ATTRIBUTES,
            GameKind::PrisonersDilemma => prisoners_dilemma::PROTECTED_ATTRIBUTES,
            GameKind::Lineup4 => lineup4::PROTECTED_ATTRIBUTES,
            GameKind::ArenaChampions => arena_champions::PROTECTED_ATTRIBUTES,
        }
    }

    pub fn is_protected(&self, attribute: &str) -> bool {
        self.protected_attributes().iter().any(|a| *a == attribute)
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, GameKind::Lineup4 | GameKind::ArenaChampions)
    }

    /// Whether the game module has been loaded. Eager games are always loaded.
    pub fn is_loaded(&self) -> bool {
        match self {
            GameKind::Lineup4 => lineup4::MODULE.is_loaded(),
            GameKind::ArenaChampions => arena_champions::MODULE.is_loaded(),
            _ => true,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameKind {
    type Err = UnknownGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownGameError::new(s))
    }
}

/// Resolve a game identifier to its engine type.
pub fn resolve_game_type(game_name: &str) -> Result<&'static GameDescriptor, UnknownGameError> {
    let kind: GameKind = game_name.parse()?;
    Ok(kind.descriptor())
}

/// Resolve a game identifier to the attributes players may not mutate.
pub fn resolve_protected_attributes(
    game_name: &str,
) -> Result<&'static [&'static str], UnknownGameError> {
    let kind: GameKind = game_name.parse()?;
    Ok(kind.protected_attributes())
}

pub fn list_game_ids() -> Vec<&'static str> {
    GameKind::ALL.iter().map(GameKind::as_str).collect()
}
