//! GameEngine trait and the descriptor handle the registry hands out.

use std::fmt;

use crate::games::GameKind;

/// Trait that every game engine implements.
///
/// Rules, turn resolution and scoring live behind this trait in the engine
/// implementations; the registry only needs identity and metadata.
pub trait GameEngine: Send + Sync + fmt::Debug {
    fn kind(&self) -> GameKind;
    fn display_name(&self) -> &str;
    fn description(&self) -> &str;

    fn game_id(&self) -> &'static str {
        self.kind().as_str()
    }
}

/// Constructor stored in a descriptor.
pub type EngineFactory = fn() -> Box<dyn GameEngine>;

/// A reference to a concrete engine type. Not an engine instance: call
/// [`GameDescriptor::instantiate`] to build one.
#[derive(Clone)]
pub struct GameDescriptor {
    kind: GameKind,
    display_name: &'static str,
    description: &'static str,
    type_name: fn() -> &'static str,
    factory: EngineFactory,
}

fn construct<E: GameEngine + Default + 'static>() -> Box<dyn GameEngine> {
    Box::new(E::default())
}

impl GameDescriptor {
    /// Describe engine type `E` for the given game.
    pub const fn of<E: GameEngine + Default + 'static>(
        kind: GameKind,
        display_name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            kind,
            display_name,
            description,
            type_name: std::any::type_name::<E>,
            factory: construct::<E>,
        }
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Fully qualified Rust type name of the engine.
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Short type name, e.g. `GreedyPigGame`.
    pub fn short_type_name(&self) -> &'static str {
        let full = self.type_name();
        full.rsplit("::").next().unwrap_or(full)
    }

    pub fn instantiate(&self) -> Box<dyn GameEngine> {
        (self.factory)()
    }

    /// JSON summary used by the CLI.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "game_id": self.kind.as_str(),
            "display_name": self.display_name,
            "description": self.description,
            "engine": self.short_type_name(),
            "lazy": self.kind.is_lazy(),
        })
    }
}

impl fmt::Debug for GameDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameDescriptor")
            .field("kind", &self.kind)
            .field("display_name", &self.display_name)
            .field("type_name", &self.type_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::greedy_pig::GreedyPigGame;

    #[test]
    fn test_descriptor_instantiates_engine() {
        let desc = GameDescriptor::of::<GreedyPigGame>(GameKind::GreedyPig, "Greedy Pig", "dice");
        assert_eq!(desc.short_type_name(), "GreedyPigGame");
        assert!(desc.type_name().ends_with("greedy_pig::GreedyPigGame"));

        let engine = desc.instantiate();
        assert_eq!(engine.kind(), GameKind::GreedyPig);
        assert_eq!(engine.game_id(), "greedy_pig");
    }

    #[test]
    fn test_summary_fields() {
        let desc = GameDescriptor::of::<GreedyPigGame>(GameKind::GreedyPig, "Greedy Pig", "dice");
        let summary = desc.summary();
        assert_eq!(summary["game_id"], "greedy_pig");
        assert_eq!(summary["engine"], "GreedyPigGame");
        assert_eq!(summary["lazy"], false);
    }
}
