//! Error types shared by the registry and the state-update validator.

use std::fmt;

use crate::games::GameKind;

/// Raised when a game identifier is not one of the known games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGameError {
    pub game_name: String,
}

impl UnknownGameError {
    pub fn new(game_name: impl Into<String>) -> Self {
        Self {
            game_name: game_name.into(),
        }
    }
}

impl fmt::Display for UnknownGameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown game: {}", self.game_name)
    }
}

impl std::error::Error for UnknownGameError {}

/// Failure to validate a player-supplied state update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    UnknownGame(UnknownGameError),
    /// The update was not a JSON object.
    NotAnObject,
    /// The update tried to set attributes that are protected for this game.
    ProtectedAttributes {
        game: GameKind,
        attributes: Vec<String>,
    },
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateError::UnknownGame(e) => write!(f, "{}", e),
            UpdateError::NotAnObject => write!(f, "state update must be a JSON object"),
            UpdateError::ProtectedAttributes { game, attributes } => write!(
                f,
                "cannot modify protected attributes for {}: {}",
                game,
                attributes.join(", ")
            ),
        }
    }
}

impl std::error::Error for UpdateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpdateError::UnknownGame(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnknownGameError> for UpdateError {
    fn from(e: UnknownGameError) -> Self {
        UpdateError::UnknownGame(e)
    }
}
