//! Validation of player-supplied state updates against a game's protected
//! attributes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::engine::error::UpdateError;
use crate::games::GameKind;

/// What to do with protected attributes found in an update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Drop protected attributes and keep the rest.
    #[default]
    Strip,
    /// Refuse the whole update.
    Reject,
}

/// Result of stripping an update.
#[derive(Debug, Clone, PartialEq)]
pub struct StrippedUpdate {
    pub allowed: Map<String, Value>,
    /// Protected attribute names removed, sorted.
    pub removed: Vec<String>,
}

fn as_object(update: &Value) -> Result<&Map<String, Value>, UpdateError> {
    update.as_object().ok_or(UpdateError::NotAnObject)
}

pub fn strip_protected(kind: GameKind, update: &Value) -> Result<StrippedUpdate, UpdateError> {
    let fields = as_object(update)?;
    let mut allowed = Map::new();
    let mut removed = Vec::new();
    for (key, value) in fields {
        if kind.is_protected(key) {
            removed.push(key.clone());
        } else {
            allowed.insert(key.clone(), value.clone());
        }
    }
    removed.sort();
    Ok(StrippedUpdate { allowed, removed })
}

pub fn reject_protected(kind: GameKind, update: &Value) -> Result<Map<String, Value>, UpdateError> {
    let stripped = strip_protected(kind, update)?;
    if !stripped.removed.is_empty() {
        return Err(UpdateError::ProtectedAttributes {
            game: kind,
            attributes: stripped.removed,
        });
    }
    Ok(stripped.allowed)
}

pub fn sanitize_update(
    kind: GameKind,
    update: &Value,
    policy: UpdatePolicy,
) -> Result<Map<String, Value>, UpdateError> {
    match policy {
        UpdatePolicy::Strip => {
            let stripped = strip_protected(kind, update)?;
            if !stripped.removed.is_empty() {
                tracing::debug!(game = %kind, removed = ?stripped.removed, "stripped protected attributes");
            }
            Ok(stripped.allowed)
        }
        UpdatePolicy::Reject => reject_protected(kind, update),
    }
}

/// Same as [`sanitize_update`] for a raw game identifier.
pub fn sanitize_update_for(
    game_name: &str,
    update: &Value,
    policy: UpdatePolicy,
) -> Result<Map<String, Value>, UpdateError> {
    let kind: GameKind = game_name.parse()?;
    sanitize_update(kind, update, policy)
}

/// Merge the permitted fields of `update` into `target`.
///
/// Returns the names of attributes that were stripped. `target` is untouched
/// when an error is returned.
pub fn apply_update(
    kind: GameKind,
    target: &mut Map<String, Value>,
    update: &Value,
    policy: UpdatePolicy,
) -> Result<Vec<String>, UpdateError> {
    let stripped = strip_protected(kind, update)?;
    if policy == UpdatePolicy::Reject && !stripped.removed.is_empty() {
        return Err(UpdateError::ProtectedAttributes {
            game: kind,
            attributes: stripped.removed,
        });
    }
    target.extend(stripped.allowed);
    Ok(stripped.removed)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_strip_greedy_pig_bank() {
        let update = json!({"banked_money": 1000, "bank": true, "name": "hax"});
        let stripped = strip_protected(GameKind::GreedyPig, &update).unwrap();
        assert_eq!(stripped.allowed.len(), 1);
        assert_eq!(stripped.allowed["bank"], json!(true));
        assert_eq!(stripped.removed, vec!["banked_money", "name"]);
    }

    #[test]
    fn test_same_field_depends_on_game() {
        let update = json!({"symbol": "X"});
        let lineup = strip_protected(GameKind::Lineup4, &update).unwrap();
        assert!(lineup.allowed.is_empty());

        let pd = strip_protected(GameKind::PrisonersDilemma, &update).unwrap();
        assert_eq!(pd.allowed["symbol"], json!("X"));
        assert!(pd.removed.is_empty());
    }

    #[test]
    fn test_reject_lists_offending_fields() {
        let update = json!({"wins": 10, "losses": 0, "move": "attack"});
        let err = reject_protected(GameKind::ArenaChampions, &update).unwrap_err();
        match err {
            UpdateError::ProtectedAttributes { game, attributes } => {
                assert_eq!(game, GameKind::ArenaChampions);
                assert_eq!(attributes, vec!["losses", "wins"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_reject_passes_clean_update() {
        let update = json!({"move": "cooperate"});
        let allowed = reject_protected(GameKind::PrisonersDilemma, &update).unwrap();
        assert_eq!(allowed["move"], json!("cooperate"));
    }

    #[test]
    fn test_non_object_update() {
        for update in [json!([1, 2]), json!("name"), json!(null)] {
            assert_eq!(
                strip_protected(GameKind::GreedyPig, &update).unwrap_err(),
                UpdateError::NotAnObject
            );
        }
    }

    #[test]
    fn test_sanitize_unknown_game() {
        let err = sanitize_update_for("checkers", &json!({}), UpdatePolicy::Strip).unwrap_err();
        assert_eq!(err.to_string(), "Unknown game: checkers");
    }

    #[test]
    fn test_apply_update_strip() {
        let mut state = Map::new();
        state.insert("name".into(), json!("alice"));
        state.insert("banked_money".into(), json!(20));

        let update = json!({"name": "mallory", "banked_money": 9999, "last_roll": 4});
        let removed = apply_update(GameKind::GreedyPig, &mut state, &update, UpdatePolicy::Strip).unwrap();

        assert_eq!(removed, vec!["banked_money", "name"]);
        assert_eq!(state["name"], json!("alice"));
        assert_eq!(state["banked_money"], json!(20));
        assert_eq!(state["last_roll"], json!(4));
    }

    #[test]
    fn test_apply_update_reject_leaves_target() {
        let mut state = Map::new();
        state.insert("attack".into(), json!(0.5));

        let update = json!({"attack": 1.0, "taunt": "hi"});
        let err = apply_update(GameKind::ArenaChampions, &mut state, &update, UpdatePolicy::Reject);

        assert!(err.is_err());
        assert_eq!(state.len(), 1);
        assert_eq!(state["attack"], json!(0.5));
    }

    #[test]
    fn test_removed_names_sorted_regardless_of_insertion() {
        let mut update = Map::new();
        for key in ["wins", "taunt", "attack", "losses"] {
            update.insert(key.into(), json!(1));
        }
        let stripped = strip_protected(GameKind::ArenaChampions, &Value::Object(update)).unwrap();
        assert_eq!(stripped.removed, vec!["attack", "losses", "wins"]);
        assert_eq!(stripped.allowed.len(), 1);
    }

    #[test]
    fn test_policy_serde() {
        assert_eq!(serde_json::to_value(UpdatePolicy::Reject).unwrap(), json!("reject"));
        let p: UpdatePolicy = serde_json::from_value(json!("strip")).unwrap();
        assert_eq!(p, UpdatePolicy::Strip);
    }
}
