//! Registry configuration loaded from TOML at startup.

use std::path::Path;

use serde::Deserialize;

use crate::engine::sanitize::UpdatePolicy;
use crate::games::GameKind;

/// How player-supplied state updates are handled.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct UpdateConfig {
    #[serde(default)]
    pub policy: UpdatePolicy,
}

/// Top-level TOML file structure.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Lazily loaded games to initialise at startup instead of on first use.
    #[serde(default)]
    pub preload: Vec<GameKind>,
    #[serde(default)]
    pub updates: UpdateConfig,
}

impl RegistryConfig {
    /// Load every game listed in `preload`. Returns how many modules this call
    /// actually loaded.
    pub fn preload_modules(&self) -> usize {
        let mut loaded = 0;
        for kind in &self.preload {
            if !kind.is_lazy() {
                tracing::debug!(game = %kind, "preload requested for eager game, skipping");
                continue;
            }
            if !kind.is_loaded() {
                kind.descriptor();
                loaded += 1;
            }
        }
        tracing::info!(count = loaded, "preloaded game modules");
        loaded
    }
}

/// Load the config from a TOML file at the given path.
pub fn load_config(path: &Path) -> Result<RegistryConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Try to load the config from well-known paths, returning defaults if none found.
pub fn load_default_config() -> RegistryConfig {
    let candidates = [
        "agent_games.toml",
        "../agent_games.toml",
        "/etc/agent-games/agent_games.toml",
    ];
    for path in &candidates {
        let p = Path::new(path);
        if p.exists() {
            match load_config(p) {
                Ok(config) => {
                    tracing::info!(
                        path = %p.display(),
                        preload = ?config.preload,
                        policy = ?config.updates.policy,
                        "loaded registry config"
                    );
                    return config;
                }
                Err(e) => {
                    tracing::warn!(path = %p.display(), error = %e, "failed to load registry config");
                }
            }
        }
    }
    tracing::info!("no agent_games.toml found, using built-in defaults");
    RegistryConfig::default()
}
