use crate::logic::RuleConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "awale_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AIConfig {
    pub version: String,
    pub evaluation: EvaluationConfig,
    pub search: SearchConfig,
    pub rules: RuleConfig,
    pub players: [PlayerSetup; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub capture_weight: f64,
    pub board_weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_depth: usize,
    /// Wall-clock budget the match driver grants each move.
    pub max_time_per_move_ms: u64,
}

/// Algorithm name (`bfs`, `dfs`, `minimax`, `alphabeta`, `iddfs`, `random`) and depth for one seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub algorithm: String,
    /// Falls back to `search.default_depth` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }

    /// Search depth for a seat: its own, else the configured default.
    pub fn depth_for(&self, setup: &PlayerSetup) -> usize {
        setup.depth.unwrap_or(self.search.default_depth)
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            evaluation: EvaluationConfig::default(),
            search: SearchConfig::default(),
            rules: RuleConfig::default(),
            players: [
                PlayerSetup {
                    algorithm: "alphabeta".to_string(),
                    depth: Some(4),
                },
                PlayerSetup {
                    algorithm: "minimax".to_string(),
                    depth: Some(3),
                },
            ],
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        EvaluationConfig {
            capture_weight: 10.0,
            board_weight: 2.0,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            default_depth: 3,
            max_time_per_move_ms: 3000,
        }
    }
}
