//! Engine tunables

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Opponent decision policy tunables
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Minimum real-time interval between decisions, in milliseconds
    pub attack_cooldown_ms: u64,
    /// A source cell needs at least this much workforce to attack
    pub min_troops_to_attack: f32,
    /// Per-attack troop cap, keeps attacks incremental
    pub max_troops_per_attack: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            attack_cooldown_ms: 3000,
            min_troops_to_attack: 2.0,
            max_troops_per_attack: 2.0,
        }
    }
}

impl AiConfig {
    pub fn attack_cooldown(&self) -> Duration {
        Duration::from_millis(self.attack_cooldown_ms)
    }
}

/// All simulation tunables, with defaults matching the shipped balance
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Board bounds, half-open: q in [q_min, q_max), r in [r_min, r_max)
    pub q_min: i32,
    pub q_max: i32,
    pub r_min: i32,
    pub r_max: i32,

    /// Cells with q at or beyond this start under BigTech control
    pub bigtech_q_min: i32,
    /// Cells with q at or below this (within the r band) start OpenSource
    pub opensource_q_max: i32,
    /// Half-width of the OpenSource starting band (|r| <= band)
    pub opensource_r_band: i32,

    pub bigtech_seed_workforce: f32,
    pub opensource_seed_workforce: f32,
    pub max_workforce: f32,

    /// Movement progress gained per tick
    pub movement_speed: f32,

    pub base_transform_cost: f32,
    /// Log-scale cost growth for OpenSource transforms
    pub opensource_cost_scale: f32,
    /// Linear cost growth for BigTech transforms
    pub bigtech_cost_scale: f32,

    /// Minimum real time between resource ticks, in milliseconds
    pub resource_tick_ms: u64,
    /// Fraction of the computed generation added to the stockpile each tick
    pub stockpile_damping: f32,
    /// Cells below this workforce auto-regenerate toward it
    pub regen_threshold: f32,
    pub opensource_regen_rate: f32,
    pub bigtech_regen_rate: f32,

    pub ai: AiConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            q_min: -7,
            q_max: 7,
            r_min: -5,
            r_max: 5,
            bigtech_q_min: 4,
            opensource_q_max: -5,
            opensource_r_band: 1,
            bigtech_seed_workforce: 3.0,
            opensource_seed_workforce: 1.0,
            max_workforce: 10.0,
            movement_speed: 0.02,
            base_transform_cost: 2.0,
            opensource_cost_scale: 1.5,
            bigtech_cost_scale: 2.0,
            resource_tick_ms: 1000,
            stockpile_damping: 0.1,
            regen_threshold: 3.0,
            opensource_regen_rate: 0.15,
            bigtech_regen_rate: 0.1,
            ai: AiConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn resource_tick(&self) -> Duration {
        Duration::from_millis(self.resource_tick_ms)
    }

    /// Load from a JSON file; absent fields fall back to defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_balance() {
        let config = EngineConfig::default();
        assert_eq!(config.movement_speed, 0.02);
        assert_eq!(config.base_transform_cost, 2.0);
        assert_eq!(config.max_workforce, 10.0);
        assert_eq!(config.ai.attack_cooldown(), Duration::from_secs(3));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"movement_speed": 0.05, "ai": {"attack_cooldown_ms": 500}}"#)
                .unwrap();
        assert_eq!(config.movement_speed, 0.05);
        assert_eq!(config.ai.attack_cooldown_ms, 500);
        // Untouched fields keep defaults
        assert_eq!(config.q_min, -7);
        assert_eq!(config.ai.min_troops_to_attack, 2.0);
    }
}
