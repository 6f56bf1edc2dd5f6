//! BigTech opponent decision policy
//!
//! A rate-limited heuristic: every cooldown interval, pick one adjacent
//! attack for the computer faction. The policy only selects; the engine
//! dispatches (and may reject) the resulting movement.

use crate::board::Hex;
use crate::cells::{Cell, Faction};
use crate::config::AiConfig;
use rustc_hash::FxHashMap;
use std::time::Duration;

/// A selected attack: source cell, target cell, troops to commit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AiDecision {
    pub source: Hex,
    pub target: Hex,
    pub troops: f32,
}

/// Cooldown-gated attack selection for the BigTech faction
pub struct OpponentPolicy {
    config: AiConfig,
    last_attack: Option<Duration>,
}

impl OpponentPolicy {
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            last_attack: None,
        }
    }

    /// Forget the cooldown, as if freshly constructed
    pub fn reset(&mut self) {
        self.last_attack = None;
    }

    /// Select an attack, or `None` if the cooldown has not elapsed or no
    /// eligible source/target pair exists.
    ///
    /// On a successful decision the cooldown restarts, whether or not the
    /// dispatch is later accepted.
    pub fn decide(&mut self, cells: &FxHashMap<Hex, Cell>, now: Duration) -> Option<AiDecision> {
        if let Some(last) = self.last_attack {
            if now < last + self.config.attack_cooldown() {
                return None;
            }
        }

        // Sources: BigTech cells with enough troops to attack.
        // Sorted so decisions are deterministic over the hash-map store.
        let mut sources: Vec<&Cell> = cells
            .values()
            .filter(|c| c.faction == Faction::BigTech && c.workforce >= self.config.min_troops_to_attack)
            .collect();
        if sources.is_empty() {
            return None;
        }
        sources.sort_by_key(|c| (c.hex.q, c.hex.r));

        // Targets: adjacent OpenSource or neutral cells. OpenSource targets
        // take hard priority over neutral ones, then lowest distance.
        let mut targets: Vec<(Hex, i32, i32)> = Vec::new();
        for source in &sources {
            for neighbor in source.hex.neighbors() {
                let Some(cell) = cells.get(&neighbor) else {
                    continue;
                };
                let priority = match cell.faction {
                    Faction::OpenSource => 2,
                    Faction::Neutral => 1,
                    Faction::BigTech => continue,
                };
                targets.push((neighbor, priority, source.hex.distance(neighbor)));
            }
        }
        if targets.is_empty() {
            return None;
        }
        targets.sort_by_key(|&(hex, priority, distance)| (-priority, distance, hex.q, hex.r));
        let target = targets[0].0;

        // Nearest capable source to the chosen target
        let source = sources
            .iter()
            .min_by_key(|c| (c.hex.distance(target), c.hex.q, c.hex.r))?;

        let troops = (source.workforce - 1.0).min(self.config.max_troops_per_attack);

        self.last_attack = Some(now);
        Some(AiDecision {
            source: source.hex,
            target,
            troops,
        })
    }
}
