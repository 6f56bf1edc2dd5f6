//! Simulation engine - cell ownership, troop movements, combat resolution
//!
//! The engine is the sole owner and mutator of simulation state. An
//! external driver calls [`HexEngine::update`] on a fixed cadence and
//! issues commands in response to input; every read accessor hands out
//! copies, never references into engine state.

use crate::ai::OpponentPolicy;
use crate::apps::app_name;
use crate::board::Hex;
use crate::cells::{generate_board, Cell, Faction, Terrain};
use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// MOVEMENT TYPES
// ============================================================================

/// An in-flight troop transfer.
///
/// Progress advances by a fixed amount per tick; on reaching 1.0 the
/// movement resolves against the target exactly once and is removed.
/// Movements are never paused, redirected, or cancelled.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Movement {
    pub id: u64,
    pub source: Hex,
    pub target: Hex,
    pub troops: f32,
    /// Acting faction at dispatch time; resolution uses this even if the
    /// source cell changes hands while troops are in flight
    pub faction: Faction,
    pub progress: f32,
}

/// Visual companion to a movement against a hostile cell.
///
/// Mirrors its movement's progress for rendering; removed when the
/// movement resolves. Reinforcement movements have no arrow.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AttackArrow {
    pub movement_id: u64,
    pub source: Hex,
    pub target: Hex,
    pub progress: f32,
}

/// Defensive snapshot of simulation state for the rendering layer
#[derive(Clone, Debug, Serialize)]
pub struct GameSnapshot {
    pub cells: Vec<Cell>,
    /// Player-faction stockpile, a pool separate from per-cell workforce
    pub stockpile: f32,
    /// OpenSource-controlled specialized cells
    pub controlled_terrain: usize,
    /// BigTech-controlled cells
    pub bigtech_terrain: usize,
    pub generation_per_second: f32,
}

// ============================================================================
// ENGINE
// ============================================================================

pub struct HexEngine {
    config: EngineConfig,
    cells: FxHashMap<Hex, Cell>,
    stockpile: f32,
    generation_per_second: f32,
    last_resource_tick: Duration,
    movements: Vec<Movement>,
    arrows: Vec<AttackArrow>,
    next_movement_id: u64,
    ai: OpponentPolicy,
    clock: Box<dyn Clock>,
    rng: ChaCha8Rng,
}

impl HexEngine {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Default engine: real clock, ambient random seed
    pub fn new() -> Self {
        Self::with_config(
            EngineConfig::default(),
            Box::new(SystemClock::new()),
            rand::random(),
        )
    }

    /// Deterministic board and labels, real clock
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(EngineConfig::default(), Box::new(SystemClock::new()), seed)
    }

    /// Full injection point for tests and headless drivers
    pub fn with_config(config: EngineConfig, clock: Box<dyn Clock>, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cells = generate_board(&config, &mut rng);
        let stockpile = initial_stockpile(&cells);
        let ai = OpponentPolicy::new(config.ai.clone());
        let last_resource_tick = clock.now();

        Self {
            config,
            cells,
            stockpile,
            generation_per_second: 0.0,
            last_resource_tick,
            movements: Vec::new(),
            arrows: Vec::new(),
            next_movement_id: 0,
            ai,
            clock,
            rng,
        }
    }

    // ========================================================================
    // TICK
    // ========================================================================

    /// Advance one logical tick: resource generation (wall-clock gated),
    /// movement progress and resolution, then one opponent decision.
    pub fn update(&mut self) {
        let now = self.clock.now();

        if now.saturating_sub(self.last_resource_tick) >= self.config.resource_tick() {
            let generation = self.player_generation();
            self.generation_per_second = generation;
            self.stockpile += generation * self.config.stockpile_damping;
            self.regenerate_cells();
            self.last_resource_tick = now;
        }

        self.advance_movements();

        if let Some(decision) = self.ai.decide(&self.cells, now) {
            // The opponent does not retry a rejected dispatch
            let _ = self.create_movement(
                decision.source,
                decision.target,
                decision.troops,
                Faction::BigTech,
            );
        }
    }

    /// Generation rate for the player faction: specialized, converted
    /// cells only, weighted by terrain multiplier
    fn player_generation(&self) -> f32 {
        self.cells
            .values()
            .filter(|c| {
                c.faction == Faction::OpenSource && c.terrain.is_specialized() && c.converted
            })
            .map(|c| c.workforce * c.terrain.multiplier())
            .sum()
    }

    /// Auto-regenerate low cells toward the regen threshold. Applies to
    /// every specialized, faction-owned cell, converted or not; the
    /// player faction regenerates faster than the computer.
    fn regenerate_cells(&mut self) {
        let threshold = self.config.regen_threshold;
        for cell in self.cells.values_mut() {
            if cell.workforce >= threshold
                || cell.faction == Faction::Neutral
                || !cell.terrain.is_specialized()
            {
                continue;
            }
            let rate = match cell.faction {
                Faction::OpenSource => self.config.opensource_regen_rate,
                _ => self.config.bigtech_regen_rate,
            };
            cell.workforce = (cell.workforce + rate).min(threshold);
        }
    }

    fn advance_movements(&mut self) {
        let speed = self.config.movement_speed;
        for movement in &mut self.movements {
            movement.progress += speed;
        }

        let mut arrived = Vec::new();
        self.movements.retain(|m| {
            if m.progress >= 1.0 {
                arrived.push(*m);
                false
            } else {
                true
            }
        });

        for movement in &arrived {
            self.resolve_movement(movement);
            self.arrows.retain(|a| a.movement_id != movement.id);
        }

        for arrow in &mut self.arrows {
            if let Some(m) = self.movements.iter().find(|m| m.id == arrow.movement_id) {
                arrow.progress = m.progress;
            }
        }
    }

    /// Resolve an arrived movement against its target cell
    fn resolve_movement(&mut self, movement: &Movement) {
        let Some(target) = self.cells.get_mut(&movement.target) else {
            return;
        };

        if target.faction == movement.faction {
            // Reinforcement, capped at capacity
            target.workforce = (target.workforce + movement.troops).min(target.max_workforce);
        } else if movement.troops > target.workforce {
            // Capture: the defenders ground down an equal number of troops
            let prior = target.workforce;
            target.faction = movement.faction;
            target.workforce = movement.troops - prior;
            if target.terrain.is_specialized() {
                target.app_name = app_name(target.terrain, movement.faction, &mut self.rng);
                target.converted = true;
            }
        } else {
            // Failed raid still inflicts attrition
            target.workforce -= movement.troops;
        }
    }

    // ========================================================================
    // COMMANDS
    // ========================================================================

    /// Dispatch troops from a cell the acting faction controls. Used by
    /// both player commands and the opponent policy.
    pub fn create_movement(
        &mut self,
        source: Hex,
        target: Hex,
        troops: f32,
        faction: Faction,
    ) -> bool {
        let Some(target_cell) = self.cells.get(&target) else {
            return false;
        };
        let target_faction = target_cell.faction;
        let target_full = target_cell.workforce >= target_cell.max_workforce;

        let Some(source_cell) = self.cells.get_mut(&source) else {
            return false;
        };
        if source_cell.faction != faction {
            return false;
        }
        // Troop counts are strictly positive; a zero or negative dispatch
        // would credit workforce instead of debiting it
        if troops <= 0.0 {
            return false;
        }
        if source_cell.workforce < troops {
            return false;
        }
        if target_faction == faction && target_full {
            return false;
        }

        source_cell.workforce -= troops;

        let id = self.next_movement_id;
        self.next_movement_id += 1;
        self.movements.push(Movement {
            id,
            source,
            target,
            troops,
            faction,
            progress: 0.0,
        });

        if target_faction != faction && target_faction != Faction::Neutral {
            self.arrows.push(AttackArrow {
                movement_id: id,
                source,
                target,
                progress: 0.0,
            });
        }

        true
    }

    /// Player-faction dispatch. Refuses hostile attacks that could not
    /// conquer the target outright.
    pub fn send_troops(&mut self, source: Hex, target: Hex, troops: f32) -> bool {
        let Some(source_cell) = self.cells.get(&source) else {
            return false;
        };
        if source_cell.faction != Faction::OpenSource {
            return false;
        }
        let Some(target_cell) = self.cells.get(&target) else {
            return false;
        };

        if target_cell.faction != Faction::OpenSource
            && target_cell.faction != Faction::Neutral
            && troops <= target_cell.workforce
        {
            return false;
        }

        self.create_movement(source, target, troops, Faction::OpenSource)
    }

    /// Current transform cost for a faction.
    ///
    /// OpenSource cost grows logarithmically with its specialized cell
    /// count, BigTech linearly with its total cell count; the player's
    /// expansion is deliberately throttled less.
    pub fn transform_cost(&self, faction: Faction) -> f32 {
        match faction {
            Faction::OpenSource => {
                let controlled = self
                    .cells
                    .values()
                    .filter(|c| c.faction == faction && c.terrain.is_specialized())
                    .count();
                (self.config.base_transform_cost
                    + ((controlled + 1) as f32).ln() * self.config.opensource_cost_scale)
                    .floor()
            }
            _ => {
                let controlled = self.cells.values().filter(|c| c.faction == faction).count();
                self.config.base_transform_cost + controlled as f32 * self.config.bigtech_cost_scale
            }
        }
    }

    /// Specialize a neutral or owned cell into a terrain type, debiting
    /// the faction's current transform cost from the cell's workforce.
    pub fn transform_hex(&mut self, hex: Hex, terrain: Terrain, faction: Faction) -> bool {
        let cost = self.transform_cost(faction);
        let Some(cell) = self.cells.get_mut(&hex) else {
            return false;
        };
        if cell.faction != faction && cell.faction != Faction::Neutral {
            return false;
        }
        if cell.workforce < cost {
            return false;
        }

        cell.faction = faction;
        cell.terrain = terrain;
        cell.workforce -= cost;
        cell.converted = true;
        cell.app_name = app_name(terrain, faction, &mut self.rng);

        true
    }

    /// Restore a fresh board and stockpile, dropping all in-flight state
    pub fn reset(&mut self) {
        self.cells = generate_board(&self.config, &mut self.rng);
        self.stockpile = initial_stockpile(&self.cells);
        self.generation_per_second = 0.0;
        self.movements.clear();
        self.arrows.clear();
        self.next_movement_id = 0;
        self.last_resource_tick = self.clock.now();
        self.ai.reset();
    }

    // ========================================================================
    // ACCESSORS (defensive copies)
    // ========================================================================

    /// Pure lookup of one cell
    pub fn select_hex(&self, hex: Hex) -> Option<Cell> {
        self.cells.get(&hex).cloned()
    }

    /// Snapshot of all cells and aggregate stats, in row-major cell order
    pub fn state(&self) -> GameSnapshot {
        let mut cells: Vec<Cell> = self.cells.values().cloned().collect();
        cells.sort_by_key(|c| (c.hex.r, c.hex.q));

        let controlled_terrain = cells
            .iter()
            .filter(|c| c.faction == Faction::OpenSource && c.terrain.is_specialized())
            .count();
        let bigtech_terrain = cells.iter().filter(|c| c.faction == Faction::BigTech).count();

        GameSnapshot {
            cells,
            stockpile: self.stockpile,
            controlled_terrain,
            bigtech_terrain,
            generation_per_second: self.generation_per_second,
        }
    }

    pub fn movements(&self) -> Vec<Movement> {
        self.movements.clone()
    }

    pub fn attack_arrows(&self) -> Vec<AttackArrow> {
        self.arrows.clone()
    }

    // ========================================================================
    // STOCKPILE
    // ========================================================================
    // The stockpile feeds the host's other game systems; it is a separate
    // pool from per-cell workforce.

    pub fn stockpile(&self) -> f32 {
        self.stockpile
    }

    pub fn consume_stockpile(&mut self, amount: f32) -> bool {
        if self.stockpile >= amount {
            self.stockpile -= amount;
            true
        } else {
            false
        }
    }

    pub fn add_stockpile(&mut self, amount: f32) {
        self.stockpile += amount;
    }
}

impl Default for HexEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn initial_stockpile(cells: &FxHashMap<Hex, Cell>) -> f32 {
    cells
        .values()
        .filter(|c| c.faction == Faction::OpenSource)
        .map(|c| c.workforce)
        .sum()
}

// ============================================================================
// TESTS
// ============================================================================
