//! HEXFRONT Core - hex-grid territory-control simulation
//!
//! This crate provides the simulation behind the hex mini-game:
//! - Board geometry (axial coordinates, pixel conversion, cube rounding)
//! - Cell model and seeded board generation
//! - BigTech opponent decision policy
//! - The tick-driven simulation engine (movements, combat, resources)
//!
//! The engine is single-threaded and tick-driven: the host calls
//! [`HexEngine::update`] on a roughly fixed cadence and reads defensive
//! snapshots for rendering.

pub mod ai;
pub mod apps;
pub mod board;
pub mod cells;
pub mod clock;
pub mod config;
pub mod engine;

// Re-exports for convenient access
pub use ai::{AiDecision, OpponentPolicy};
pub use board::{Hex, DIRECTIONS, HEX_SIZE};
pub use cells::{generate_board, Cell, Faction, Terrain};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AiConfig, EngineConfig};
pub use engine::{AttackArrow, GameSnapshot, HexEngine, Movement};
