//! Cell model and board generation

use crate::apps::app_name;
use crate::board::Hex;
use crate::config::EngineConfig;
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Controlling faction of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    BigTech,
    OpenSource,
    Neutral,
}

/// Terrain specialization of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Terrain {
    CodeEditor,
    TextEditor,
    Browser,
    Os,
    Database,
    Neutral,
}

impl Terrain {
    /// The five specialized terrains (everything but neutral)
    pub const SPECIALIZED: [Terrain; 5] = [
        Terrain::CodeEditor,
        Terrain::TextEditor,
        Terrain::Browser,
        Terrain::Os,
        Terrain::Database,
    ];

    /// Workforce generation multiplier
    pub fn multiplier(self) -> f32 {
        match self {
            Terrain::CodeEditor | Terrain::Os => 2.0,
            Terrain::TextEditor | Terrain::Browser | Terrain::Database => 1.5,
            Terrain::Neutral => 1.0,
        }
    }

    pub fn is_specialized(self) -> bool {
        self != Terrain::Neutral
    }
}

/// A cell on the board.
///
/// Cells are created once at generation time and mutated in place by
/// combat resolution and transform commands; they are never deleted.
#[derive(Clone, Debug, Serialize)]
pub struct Cell {
    pub hex: Hex,
    pub faction: Faction,
    pub terrain: Terrain,
    pub workforce: f32,
    pub max_workforce: f32,
    pub app_name: Option<&'static str>,
    pub converted: bool,
}

/// Generate a fresh board.
///
/// BigTech seeds the high-q edge, OpenSource a small low-q cluster in a
/// narrow r band, everything else starts neutral. Seeded cells get a
/// random specialized terrain and a flavor label; BigTech cells start
/// with more workforce than OpenSource cells (asymmetric difficulty).
pub fn generate_board<R: Rng>(config: &EngineConfig, rng: &mut R) -> FxHashMap<Hex, Cell> {
    let mut cells = FxHashMap::default();

    for q in config.q_min..config.q_max {
        for r in config.r_min..config.r_max {
            let hex = Hex::new(q, r);
            let mut faction = Faction::Neutral;
            let mut terrain = Terrain::Neutral;
            let mut label = None;

            if q >= config.bigtech_q_min {
                faction = Faction::BigTech;
                terrain = Terrain::SPECIALIZED[rng.gen_range(0..Terrain::SPECIALIZED.len())];
                label = app_name(terrain, faction, rng);
            } else if q <= config.opensource_q_max && r.abs() <= config.opensource_r_band {
                faction = Faction::OpenSource;
                terrain = Terrain::SPECIALIZED[rng.gen_range(0..Terrain::SPECIALIZED.len())];
                label = app_name(terrain, faction, rng);
            }

            let workforce = match faction {
                Faction::BigTech => config.bigtech_seed_workforce,
                Faction::OpenSource => config.opensource_seed_workforce,
                Faction::Neutral => 0.0,
            };

            cells.insert(
                hex,
                Cell {
                    hex,
                    faction,
                    terrain,
                    workforce,
                    max_workforce: config.max_workforce,
                    app_name: label,
                    converted: false,
                },
            );
        }
    }

    cells
}
