//! Round Simulation
//!
//! Turns a combined seed into a peg map, a ball path and a landing bin.
//! This is what every verifier re-runs, so it must be 100% deterministic.
//!
//! ## Draw order
//!
//! ```text
//! seed_from_hex(combined) ──► DeterministicRng
//!                              │
//!                              ├─ rows*(rows+1)/2 draws ─► PegMap (level-major)
//!                              │
//!                              └─ rows draws ───────────► Path (same stream)
//! ```
//!
//! The two phases share one generator. Reordering or re-seeding between
//! them changes every published hash.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::decimal::clamp_unit;
use crate::core::rng::DeterministicRng;
use crate::core::seed::seed_from_hex;
use crate::error::{EngineError, EngineResult};
use crate::game::board::PegMap;
use crate::game::path::{Direction, Path};
use crate::{DEFAULT_ROWS, MAX_ROWS};

/// Bias shift per column of distance from the board center.
pub const DROP_COLUMN_STEP: f64 = 0.01;

/// Caller-chosen simulation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    /// Number of peg levels.
    pub rows: u32,
    /// Column the ball is dropped from, in [0, rows].
    pub drop_column: i64,
}

impl SimulationParams {
    /// Parameters on the default board.
    pub fn new(drop_column: i64) -> Self {
        Self {
            rows: DEFAULT_ROWS,
            drop_column,
        }
    }

    /// Override the row count.
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    /// Check `rows` in [1, MAX_ROWS] and `drop_column` in [0, rows].
    pub fn validate(&self) -> EngineResult<()> {
        if self.rows == 0 || self.rows > MAX_ROWS {
            return Err(EngineError::InvalidParameter(format!(
                "rows must be in [1, {}], got {}",
                MAX_ROWS, self.rows
            )));
        }
        if self.drop_column < 0 || self.drop_column > i64::from(self.rows) {
            return Err(EngineError::InvalidParameter(format!(
                "dropColumn must be in [0, {}], got {}",
                self.rows, self.drop_column
            )));
        }
        Ok(())
    }

    /// Bias adjustment applied to every peg on the path.
    pub fn adjustment(&self) -> f64 {
        (self.drop_column - i64::from(self.rows / 2)) as f64 * DROP_COLUMN_STEP
    }
}

/// Everything a simulation produces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    /// Full peg map (kept private by the product, only its hash is published).
    pub peg_map: PegMap,
    /// Hash of the canonical peg map text.
    pub peg_map_hash: String,
    /// Decisions, top level first.
    pub path: Path,
    /// Landing bin: number of right moves, in [0, rows].
    pub bin_index: u32,
}

/// Simulate one round from a combined seed.
///
/// # Determinism
///
/// Pure function of its inputs: no I/O, no shared state. Each call owns
/// its own generator, so calls may run concurrently.
pub fn simulate(combined_seed_hex: &str, params: &SimulationParams) -> EngineResult<RoundOutcome> {
    params.validate()?;

    let seed = seed_from_hex(combined_seed_hex)?;
    let mut rng = DeterministicRng::new(seed);

    // Phase 1: peg map
    let peg_map = PegMap::generate(&mut rng, params.rows);
    let peg_map_hash = peg_map.hash();

    // Phase 2: path, continuing the same stream
    let adjustment = params.adjustment();
    let mut pos = 0usize;
    let mut path = Path::with_capacity(params.rows as usize);

    for (level, row) in peg_map.rows().iter().enumerate() {
        let base_bias = row[pos.min(level)];
        let bias = clamp_unit(base_bias + adjustment);
        let draw = rng.next_f64();

        #[cfg(feature = "debug-tracing")]
        tracing::trace!(level, pos, base_bias, bias, draw, "path step");

        if draw < bias {
            path.push(Direction::Left);
        } else {
            path.push(Direction::Right);
            pos += 1;
        }
    }

    let bin_index = pos as u32;
    debug!(
        rows = params.rows,
        drop_column = params.drop_column,
        bin_index,
        peg_map_hash = %peg_map_hash,
        "round simulated"
    );

    Ok(RoundOutcome {
        peg_map,
        peg_map_hash,
        path,
        bin_index,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const COMBINED: &str = "e1dddf77de27d395ea2be2ed49aa2a59bd6bf12ee8d350c16c008abd406c07e0";

    #[test]
    fn test_reference_center_drop() {
        let outcome = simulate(COMBINED, &SimulationParams::new(6)).unwrap();

        assert_eq!(outcome.bin_index, 6);
        assert_eq!(outcome.path.to_string(), "LLLRLRLRLRRR");
        assert_eq!(
            outcome.peg_map_hash,
            "21296c4b32a9cf0993d6988835d5a109d3337791239f411384794251c51e7784"
        );
    }

    #[test]
    fn test_reference_edge_drops() {
        let left = simulate(COMBINED, &SimulationParams::new(0)).unwrap();
        assert_eq!(left.path.to_string(), "LLRRLRLRLRRR");
        assert_eq!(left.bin_index, 7);

        let right = simulate(COMBINED, &SimulationParams::new(12)).unwrap();
        assert_eq!(right.path.to_string(), "LLLRLLLRLRRR");
        assert_eq!(right.bin_index, 5);

        // Drop column never touches the peg map.
        assert_eq!(left.peg_map_hash, right.peg_map_hash);
    }

    #[test]
    fn test_single_row_board() {
        let outcome = simulate(COMBINED, &SimulationParams::new(0).with_rows(1)).unwrap();
        assert_eq!(outcome.peg_map.canonical_json(), "[[0.422123]]");
        assert_eq!(outcome.path.to_string(), "R");
        assert_eq!(outcome.bin_index, 1);
    }

    #[test]
    fn test_determinism() {
        let params = SimulationParams::new(3).with_rows(16);
        let a = simulate(COMBINED, &params).unwrap();
        let b = simulate(COMBINED, &params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bin_matches_path() {
        for drop in 0..=12 {
            let outcome = simulate(COMBINED, &SimulationParams::new(drop)).unwrap();
            assert_eq!(outcome.path.len(), 12);
            assert_eq!(outcome.path.rights(), outcome.bin_index as usize);
        }
    }

    #[test]
    fn test_adjustment() {
        assert_eq!(SimulationParams::new(6).adjustment(), 0.0);
        assert_eq!(SimulationParams::new(0).adjustment(), -6.0 * 0.01);
        assert_eq!(SimulationParams::new(3).with_rows(5).adjustment(), 0.01);
    }

    #[test]
    fn test_invalid_drop_column() {
        for drop in [-1, 13, i64::MAX] {
            assert!(matches!(
                simulate(COMBINED, &SimulationParams::new(drop)),
                Err(EngineError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_invalid_rows() {
        assert!(matches!(
            simulate(COMBINED, &SimulationParams::new(0).with_rows(0)),
            Err(EngineError::InvalidParameter(_))
        ));
        assert!(matches!(
            simulate(COMBINED, &SimulationParams::new(0).with_rows(MAX_ROWS + 1)),
            Err(EngineError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_bad_seed_propagates() {
        assert!(matches!(
            simulate("abc", &SimulationParams::new(6)),
            Err(EngineError::InvalidSeedLength { .. })
        ));
        assert!(matches!(
            simulate("not-hex-at-all", &SimulationParams::new(6)),
            Err(EngineError::InvalidHexEncoding(_))
        ));
    }

    #[test]
    fn test_serializes_camel_case() {
        let outcome = simulate(COMBINED, &SimulationParams::new(6)).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["binIndex"], 6);
        assert!(json["pegMapHash"].is_string());
        assert_eq!(json["path"][0], "L");
        assert_eq!(json["pegMap"][1][0], 0.552503);
    }
}
