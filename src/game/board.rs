//! Peg Map (Bias Matrix)
//!
//! Triangular board of left-biases: row `r` holds `r + 1` pegs. Built once
//! per round from the deterministic stream and never mutated afterwards.
//!
//! The map's canonical JSON text is what gets hashed and published, so the
//! serializer below is a wire format, not a debug aid.

use serde::{Deserialize, Serialize};

use crate::core::decimal::{round6, write_canonical};
use crate::core::hash::sha256_hex;
use crate::core::rng::DeterministicRng;

/// Neutral left-bias of a peg.
pub const BIAS_CENTER: f64 = 0.5;

/// Spread applied to a draw around the center (biases fall in [0.4, 0.6]).
pub const BIAS_SPREAD: f64 = 0.2;

/// Triangular matrix of six-decimal left-biases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PegMap {
    rows: Vec<Vec<f64>>,
}

impl PegMap {
    /// Draw a peg map with `rows` levels from `rng`.
    ///
    /// Consumes exactly `rows * (rows + 1) / 2` draws, level by level,
    /// left to right.
    pub fn generate(rng: &mut DeterministicRng, rows: u32) -> Self {
        let rows = (0..rows as usize)
            .map(|r| {
                (0..=r)
                    .map(|_| {
                        let draw = rng.next_f64();
                        round6(BIAS_CENTER + (draw - BIAS_CENTER) * BIAS_SPREAD)
                    })
                    .collect::<Vec<f64>>()
            })
            .collect();
        Self { rows }
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the map has no levels.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Biases of one level, if it exists.
    pub fn row(&self, level: usize) -> Option<&[f64]> {
        self.rows.get(level).map(Vec::as_slice)
    }

    /// Bias of a single peg, if it exists.
    pub fn bias(&self, level: usize, peg: usize) -> Option<f64> {
        self.rows.get(level).and_then(|row| row.get(peg)).copied()
    }

    /// All levels, top to bottom.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Canonical JSON text: `[[a],[b,c],...]` with no whitespace.
    pub fn canonical_json(&self) -> String {
        let pegs = self.rows.iter().map(Vec::len).sum::<usize>();
        let mut out = String::with_capacity(2 + self.rows.len() * 3 + pegs * 9);
        out.push('[');
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push('[');
            for (j, bias) in row.iter().enumerate() {
                if j > 0 {
                    out.push(',');
                }
                write_canonical(&mut out, *bias);
            }
            out.push(']');
        }
        out.push(']');
        out
    }

    /// SHA-256 of [`canonical_json`](Self::canonical_json), as lowercase hex.
    pub fn hash(&self) -> String {
        sha256_hex(&self.canonical_json())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Leading u32 of the reference combined seed.
    const REFERENCE_SEED: u32 = 3_789_414_263;

    #[test]
    fn test_triangular_shape() {
        let mut rng = DeterministicRng::new(42);
        let map = PegMap::generate(&mut rng, 12);

        assert_eq!(map.len(), 12);
        for (r, row) in map.rows().iter().enumerate() {
            assert_eq!(row.len(), r + 1);
        }
    }

    #[test]
    fn test_draw_count() {
        let mut used = DeterministicRng::new(42);
        PegMap::generate(&mut used, 12);

        let mut fresh = DeterministicRng::new(42);
        for _ in 0..(12 * 13 / 2) {
            fresh.next_u32();
        }
        assert_eq!(used.state(), fresh.state());
    }

    #[test]
    fn test_bias_range_and_precision() {
        let mut rng = DeterministicRng::new(7);
        let map = PegMap::generate(&mut rng, 32);

        for row in map.rows() {
            for &bias in row {
                assert!((0.4..=0.6).contains(&bias));
                assert_eq!(round6(bias), bias);
            }
        }
    }

    #[test]
    fn test_reference_rows() {
        let mut rng = DeterministicRng::new(REFERENCE_SEED);
        let map = PegMap::generate(&mut rng, 12);

        assert_eq!(map.row(0).unwrap(), &[0.422123]);
        assert_eq!(map.row(1).unwrap(), &[0.552503, 0.408786]);
        assert_eq!(map.row(2).unwrap(), &[0.491574, 0.468780, 0.436540]);
        assert_eq!(map.bias(3, 3), Some(0.451217));
        assert_eq!(map.bias(3, 4), None);
        assert_eq!(map.row(12), None);
    }

    #[test]
    fn test_canonical_json_format() {
        let mut rng = DeterministicRng::new(REFERENCE_SEED);
        let map = PegMap::generate(&mut rng, 4);

        assert_eq!(
            map.canonical_json(),
            "[[0.422123],[0.552503,0.408786],[0.491574,0.46878,0.43654],\
             [0.497408,0.412594,0.555919,0.451217]]"
        );
        assert_eq!(
            map.hash(),
            "3874a5c74d4a0818446c8853de792ecbf15ce06b4d1339b68a7a6daa5c5c0c30"
        );
    }

    #[test]
    fn test_canonical_json_matches_serde() {
        let mut rng = DeterministicRng::new(99);
        let map = PegMap::generate(&mut rng, 12);

        let via_serde = serde_json::to_string(&map).unwrap();
        assert_eq!(map.canonical_json(), via_serde);
    }

    #[test]
    fn test_empty_map() {
        let mut rng = DeterministicRng::new(1);
        let map = PegMap::generate(&mut rng, 0);
        assert!(map.is_empty());
        assert_eq!(map.canonical_json(), "[]");
    }
}
