//! Hex board geometry with axial coordinates

use serde::{Deserialize, Serialize};

/// Hex size in pixels (center to corner), pointy-top orientation
pub const HEX_SIZE: f32 = 40.0;

const SQRT_3: f32 = 1.7320508;

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Implicit third cube coordinate (q + r + s = 0)
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Distance between two hexes
    pub fn distance(self, other: Hex) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = ((self.q + self.r) - (other.q + other.r)).abs();
        (dq + dr + ds) / 2
    }

    /// The six axial neighbors, in direction-table order
    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        DIRECTIONS
            .into_iter()
            .map(move |(dq, dr)| Hex::new(self.q + dq, self.r + dr))
    }

    /// Convert to pixel center, given a pixel origin for hex (0, 0)
    pub fn to_pixel(self, origin_x: f32, origin_y: f32) -> (f32, f32) {
        let x = HEX_SIZE * (SQRT_3 * self.q as f32 + (SQRT_3 / 2.0) * self.r as f32) + origin_x;
        let y = HEX_SIZE * (1.5 * self.r as f32) + origin_y;
        (x, y)
    }

    /// Convert a pixel position back to the hex containing it
    pub fn from_pixel(x: f32, y: f32, origin_x: f32, origin_y: f32) -> Hex {
        let q = ((SQRT_3 / 3.0) * (x - origin_x) - (1.0 / 3.0) * (y - origin_y)) / HEX_SIZE;
        let r = ((2.0 / 3.0) * (y - origin_y)) / HEX_SIZE;
        hex_round(q, r)
    }
}

/// Direction vectors in axial coordinates (dq, dr)
pub const DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
];

/// Round fractional axial coordinates to the nearest hex.
///
/// Rounds the cube coordinates independently, then recomputes whichever
/// coordinate has the largest rounding error so q + r + s = 0 holds
/// exactly. Every pixel maps to exactly one hex, no gaps or overlaps.
fn hex_round(q: f32, r: f32) -> Hex {
    let s = -q - r;
    let mut rq = q.round();
    let mut rr = r.round();
    let rs = s.round();

    let q_diff = (rq - q).abs();
    let r_diff = (rr - r).abs();
    let s_diff = (rs - s).abs();

    if q_diff > r_diff && q_diff > s_diff {
        rq = -rr - rs;
    } else if r_diff > s_diff {
        rr = -rq - rs;
    }

    Hex::new(rq as i32, rr as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(Hex::new(0, 0).distance(Hex::new(0, 0)), 0);
        assert_eq!(Hex::new(0, 0).distance(Hex::new(1, 0)), 1);
        assert_eq!(Hex::new(-2, 1).distance(Hex::new(2, -1)), 4);
        assert_eq!(Hex::new(0, 0).distance(Hex::new(2, 2)), 4);
    }

    #[test]
    fn test_neighbors() {
        let center = Hex::new(0, 0);
        let neighbors: Vec<_> = center.neighbors().collect();
        assert_eq!(neighbors.len(), 6);
        for n in neighbors {
            assert_eq!(center.distance(n), 1);
        }
    }

    #[test]
    fn test_pixel_round_trip() {
        // Every hex in the generation bounds survives a pixel round trip,
        // for more than one origin offset
        for &(ox, oy) in &[(0.0, 0.0), (400.0, 300.0), (-17.5, 3.25)] {
            for q in -7..7 {
                for r in -5..5 {
                    let hex = Hex::new(q, r);
                    let (x, y) = hex.to_pixel(ox, oy);
                    assert_eq!(Hex::from_pixel(x, y, ox, oy), hex);
                }
            }
        }
    }

    #[test]
    fn test_hex_round_preserves_cube_sum() {
        // Fractional coordinates with q + r + s = 0 round to a valid hex
        let samples = [
            (0.1, 0.2),
            (2.7, -1.4),
            (-3.3, 1.9),
            (0.49, 0.49),
            (-0.5, 0.26),
            (6.9, -4.8),
        ];
        for &(q, r) in &samples {
            let rounded = hex_round(q, r);
            assert_eq!(rounded.q + rounded.r + rounded.s(), 0);
        }
    }

    #[test]
    fn test_from_pixel_nearest() {
        // A point barely inside a hex center region maps to that hex
        let hex = Hex::new(3, -2);
        let (x, y) = hex.to_pixel(100.0, 100.0);
        assert_eq!(Hex::from_pixel(x + 5.0, y - 5.0, 100.0, 100.0), hex);
    }
}
