use crate::context::PermutationContext;
use crate::gradients::extrapolate2;
use crate::lattice::{Cell, fast_floor};

const STRETCH_2D: f64 = -0.211324865405187; // (1 / sqrt(2 + 1) - 1) / 2
const SQUISH_2D: f64 = 0.366025403784439; // (sqrt(2 + 1) - 1) / 2
const NORM_2D: f64 = 47.0;

/// Which triangle of the rhombus super-cell holds the sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Region2 {
    /// Triangle at (0,0).
    Lower,
    /// Triangle at (1,1).
    Upper,
}

impl Region2 {
    #[inline(always)]
    fn classify(in_sum: f64) -> Self {
        if in_sum <= 1.0 {
            Region2::Lower
        } else {
            Region2::Upper
        }
    }

    // (1,0) and (0,1) are shared by both triangles
    #[inline(always)]
    fn vertices(self) -> [[i32; 2]; 3] {
        match self {
            Region2::Lower => [[1, 0], [0, 1], [0, 0]],
            Region2::Upper => [[1, 0], [0, 1], [1, 1]],
        }
    }

    // The one lattice point outside the triangle that can still reach the sample
    #[inline(always)]
    fn extra_vertex(self, xins: f64, yins: f64, in_sum: f64) -> [i32; 2] {
        match self {
            Region2::Lower => {
                let zins = 1.0 - in_sum;
                if zins > xins || zins > yins {
                    // (0,0) is one of the closest two triangular vertices
                    if xins > yins { [1, -1] } else { [-1, 1] }
                } else {
                    [1, 1]
                }
            }
            Region2::Upper => {
                let zins = 2.0 - in_sum;
                if zins < xins || zins < yins {
                    // (1,1) is one of the closest two triangular vertices
                    if xins > yins { [2, 0] } else { [0, 2] }
                } else {
                    [0, 0]
                }
            }
        }
    }
}

/// 2D OpenSimplex noise at `(x, y)`.
///
/// Output is roughly within `[-1, 1]`; it is not clamped.
pub fn noise2(ctx: &PermutationContext, x: f64, y: f64) -> f64 {
    // Place input coordinates onto the stretched grid
    let stretch_offset = (x + y) * STRETCH_2D;
    let xs = x + stretch_offset;
    let ys = y + stretch_offset;

    let xsb = fast_floor(xs);
    let ysb = fast_floor(ys);

    // Skew back out to the actual coordinates of the rhombus origin
    let squish_offset = (xsb as f64 + ysb as f64) * SQUISH_2D;
    let xb = xsb as f64 + squish_offset;
    let yb = ysb as f64 + squish_offset;

    let xins = xs - xsb as f64;
    let yins = ys - ysb as f64;
    let in_sum = xins + yins;

    let cell = Cell::new([xsb, ysb], [x - xb, y - yb], SQUISH_2D);
    let gradient = |sv: [i32; 2], d: [f64; 2]| extrapolate2(ctx, sv, d);

    let region = Region2::classify(in_sum);
    let mut value = 0.0;
    for offset in region.vertices() {
        value += cell.contribution(offset, gradient);
    }
    value += cell.contribution(region.extra_vertex(xins, yins, in_sum), gradient);

    value / NORM_2D
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simplex2_determinism() {
        let a = PermutationContext::new(9999);
        let b = PermutationContext::new(9999);
        assert_eq!(noise2(&a, 1.23, 4.56), noise2(&b, 1.23, 4.56));
    }

    #[test]
    fn simplex2_reference_value() {
        let ctx = PermutationContext::new(0);
        let v = noise2(&ctx, 1.5, -2.5);
        assert!((v - -0.546821875644804).abs() < 1e-9, "got {}", v);
    }

    #[test]
    fn simplex2_range() {
        let ctx = PermutationContext::new(0);
        for &(x, y) in &[(0.0, 0.0), (5.5, -5.5), (100.1, 100.1), (-3.3, 7.7)] {
            let v = noise2(&ctx, x, y);
            assert!(v.is_finite() && v.abs() <= 1.0, "noise2({}, {}) = {}", x, y, v);
        }
    }

    #[test]
    fn region_split_on_in_sum() {
        assert_eq!(Region2::classify(0.3), Region2::Lower);
        assert_eq!(Region2::classify(1.0), Region2::Lower);
        assert_eq!(Region2::classify(1.0001), Region2::Upper);
    }

    #[test]
    fn extra_vertex_follows_closest_corner() {
        // near (0,0), leaning toward x
        assert_eq!(Region2::Lower.extra_vertex(0.3, 0.1, 0.4), [1, -1]);
        assert_eq!(Region2::Lower.extra_vertex(0.1, 0.3, 0.4), [-1, 1]);
        // near the (1,0)-(0,1) edge from below
        assert_eq!(Region2::Lower.extra_vertex(0.5, 0.45, 0.95), [1, 1]);
        // near (1,1)
        assert_eq!(Region2::Upper.extra_vertex(0.9, 0.8, 1.7), [2, 0]);
        assert_eq!(Region2::Upper.extra_vertex(0.55, 0.5, 1.05), [0, 0]);
    }
}
