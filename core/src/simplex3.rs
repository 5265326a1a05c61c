use crate::context::PermutationContext;
use crate::gradients::extrapolate3;
use crate::lattice::{Cell, corner, fast_floor, lower_unset_axis, raise_set_axis, scaled};

const STRETCH_3D: f64 = -1.0 / 6.0; // (1 / sqrt(3 + 1) - 1) / 3
const SQUISH_3D: f64 = 1.0 / 3.0; // (sqrt(3 + 1) - 1) / 3
const NORM_3D: f64 = 103.0;

const ORIGIN_TETRAHEDRON: [[i32; 3]; 4] = [[0, 0, 0], [1, 0, 0], [0, 1, 0], [0, 0, 1]];
const FAR_TETRAHEDRON: [[i32; 3]; 4] = [[1, 1, 0], [1, 0, 1], [0, 1, 1], [1, 1, 1]];
const OCTAHEDRON: [[i32; 3]; 6] = [
    [1, 0, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 1, 0],
    [1, 0, 1],
    [0, 1, 1],
];

/// Which part of the rhombohedral super-cell holds the sample.
///
/// The cell splits into a tetrahedron at (0,0,0), a tetrahedron at
/// (1,1,1), and the octahedron (rectified 3-simplex) between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Region3 {
    Origin,
    Far,
    Middle,
}

impl Region3 {
    #[inline(always)]
    fn classify(in_sum: f64) -> Self {
        if in_sum <= 1.0 {
            Region3::Origin
        } else if in_sum >= 2.0 {
            Region3::Far
        } else {
            Region3::Middle
        }
    }

    #[inline(always)]
    fn vertices(self) -> &'static [[i32; 3]] {
        match self {
            Region3::Origin => &ORIGIN_TETRAHEDRON,
            Region3::Far => &FAR_TETRAHEDRON,
            Region3::Middle => &OCTAHEDRON,
        }
    }

    /// The two lattice points outside the region that may still contribute.
    ///
    /// Which ones depends on the two region vertices closest to the sample;
    /// the score comparisons settle ties and must stay exactly as written.
    #[inline(always)]
    fn extra_vertices(self, ins: [f64; 3], in_sum: f64) -> [[i32; 3]; 2] {
        let [xins, yins, zins] = ins;
        match self {
            Region3::Origin => {
                // Closest two of (1,0,0), (0,1,0), (0,0,1)
                let (mut a_point, mut a_score) = (0x01u8, xins);
                let (mut b_point, mut b_score) = (0x02u8, yins);
                if a_score >= b_score && zins > b_score {
                    b_score = zins;
                    b_point = 0x04;
                } else if a_score < b_score && zins > a_score {
                    a_score = zins;
                    a_point = 0x04;
                }

                let wins = 1.0 - in_sum;
                if wins > a_score || wins > b_score {
                    // (0,0,0) is one of the closest two; pair it with the nearer of a and b
                    let c = if b_score > a_score { b_point } else { a_point };
                    [lower_unset_axis(c, 0), lower_unset_axis(c, 1)]
                } else {
                    let c = a_point | b_point;
                    [corner(c), lower_unset_axis(c, 0)]
                }
            }
            Region3::Far => {
                // Closest two of (1,1,0), (1,0,1), (0,1,1)
                let (mut a_point, mut a_score) = (0x06u8, xins);
                let (mut b_point, mut b_score) = (0x05u8, yins);
                if a_score <= b_score && zins < b_score {
                    b_score = zins;
                    b_point = 0x03;
                } else if a_score > b_score && zins < a_score {
                    a_score = zins;
                    a_point = 0x03;
                }

                let wins = 3.0 - in_sum;
                if wins < a_score || wins < b_score {
                    // (1,1,1) is one of the closest two
                    let c = if b_score < a_score { b_point } else { a_point };
                    [raise_set_axis(c, 0), raise_set_axis(c, 1)]
                } else {
                    let c = a_point & b_point;
                    [corner(c), scaled(c, 2)]
                }
            }
            Region3::Middle => {
                // (0,0,1) vs (1,1,0)
                let p1 = xins + yins;
                let (a_score, mut a_point, mut a_further) = if p1 > 1.0 {
                    (p1 - 1.0, 0x03u8, true)
                } else {
                    (1.0 - p1, 0x04u8, false)
                };

                // (0,1,0) vs (1,0,1)
                let p2 = xins + zins;
                let (b_score, mut b_point, mut b_further) = if p2 > 1.0 {
                    (p2 - 1.0, 0x05u8, true)
                } else {
                    (1.0 - p2, 0x02u8, false)
                };

                // The closer of (1,0,0) and (0,1,1) replaces the further of a and b, if closer
                let p3 = yins + zins;
                let (score, point, further) = if p3 > 1.0 {
                    (p3 - 1.0, 0x06u8, true)
                } else {
                    (1.0 - p3, 0x01u8, false)
                };
                if a_score <= b_score && a_score < score {
                    a_point = point;
                    a_further = further;
                } else if a_score > b_score && b_score < score {
                    b_point = point;
                    b_further = further;
                }

                match (a_further, b_further) {
                    // Both on the (1,1,1) side: (1,1,1) plus the shared axis doubled
                    (true, true) => [[1, 1, 1], scaled(a_point & b_point, 2)],
                    // Both on the (0,0,0) side: (0,0,0) plus the omitted axis at -1
                    (false, false) => [[0, 0, 0], lower_unset_axis(a_point | b_point, 0)],
                    _ => {
                        let (c1, c2) = if a_further {
                            (a_point, b_point)
                        } else {
                            (b_point, a_point)
                        };
                        // a permutation of (1,1,-1) and a permutation of (0,0,2)
                        [lower_unset_axis(c1, 0), scaled(c2, 2)]
                    }
                }
            }
        }
    }
}

/// 3D OpenSimplex noise at `(x, y, z)`.
///
/// Output is roughly within `[-1, 1]`; it is not clamped.
pub fn noise3(ctx: &PermutationContext, x: f64, y: f64, z: f64) -> f64 {
    // Place input coordinates on the simplectic honeycomb
    let stretch_offset = (x + y + z) * STRETCH_3D;
    let xs = x + stretch_offset;
    let ys = y + stretch_offset;
    let zs = z + stretch_offset;

    let xsb = fast_floor(xs);
    let ysb = fast_floor(ys);
    let zsb = fast_floor(zs);

    // Skew back out to the actual coordinates of the rhombohedron origin
    let squish_offset = (xsb as f64 + ysb as f64 + zsb as f64) * SQUISH_3D;
    let xb = xsb as f64 + squish_offset;
    let yb = ysb as f64 + squish_offset;
    let zb = zsb as f64 + squish_offset;

    let ins = [xs - xsb as f64, ys - ysb as f64, zs - zsb as f64];
    let in_sum = ins[0] + ins[1] + ins[2];

    let cell = Cell::new([xsb, ysb, zsb], [x - xb, y - yb, z - zb], SQUISH_3D);
    let gradient = |sv: [i32; 3], d: [f64; 3]| extrapolate3(ctx, sv, d);

    let region = Region3::classify(in_sum);
    let mut value = 0.0;
    for &offset in region.vertices() {
        value += cell.contribution(offset, gradient);
    }
    for offset in region.extra_vertices(ins, in_sum) {
        value += cell.contribution(offset, gradient);
    }

    value / NORM_3D
}
