use crate::context::PermutationContext;
use crate::gradients::extrapolate4;
use crate::lattice::{Cell, corner, fast_floor, lower_unset_axis, raise_set_axis, scaled};

const STRETCH_4D: f64 = -0.138196601125011; // (1 / sqrt(4 + 1) - 1) / 4
const SQUISH_4D: f64 = 0.309016994374947; // (sqrt(4 + 1) - 1) / 4
const NORM_4D: f64 = 30.0;

#[rustfmt::skip]
const ORIGIN_PENTACHORON: [[i32; 4]; 5] = [
    [0, 0, 0, 0], [1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1],
];
#[rustfmt::skip]
const FAR_PENTACHORON: [[i32; 4]; 5] = [
    [1, 1, 1, 0], [1, 1, 0, 1], [1, 0, 1, 1], [0, 1, 1, 1], [1, 1, 1, 1],
];
#[rustfmt::skip]
const LOWER_DISPENTACHORON: [[i32; 4]; 10] = [
    [1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1],
    [1, 1, 0, 0], [1, 0, 1, 0], [1, 0, 0, 1], [0, 1, 1, 0], [0, 1, 0, 1], [0, 0, 1, 1],
];
#[rustfmt::skip]
const UPPER_DISPENTACHORON: [[i32; 4]; 10] = [
    [1, 1, 1, 0], [1, 1, 0, 1], [1, 0, 1, 1], [0, 1, 1, 1],
    [1, 1, 0, 0], [1, 0, 1, 0], [1, 0, 0, 1], [0, 1, 1, 0], [0, 1, 0, 1], [0, 0, 1, 1],
];

#[derive(Clone, Copy, Debug)]
struct Candidate {
    point: u8,
    score: f64,
    // false once a single-axis (or triple-axis) point displaces a pair point
    bigger_side: bool,
}

/// Running pick of the two region vertices closest to the sample.
#[derive(Clone, Copy, Debug)]
struct ClosestPair {
    a: Candidate,
    b: Candidate,
}

impl ClosestPair {
    #[inline(always)]
    fn new(a: (u8, f64), b: (u8, f64)) -> Self {
        Self {
            a: Candidate { point: a.0, score: a.1, bigger_side: true },
            b: Candidate { point: b.0, score: b.1, bigger_side: true },
        }
    }

    // Higher score is closer: replace the weaker of a and b if beaten
    #[inline(always)]
    fn offer_max(&mut self, point: u8, score: f64, bigger_side: bool) {
        let offered = Candidate { point, score, bigger_side };
        if self.a.score >= self.b.score && score > self.b.score {
            self.b = offered;
        } else if self.a.score < self.b.score && score > self.a.score {
            self.a = offered;
        }
    }

    // Lower score is closer
    #[inline(always)]
    fn offer_min(&mut self, point: u8, score: f64, bigger_side: bool) {
        let offered = Candidate { point, score, bigger_side };
        if self.a.score <= self.b.score && score < self.b.score {
            self.b = offered;
        } else if self.a.score > self.b.score && score < self.a.score {
            self.a = offered;
        }
    }

    // (bigger-side point, smaller-side point) when the two straddle sides
    #[inline(always)]
    fn by_side(&self) -> (u8, u8) {
        if self.a.bigger_side {
            (self.a.point, self.b.point)
        } else {
            (self.b.point, self.a.point)
        }
    }
}

/// Which part of the rhombo-hypercube super-cell holds the sample.
///
/// Two pentachora (4-simplices) sit at (0,0,0,0) and (1,1,1,1); the two
/// dispentachora (rectified 4-simplices) fill the space between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Region4 {
    Origin,
    Far,
    LowerMiddle,
    UpperMiddle,
}

impl Region4 {
    #[inline(always)]
    fn classify(in_sum: f64) -> Self {
        if in_sum <= 1.0 {
            Region4::Origin
        } else if in_sum >= 3.0 {
            Region4::Far
        } else if in_sum <= 2.0 {
            Region4::LowerMiddle
        } else {
            Region4::UpperMiddle
        }
    }

    #[inline(always)]
    fn vertices(self) -> &'static [[i32; 4]] {
        match self {
            Region4::Origin => &ORIGIN_PENTACHORON,
            Region4::Far => &FAR_PENTACHORON,
            Region4::LowerMiddle => &LOWER_DISPENTACHORON,
            Region4::UpperMiddle => &UPPER_DISPENTACHORON,
        }
    }

    /// The three lattice points outside the region that may still contribute.
    #[inline(always)]
    fn extra_vertices(self, ins: [f64; 4], in_sum: f64) -> [[i32; 4]; 3] {
        let [xins, yins, zins, wins] = ins;
        match self {
            Region4::Origin => {
                let mut pair = ClosestPair::new((0x01, xins), (0x02, yins));
                pair.offer_max(0x04, zins, true);
                pair.offer_max(0x08, wins, true);
                let (a, b) = (pair.a, pair.b);

                let uins = 1.0 - in_sum;
                if uins > a.score || uins > b.score {
                    // (0,0,0,0) is one of the closest two
                    let c = if b.score > a.score { b.point } else { a.point };
                    [
                        lower_unset_axis(c, 0),
                        lower_unset_axis(c, 1),
                        lower_unset_axis(c, 2),
                    ]
                } else {
                    let c = a.point | b.point;
                    [corner(c), lower_unset_axis(c, 0), lower_unset_axis(c, 1)]
                }
            }
            Region4::Far => {
                let mut pair = ClosestPair::new((0x0E, xins), (0x0D, yins));
                pair.offer_min(0x0B, zins, true);
                pair.offer_min(0x07, wins, true);
                let (a, b) = (pair.a, pair.b);

                let uins = 4.0 - in_sum;
                if uins < a.score || uins < b.score {
                    // (1,1,1,1) is one of the closest two
                    let c = if b.score < a.score { b.point } else { a.point };
                    [
                        raise_set_axis(c, 0),
                        raise_set_axis(c, 1),
                        raise_set_axis(c, 2),
                    ]
                } else {
                    let c = a.point & b.point;
                    [corner(c), raise_set_axis(c, 0), raise_set_axis(c, 1)]
                }
            }
            Region4::LowerMiddle => {
                // (1,1,0,0) vs (0,0,1,1), then (1,0,1,0) vs (0,1,0,1)
                let a = if xins + yins > zins + wins {
                    (0x03, xins + yins)
                } else {
                    (0x0C, zins + wins)
                };
                let b = if xins + zins > yins + wins {
                    (0x05, xins + zins)
                } else {
                    (0x0A, yins + wins)
                };
                let mut pair = ClosestPair::new(a, b);

                // The closer of (1,0,0,1) and (0,1,1,0) may replace one of them
                if xins + wins > yins + zins {
                    pair.offer_max(0x09, xins + wins, true);
                } else {
                    pair.offer_max(0x06, yins + zins, true);
                }

                // Then each single-axis vertex
                let base = 2.0 - in_sum;
                pair.offer_max(0x01, base + xins, false);
                pair.offer_max(0x02, base + yins, false);
                pair.offer_max(0x04, base + zins, false);
                pair.offer_max(0x08, base + wins, false);

                let (a, b) = (pair.a, pair.b);
                match (a.bigger_side, b.bigger_side) {
                    (true, true) => {
                        let c1 = a.point | b.point;
                        let c2 = a.point & b.point;
                        [corner(c1), lower_unset_axis(c1, 0), scaled(c2, 2)]
                    }
                    (false, false) => {
                        let c = a.point | b.point;
                        [lower_unset_axis(c, 0), lower_unset_axis(c, 1), [0, 0, 0, 0]]
                    }
                    _ => {
                        let (c1, c2) = pair.by_side();
                        [lower_unset_axis(c1, 0), lower_unset_axis(c1, 1), scaled(c2, 2)]
                    }
                }
            }
            Region4::UpperMiddle => {
                // (0,0,1,1) vs (1,1,0,0), then (0,1,0,1) vs (1,0,1,0)
                let a = if xins + yins < zins + wins {
                    (0x0C, xins + yins)
                } else {
                    (0x03, zins + wins)
                };
                let b = if xins + zins < yins + wins {
                    (0x0A, xins + zins)
                } else {
                    (0x05, yins + wins)
                };
                let mut pair = ClosestPair::new(a, b);

                // The closer of (0,1,1,0) and (1,0,0,1) may replace one of them
                if xins + wins < yins + zins {
                    pair.offer_min(0x06, xins + wins, true);
                } else {
                    pair.offer_min(0x09, yins + zins, true);
                }

                // Then each triple-axis vertex, named by its missing axis
                let base = 3.0 - in_sum;
                pair.offer_min(0x0E, base + xins, false);
                pair.offer_min(0x0D, base + yins, false);
                pair.offer_min(0x0B, base + zins, false);
                pair.offer_min(0x07, base + wins, false);

                let (a, b) = (pair.a, pair.b);
                match (a.bigger_side, b.bigger_side) {
                    (true, true) => {
                        let c1 = a.point & b.point;
                        let c2 = a.point | b.point;
                        [corner(c1), scaled(c1, 2), lower_unset_axis(c2, 0)]
                    }
                    (false, false) => {
                        let c = a.point & b.point;
                        [raise_set_axis(c, 0), raise_set_axis(c, 1), [1, 1, 1, 1]]
                    }
                    _ => {
                        let (c1, c2) = pair.by_side();
                        [raise_set_axis(c1, 0), raise_set_axis(c1, 1), lower_unset_axis(c2, 0)]
                    }
                }
            }
        }
    }
}

/// 4D OpenSimplex noise at `(x, y, z, w)`.
///
/// Output is roughly within `[-1, 1]`; it is not clamped.
pub fn noise4(ctx: &PermutationContext, x: f64, y: f64, z: f64, w: f64) -> f64 {
    // Place input coordinates on the simplectic honeycomb
    let stretch_offset = (x + y + z + w) * STRETCH_4D;
    let xs = x + stretch_offset;
    let ys = y + stretch_offset;
    let zs = z + stretch_offset;
    let ws = w + stretch_offset;

    let xsb = fast_floor(xs);
    let ysb = fast_floor(ys);
    let zsb = fast_floor(zs);
    let wsb = fast_floor(ws);

    let squish_offset = (xsb as f64 + ysb as f64 + zsb as f64 + wsb as f64) * SQUISH_4D;
    let xb = xsb as f64 + squish_offset;
    let yb = ysb as f64 + squish_offset;
    let zb = zsb as f64 + squish_offset;
    let wb = wsb as f64 + squish_offset;

    let ins = [
        xs - xsb as f64,
        ys - ysb as f64,
        zs - zsb as f64,
        ws - wsb as f64,
    ];
    let in_sum = ins[0] + ins[1] + ins[2] + ins[3];

    let cell = Cell::new(
        [xsb, ysb, zsb, wsb],
        [x - xb, y - yb, z - zb, w - wb],
        SQUISH_4D,
    );
    let gradient = |sv: [i32; 4], d: [f64; 4]| extrapolate4(ctx, sv, d);

    let region = Region4::classify(in_sum);
    let mut value = 0.0;
    for &offset in region.vertices() {
        value += cell.contribution(offset, gradient);
    }
    for offset in region.extra_vertices(ins, in_sum) {
        value += cell.contribution(offset, gradient);
    }

    value / NORM_4D
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simplex4_determinism() {
        let a = PermutationContext::new(31337);
        let b = PermutationContext::new(31337);
        assert_eq!(
            noise4(&a, 1.23, 4.56, 7.89, -0.12),
            noise4(&b, 1.23, 4.56, 7.89, -0.12)
        );
    }

    #[test]
    fn simplex4_reference_value() {
        let ctx = PermutationContext::new(0);
        let v = noise4(&ctx, 1.5, -2.5, 0.75, -0.25);
        assert!((v - 0.1040088268556025).abs() < 1e-9, "got {}", v);
    }

    #[test]
    fn regions_split_on_in_sum() {
        assert_eq!(Region4::classify(1.0), Region4::Origin);
        assert_eq!(Region4::classify(1.5), Region4::LowerMiddle);
        assert_eq!(Region4::classify(2.0), Region4::LowerMiddle);
        assert_eq!(Region4::classify(2.5), Region4::UpperMiddle);
        assert_eq!(Region4::classify(3.0), Region4::Far);
    }

    #[test]
    fn closest_pair_tie_breaks() {
        // equal scores: offer_max only displaces b
        let mut pair = ClosestPair::new((0x01, 0.5), (0x02, 0.5));
        pair.offer_max(0x04, 0.6, true);
        assert_eq!((pair.a.point, pair.b.point), (0x01, 0x04));

        let mut pair = ClosestPair::new((0x01, 0.5), (0x02, 0.5));
        pair.offer_min(0x04, 0.4, false);
        assert_eq!((pair.a.point, pair.b.point), (0x01, 0x04));
        assert!(!pair.b.bigger_side);
        assert_eq!(pair.by_side(), (0x01, 0x04));
    }

    #[test]
    fn extra_vertices_lie_outside_the_region() {
        let samples = [
            [0.1, 0.2, 0.05, 0.3],
            [0.3, 0.25, 0.2, 0.15],
            [0.9, 0.1, 0.2, 0.4],
            [0.5, 0.5, 0.45, 0.4],
            [0.7, 0.6, 0.65, 0.4],
            [0.95, 0.9, 0.2, 0.5],
            [0.9, 0.8, 0.85, 0.7],
            [0.99, 0.98, 0.6, 0.95],
        ];
        for ins in samples {
            let in_sum = ins.iter().sum::<f64>();
            let region = Region4::classify(in_sum);
            for extra in region.extra_vertices(ins, in_sum) {
                assert!(
                    !region.vertices().contains(&extra),
                    "{:?} already in {:?}",
                    extra,
                    region
                );
            }
        }
    }

    #[test]
    fn origin_extra_vertices_near_origin() {
        // (0,0,0,0) and (0,0,0,1) closest
        let ins = [0.01, 0.02, 0.03, 0.2];
        assert_eq!(
            Region4::Origin.extra_vertices(ins, 0.26),
            [[-1, 0, 0, 1], [0, -1, 0, 1], [0, 0, -1, 1]]
        );
    }
}
