use crate::context::PermutationContext;

// Gradients for 2D. They approximate the directions to the
// vertices of an octagon from the center.
#[rustfmt::skip]
pub const GRADIENTS_2D: [i8; 16] = [
     5,  2,    2,  5,
    -5,  2,   -2,  5,
     5, -2,    2, -5,
    -5, -2,   -2, -5,
];

// Gradients for 3D. They approximate the directions to the vertices of a
// rhombicuboctahedron from the center, skewed so that the triangular and
// square facets can be inscribed inside circles of the same radius.
#[rustfmt::skip]
pub const GRADIENTS_3D: [i8; 72] = [
    -11,  4,  4,     -4,  11,  4,    -4,  4,  11,
     11,  4,  4,      4,  11,  4,     4,  4,  11,
    -11, -4,  4,     -4, -11,  4,    -4, -4,  11,
     11, -4,  4,      4, -11,  4,     4, -4,  11,
    -11,  4, -4,     -4,  11, -4,    -4,  4, -11,
     11,  4, -4,      4,  11, -4,     4,  4, -11,
    -11, -4, -4,     -4, -11, -4,    -4, -4, -11,
     11, -4, -4,      4, -11, -4,     4, -4, -11,
];

// Gradients for 4D. They approximate the directions to the vertices of a
// disprismatotesseractihexadecachoron from the center, skewed so that the
// tetrahedral and cubic facets can be inscribed inside spheres of the same
// radius.
#[rustfmt::skip]
pub const GRADIENTS_4D: [i8; 256] = [
     3,  1,  1,  1,      1,  3,  1,  1,      1,  1,  3,  1,      1,  1,  1,  3,
    -3,  1,  1,  1,     -1,  3,  1,  1,     -1,  1,  3,  1,     -1,  1,  1,  3,
     3, -1,  1,  1,      1, -3,  1,  1,      1, -1,  3,  1,      1, -1,  1,  3,
    -3, -1,  1,  1,     -1, -3,  1,  1,     -1, -1,  3,  1,     -1, -1,  1,  3,
     3,  1, -1,  1,      1,  3, -1,  1,      1,  1, -3,  1,      1,  1, -1,  3,
    -3,  1, -1,  1,     -1,  3, -1,  1,     -1,  1, -3,  1,     -1,  1, -1,  3,
     3, -1, -1,  1,      1, -3, -1,  1,      1, -1, -3,  1,      1, -1, -1,  3,
    -3, -1, -1,  1,     -1, -3, -1,  1,     -1, -1, -3,  1,     -1, -1, -1,  3,
     3,  1,  1, -1,      1,  3,  1, -1,      1,  1,  3, -1,      1,  1,  1, -3,
    -3,  1,  1, -1,     -1,  3,  1, -1,     -1,  1,  3, -1,     -1,  1,  1, -3,
     3, -1,  1, -1,      1, -3,  1, -1,      1, -1,  3, -1,      1, -1,  1, -3,
    -3, -1,  1, -1,     -1, -3,  1, -1,     -1, -1,  3, -1,     -1, -1,  1, -3,
     3,  1, -1, -1,      1,  3, -1, -1,      1,  1, -3, -1,      1,  1, -1, -3,
    -3,  1, -1, -1,     -1,  3, -1, -1,     -1,  1, -3, -1,     -1,  1, -1, -3,
     3, -1, -1, -1,      1, -3, -1, -1,      1, -1, -3, -1,      1, -1, -1, -3,
    -3, -1, -1, -1,     -1, -3, -1, -1,     -1, -1, -3, -1,     -1, -1, -1, -3,
];

#[inline(always)]
fn dot<const N: usize>(gradient: &[i8], d: [f64; N]) -> f64 {
    let mut sum = 0.0;
    for i in 0..N {
        sum += gradient[i] as f64 * d[i];
    }
    sum
}

/// Dot product of the hashed 2D gradient at lattice vertex `sv` with `d`.
#[inline(always)]
pub fn extrapolate2(ctx: &PermutationContext, sv: [i32; 2], d: [f64; 2]) -> f64 {
    // masking with 0x0E keeps the index even, i.e. on a gradient boundary
    let index = (ctx.hash(sv[0], sv[1]) & 0x0E) as usize;
    dot(&GRADIENTS_2D[index..index + 2], d)
}

/// Dot product of the hashed 3D gradient at lattice vertex `sv` with `d`.
#[inline(always)]
pub fn extrapolate3(ctx: &PermutationContext, sv: [i32; 3], d: [f64; 3]) -> f64 {
    let index = ctx.grad_index_3d_at(ctx.hash(sv[0], sv[1]).wrapping_add(sv[2]));
    dot(&GRADIENTS_3D[index..index + 3], d)
}

/// Dot product of the hashed 4D gradient at lattice vertex `sv` with `d`.
#[inline(always)]
pub fn extrapolate4(ctx: &PermutationContext, sv: [i32; 4], d: [f64; 4]) -> f64 {
    let xyz = ctx.perm_at(ctx.hash(sv[0], sv[1]).wrapping_add(sv[2])) as i32;
    let index = (ctx.perm_at(xyz.wrapping_add(sv[3])) & 0xFC) as usize;
    dot(&GRADIENTS_4D[index..index + 4], d)
}
