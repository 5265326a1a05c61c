// Shared lattice machinery for the simplex evaluators.
//
// Every contributing vertex is written as a small integer offset from the
// origin of the stretched super-cell. Case tables pick offsets; `Cell`
// turns an offset into a displacement and an attenuated contribution.

/// Floor toward negative infinity without calling into a float library.
///
/// Truncate, then step down when truncation rounded up (negative inputs).
/// Out-of-range inputs saturate at the `i32` limits.
#[inline(always)]
pub fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < xi as f64 { xi.saturating_sub(1) } else { xi }
}

/// One stretched super-cell around the sample point.
pub(crate) struct Cell<const N: usize> {
    origin: [i32; N],
    // displacement of the sample from the (squished) origin vertex
    delta: [f64; N],
    squish: f64,
}

impl<const N: usize> Cell<N> {
    #[inline(always)]
    pub(crate) fn new(origin: [i32; N], delta: [f64; N], squish: f64) -> Self {
        Self {
            origin,
            delta,
            squish,
        }
    }

    /// Attenuated contribution of the vertex at `offset` from the origin.
    ///
    /// `gradient` receives the absolute lattice vertex and the displacement
    /// from it. Vertices outside the kernel radius contribute nothing.
    #[inline(always)]
    pub(crate) fn contribution<F>(&self, offset: [i32; N], gradient: F) -> f64
    where
        F: Fn([i32; N], [f64; N]) -> f64,
    {
        let shift = offset.iter().sum::<i32>() as f64 * self.squish;
        let mut d = [0.0; N];
        let mut vertex = [0; N];
        let mut attn = 2.0;
        for i in 0..N {
            d[i] = self.delta[i] - offset[i] as f64 - shift;
            vertex[i] = self.origin[i].wrapping_add(offset[i]);
            attn -= d[i] * d[i];
        }
        if attn > 0.0 {
            let attn = attn * attn;
            attn * attn * gradient(vertex, d)
        } else {
            0.0
        }
    }
}

// Point masks: bit i set means axis i sits at 1 in the unit cell.

/// The unit-cell vertex named by `mask`.
#[inline(always)]
pub(crate) fn corner<const N: usize>(mask: u8) -> [i32; N] {
    let mut v = [0; N];
    for (i, c) in v.iter_mut().enumerate() {
        *c = ((mask >> i) & 1) as i32;
    }
    v
}

/// `corner(mask)` with every set axis scaled to `k`.
#[inline(always)]
pub(crate) fn scaled<const N: usize>(mask: u8, k: i32) -> [i32; N] {
    let mut v = corner::<N>(mask);
    for c in v.iter_mut() {
        *c *= k;
    }
    v
}

/// `corner(mask)` with the `nth` unset axis (in x, y, z, w order) pushed to -1.
#[inline(always)]
pub(crate) fn lower_unset_axis<const N: usize>(mask: u8, nth: usize) -> [i32; N] {
    let mut v = corner::<N>(mask);
    if let Some(i) = (0..N).filter(|&i| mask & (1 << i) == 0).nth(nth) {
        v[i] = -1;
    }
    v
}

/// `corner(mask)` with the `nth` set axis (in x, y, z, w order) raised to 2.
#[inline(always)]
pub(crate) fn raise_set_axis<const N: usize>(mask: u8, nth: usize) -> [i32; N] {
    let mut v = corner::<N>(mask);
    if let Some(i) = (0..N).filter(|&i| mask & (1 << i) != 0).nth(nth) {
        v[i] = 2;
    }
    v
}
