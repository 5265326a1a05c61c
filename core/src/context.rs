use crate::gradients::GRADIENTS_3D;

/// Seed used by `PermutationContext::default()`.
pub const DEFAULT_SEED: i64 = 0;

const LCG_MULTIPLIER: i64 = 6364136223846793005;
const LCG_INCREMENT: i64 = 1442695040888963407;

// Number of distinct 3D gradients (each entry is an x,y,z triplet)
const GRADIENT_COUNT_3D: u8 = (GRADIENTS_3D.len() / 3) as u8;

/// Seed-derived lookup tables shared by every noise evaluation.
///
/// `perm` is a permutation of `0..=255`. `grad_index_3d[i]` caches the
/// offset of the 3D gradient selected by `perm[i]`, so the 3D evaluator
/// never has to divide at query time.
///
/// The context is immutable once built and is plain data (two 256-byte
/// tables), so it can be shared freely between threads or uploaded as-is
/// into constant memory.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct PermutationContext {
    perm: [u8; 256],
    grad_index_3d: [u8; 256],
}

#[inline]
const fn lcg_step(seed: i64) -> i64 {
    seed.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT)
}

impl PermutationContext {
    /// Build the tables for `seed`.
    ///
    /// Output is bit-identical across platforms for a given seed: the LCG
    /// relies on two's complement wraparound, and each draw is normalized
    /// into `0..=i` before it is used.
    pub fn new(seed: i64) -> Self {
        let mut source = [0u8; 256];
        for (i, slot) in source.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut state = lcg_step(lcg_step(lcg_step(seed)));

        let mut perm = [0u8; 256];
        let mut grad_index_3d = [0u8; 256];

        // Draw without replacement from the shrinking prefix of `source`
        for i in (0..256usize).rev() {
            state = lcg_step(state);
            let r = state.wrapping_add(31).rem_euclid(i as i64 + 1) as usize;
            perm[i] = source[r];
            grad_index_3d[i] = (perm[i] % GRADIENT_COUNT_3D) * 3;
            source[r] = source[i];
        }

        #[cfg(feature = "std")]
        tracing::trace!(seed, head = ?&perm[..8], "built permutation context");

        Self {
            perm,
            grad_index_3d,
        }
    }

    #[inline]
    pub fn perm(&self) -> &[u8; 256] {
        &self.perm
    }

    #[inline]
    pub fn grad_index_3d(&self) -> &[u8; 256] {
        &self.grad_index_3d
    }

    // perm[(perm[a & 255] + b) & 255], the chained hash shared by all dimensions
    #[inline(always)]
    pub(crate) fn hash(&self, a: i32, b: i32) -> i32 {
        let first = self.perm[(a & 0xFF) as usize] as i32;
        self.perm[(first.wrapping_add(b) & 0xFF) as usize] as i32
    }

    #[inline(always)]
    pub(crate) fn perm_at(&self, index: i32) -> u8 {
        self.perm[(index & 0xFF) as usize]
    }

    #[inline(always)]
    pub(crate) fn grad_index_3d_at(&self, index: i32) -> usize {
        self.grad_index_3d[(index & 0xFF) as usize] as usize
    }
}

impl Default for PermutationContext {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
