use crate::context::PermutationContext;
use crate::simplex2::noise2;
use crate::simplex3::noise3;
use crate::simplex4::noise4;

// Noise source that can be sampled in 2, 3 or 4 dimensions.
// Lets `Fractal` and the renderers stay agnostic of what they sample.
pub trait NoiseGenerator {
    // Sample 2D noise at (x, y).
    fn get2(&self, x: f64, y: f64) -> f64;

    // Sample 3D noise at (x, y, z).
    fn get3(&self, x: f64, y: f64, z: f64) -> f64;

    // Sample 4D noise at (x, y, z, w).
    fn get4(&self, x: f64, y: f64, z: f64, w: f64) -> f64;
}

impl<G: NoiseGenerator + ?Sized> NoiseGenerator for &G {
    fn get2(&self, x: f64, y: f64) -> f64 {
        (**self).get2(x, y)
    }

    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        (**self).get3(x, y, z)
    }

    fn get4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        (**self).get4(x, y, z, w)
    }
}

/// Single-octave OpenSimplex noise owning its permutation context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct OpenSimplex {
    ctx: PermutationContext,
}

impl OpenSimplex {
    pub fn new(seed: i64) -> Self {
        Self {
            ctx: PermutationContext::new(seed),
        }
    }

    pub fn from_context(ctx: PermutationContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &PermutationContext {
        &self.ctx
    }
}

impl NoiseGenerator for OpenSimplex {
    #[inline]
    fn get2(&self, x: f64, y: f64) -> f64 {
        noise2(&self.ctx, x, y)
    }

    #[inline]
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        noise3(&self.ctx, x, y, z)
    }

    #[inline]
    fn get4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        noise4(&self.ctx, x, y, z, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opensimplex_delegates_to_kernel() {
        let g = OpenSimplex::new(77374);
        let ctx = PermutationContext::new(77374);
        assert_eq!(g.get2(0.3, 0.7), noise2(&ctx, 0.3, 0.7));
        assert_eq!(g.get3(0.3, 0.7, 1.1), noise3(&ctx, 0.3, 0.7, 1.1));
        assert_eq!(g.get4(0.3, 0.7, 1.1, -2.0), noise4(&ctx, 0.3, 0.7, 1.1, -2.0));
    }

    #[test]
    fn opensimplex_from_context_roundtrip() {
        let ctx = PermutationContext::new(-5);
        let g = OpenSimplex::from_context(ctx);
        assert_eq!(g.context(), &ctx);
        assert_eq!(g, OpenSimplex::new(-5));
    }

    #[test]
    fn references_are_generators() {
        fn sample<G: NoiseGenerator>(g: G) -> f64 {
            g.get2(1.0, 2.0)
        }
        let g = OpenSimplex::default();
        assert_eq!(sample(&g), g.get2(1.0, 2.0));
    }
}
