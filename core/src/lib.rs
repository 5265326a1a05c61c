// OpenSimplex noise kernel in 2, 3 and 4 dimensions.
//
// The kernel (context, gradients, evaluators, generators) has no heap use and
// no float library calls, so it builds without `std` and gives the same bits
// on any host. Raster helpers live behind the default `std` feature.
#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod context;
pub mod fractal;
pub mod generator;
pub mod gradients;
pub mod lattice;
pub mod simplex2;
pub mod simplex3;
pub mod simplex4;

#[cfg(feature = "std")]
pub mod error;
#[cfg(feature = "std")]
pub mod render;
#[cfg(feature = "std")]
pub mod utils;

pub use context::{DEFAULT_SEED, PermutationContext};
pub use fractal::Fractal;
pub use generator::{NoiseGenerator, OpenSimplex};
pub use simplex2::noise2;
pub use simplex3::noise3;
pub use simplex4::noise4;

#[cfg(feature = "std")]
pub use error::RenderError;
#[cfg(feature = "std")]
pub use utils::{HeightMap2D, flatten2, normalize2};
