use anyhow::Result;
use opensimplex::render::{sample2, to_rgba_image};
use opensimplex::{Fractal, NoiseGenerator, OpenSimplex};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

const WIDTH: usize = 512;
const HEIGHT: usize = 512;
const FEATURE_SIZE: f64 = 24.0;
const SEED: i64 = 77374;

// Render one field and write it as a 32-bit TGA
fn save_field<F>(filename: &str, f: F) -> Result<()>
where
    F: FnMut(f64, f64) -> f64,
{
    let map = sample2(WIDTH, HEIGHT, FEATURE_SIZE, f)?;
    let img = to_rgba_image(&map)?;
    let path = Path::new(filename);
    img.save(path)?;
    info!(?path, "saved");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let simplex = OpenSimplex::new(SEED);

    // Three octaves of 4D noise on the z = w = 0 plane: features at
    // 4x, 2x and 1x the base size, weighted 4:2:1
    let octaves = Fractal::new(simplex, 0.25, 0.5, 3);
    save_field("noise4_octaves.tga", |x, y| octaves.get4(x, y, 0.0, 0.0))?;

    save_field("noise2.tga", |x, y| simplex.get2(x, y))?;
    save_field("noise3.tga", |x, y| simplex.get3(x, y, 0.0))?;

    // Single-octave 4D slice for comparison
    save_field("noise4.tga", |x, y| simplex.get4(x, y, 0.0, 0.0))?;

    Ok(())
}
