use anyhow::Result;
use image::{Rgb, RgbImage};
use opensimplex::render::sample2;
use opensimplex::{Fractal, HeightMap2D, NoiseGenerator, OpenSimplex, normalize2};
use palette::{Gradient, LinSrgb};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

const SIZE: usize = 512;
const SEED: i64 = 2025;

// Compute simple hillshade for a height-map
// `z_scale` adjusts vertical exaggeration
fn hillshade(map: &HeightMap2D, z_scale: f32) -> HeightMap2D {
    let h = map.len();
    let w = map[0].len();
    let mut shade = vec![vec![1.0; w]; h];
    let azimuth = std::f32::consts::FRAC_PI_4; // 45°
    let altitude = std::f32::consts::FRAC_PI_4; // 45°
    let (sin_alt, cos_alt) = altitude.sin_cos();
    let (lx, ly, lz) = (azimuth.cos() * cos_alt, azimuth.sin() * cos_alt, sin_alt);

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            // central differences
            let dzdx = ((map[y][x + 1] - map[y][x - 1]) / 2.0) * z_scale;
            let dzdy = ((map[y + 1][x] - map[y - 1][x]) / 2.0) * z_scale;
            let len = (dzdx * dzdx + dzdy * dzdy + 1.0).sqrt();
            // Lambertian dot with the light direction
            shade[y][x] = ((-dzdx * lx - dzdy * ly + lz) / len).max(0.0);
        }
    }
    shade
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Six octaves of 3D noise sliced at z = 0
    let terrain_noise = Fractal::new(OpenSimplex::new(SEED), 1.0, 0.5, 6);
    let mut terrain = sample2(SIZE, SIZE, 128.0, |x, y| terrain_noise.get3(x, y, 0.0))?;
    normalize2(&mut terrain);

    let shade = hillshade(&terrain, 40.0);

    // Create a color gradient - deep water to beach to grass to rock to snow
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)), // deep blue
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)), // sand
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)), // green
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)), // rock
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)), // snow
    ]);

    let mut img = RgbImage::new(SIZE as u32, SIZE as u32);
    for (y, row) in terrain.iter().enumerate() {
        for (x, &h) in row.iter().enumerate() {
            let col: LinSrgb = gradient.get(h);
            let rgb = col.into_format::<u8>();
            let light = (shade[y][x] * 0.5 + 0.5).clamp(0.0, 1.0);
            let pixel = Rgb([
                (rgb.red as f32 * light) as u8,
                (rgb.green as f32 * light) as u8,
                (rgb.blue as f32 * light) as u8,
            ]);
            img.put_pixel(x as u32, y as u32, pixel);
        }
    }

    let path = Path::new("terrain_final.png");
    img.save(path)?;
    info!(?path, "saved final terrain image");
    Ok(())
}
