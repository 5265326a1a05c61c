// Raster sampling and 8-bit encoding of noise fields.
//
// The library stops at in-memory `image` buffers; writing them out in a
// particular format is left to the caller.

use image::{GrayImage, Luma, Rgba, RgbaImage};
use tracing::debug;

use crate::error::RenderError;
use crate::utils::{HeightMap2D, flatten2, range2};

/// Sample `f(x / feature_size, y / feature_size)` at every pixel of a
/// `width`×`height` raster.
///
/// `feature_size` is the number of pixels per unit of noise space, so
/// larger values give broader features.
pub fn sample2<F>(
    width: usize,
    height: usize,
    feature_size: f64,
    mut f: F,
) -> Result<HeightMap2D, RenderError>
where
    F: FnMut(f64, f64) -> f64,
{
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyRaster { width, height });
    }
    if !(feature_size.is_finite() && feature_size > 0.0) {
        return Err(RenderError::InvalidFeatureSize(feature_size));
    }

    let map: HeightMap2D = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| f(x as f64 / feature_size, y as f64 / feature_size) as f32)
                .collect()
        })
        .collect();

    if let Some((min, max)) = range2(&map) {
        debug!(width, height, feature_size, min, max, "sampled raster");
    }
    Ok(map)
}

/// Map a noise value in `[-1, 1]` onto a byte.
///
/// Truncates `(value + 1) * 127.5`; out-of-range values saturate and NaN
/// maps to 0.
#[inline]
pub fn to_channel(value: f32) -> u8 {
    ((value + 1.0) * 127.5) as u8
}

// Width and height of a rectangular, non-empty map
fn dimensions(map: &HeightMap2D) -> Result<(u32, u32), RenderError> {
    let height = map.len();
    let width = map.first().map_or(0, Vec::len);
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyRaster { width, height });
    }
    if let Some((row, found)) = map
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != width)
    {
        return Err(RenderError::RaggedRows {
            row,
            expected: width,
            found,
        });
    }

    let w = u32::try_from(width).map_err(|_| RenderError::TooLarge(width))?;
    let h = u32::try_from(height).map_err(|_| RenderError::TooLarge(height))?;
    Ok((w, h))
}

/// Encode a height map as 8-bit greyscale.
pub fn to_gray_image(map: &HeightMap2D) -> Result<GrayImage, RenderError> {
    let (width, height) = dimensions(map)?;
    let pixels: Vec<u8> = flatten2(map).into_iter().map(to_channel).collect();
    debug!(width, height, "encoding grey image");
    // dimensions() guarantees width * height samples
    Ok(GrayImage::from_fn(width, height, |x, y| {
        Luma([pixels[y as usize * width as usize + x as usize]])
    }))
}

/// Encode a height map as opaque grey RGBA, one byte per channel.
pub fn to_rgba_image(map: &HeightMap2D) -> Result<RgbaImage, RenderError> {
    let (width, height) = dimensions(map)?;
    debug!(width, height, "encoding rgba image");
    Ok(RgbaImage::from_fn(width, height, |x, y| {
        let c = to_channel(map[y as usize][x as usize]);
        Rgba([c, c, c, 0xFF])
    }))
}
