/// Planet texture generation
///
/// Walks the pixel grid, masks out everything beyond the inscribed disc and
/// colors the rest by sampling a noise field through a palette.

use log::{debug, trace};
use rayon::prelude::*;

use crate::error::{PlanetError, Result};
use crate::mask;
use crate::noise_field::{NoiseField, NoiseParameters};
use crate::palette::Palette;
use crate::pixel::{Pixel, TextureBuffer};

/// Source of elevation values for the generator
///
/// Implemented by `NoiseField` and by plain closures, so a fixed value
/// stream can stand in for noise.
pub trait Sampler: Sync {
    fn sample(&self, x: f64, y: f64) -> f64;
}

impl Sampler for NoiseField {
    fn sample(&self, x: f64, y: f64) -> f64 {
        NoiseField::sample(self, x, y)
    }
}

impl<F> Sampler for F
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    fn sample(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// A palette paired with a noise field, ready to render textures of any size
pub struct PlanetGenerator {
    palette: Palette,
    field: NoiseField,
}

impl PlanetGenerator {
    pub fn new(palette: Palette, params: NoiseParameters) -> Self {
        PlanetGenerator {
            palette,
            field: NoiseField::new(params),
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn params(&self) -> &NoiseParameters {
        self.field.params()
    }

    /// Render a `side` x `side` texture on the calling thread
    pub fn render(&self, side: i32) -> Result<TextureBuffer> {
        debug!(
            "Rendering {}x{} {} planet with {:?}",
            side,
            side,
            self.palette,
            self.field.params()
        );
        generate_with_sampler(side, self.palette, &self.field)
    }

    /// Render a texture with rows spread across the rayon pool
    ///
    /// Produces exactly the same bytes as `render`.
    pub fn render_parallel(&self, side: i32) -> Result<TextureBuffer> {
        debug!(
            "Rendering {}x{} {} planet in parallel with {:?}",
            side,
            side,
            self.palette,
            self.field.params()
        );
        generate_parallel_with_sampler(side, self.palette, &self.field)
    }
}

/// Generate a planet texture from fully resolved inputs
///
/// # Arguments
/// * `side` - Width and height of the texture in pixels, must be positive
/// * `palette` - Palette used to color pixels inside the disc
/// * `params` - Validated noise parameters
///
/// # Returns
/// * `Result<TextureBuffer>` - `side * side` pixels, or `InvalidSize` for a non-positive side
pub fn generate(side: i32, palette: Palette, params: NoiseParameters) -> Result<TextureBuffer> {
    PlanetGenerator::new(palette, params).render(side)
}

/// Parallel counterpart of `generate`
pub fn generate_parallel(
    side: i32,
    palette: Palette,
    params: NoiseParameters,
) -> Result<TextureBuffer> {
    PlanetGenerator::new(palette, params).render_parallel(side)
}

/// Generate a texture, taking elevations from an arbitrary sampler
///
/// # Arguments
/// * `side` - Width and height of the texture in pixels, must be positive
/// * `palette` - Palette used to color pixels inside the disc
/// * `sampler` - Elevation source, queried at normalized coordinates in [-0.5, 0.5)
///
/// # Returns
/// * `Result<TextureBuffer>` - `side * side` pixels, or `InvalidSize` for a non-positive side
pub fn generate_with_sampler<S: Sampler + ?Sized>(
    side: i32,
    palette: Palette,
    sampler: &S,
) -> Result<TextureBuffer> {
    let side = validate_side(side)?;
    let width = side as usize;

    let mut pixels = Vec::with_capacity(width * width);
    for y in 0..side {
        for x in 0..side {
            pixels.push(shade(x, y, side, palette, sampler));
        }
    }

    trace!("Generated {} pixels", pixels.len());
    Ok(TextureBuffer::from_pixels(side, pixels))
}

/// Parallel counterpart of `generate_with_sampler`
pub fn generate_parallel_with_sampler<S: Sampler + ?Sized>(
    side: i32,
    palette: Palette,
    sampler: &S,
) -> Result<TextureBuffer> {
    let side = validate_side(side)?;
    let width = side as usize;

    let mut pixels = vec![Pixel::TRANSPARENT; width * width];
    pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = shade(x as u32, y as u32, side, palette, sampler);
            }
        });

    trace!("Generated {} pixels in parallel", pixels.len());
    Ok(TextureBuffer::from_pixels(side, pixels))
}

/// Map a pixel to noise space, centering the planet on the origin
///
/// The result lies in [-0.5, 0.5) regardless of texture size, so detail
/// scales with the planet rather than with the pixel count.
pub fn normalize(x: u32, y: u32, side: u32) -> (f64, f64) {
    let side = side as f64;
    (x as f64 / side - 0.5, y as f64 / side - 0.5)
}

fn shade<S: Sampler + ?Sized>(x: u32, y: u32, side: u32, palette: Palette, sampler: &S) -> Pixel {
    if !mask::contains(x, y, side) {
        return Pixel::TRANSPARENT;
    }

    let (nx, ny) = normalize(x, y, side);
    palette.classify(sampler.sample(nx, ny))
}

fn validate_side(side: i32) -> Result<u32> {
    if side <= 0 {
        return Err(PlanetError::InvalidSize(side));
    }
    Ok(side as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{earth, mars};

    fn params() -> NoiseParameters {
        NoiseParameters::new(3.0, 6, 0.5, 2.0, 1234).unwrap()
    }

    #[test]
    fn test_buffer_size() {
        for side in [1, 2, 7, 16, 33] {
            let texture = generate(side, Palette::Earth, params()).unwrap();
            assert_eq!(texture.side(), side as u32);
            assert_eq!(texture.to_bytes().len(), 4 * (side * side) as usize);
        }
    }

    #[test]
    fn test_invalid_side() {
        assert_eq!(
            generate(0, Palette::Earth, params()),
            Err(PlanetError::InvalidSize(0))
        );
        assert_eq!(
            generate(-3, Palette::Mars, params()),
            Err(PlanetError::InvalidSize(-3))
        );
    }

    #[test]
    fn test_normalize_centers_domain() {
        assert_eq!(normalize(0, 0, 64), (-0.5, -0.5));
        assert_eq!(normalize(32, 32, 64), (0.0, 0.0));
        assert_eq!(normalize(2, 2, 4), (0.0, 0.0));
    }

    #[test]
    fn test_outside_pixels_are_transparent() {
        let texture = generate(32, Palette::Mars, params()).unwrap();
        for y in 0..32 {
            for x in 0..32 {
                let pixel = texture.pixel(x, y).unwrap();
                if mask::contains(x, y, 32) {
                    assert_eq!(pixel.a, 255);
                } else {
                    assert_eq!(pixel, Pixel::TRANSPARENT);
                }
            }
        }
    }

    #[test]
    fn test_forced_values() {
        let texture = generate_with_sampler(64, Palette::Mars, &|_: f64, _: f64| -0.9).unwrap();
        for (i, pixel) in texture.pixels().iter().enumerate() {
            let (x, y) = (i as u32 % 64, i as u32 / 64);
            if mask::contains(x, y, 64) {
                assert_eq!(*pixel, mars::MID_ORANGE);
            }
        }

        let texture = generate_with_sampler(64, Palette::Mars, &|_: f64, _: f64| 0.5).unwrap();
        assert!(
            texture
                .pixels()
                .iter()
                .all(|p| p.is_transparent() || *p == mars::SAND)
        );
    }

    #[test]
    fn test_sampler_sees_normalized_coordinates() {
        // Elevation follows x, so the left half of the disc is water
        let texture = generate_with_sampler(16, Palette::Earth, &|x: f64, _: f64| x).unwrap();
        assert_eq!(texture.pixel(4, 8), Some(earth::WATER));
        assert_eq!(texture.pixel(8, 8), Some(earth::BEACH));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let generator = PlanetGenerator::new(Palette::Earth, params());
        let sequential = generator.render(48).unwrap();
        let parallel = generator.render_parallel(48).unwrap();
        assert_eq!(sequential.as_bytes(), parallel.as_bytes());
    }

    #[test]
    fn test_center_pixel_samples_origin() {
        // The center maps to (0, 0), a lattice point where every octave is zero
        let texture = generate(64, Palette::Earth, params()).unwrap();
        assert_eq!(texture.pixel(32, 32), Some(earth::BEACH));

        let texture = generate(64, Palette::Mars, params()).unwrap();
        assert_eq!(texture.pixel(32, 32), Some(mars::ORANGE));
    }
}
