/// Optional generation settings and their default resolution
///
/// Anything left unset is filled in from an explicit random source, so the
/// generator itself only ever sees concrete values.

use rand::Rng;

use crate::error::Result;
use crate::generator::PlanetGenerator;
use crate::noise_field::NoiseParameters;
use crate::palette::Palette;
use crate::pixel::TextureBuffer;

pub const DEFAULT_SIDE: i32 = 64;
pub const DEFAULT_PERSISTENCE: f64 = 0.5;
pub const DEFAULT_LACUNARITY: f64 = 2.0;

/// Generation settings, each optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetOptions {
    pub side: Option<i32>,
    pub palette: Option<Palette>,
    pub frequency: Option<f64>,
    pub octave_count: Option<u32>,
    pub persistence: Option<f64>,
    pub lacunarity: Option<f64>,
    pub seed: Option<i32>,
}

/// Settings with every default filled in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOptions {
    pub side: i32,
    pub palette: Palette,
    pub params: NoiseParameters,
}

impl PlanetOptions {
    /// Fill in missing settings
    ///
    /// * side: 64
    /// * palette: uniform pick from `Palette::ALL`
    /// * frequency: random integer in [1, 6]
    /// * octave count: random integer in [4, 10]
    /// * persistence: 0.5, lacunarity: 2.0
    /// * seed: random in [0, 9999]
    ///
    /// Random draws only happen for settings that are actually missing.
    ///
    /// # Arguments
    /// * `rng` - Random source used for missing settings
    ///
    /// # Returns
    /// * `Result<ResolvedOptions>` - Concrete settings, or `InvalidParameters` if the
    ///   explicit noise settings are out of range
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ResolvedOptions> {
        let side = self.side.unwrap_or(DEFAULT_SIDE);
        let palette = match self.palette {
            Some(palette) => palette,
            None => Palette::random(rng),
        };
        let frequency = match self.frequency {
            Some(frequency) => frequency,
            None => rng.gen_range(1..=6u32) as f64,
        };
        let octave_count = match self.octave_count {
            Some(octaves) => octaves,
            None => rng.gen_range(4..=10),
        };
        let seed = match self.seed {
            Some(seed) => seed,
            None => rng.gen_range(0..10_000),
        };

        let params = NoiseParameters::new(
            frequency,
            octave_count,
            self.persistence.unwrap_or(DEFAULT_PERSISTENCE),
            self.lacunarity.unwrap_or(DEFAULT_LACUNARITY),
            seed,
        )?;

        Ok(ResolvedOptions {
            side,
            palette,
            params,
        })
    }
}

impl ResolvedOptions {
    pub fn generate(&self) -> Result<TextureBuffer> {
        PlanetGenerator::new(self.palette, self.params).render(self.side)
    }

    pub fn generate_parallel(&self) -> Result<TextureBuffer> {
        PlanetGenerator::new(self.palette, self.params).render_parallel(self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanetError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_explicit_values_are_kept() {
        let options = PlanetOptions {
            side: Some(16),
            palette: Some(Palette::Mars),
            frequency: Some(2.5),
            octave_count: Some(3),
            persistence: Some(0.7),
            lacunarity: Some(1.5),
            seed: Some(77),
        };
        let resolved = options.resolve(&mut StdRng::seed_from_u64(0)).unwrap();

        assert_eq!(resolved.side, 16);
        assert_eq!(resolved.palette, Palette::Mars);
        assert_eq!(resolved.params, NoiseParameters::new(2.5, 3, 0.7, 1.5, 77).unwrap());
    }

    #[test]
    fn test_defaults_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let resolved = PlanetOptions::default().resolve(&mut rng).unwrap();
            let params = resolved.params;

            assert_eq!(resolved.side, DEFAULT_SIDE);
            assert!((1.0..=6.0).contains(&params.frequency()));
            assert_eq!(params.frequency().fract(), 0.0);
            assert!((4..=10).contains(&params.octave_count()));
            assert!((0..10_000).contains(&params.seed()));
            assert_eq!(params.persistence(), DEFAULT_PERSISTENCE);
            assert_eq!(params.lacunarity(), DEFAULT_LACUNARITY);
        }
    }

    #[test]
    fn test_resolution_is_reproducible_with_injected_rng() {
        let a = PlanetOptions::default().resolve(&mut StdRng::seed_from_u64(9)).unwrap();
        let b = PlanetOptions::default().resolve(&mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.generate().unwrap(), b.generate().unwrap());
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let options = PlanetOptions {
            persistence: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(
            options.resolve(&mut StdRng::seed_from_u64(1)),
            Err(PlanetError::InvalidParameters(_))
        ));

        let options = PlanetOptions {
            side: Some(0),
            ..Default::default()
        };
        let resolved = options.resolve(&mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(resolved.generate(), Err(PlanetError::InvalidSize(0)));
    }
}
