/// Multi-octave gradient noise for terrain elevation
///
/// Wraps a seeded Perlin source and sums octaves of it using fractional
/// Brownian motion (fBM), normalized back into [-1, 1].

use noise::{NoiseFn, Perlin};

use crate::error::{PlanetError, Result};

/// Parameters controlling the noise field
///
/// Immutable once built; two fields built from equal parameters return equal
/// values for equal coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParameters {
    /// Base frequency, determines the size of visible features
    frequency: f64,
    /// Number of octaves summed together
    octave_count: u32,
    /// Amplitude falloff per octave (roughness)
    persistence: f64,
    /// Frequency growth per octave
    lacunarity: f64,
    /// Seed for the gradient table
    seed: i32,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        NoiseParameters {
            frequency: 1.0,
            octave_count: 6,
            persistence: 0.5,
            lacunarity: 2.0,
            seed: 0,
        }
    }
}

impl NoiseParameters {
    /// Create a validated set of noise parameters
    ///
    /// Fails with `InvalidParameters` for a non-positive frequency, octave count,
    /// persistence or lacunarity, or for any non-finite real.
    pub fn new(
        frequency: f64,
        octave_count: u32,
        persistence: f64,
        lacunarity: f64,
        seed: i32,
    ) -> Result<Self> {
        let params = NoiseParameters {
            frequency,
            octave_count,
            persistence,
            lacunarity,
            seed,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn with_frequency(self, frequency: f64) -> Result<Self> {
        Self::new(frequency, self.octave_count, self.persistence, self.lacunarity, self.seed)
    }

    pub fn with_octave_count(self, octave_count: u32) -> Result<Self> {
        Self::new(self.frequency, octave_count, self.persistence, self.lacunarity, self.seed)
    }

    pub fn with_persistence(self, persistence: f64) -> Result<Self> {
        Self::new(self.frequency, self.octave_count, persistence, self.lacunarity, self.seed)
    }

    pub fn with_lacunarity(self, lacunarity: f64) -> Result<Self> {
        Self::new(self.frequency, self.octave_count, self.persistence, lacunarity, self.seed)
    }

    /// Seeds never fail validation, so this one is infallible
    pub fn with_seed(self, seed: i32) -> Self {
        NoiseParameters { seed, ..self }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn octave_count(&self) -> u32 {
        self.octave_count
    }

    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Sum of the octave amplitudes, used to normalize the fBM total
    pub fn max_amplitude(&self) -> f64 {
        let mut amplitude = 1.0;
        let mut total = 0.0;
        for _ in 0..self.octave_count {
            total += amplitude;
            amplitude *= self.persistence;
        }
        total
    }

    fn validate(&self) -> Result<()> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(PlanetError::InvalidParameters(format!(
                "frequency must be positive, got {}",
                self.frequency
            )));
        }
        if self.octave_count == 0 {
            return Err(PlanetError::InvalidParameters(
                "octave count must be at least 1".to_string(),
            ));
        }
        if !self.persistence.is_finite() || self.persistence <= 0.0 {
            return Err(PlanetError::InvalidParameters(format!(
                "persistence must be positive, got {}",
                self.persistence
            )));
        }
        if !self.lacunarity.is_finite() || self.lacunarity <= 0.0 {
            return Err(PlanetError::InvalidParameters(format!(
                "lacunarity must be positive, got {}",
                self.lacunarity
            )));
        }
        Ok(())
    }
}

/// A deterministic 2D scalar field in [-1, 1]
pub struct NoiseField {
    perlin: Perlin,
    params: NoiseParameters,
    max_amplitude: f64,
}

impl NoiseField {
    /// Build a field from already validated parameters
    pub fn new(params: NoiseParameters) -> Self {
        NoiseField {
            // Reinterpret the signed seed so negative seeds stay distinct
            perlin: Perlin::new(params.seed as u32),
            params,
            max_amplitude: params.max_amplitude(),
        }
    }

    pub fn params(&self) -> &NoiseParameters {
        &self.params
    }

    /// Single octave of gradient noise at the given coordinate
    ///
    /// Exactly zero on integer lattice points.
    pub fn base(&self, x: f64, y: f64) -> f64 {
        self.perlin.get([x, y]).clamp(-1.0, 1.0)
    }

    /// Sample the octave-summed field at `(x, y)`
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.params.frequency;

        for _ in 0..self.params.octave_count {
            total += amplitude * self.base(x * frequency, y * frequency);
            amplitude *= self.params.persistence;
            frequency *= self.params.lacunarity;
        }

        (total / self.max_amplitude).clamp(-1.0, 1.0)
    }
}
