/// Terrain palettes mapping noise elevation to surface colors

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::pixel::Pixel;

/// One terrain band: values in `[low, high)` get `color`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub name: &'static str,
    pub low: f64,
    pub high: f64,
    pub color: Pixel,
}

impl Band {
    const fn new(name: &'static str, low: f64, high: f64, color: Pixel) -> Self {
        Band { name, low, high, color }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value < self.high
    }
}

pub mod earth {
    use super::Band;
    use crate::pixel::Pixel;

    pub const WATER: Pixel = Pixel::rgb(0, 0, 255);
    pub const BEACH: Pixel = Pixel::rgb(0, 153, 153);
    pub const JUNGLE: Pixel = Pixel::rgb(0, 204, 102);
    pub const FOREST: Pixel = Pixel::rgb(0, 204, 0);
    pub const SAVANNAH: Pixel = Pixel::rgb(204, 255, 51);
    pub const DESERT: Pixel = Pixel::rgb(204, 204, 0);
    pub const SNOW: Pixel = Pixel::rgb(255, 255, 255);

    pub(super) const BANDS: [Band; 7] = [
        Band::new("water", -1.0, 0.0, WATER),
        Band::new("beach", 0.0, 0.15, BEACH),
        Band::new("jungle", 0.15, 0.3, JUNGLE),
        Band::new("forest", 0.3, 0.6, FOREST),
        Band::new("savannah", 0.6, 0.7, SAVANNAH),
        Band::new("desert", 0.7, 0.9, DESERT),
        Band::new("snow", 0.9, f64::INFINITY, SNOW),
    ];
}

pub mod mars {
    use super::Band;
    use crate::pixel::Pixel;

    pub const MID_ORANGE: Pixel = Pixel::rgb(199, 125, 78);
    pub const ORANGE: Pixel = Pixel::rgb(244, 138, 54);
    pub const DIRT: Pixel = Pixel::rgb(114, 81, 48);
    pub const SAND: Pixel = Pixel::rgb(180, 155, 99);
    pub const DRY_DIRT: Pixel = Pixel::rgb(182, 115, 47);

    pub(super) const BANDS: [Band; 5] = [
        Band::new("mid-orange", -1.0, -0.8, MID_ORANGE),
        Band::new("orange", -0.8, 0.10, ORANGE),
        Band::new("dirt", 0.10, 0.35, DIRT),
        Band::new("sand", 0.35, 0.65, SAND),
        Band::new("dry-dirt", 0.65, f64::INFINITY, DRY_DIRT),
    ];
}

/// The registered planet palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Earth,
    Mars,
}

impl Palette {
    /// Every palette a random pick can land on
    pub const ALL: [Palette; 2] = [Palette::Earth, Palette::Mars];

    /// Ordered band table, lowest band first
    ///
    /// The last band is open-ended and also catches anything no other band
    /// claims, so classification is total.
    pub fn bands(&self) -> &'static [Band] {
        match self {
            Palette::Earth => &earth::BANDS,
            Palette::Mars => &mars::BANDS,
        }
    }

    /// Find the band a noise value falls into
    pub fn band_for(&self, value: f64) -> &'static Band {
        let bands = self.bands();
        let terminal = &bands[bands.len() - 1];
        bands.iter().find(|band| band.contains(value)).unwrap_or(terminal)
    }

    /// Map a noise value to its terrain color
    pub fn classify(&self, value: f64) -> Pixel {
        self.band_for(value).color
    }

    /// Pick a palette uniformly from `ALL`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Palette {
        *Palette::ALL.choose(rng).unwrap_or(&Palette::Earth)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Palette::Earth => "earth",
            Palette::Mars => "mars",
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "earth" => Ok(Palette::Earth),
            "mars" => Ok(Palette::Mars),
            other => Err(format!("unknown palette '{}' (expected earth or mars)", other)),
        }
    }
}
