//! Procedural planet textures.
//!
//! Layers octaves of gradient noise, colors each sample through a terrain
//! palette and clips the result to a disc, producing a square RGBA buffer
//! ready for any raw-bitmap image API.

pub mod error;
pub mod export;
pub mod generator;
pub mod mask;
pub mod noise_field;
pub mod options;
pub mod palette;
pub mod pixel;

pub use error::PlanetError;
pub use generator::{PlanetGenerator, Sampler, generate, generate_parallel, generate_with_sampler};
pub use noise_field::{NoiseField, NoiseParameters};
pub use options::{PlanetOptions, ResolvedOptions};
pub use palette::{Band, Palette};
pub use pixel::{Pixel, TextureBuffer, encode};
