use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use planet_maker::export::{save_png, save_raw};
use planet_maker::{Palette, PlanetOptions};

/// Procedural planet texture generator
#[derive(Parser, Debug)]
#[command(name = "planet-maker")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Width and height of the texture in pixels
    #[arg(long, allow_negative_numbers = true)]
    side: Option<i32>,

    /// Terrain palette: earth or mars (random when omitted)
    #[arg(long)]
    palette: Option<Palette>,

    /// Base noise frequency (random integer in 1..=6 when omitted)
    #[arg(long)]
    frequency: Option<f64>,

    /// Number of noise octaves (random in 4..=10 when omitted)
    #[arg(long)]
    octaves: Option<u32>,

    /// Amplitude decay per octave
    #[arg(long)]
    persistence: Option<f64>,

    /// Frequency growth per octave
    #[arg(long)]
    lacunarity: Option<f64>,

    /// Noise seed (random in 0..=9999 when omitted)
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i32>,

    /// Seed for picking defaults, making a run with missing options repeatable
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Output PNG path
    #[arg(short, long, default_value = "planet.png")]
    output: PathBuf,

    /// Also dump the raw RGBA bytes to this path
    #[arg(long)]
    raw: Option<PathBuf>,

    /// Spread rows across all cores
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let options = PlanetOptions {
        side: args.side,
        palette: args.palette,
        frequency: args.frequency,
        octave_count: args.octaves,
        persistence: args.persistence,
        lacunarity: args.lacunarity,
        seed: args.seed,
    };

    let mut rng = match args.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let resolved = options.resolve(&mut rng)?;

    let params = resolved.params;
    info!(
        "Generating {} planet: side={} frequency={} octaves={} persistence={} lacunarity={} seed={}",
        resolved.palette,
        resolved.side,
        params.frequency(),
        params.octave_count(),
        params.persistence(),
        params.lacunarity(),
        params.seed()
    );

    let start = Instant::now();
    let texture = if args.parallel {
        resolved.generate_parallel()?
    } else {
        resolved.generate()?
    };
    info!(
        "Generated {}x{} texture ({} land pixels) in {:.1?}",
        texture.side(),
        texture.side(),
        texture.opaque_count(),
        start.elapsed()
    );

    save_png(&texture, &args.output)?;
    info!("Saved PNG to {}", args.output.display());

    if let Some(raw_path) = &args.raw {
        save_raw(&texture, raw_path)?;
        info!("Saved raw RGBA bytes to {}", raw_path.display());
    }

    Ok(())
}
