use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use qdense::config::RunConfig;
use qdense::data::FcCase;
use qdense::golden::verify;
use qdense::runner::forward;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run the quantized fully-connected kernel and check it against its golden output", long_about = None)]
struct Args {
    /// Input feature count
    #[arg(long, default_value_t = 1024)]
    channels_in: usize,

    /// Output feature count
    #[arg(long, default_value_t = 512)]
    channels_out: usize,

    /// Number of forked cores (must be a power of two)
    #[arg(long, default_value_t = 8)]
    cores: usize,

    /// Seed for generated input and weight data
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,

    /// Load a case file instead of generating data
    #[arg(long)]
    data: Option<PathBuf>,

    /// JSON run configuration; overrides the dimension/core flags
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => {
            let cfg = RunConfig {
                channels_in: args.channels_in,
                channels_out: args.channels_out,
                cores: args.cores,
                seed: args.seed,
            };
            cfg.validate()?;
            cfg
        }
    };

    let case = match &args.data {
        Some(path) => {
            info!("loading case from {}", path.display());
            FcCase::load(path)?
        }
        None => {
            info!("generating random case with seed {:#x}", cfg.seed);
            FcCase::random(cfg.channels_in, cfg.channels_out, cfg.seed)
        }
    };

    println!(
        "Running the FullyConnected layer ({}x{}) on {} cores!",
        case.channels_in, case.channels_out, cfg.cores
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cfg.cores)
        .build()
        .context("build worker pool")?;

    let fc = case.args();
    let mut output = vec![0i32; case.channels_out];
    let start = Instant::now();
    pool.install(|| forward(&fc, &mut output, cfg.cores));
    let elapsed = start.elapsed();

    let macs = case.channels_in * case.channels_out;
    println!("FullyConnected layer completed!");
    println!("Runtime statistics on {} cores:", cfg.cores);
    println!("  - elapsed: {:.3?}", elapsed);
    println!("  - MACs: {}", macs);
    println!("  - MAC/s: {:.0}", macs as f64 / elapsed.as_secs_f64());

    let errors = verify(&output, &case.golden);
    if errors == 0 {
        println!("FullyConnected layer executed without errors.");
        Ok(())
    } else {
        anyhow::bail!("FullyConnected layer executed with {} errors", errors)
    }
}
