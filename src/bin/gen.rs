use anyhow::Result;
use clap::Parser;
use qdense::data::FcCase;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a random quantized FC case file with its golden output", long_about = None)]
struct Args {
    /// Input feature count
    #[arg(long, default_value_t = 1024)]
    channels_in: usize,

    /// Output feature count
    #[arg(long, default_value_t = 512)]
    channels_out: usize,

    /// Seed for input and weight data
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,

    /// Where to write the case file
    #[arg(long)]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let case = FcCase::random(args.channels_in, args.channels_out, args.seed);
    case.save(&args.out)?;
    println!(
        "wrote {}x{} case ({} MACs) to {}",
        case.channels_in,
        case.channels_out,
        case.channels_in * case.channels_out,
        args.out.display()
    );
    Ok(())
}
