use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use sstv_tools::config::ViewerConfig;
use sstv_tools::view::{self, ViewOutcome};

#[derive(Parser, Debug)]
#[command(name = "sstv-view")]
#[command(about = "Renders the waveform and spectrogram of a mono WAV file", long_about = None)]
struct Args {
    /// WAV file to inspect (default: test.wav)
    input: Option<PathBuf>,

    /// JSON viewer configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the PNG plots are written to
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Sample rate used for the spectrogram frequency axis
    #[arg(long)]
    sample_rate: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(input) = args.input {
        config.input = input;
    }
    if let Some(out_dir) = args.out_dir {
        config.out_dir = out_dir;
    }
    if let Some(rate) = args.sample_rate {
        config.spectrogram.sample_rate_hz = Some(rate);
    }

    match view::run(&config)? {
        ViewOutcome::Unsupported { .. } => {
            println!("Just mono files");
        }
        ViewOutcome::Rendered(summary) => {
            println!(
                "{}: {} samples, {} Hz, {}-bit, {:.2} s",
                config.input.display(),
                summary.samples,
                summary.sample_rate,
                summary.bits_per_sample,
                summary.duration_secs
            );
            println!("waveform: {}", summary.waveform.display());
            println!(
                "spectrogram: {} ({} frames x {} bins, 0-{} Hz)",
                summary.spectrogram.display(),
                summary.frames,
                summary.bins,
                summary.top_bin_hz
            );
        }
    }
    Ok(())
}
