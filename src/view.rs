use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::audio::load_wav;
use crate::config::ViewerConfig;
use crate::plot::{render_spectrogram, render_waveform, save_png};
use crate::spectrogram::Spectrogram;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewOutcome {
    Rendered(RenderSummary),
    /// Only mono files are plotted; nothing is written.
    Unsupported { channels: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSummary {
    pub samples: usize,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub duration_secs: f32,
    pub frames: usize,
    pub bins: usize,
    pub top_bin_hz: f32,
    pub waveform: PathBuf,
    pub spectrogram: PathBuf,
}

pub fn run(config: &ViewerConfig) -> Result<ViewOutcome> {
    config.validate()?;

    let audio = load_wav(&config.input)?;
    if !audio.is_mono() {
        return Ok(ViewOutcome::Unsupported {
            channels: audio.channels,
        });
    }

    let sample_rate = config.spectrogram.sample_rate_hz.unwrap_or(audio.sample_rate);

    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating {}", config.out_dir.display()))?;

    let waveform_path = config.waveform_path();
    save_png(
        &render_waveform(&audio.samples, config.width, config.height),
        &waveform_path,
    )?;

    let spec = Spectrogram::compute(&audio.samples, sample_rate, &config.spectrogram)?;
    let spectrogram_path = config.spectrogram_path();
    save_png(
        &render_spectrogram(&spec, config.width, config.height),
        &spectrogram_path,
    )?;

    Ok(ViewOutcome::Rendered(RenderSummary {
        samples: audio.samples.len(),
        sample_rate,
        bits_per_sample: audio.bits_per_sample,
        duration_secs: audio.duration_secs(),
        frames: spec.frames.len(),
        bins: spec.bins,
        top_bin_hz: spec.bin_frequency(spec.bins - 1),
        waveform: waveform_path,
        spectrogram: spectrogram_path,
    }))
}
