use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrogramConfig {
    pub fft_size: usize,
    pub overlap: usize,
    /// Overrides the sample rate read from the file.
    pub sample_rate_hz: Option<u32>,
    pub floor_db: f32,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            fft_size: 256,
            overlap: 128,
            sample_rate_hz: None,
            floor_db: -100.0,
        }
    }
}

impl SpectrogramConfig {
    pub fn validate(&self) -> Result<()> {
        if self.fft_size < 2 {
            return Err(anyhow!("fft_size must be at least 2, got {}", self.fft_size));
        }
        if self.overlap >= self.fft_size {
            return Err(anyhow!(
                "overlap ({}) must be smaller than fft_size ({})",
                self.overlap,
                self.fft_size
            ));
        }
        Ok(())
    }

    pub fn hop(&self) -> usize {
        self.fft_size - self.overlap
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub spectrogram: SpectrogramConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("test.wav"),
            out_dir: PathBuf::from("."),
            width: 1200,
            height: 400,
            spectrogram: SpectrogramConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_json::from_str(&data)
            .with_context(|| format!("parsing {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(anyhow!("plot size must be non-zero"));
        }
        self.spectrogram.validate()
    }

    pub fn waveform_path(&self) -> PathBuf {
        self.out_dir.join("waveform.png")
    }

    pub fn spectrogram_path(&self) -> PathBuf {
        self.out_dir.join("spectrogram.png")
    }
}
