use std::path::Path;

use anyhow::{anyhow, Context, Result};
use hound::{SampleFormat, WavReader};

pub struct AudioSource {
    pub samples: Vec<f32>,
    pub channels: usize,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl AudioSource {
    pub fn is_mono(&self) -> bool {
        self.channels == 1
    }

    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        (self.samples.len() / self.channels.max(1)) as f32 / self.sample_rate as f32
    }
}

/// Loads every sample of a WAV file, interleaved, scaled to [-1, 1].
pub fn load_wav(path: &Path) -> Result<AudioSource> {
    let mut reader =
        WavReader::open(path).with_context(|| format!("opening {}", path.display()))?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    if channels == 0 {
        return Err(anyhow!("invalid channel count"));
    }

    let mut samples = Vec::new();

    match spec.sample_format {
        SampleFormat::Float => {
            for sample in reader.samples::<f32>() {
                samples.push(sample?);
            }
        }
        SampleFormat::Int => {
            let bits = spec.bits_per_sample as i32;
            let max = ((1i64 << (bits - 1)) - 1) as f32;
            if bits <= 16 {
                for sample in reader.samples::<i16>() {
                    samples.push(sample? as f32 / max);
                }
            } else {
                for sample in reader.samples::<i32>() {
                    samples.push(sample? as f32 / max);
                }
            }
        }
    }

    Ok(AudioSource {
        samples,
        channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
    })
}
