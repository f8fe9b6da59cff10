use anyhow::Result;
use rustfft::{num_complex::Complex, FftPlanner};

use crate::config::SpectrogramConfig;

/// Power spectral density in dB, one row per frame.
pub struct Spectrogram {
    pub frames: Vec<Vec<f32>>,
    pub bins: usize,
    pub sample_rate: u32,
    pub fft_size: usize,
    pub hop: usize,
}

impl Spectrogram {
    pub fn compute(samples: &[f32], sample_rate: u32, config: &SpectrogramConfig) -> Result<Self> {
        config.validate()?;
        let n = config.fft_size;
        let hop = config.hop();
        let bins = n / 2 + 1;

        // symmetric Hann, as numpy's hanning
        let window: Vec<f32> = (0..n)
            .map(|i| 0.5 - 0.5 * ((2.0 * std::f32::consts::PI * i as f32) / (n - 1) as f32).cos())
            .collect();
        let window_power: f32 = window.iter().map(|w| w * w).sum();
        let scale = 1.0 / (sample_rate.max(1) as f32 * window_power);

        let mut planner = FftPlanner::<f32>::new();
        let fft = planner.plan_fft_forward(n);
        let mut buf = vec![Complex::new(0.0f32, 0.0); n];

        let frame_count = match samples.len() {
            0 => 0,
            len if len <= n => 1,
            len => (len - n) / hop + 1,
        };

        let mut frames: Vec<Vec<f32>> = Vec::with_capacity(frame_count);
        for frame in 0..frame_count {
            let start = frame * hop;
            for (i, v) in buf.iter_mut().enumerate() {
                let s = samples.get(start + i).copied().unwrap_or(0.0);
                *v = Complex::new(s * window[i], 0.0);
            }
            fft.process(&mut buf);

            let row: Vec<f32> = buf
                .iter()
                .take(bins)
                .enumerate()
                .map(|(k, v)| {
                    let mut p = v.norm_sqr() * scale;
                    // one-sided: fold the negative frequencies in
                    if k != 0 && !(n % 2 == 0 && k == n / 2) {
                        p *= 2.0;
                    }
                    (10.0 * (p + 1e-20).log10()).max(config.floor_db)
                })
                .collect();
            frames.push(row);
        }

        Ok(Self {
            frames,
            bins,
            sample_rate,
            fft_size: n,
            hop,
        })
    }

    pub fn bin_frequency(&self, bin: usize) -> f32 {
        bin as f32 * self.sample_rate as f32 / self.fft_size as f32
    }

    /// Lowest and highest dB value over all frames.
    pub fn db_range(&self) -> Option<(f32, f32)> {
        self.frames.iter().flatten().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
