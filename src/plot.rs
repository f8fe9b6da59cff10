use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::spectrogram::Spectrogram;

const BACKGROUND: Rgba<u8> = Rgba([16, 18, 24, 255]);
const AXIS: Rgba<u8> = Rgba([70, 76, 90, 255]);
const TRACE: Rgba<u8> = Rgba([0, 190, 255, 255]);

/// Min/max envelope of `samples` per pixel column, zero line in the middle.
pub fn render_waveform(samples: &[f32], width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);
    let mid = height / 2;
    for x in 0..width {
        img.put_pixel(x, mid, AXIS);
    }
    if samples.is_empty() {
        return img;
    }

    let to_row = |v: f32| -> u32 {
        let half = (height - 1) as f32 / 2.0;
        let y = half - v.clamp(-1.0, 1.0) * half;
        (y.round() as u32).min(height - 1)
    };

    for x in 0..width {
        let start = x as usize * samples.len() / width as usize;
        let end = ((x as usize + 1) * samples.len() / width as usize).max(start + 1);
        let column = &samples[start.min(samples.len() - 1)..end.min(samples.len())];
        let (lo, hi) = column
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), &s| (lo.min(s), hi.max(s)));
        for y in to_row(hi)..=to_row(lo) {
            img.put_pixel(x, y, TRACE);
        }
    }
    img
}

/// Time on x, frequency on y (DC at the bottom), colour by dB.
pub fn render_spectrogram(spec: &Spectrogram, width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);
    let Some((lo, hi)) = spec.db_range() else {
        return img;
    };
    let span = (hi - lo).max(1e-6);

    for x in 0..width {
        let frame = &spec.frames[x as usize * spec.frames.len() / width as usize];
        for y in 0..height {
            let bin = (height - 1 - y) as usize * spec.bins / height as usize;
            let unit = (frame[bin] - lo) / span;
            img.put_pixel(x, y, heat(unit));
        }
    }
    img
}

/// Dark blue through red to yellow.
fn heat(unit: f32) -> Rgba<u8> {
    let t = unit.clamp(0.0, 1.0);
    let r = (t * 2.0).min(1.0);
    let g = ((t - 0.5) * 2.0).clamp(0.0, 1.0);
    let b = (1.0 - t * 2.0).clamp(0.0, 1.0) * 0.6 + 0.1;
    Rgba([
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
        255,
    ])
}

pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpectrogramConfig;

    #[test]
    fn waveform_matches_requested_size() {
        let samples: Vec<f32> = (0..5000).map(|i| (i as f32 * 0.01).sin()).collect();
        let img = render_waveform(&samples, 320, 120);
        assert_eq!(img.dimensions(), (320, 120));
    }

    #[test]
    fn full_scale_trace_touches_both_edges() {
        let samples = [1.0f32, -1.0];
        let img = render_waveform(&samples, 2, 11);
        assert_eq!(*img.get_pixel(0, 0), TRACE);
        assert_eq!(*img.get_pixel(1, 10), TRACE);
    }

    #[test]
    fn empty_waveform_draws_only_the_axis() {
        let img = render_waveform(&[], 8, 9);
        assert_eq!(*img.get_pixel(3, 4), AXIS);
        assert_eq!(*img.get_pixel(3, 0), BACKGROUND);
    }

    #[test]
    fn spectrogram_matches_requested_size() {
        let samples: Vec<f32> = (0..2048).map(|i| (i as f32 * 0.3).sin()).collect();
        let spec = Spectrogram::compute(&samples, 8000, &SpectrogramConfig::default()).unwrap();
        let img = render_spectrogram(&spec, 200, 100);
        assert_eq!(img.dimensions(), (200, 100));
    }

    #[test]
    fn heat_endpoints() {
        assert_eq!(heat(0.0), Rgba([0, 0, 178, 255]));
        assert_eq!(heat(1.0), Rgba([255, 255, 25, 255]));
    }
}
