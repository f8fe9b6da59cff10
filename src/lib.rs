pub mod audio;
pub mod config;
pub mod error;
pub mod lut;
pub mod lut_source;
pub mod plot;
pub mod spectrogram;
pub mod view;
