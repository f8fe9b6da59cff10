use std::f64::consts::PI;

use crate::error::{LutError, Result};

/// Samples per sine period in every generated table.
pub const TABLE_LEN: usize = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Int8,
    Uint8,
    Int16,
}

impl Encoding {
    pub const ALL: [Encoding; 3] = [Encoding::Int8, Encoding::Uint8, Encoding::Int16];

    pub fn symbol(self) -> &'static str {
        match self {
            Encoding::Int8 => "SSTV_SIN_INT10_INT8",
            Encoding::Uint8 => "SSTV_SIN_INT10_UINT8",
            Encoding::Int16 => "SSTV_SIN_INT10_INT16",
        }
    }

    pub fn c_type(self) -> &'static str {
        match self {
            Encoding::Int8 => "int8_t",
            Encoding::Uint8 => "uint8_t",
            Encoding::Int16 => "int16_t",
        }
    }

    pub fn scale(self) -> f64 {
        match self {
            Encoding::Int8 => 127.0,
            Encoding::Uint8 => 255.0,
            Encoding::Int16 => 32767.0,
        }
    }

    /// Inclusive range every quantized value lands in.
    pub fn range(self) -> (i32, i32) {
        match self {
            Encoding::Int8 => (-127, 127),
            Encoding::Uint8 => (0, 255),
            Encoding::Int16 => (-32767, 32767),
        }
    }

    /// Scale one sine sample and round half to even.
    ///
    /// The unsigned encoding is evaluated as `(s + 1) / 2 * 255`, in that order.
    pub fn quantize(self, sample: f64) -> i32 {
        let scaled = match self {
            Encoding::Uint8 => (sample + 1.0) / 2.0 * self.scale(),
            _ => sample * self.scale(),
        };
        scaled.round_ties_even() as i32
    }
}

/// `len` samples of `sin` over `[0, 2pi)`, end point excluded.
pub fn sine_period(len: usize) -> Vec<f64> {
    let step = 2.0 * PI / len as f64;
    (0..len).map(|i| (i as f64 * step).sin()).collect()
}

pub fn quantize_table(encoding: Encoding, samples: &[f64]) -> Vec<i32> {
    samples.iter().map(|&s| encoding.quantize(s)).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SineLuts {
    pub int8: Vec<i8>,
    pub uint8: Vec<u8>,
    pub int16: Vec<i16>,
}

impl SineLuts {
    pub fn generate() -> Result<Self> {
        let period = sine_period(TABLE_LEN);
        Ok(Self {
            int8: narrow(Encoding::Int8, &period)?,
            uint8: narrow(Encoding::Uint8, &period)?,
            int16: narrow(Encoding::Int16, &period)?,
        })
    }

    /// Widened copy of one table, in generation order.
    pub fn values(&self, encoding: Encoding) -> Vec<i64> {
        match encoding {
            Encoding::Int8 => self.int8.iter().map(|&v| v as i64).collect(),
            Encoding::Uint8 => self.uint8.iter().map(|&v| v as i64).collect(),
            Encoding::Int16 => self.int16.iter().map(|&v| v as i64).collect(),
        }
    }
}

fn narrow<T: TryFrom<i32>>(encoding: Encoding, period: &[f64]) -> Result<Vec<T>> {
    quantize_table(encoding, period)
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            T::try_from(value).map_err(|_| LutError::OutOfRange {
                symbol: encoding.symbol(),
                index,
                value,
            })
        })
        .collect()
}
