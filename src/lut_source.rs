use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LutError, Result};
use crate::lut::{Encoding, SineLuts, TABLE_LEN};

pub const HEADER_NAME: &str = "luts.h";
const COPYRIGHT_MARKER: &str = " * Copyright (c) ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LicenseHeader {
    pub first_year: i32,
    pub year: i32,
    pub holder: String,
}

impl LicenseHeader {
    pub fn for_year(year: i32) -> Self {
        Self {
            first_year: 2018,
            year,
            holder: "Vasile Vilvoiu (YO7JBP) <vasi.vilvoiu@gmail.com>".to_string(),
        }
    }

    pub fn current() -> Self {
        use chrono::Datelike;
        Self::for_year(chrono::Local::now().year())
    }

    fn comment(&self) -> String {
        format!(
            "/*\n{}{}-{} {}\n *\n * libsstv is free software; you can redistribute it and/or modify\n * it under the terms of the MIT license. See LICENSE for details.\n */\n\n",
            COPYRIGHT_MARKER, self.first_year, self.year, self.holder
        )
    }
}

pub fn render_source(luts: &SineLuts, header: &LicenseHeader) -> String {
    let mut out = header.comment();
    out.push_str(&format!("#include \"{}\"\n\n", HEADER_NAME));
    for encoding in Encoding::ALL {
        render_array(&mut out, encoding, &luts.values(encoding));
    }
    out
}

fn render_array(out: &mut String, encoding: Encoding, values: &[i64]) {
    out.push_str(&format!(
        "{} {}[{}] = {{ ",
        encoding.c_type(),
        encoding.symbol(),
        values.len()
    ));
    for v in values {
        out.push_str(&format!("{}, ", v));
    }
    out.push_str("};\n\n");
}

/// Companion header declaring the generated arrays.
pub fn render_header(header: &LicenseHeader) -> String {
    let mut out = header.comment();
    out.push_str("#ifndef _LUTS_H_\n#define _LUTS_H_\n\n");
    out.push_str("#include <stdint.h>\n#include <stddef.h>\n\n");
    for encoding in Encoding::ALL {
        out.push_str(&format!(
            "extern {} {}[{}];\n",
            encoding.c_type(),
            encoding.symbol(),
            TABLE_LEN
        ));
    }
    out.push_str("\n#endif\n");
    out
}

pub fn write_source(path: &Path, luts: &SineLuts, header: &LicenseHeader) -> Result<()> {
    write_file(path, &render_source(luts, header))
}

pub fn write_header(path: &Path, header: &LicenseHeader) -> Result<()> {
    write_file(path, &render_header(header))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| LutError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// The copyright line is the only part of the output that depends on the date.
pub fn strip_copyright(text: &str) -> String {
    text.split_inclusive('\n')
        .filter(|line| !line.starts_with(COPYRIGHT_MARKER))
        .collect()
}

/// Paths whose contents differ from the expected text other than in the
/// copyright line.
pub fn stale_targets(targets: &[(PathBuf, String)]) -> Result<Vec<PathBuf>> {
    let mut stale = Vec::new();
    for (path, expected) in targets {
        let on_disk = fs::read_to_string(path).map_err(|source| LutError::Read {
            path: path.clone(),
            source,
        })?;
        if strip_copyright(&on_disk) != strip_copyright(expected) {
            stale.push(path.clone());
        }
    }
    Ok(stale)
}

/// Reads the elements of `symbol[N] = { ... };` out of generated text.
pub fn parse_array(source: &str, symbol: &str) -> Result<Vec<i64>> {
    let missing = || LutError::MissingArray(symbol.to_string());

    let start = source
        .match_indices(&format!("{}[", symbol))
        .map(|(i, _)| i)
        .find(|&i| {
            source[..i]
                .bytes()
                .last()
                .map_or(true, |b| !(b.is_ascii_alphanumeric() || b == b'_'))
        })
        .ok_or_else(missing)?;
    let rest = &source[start + symbol.len() + 1..];
    let close = rest.find(']').ok_or_else(missing)?;
    let declared = rest[..close]
        .trim()
        .parse::<usize>()
        .map_err(|_| LutError::InvalidValue {
            symbol: symbol.to_string(),
            value: rest[..close].to_string(),
        })?;

    let open = rest.find('{').ok_or_else(missing)?;
    let end = rest[open..].find('}').ok_or_else(missing)? + open;

    let values = rest[open + 1..end]
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<i64>().map_err(|_| LutError::InvalidValue {
                symbol: symbol.to_string(),
                value: t.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if values.len() != declared {
        return Err(LutError::LengthMismatch {
            symbol: symbol.to_string(),
            declared,
            found: values.len(),
        });
    }
    Ok(values)
}
