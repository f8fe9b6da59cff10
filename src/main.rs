use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use sstv_tools::lut::{SineLuts, TABLE_LEN};
use sstv_tools::lut_source::{self, LicenseHeader};

#[derive(Parser, Debug)]
#[command(name = "sstv-genluts")]
#[command(about = "Generates the libsstv sine lookup tables as C source", long_about = None)]
struct Args {
    /// Output C source file
    #[arg(long, default_value = "src/luts.c")]
    out: PathBuf,

    /// Also write the companion header to this path
    #[arg(long)]
    header: Option<PathBuf>,

    /// Copyright year (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Compare against the existing output instead of writing it
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let license = match args.year {
        Some(year) => LicenseHeader::for_year(year),
        None => LicenseHeader::current(),
    };
    let luts = SineLuts::generate()?;

    if args.check {
        return check(&args, &luts, &license);
    }

    eprintln!("Generating sine lookup tables:");
    eprintln!("  TABLE_LEN: {}", TABLE_LEN);
    eprintln!("  output: {}", args.out.display());

    lut_source::write_source(&args.out, &luts, &license)?;
    if let Some(header) = &args.header {
        eprintln!("  header: {}", header.display());
        lut_source::write_header(header, &license)?;
    }

    eprintln!();
    eprintln!("Sanity checks (int8 / uint8 / int16):");
    let quarters = [
        ("0°", 0),
        ("90°", TABLE_LEN / 4),
        ("180°", TABLE_LEN / 2),
        ("270°", TABLE_LEN * 3 / 4),
    ];
    for (label, i) in quarters {
        eprintln!(
            "  {:>4} (i={:>3}): {:>4} / {:>3} / {:>6}",
            label, i, luts.int8[i], luts.uint8[i], luts.int16[i]
        );
    }
    Ok(())
}

fn check(args: &Args, luts: &SineLuts, license: &LicenseHeader) -> Result<()> {
    let mut targets = vec![(args.out.clone(), lut_source::render_source(luts, license))];
    if let Some(header) = &args.header {
        targets.push((header.clone(), lut_source::render_header(license)));
    }

    let stale = lut_source::stale_targets(&targets)?;
    if !stale.is_empty() {
        let names: Vec<String> = stale.iter().map(|p| p.display().to_string()).collect();
        bail!("out of date, regenerate: {}", names.join(", "));
    }
    eprintln!("lookup tables are up to date");
    Ok(())
}
