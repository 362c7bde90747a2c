//! Command-line interface for the GPX parser.
//!
//! Parses one or more .gpx files and reports their track points.

use anyhow::{Context, Result};
use clap::Parser;
use gpx_parser::{Gpx, GpxReaderBuilder};
use log::{info, LevelFilter};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Extract track points from .gpx files",
    long_about = "A fast GPX track point extractor.\n\n\
                  By default track points are cut out of the raw bytes without XML parsing; \
                  --xml switches to a full XML parser that keeps tracks and segments."
)]
struct Args {
    /// GPX files to parse
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Use the full XML parser
    #[arg(long)]
    xml: bool,

    /// Skip malformed track points instead of failing
    #[arg(short, long)]
    ignore_errors: bool,

    /// Print each track point as "lat lon ele"
    #[arg(short, long, conflicts_with = "json")]
    points: bool,

    /// Print each parsed document as JSON
    #[arg(long)]
    json: bool,
}

fn parse_one_file(path: &Path, args: &Args) -> Result<Gpx> {
    info!("📄 Processing: {}", path.display());

    let start_time = Instant::now();
    let gpx = GpxReaderBuilder::new()
        .use_xml_parser(args.xml)
        .ignore_errors(args.ignore_errors)
        .from_file(path)?
        .read()
        .with_context(|| format!("{}", path.display()))?;

    let segments: usize = gpx.tracks.iter().map(|t| t.segments.len()).sum();
    info!(
        "   ├─ {} track(s), {} segment(s), {} track point(s)",
        gpx.tracks.len(),
        segments,
        gpx.all_trackpoints().count()
    );
    if gpx.error_count() > 0 {
        info!("   ├─ Skipped {} malformed track point(s)", gpx.error_count());
    }
    info!("   └─ ✓ Parsed in {:.2?}", start_time.elapsed());

    Ok(gpx)
}

fn print_gpx(gpx: &Gpx, args: &Args, out: &mut impl Write) -> Result<()> {
    if args.json {
        serde_json::to_writer(&mut *out, gpx)?;
        writeln!(out)?;
    } else if args.points {
        for point in gpx.all_trackpoints() {
            writeln!(out, "{} {} {}", point.lat, point.lon, point.ele)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let total_start = Instant::now();
    let mut failed = 0;

    for (idx, path) in args.files.iter().enumerate() {
        info!("[{}/{}]", idx + 1, args.files.len());

        match parse_one_file(path, &args) {
            Ok(gpx) => print_gpx(&gpx, &args, &mut out)?,
            Err(e) => {
                log::error!("   └─ ✗ Error: {:#}", e);
                failed += 1;
            }
        }
    }

    info!("🏁 {} file(s) processed in {:.2?}", args.files.len(), total_start.elapsed());

    if failed > 0 {
        anyhow::bail!("{} of {} file(s) failed", failed, args.files.len());
    }
    Ok(())
}
