//! # GPX Parser
//!
//! A fast Rust library for extracting track points (latitude, longitude and elevation)
//! from GPX files.
//!
//! ## Features
//!
//! - **Fast parsing**: Track points are cut out of the raw bytes with a tag scanner
//!   instead of building an XML tree
//! - **Zero-copy**: Track point text is never copied; files are memory-mapped
//! - **Best-effort mode**: Malformed track points can be counted and skipped
//! - **XML fallback**: A full XML parser for documents the scanner cannot handle
//!
//! ## Quick Start
//!
//! ```no_run
//! use gpx_parser::GpxReader;
//!
//! let gpx = GpxReader::from_file("ride.gpx")?.read()?;
//!
//! for point in gpx.trackpoints() {
//!     println!("{} {} {}", point.lat, point.lon, point.ele);
//! }
//! # Ok::<(), gpx_parser::Error>(())
//! ```
//!
//! ## Fast Path
//!
//! [`parse`] accepts any bytes holding `<trkpt lat=".." lon="..">` elements, each with an
//! `<ele>` element after its attributes. Everything outside track points is ignored, and
//! all points end up in a single track with a single segment:
//!
//! ```
//! let data = br#"<trkseg>
//!   <trkpt lat='60.1' lon='24.9'><ele>12.5</ele></trkpt>
//!   <trkpt lat='60.2' lon='25.0'><ele>13.0</ele></trkpt>
//! </trkseg>"#;
//!
//! let gpx = gpx_parser::parse(data, false)?;
//! assert_eq!(gpx.tracks.len(), 1);
//! assert_eq!(gpx.trackpoint_count(), 2);
//! # Ok::<(), gpx_parser::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, Error>`. Per-point failures name the 1-based
//! position of the offending track point:
//!
//! ```
//! use gpx_parser::{Error, ErrorKind};
//!
//! let data = br#"<trkpt lon="1.0"><ele>2</ele></trkpt>"#;
//!
//! match gpx_parser::parse(data, false) {
//!     Err(Error::Trackpoint { ordinal, source }) => {
//!         assert_eq!(ordinal, 1);
//!         eprintln!("bad point: {}", source);
//!     }
//!     Err(err) => assert_ne!(err.kind(), ErrorKind::Trackpoint),
//!     Ok(_) => unreachable!(),
//! }
//! ```

// Public API modules
pub mod error;
pub mod reader;
pub mod xml;

mod estimate;
mod parser;
mod scan;
mod trkpt;

pub mod models;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Field, PointError, Result, StructuralError};
pub use estimate::SizeEstimate;
pub use models::{Gpx, Segment, Track, Trackpoint};
pub use parser::{parse, parse_with, ParseOptions};
pub use reader::{GpxReader, GpxReaderBuilder};
pub use scan::Quote;
