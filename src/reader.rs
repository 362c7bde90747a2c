//! High-level API for reading GPX files.

use crate::error::{Error, Result};
use crate::models::Gpx;
use crate::parser::{parse_with, ParseOptions};
use log::debug;
use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::{Path, PathBuf};

enum Source {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for Source {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Source::Mapped(map) => &map[..],
            Source::Owned(data) => data.as_slice(),
        }
    }
}

/// A reader for GPX files.
///
/// # Examples
///
/// ```no_run
/// use gpx_parser::GpxReader;
///
/// let gpx = GpxReader::from_file("ride.gpx")?.read()?;
/// println!("{} track points", gpx.trackpoint_count());
/// # Ok::<(), gpx_parser::Error>(())
/// ```
pub struct GpxReader {
    data: Source,
    path: Option<PathBuf>,
    options: ParseOptions,
    use_xml_parser: bool,
}

impl GpxReader {
    /// Open a GPX file by memory-mapping it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] carrying `path` if the file cannot be opened or mapped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        GpxReaderBuilder::new().from_file(path)
    }

    /// Create a reader over bytes already in memory.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        GpxReaderBuilder::new().from_bytes(data)
    }

    /// Read a file and parse it in one step.
    pub fn open<P: AsRef<Path>>(path: P, use_xml_parser: bool, ignore_errors: bool) -> Result<Gpx> {
        GpxReaderBuilder::new()
            .use_xml_parser(use_xml_parser)
            .ignore_errors(ignore_errors)
            .from_file(path)?
            .read()
    }

    /// Path the reader was opened from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Raw bytes of the document.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Parse the document.
    ///
    /// # Errors
    ///
    /// See [`crate::parse`] for the fast path and [`crate::xml::parse`] for the XML path.
    pub fn read(&self) -> Result<Gpx> {
        debug!(
            "parsing {} ({} bytes, {} parser)",
            self.path
                .as_deref()
                .map_or_else(|| "<memory>".into(), |p| p.to_string_lossy()),
            self.data.len(),
            if self.use_xml_parser { "xml" } else { "fast" }
        );
        if self.use_xml_parser {
            crate::xml::parse(&self.data)
        } else {
            parse_with(&self.data, &self.options)
        }
    }
}

/// Builder for configuring GPX parsing options.
///
/// # Examples
///
/// ```no_run
/// use gpx_parser::GpxReaderBuilder;
///
/// let gpx = GpxReaderBuilder::new()
///     .ignore_errors(true)
///     .from_file("ride.gpx")?
///     .read()?;
/// println!("skipped {} bad points", gpx.error_count());
/// # Ok::<(), gpx_parser::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GpxReaderBuilder {
    options: ParseOptions,
    use_xml_parser: bool,
}

impl GpxReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip malformed track points instead of failing. Ignored by the XML parser.
    pub fn ignore_errors(mut self, ignore: bool) -> Self {
        self.options.ignore_errors = ignore;
        self
    }

    /// Use the full XML parser instead of the fast track point scanner.
    ///
    /// Default is `false`.
    pub fn use_xml_parser(mut self, use_xml: bool) -> Self {
        self.use_xml_parser = use_xml;
        self
    }

    /// Build a reader from a file path.
    pub fn from_file<P: AsRef<Path>>(self, path: P) -> Result<GpxReader> {
        let path = path.as_ref();
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        // SAFETY: the mapping is read-only and owned by the reader; the file is not
        // expected to be modified while it is parsed.
        let map = unsafe { Mmap::map(&file) }.map_err(io_err)?;

        Ok(GpxReader {
            data: Source::Mapped(map),
            path: Some(path.to_path_buf()),
            options: self.options,
            use_xml_parser: self.use_xml_parser,
        })
    }

    /// Build a reader from raw bytes.
    pub fn from_bytes(self, data: Vec<u8>) -> GpxReader {
        GpxReader {
            data: Source::Owned(data),
            path: None,
            options: self.options,
            use_xml_parser: self.use_xml_parser,
        }
    }
}
