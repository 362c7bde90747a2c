//! Fast-path GPX parsing: segments the buffer into track points and extracts their values
//! without building an XML tree.

use log::{debug, trace};

use crate::error::{Error, Result, StructuralError};
use crate::estimate::SizeEstimate;
use crate::models::{Gpx, Trackpoint};
use crate::scan::{index_tag, Quote, TRKPT_CLOSE, TRKPT_OPEN};
use crate::trkpt::parse_trkpt;

/// How far past the search start a close tag may be found before the size estimate
/// is considered wrong for this document.
const CLOSE_SLACK: usize = 20;
/// Bytes kept between the search start and the expected close tag.
const WINDOW_MARGIN: usize = 2;

/// Options for [`parse_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Skip malformed track points instead of failing the whole parse.
    pub ignore_errors: bool,
    /// Use this estimate instead of sampling the buffer. Only affects allocation and
    /// search pacing, never which points are accepted.
    pub size_hint: Option<SizeEstimate>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_errors(mut self, ignore: bool) -> Self {
        self.ignore_errors = ignore;
        self
    }

    pub fn size_hint(mut self, estimate: SizeEstimate) -> Self {
        self.size_hint = Some(estimate);
        self
    }
}

/// Parses `lat`, `lon` and `ele` of every track point in `data` into a document with a
/// single track holding a single segment.
///
/// With `ignore_errors` malformed track points are counted (see [`Gpx::error_count`])
/// and skipped; otherwise the first one aborts the parse. A document without any valid
/// track point is always an error.
///
/// # Examples
///
/// ```
/// let data = br#"<gpx><trk><trkseg>
///   <trkpt lon="-5.760211" lat="37.942557"><ele>615.25</ele></trkpt>
/// </trkseg></trk></gpx>"#;
///
/// let gpx = gpx_parser::parse(data, false)?;
/// assert_eq!(gpx.trackpoint_count(), 1);
/// assert_eq!(gpx.trackpoints()[0].ele, 615.25);
/// # Ok::<(), gpx_parser::Error>(())
/// ```
pub fn parse(data: &[u8], ignore_errors: bool) -> Result<Gpx> {
    parse_with(data, &ParseOptions::new().ignore_errors(ignore_errors))
}

/// Like [`parse`], with explicit [`ParseOptions`].
pub fn parse_with(data: &[u8], options: &ParseOptions) -> Result<Gpx> {
    Parser::new(data, options)?.run()
}

/// State of one parse call.
struct Parser<'a> {
    /// Unparsed tail of the input, starting at or before the next `<trkpt`.
    rest: &'a [u8],
    quote: Quote,
    /// Offset into `rest` where the close tag search starts. Only ever shrinks.
    window: usize,
    estimate: SizeEstimate,
    ignore_errors: bool,
    accepted: usize,
    skipped: usize,
}

impl<'a> Parser<'a> {
    fn new(data: &'a [u8], options: &ParseOptions) -> Result<Self> {
        let first = index_tag(data, TRKPT_OPEN).ok_or(StructuralError::NoTrackpoints)?;
        let rest = &data[first..];
        let quote = Quote::detect(first_span(rest))?;

        let estimate = options.size_hint.unwrap_or_else(|| SizeEstimate::sample(rest));
        debug!(
            "estimated {} track points of {} bytes, {:?} quotes",
            estimate.count, estimate.trkpt_len, quote
        );

        Ok(Self {
            rest,
            quote,
            window: estimate
                .trkpt_len
                .saturating_sub(TRKPT_CLOSE.len() + WINDOW_MARGIN),
            estimate,
            ignore_errors: options.ignore_errors,
            accepted: 0,
            skipped: 0,
        })
    }

    fn run(mut self) -> Result<Gpx> {
        // A caller-supplied hint can be far off; no buffer holds more points than this.
        let fits = self.rest.len() / (TRKPT_OPEN.len() + TRKPT_CLOSE.len()) + 1;
        let mut points: Vec<Trackpoint> = Vec::with_capacity(self.estimate.count.min(fits));

        while let Some(span) = self.next_trkpt() {
            match parse_trkpt(span, self.quote) {
                Ok(point) => {
                    self.accepted += 1;
                    points.push(point);
                }
                Err(err) if self.ignore_errors => {
                    self.skipped += 1;
                    trace!(
                        "skipping trackpoint {}: {}",
                        self.accepted + self.skipped,
                        err
                    );
                }
                Err(source) => {
                    return Err(Error::Trackpoint {
                        ordinal: self.accepted + 1,
                        source,
                    });
                }
            }
        }

        if points.is_empty() {
            return Err(Error::NoValidTrackpoints);
        }
        debug!(
            "parsed {} track points ({} skipped, capacity {})",
            points.len(),
            self.skipped,
            points.capacity()
        );
        points.shrink_to_fit();

        Ok(Gpx::single_segment(points, self.skipped))
    }

    /// Cuts the next track point span off `rest`.
    ///
    /// Returns the text between `<trkpt ` and `</trkpt>`, or `None` once no complete
    /// track point is left.
    ///
    /// The window only decides where the second search starts. When that search hits a
    /// close tag within expectation, `[left, start + 7)` is still re-scanned for an
    /// earlier one, so every point is effectively scanned from its left bound. That
    /// re-scan is what keeps the accepted points independent of the size estimate: a
    /// window measured on long points would otherwise jump over a short point's close
    /// tag and merge it with its neighbour.
    fn next_trkpt(&mut self) -> Option<&'a [u8]> {
        let rest = self.rest;
        if rest.len() < TRKPT_OPEN.len() + TRKPT_CLOSE.len() {
            return None;
        }

        let left = index_tag(rest, TRKPT_OPEN)? + TRKPT_OPEN.len() + 1;
        if left > rest.len() {
            return None;
        }
        let start = self.window.clamp(left, rest.len());

        let close = match index_tag(&rest[start..], TRKPT_CLOSE) {
            Some(found) if found <= TRKPT_CLOSE.len() + CLOSE_SLACK => {
                // Also catches a close tag straddling `start`.
                let skipped = (start + TRKPT_CLOSE.len() - 1).min(rest.len());
                match index_tag(&rest[left..skipped], TRKPT_CLOSE) {
                    Some(early) => {
                        // Window overshot this point.
                        self.shrink_window_to(left + early);
                        left + early
                    }
                    None => start + found,
                }
            }
            _ => {
                // Far past or missing: search right after the left bound instead.
                self.window = self.window.saturating_sub(1);
                trace!("close tag search window shrunk to {}", self.window);
                left + index_tag(&rest[left..], TRKPT_CLOSE)?
            }
        };

        self.rest = &rest[close + TRKPT_CLOSE.len()..];
        Some(&rest[left..close])
    }

    fn shrink_window_to(&mut self, close: usize) {
        let window = close.saturating_sub(WINDOW_MARGIN);
        if window < self.window {
            trace!("close tag search window shrunk to {}", window);
            self.window = window;
        }
    }
}

/// Span of the first track point in `rest`, used to pick the quote style. Runs to the
/// end of the buffer when the close tag is missing.
fn first_span(rest: &[u8]) -> &[u8] {
    let left = (TRKPT_OPEN.len() + 1).min(rest.len());
    let tail = &rest[left..];
    match index_tag(tail, TRKPT_CLOSE) {
        Some(close) => &tail[..close],
        None => tail,
    }
}
