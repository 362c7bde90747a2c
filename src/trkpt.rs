//! Extraction of latitude, longitude and elevation from a single track point span.
//!
//! A span is the text between `<trkpt ` and `</trkpt>`, for example
//!
//! ```text
//! lon="-5.760211" lat="37.942557"> <ele>615.25</ele>
//! ```
//!
//! Attributes are expected before the elevation element. Anything else in the span is
//! ignored as long as it does not hide these three values.

use memchr::{memchr, memmem};

use crate::error::{Field, PointError};
use crate::models::Trackpoint;
use crate::scan::{index_tag, Quote, ELE_OPEN};

/// Bytes at the start of a span that hold the lat/lon attributes.
const ATTRIBUTE_PREFIX: usize = 20;

/// Parses all three values. Each extraction runs regardless of the others; the first
/// failure in lon, lat, ele order is returned.
pub(crate) fn parse_trkpt(span: &[u8], quote: Quote) -> Result<Trackpoint, PointError> {
    let lon = parse_coordinate(span, Field::Longitude, quote);
    let lat = parse_coordinate(span, Field::Latitude, quote);
    let ele = parse_elevation(span);
    Ok(Trackpoint {
        lon: lon?,
        lat: lat?,
        ele: ele?,
    })
}

/// Reads the `lat` or `lon` attribute value.
pub(crate) fn parse_coordinate(span: &[u8], field: Field, quote: Quote) -> Result<f64, PointError> {
    let name = field.xml_name().as_bytes();
    let pos = memmem::find(span, name).ok_or(PointError::MissingAttribute(field))?;

    // name and '='
    let after_name = span
        .get(pos + name.len() + 1..)
        .ok_or(PointError::MissingQuotemark(field))?;
    let open = memchr(quote.byte(), after_name).ok_or(PointError::MissingQuotemark(field))?;
    let value = &after_name[open + 1..];
    let close = memchr(quote.byte(), value).ok_or(PointError::MissingQuotemark(field))?;

    parse_number(&value[..close], field)
}

/// Reads the text of the `<ele>` element.
///
/// The value runs up to the next `<`, which is not checked to be `</ele>`. Conforming
/// GPX never has anything else there, but `<ele>12<b>3</b></ele>` reads as 12.
pub(crate) fn parse_elevation(span: &[u8]) -> Result<f64, PointError> {
    let skip = match memchr(b'>', span) {
        Some(end_of_start_tag) => ATTRIBUTE_PREFIX.min(end_of_start_tag + 1),
        None => ATTRIBUTE_PREFIX.min(span.len()),
    };
    let tail = &span[skip..];
    let start = index_tag(tail, ELE_OPEN).ok_or(PointError::MissingElevationTag)? + ELE_OPEN.len();
    let len = memchr(b'<', &tail[start..]).ok_or(PointError::InvalidElevationSyntax)?;

    parse_number(&tail[start..start + len], Field::Elevation)
}

fn parse_number(text: &[u8], field: Field) -> Result<f64, PointError> {
    let text = text.trim_ascii();
    lexical_core::parse::<f64>(text).map_err(|source| PointError::InvalidNumber {
        field,
        text: String::from_utf8_lossy(text).into_owned(),
        source,
    })
}
