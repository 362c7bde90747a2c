//! Byte-level scanning helpers for the GPX track point vocabulary.

use memchr::memchr;

use crate::error::StructuralError;

pub(crate) const TRKPT_OPEN: &[u8] = b"<trkpt";
pub(crate) const TRKPT_CLOSE: &[u8] = b"</trkpt>";
pub(crate) const ELE_OPEN: &[u8] = b"<ele>";

/// Length of the shortest element tag in GPX (`<ele>`, `<trk>`, `<sym>`, ...).
const MIN_GPX_TAG_LEN: usize = 5;

/// Returns the index of the first `tag` in `buf`.
///
/// Only valid for short ASCII tags starting with `<`. After a mismatch at a `<` the scan
/// resumes `min(tag.len(), MIN_GPX_TAG_LEN)` bytes further on: no GPX tag is shorter,
/// so the skipped bytes cannot hold another tag start.
pub(crate) fn index_tag(buf: &[u8], tag: &[u8]) -> Option<usize> {
    debug_assert_eq!(tag.first(), Some(&b'<'));
    let stride = tag.len().min(MIN_GPX_TAG_LEN);

    let mut pos = 0;
    while pos < buf.len() {
        pos += memchr(b'<', &buf[pos..])?;
        let end = pos + tag.len();
        if end > buf.len() {
            return None;
        }
        if &buf[pos..end] == tag {
            return Some(pos);
        }
        pos += stride;
    }
    None
}

/// Attribute value delimiter used by a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Double,
    Single,
}

impl Quote {
    pub fn byte(self) -> u8 {
        match self {
            Quote::Double => b'"',
            Quote::Single => b'\'',
        }
    }

    /// Picks the quote style from the first track point span.
    ///
    /// When both kinds appear the earlier one wins.
    pub(crate) fn detect(span: &[u8]) -> Result<Self, StructuralError> {
        match (memchr(b'"', span), memchr(b'\'', span)) {
            (Some(d), Some(s)) if s < d => Ok(Quote::Single),
            (Some(_), _) => Ok(Quote::Double),
            (None, Some(_)) => Ok(Quote::Single),
            (None, None) => Err(StructuralError::MissingQuoteMarking),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_tag_finds_first_match() {
        let buf = b"  <trkseg>\n <trkpt lat=\"1\"></trkpt><trkpt>";
        assert_eq!(index_tag(buf, TRKPT_OPEN), Some(12));
        assert_eq!(index_tag(buf, TRKPT_CLOSE), Some(27));
    }

    #[test]
    fn test_index_tag_not_found() {
        assert_eq!(index_tag(b"", TRKPT_OPEN), None);
        assert_eq!(index_tag(b"no tags here", ELE_OPEN), None);
        assert_eq!(index_tag(b"<trk><trkseg>", TRKPT_OPEN), None);
    }

    #[test]
    fn test_index_tag_truncated_at_end() {
        assert_eq!(index_tag(b"lat=\"1\"></trkp", TRKPT_CLOSE), None);
    }

    #[test]
    fn test_index_tag_adjacent_short_tags() {
        // Empty <ele></ele> puts the next '<' exactly 5 bytes after the previous one.
        let buf = b"<ele></ele></trkpt>";
        assert_eq!(index_tag(buf, TRKPT_CLOSE), Some(11));
        assert_eq!(index_tag(b"<trk><trkpt lon", TRKPT_OPEN), Some(5));
    }

    #[test]
    fn test_index_tag_skips_lookalikes() {
        let buf = b"<trkseg><trkpt ";
        assert_eq!(index_tag(buf, TRKPT_OPEN), Some(8));
    }

    #[test]
    fn test_index_tag_stride_assumes_gpx_tag_lengths() {
        // A 4-byte tag is outside the GPX vocabulary; the stride jumps over `<ele>`.
        assert_eq!(index_tag(b"<el><ele>5", ELE_OPEN), None);
        assert_eq!(index_tag(b"<el>\n<ele>5", ELE_OPEN), Some(5));
    }

    #[test]
    fn test_detect_quote() {
        assert_eq!(Quote::detect(b"lat=\"1\" lon=\"2\"").unwrap(), Quote::Double);
        assert_eq!(Quote::detect(b"lat='1' lon='2'").unwrap(), Quote::Single);
        assert_eq!(Quote::detect(b"lat='1' lon=\"2\"").unwrap(), Quote::Single);
        assert_eq!(Quote::detect(b"lat=\"1\" name='x'").unwrap(), Quote::Double);
        assert_eq!(
            Quote::detect(b"lat=1 lon=2><ele>3</ele>"),
            Err(StructuralError::MissingQuoteMarking)
        );
    }
}
