//! Up-front estimate of track point count and size.

use crate::scan::{index_tag, TRKPT_OPEN};

/// Buffers shorter than this are assumed to hold a single track point.
const MIN_SAMPLE_BUFFER: usize = 500;
/// Point length assumed when no usable sample is found.
pub(crate) const MIN_TRKPT_LEN: usize = 24;
/// Shortest plausible distance between two `<trkpt` tags.
const MIN_SAMPLED_LEN: usize = 20;
/// Upward bias on the point count so the single allocation rarely has to grow.
const COUNT_BIAS: f64 = 1.05;

/// Estimated number of track points and bytes per track point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEstimate {
    pub count: usize,
    pub trkpt_len: usize,
}

impl SizeEstimate {
    pub const fn new(count: usize, trkpt_len: usize) -> Self {
        Self { count, trkpt_len }
    }

    const fn fallback() -> Self {
        Self::new(1, MIN_TRKPT_LEN)
    }

    /// Samples the second half of `data` and measures the distance between two
    /// consecutive `<trkpt` tags there.
    pub fn sample(data: &[u8]) -> Self {
        if data.len() < MIN_SAMPLE_BUFFER {
            return Self::fallback();
        }
        let half = &data[data.len() / 2..];
        let Some(first) = index_tag(half, TRKPT_OPEN) else {
            return Self::fallback();
        };
        let Some(next) = index_tag(&half[first + 1..], TRKPT_OPEN) else {
            return Self::fallback();
        };
        let trkpt_len = next + 1;
        if trkpt_len < MIN_SAMPLED_LEN {
            return Self::fallback();
        }

        let count = (data.len() / trkpt_len) as f64 * COUNT_BIAS;
        Self::new(count.ceil() as usize, trkpt_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trkpts(n: usize) -> Vec<u8> {
        let mut data = Vec::new();
        for i in 0..n {
            data.extend_from_slice(
                format!("<trkpt lat=\"{i}.5\" lon=\"2.25\"><ele>10</ele></trkpt>\n").as_bytes(),
            );
        }
        data
    }

    #[test]
    fn test_small_buffer_uses_fallback() {
        let data = trkpts(1);
        assert!(data.len() < MIN_SAMPLE_BUFFER);
        assert_eq!(SizeEstimate::sample(&data), SizeEstimate::new(1, MIN_TRKPT_LEN));
    }

    #[test]
    fn test_uniform_points() {
        let data = trkpts(100);
        let line = trkpts(1).len();
        let estimate = SizeEstimate::sample(&data);
        // Points in the second half have a two-digit latitude.
        assert!(estimate.trkpt_len == line || estimate.trkpt_len == line + 1);
        assert!(estimate.count >= data.len() / estimate.trkpt_len);
        assert!(estimate.count <= 110);
    }

    #[test]
    fn test_no_second_tag_uses_fallback() {
        let mut data = vec![b' '; 600];
        data.extend_from_slice(b"<trkpt lat=\"1\" lon=\"2\"></trkpt>");
        assert_eq!(SizeEstimate::sample(&data), SizeEstimate::new(1, MIN_TRKPT_LEN));
    }

    #[test]
    fn test_degenerate_distance_uses_fallback() {
        let mut data = vec![b' '; 600];
        data.extend_from_slice(b"<trkpt><trkpt><trkpt>");
        assert_eq!(SizeEstimate::sample(&data), SizeEstimate::new(1, MIN_TRKPT_LEN));
    }
}
