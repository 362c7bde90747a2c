use serde::Serialize;

/// A GPX document reduced to its track structure.
///
/// Documents produced by the fast path always hold exactly one track with exactly one
/// segment. Documents produced by [`crate::xml::parse`] keep the source structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Gpx {
    pub creator: String,
    pub version: String,
    pub time: String,
    pub tracks: Vec<Track>,
    #[serde(skip)]
    pub(crate) error_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Track {
    pub name: String,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Segment {
    pub points: Vec<Trackpoint>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Trackpoint {
    pub lat: f64,
    pub lon: f64,
    pub ele: f64,
}

impl Gpx {
    /// Builds a document holding one track with one segment of `points`.
    pub(crate) fn single_segment(points: Vec<Trackpoint>, error_count: usize) -> Self {
        Self {
            tracks: vec![Track {
                name: String::new(),
                segments: vec![Segment { points }],
            }],
            error_count,
            ..Default::default()
        }
    }

    fn first_segment(&self) -> Option<&Segment> {
        self.tracks.first()?.segments.first()
    }

    /// Number of points in the first segment of the first track.
    pub fn trackpoint_count(&self) -> usize {
        self.trackpoints().len()
    }

    /// The points of the first segment of the first track.
    ///
    /// For fast-path documents this is every accepted point. Documents from the XML
    /// parser may carry more tracks and segments; use [`Gpx::all_trackpoints`] for those.
    pub fn trackpoints(&self) -> &[Trackpoint] {
        self.first_segment()
            .map(|segment| segment.points.as_slice())
            .unwrap_or_default()
    }

    /// Owned copy of [`Gpx::trackpoints`].
    pub fn trackpoints_copy(&self) -> Vec<Trackpoint> {
        self.trackpoints().to_vec()
    }

    /// Drops the point storage of the first segment.
    pub fn release_trackpoints(&mut self) {
        if let Some(segment) = self
            .tracks
            .first_mut()
            .and_then(|track| track.segments.first_mut())
        {
            segment.points = Vec::new();
        }
    }

    /// Every point of every segment of every track, in document order.
    pub fn all_trackpoints(&self) -> impl Iterator<Item = &Trackpoint> {
        self.tracks
            .iter()
            .flat_map(|track| track.segments.iter())
            .flat_map(|segment| segment.points.iter())
    }

    /// Points skipped in best-effort mode. Always zero for strict and XML parses.
    pub fn error_count(&self) -> usize {
        self.error_count
    }
}
