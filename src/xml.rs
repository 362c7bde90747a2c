//! Full XML parsing of GPX documents.
//!
//! Slower than [`crate::parse`] but tolerant of comments, CDATA, entities and element
//! order, and it keeps every track and segment of the source document. Coordinates and
//! elevations may carry surrounding whitespace and a leading `+`, as on the fast path.

use serde::{Deserialize, Deserializer};

use crate::error::Result;
use crate::models::{Gpx, Segment, Track, Trackpoint};

#[derive(Debug, Deserialize)]
struct XmlGpx {
    #[serde(rename = "@creator", default)]
    creator: String,
    #[serde(rename = "@version", default)]
    version: String,
    #[serde(default)]
    time: String,
    #[serde(rename = "trk", default)]
    tracks: Vec<XmlTrack>,
}

#[derive(Debug, Deserialize)]
struct XmlTrack {
    #[serde(default)]
    name: String,
    #[serde(rename = "trkseg", default)]
    segments: Vec<XmlSegment>,
}

#[derive(Debug, Deserialize)]
struct XmlSegment {
    #[serde(rename = "trkpt", default)]
    points: Vec<XmlTrackpoint>,
}

#[derive(Debug, Deserialize)]
struct XmlTrackpoint {
    #[serde(rename = "@lat", deserialize_with = "trimmed_f64")]
    lat: f64,
    #[serde(rename = "@lon", deserialize_with = "trimmed_f64")]
    lon: f64,
    #[serde(default, deserialize_with = "trimmed_f64")]
    ele: f64,
}

fn trimmed_f64<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    let text = String::deserialize(deserializer)?;
    text.trim().parse().map_err(serde::de::Error::custom)
}

impl From<XmlGpx> for Gpx {
    fn from(gpx: XmlGpx) -> Self {
        Gpx {
            creator: gpx.creator,
            version: gpx.version,
            time: gpx.time,
            tracks: gpx.tracks.into_iter().map(Track::from).collect(),
            error_count: 0,
        }
    }
}

impl From<XmlTrack> for Track {
    fn from(track: XmlTrack) -> Self {
        Track {
            name: track.name,
            segments: track
                .segments
                .into_iter()
                .map(|segment| Segment {
                    points: segment
                        .points
                        .into_iter()
                        .map(|p| Trackpoint {
                            lat: p.lat,
                            lon: p.lon,
                            ele: p.ele,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Parses `data` with a full XML parser.
///
/// A missing `<ele>` reads as 0. Unlike [`crate::parse`], a document without track
/// points is not an error.
pub fn parse(data: &[u8]) -> Result<Gpx> {
    let text = std::str::from_utf8(data)?;
    let gpx: XmlGpx = quick_xml::de::from_str(text)?;
    Ok(gpx.into())
}
