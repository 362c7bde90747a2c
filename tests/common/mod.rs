//! Test utilities for building GPX documents
#![allow(dead_code)]

/// Builder for creating GPX test documents
pub struct GpxBuilder {
    quote: char,
    points: Vec<String>,
    header: String,
}

impl GpxBuilder {
    /// Create a builder producing double-quoted attributes
    pub fn new() -> Self {
        Self {
            quote: '"',
            points: Vec::new(),
            header: concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<gpx version=\"1.1\" creator=\"gpx-parser tests\">\n",
                " <metadata><time>2024-05-01T08:00:00Z</time></metadata>\n",
                " <trk>\n  <name>Morning Ride</name>\n  <trkseg>\n",
            )
            .to_string(),
        }
    }

    /// Create a builder producing single-quoted attributes
    pub fn single_quoted() -> Self {
        let mut builder = Self::new();
        builder.quote = '\'';
        builder.header = builder.header.replace('"', "'");
        builder
    }

    /// Add a well-formed track point with lon before lat
    pub fn point(mut self, lat: f64, lon: f64, ele: f64) -> Self {
        let q = self.quote;
        self.points.push(format!(
            "<trkpt lon={q}{lon}{q} lat={q}{lat}{q}><ele>{ele}</ele></trkpt>"
        ));
        self
    }

    /// Add a track point with a timestamp and extensions, as written by fitness devices
    pub fn timed_point(mut self, lat: f64, lon: f64, ele: f64, time: &str) -> Self {
        let q = self.quote;
        self.points.push(format!(
            "<trkpt lat={q}{lat}{q} lon={q}{lon}{q}>\n    <ele>{ele}</ele>\n    <time>{time}</time>\n    \
             <extensions><gpxtpx:TrackPointExtension><gpxtpx:hr>142</gpxtpx:hr></gpxtpx:TrackPointExtension></extensions>\n   </trkpt>"
        ));
        self
    }

    /// Add a track point without an elevation element
    pub fn point_without_ele(mut self, lat: f64, lon: f64) -> Self {
        let q = self.quote;
        self.points
            .push(format!("<trkpt lat={q}{lat}{q} lon={q}{lon}{q}></trkpt>"));
        self
    }

    /// Add a track point without a lat attribute
    pub fn point_without_lat(mut self, lon: f64, ele: f64) -> Self {
        let q = self.quote;
        self.points
            .push(format!("<trkpt lon={q}{lon}{q}><ele>{ele}</ele></trkpt>"));
        self
    }

    /// Add raw text between track points
    pub fn raw(mut self, text: &str) -> Self {
        self.points.push(text.to_string());
        self
    }

    /// Build the document
    pub fn build(self) -> Vec<u8> {
        let mut data = self.header;
        for point in &self.points {
            data.push_str("   ");
            data.push_str(point);
            data.push('\n');
        }
        data.push_str("  </trkseg>\n </trk>\n</gpx>\n");
        data.into_bytes()
    }
}

/// `n` well-formed points along a line
pub fn line_points(n: usize) -> Vec<(f64, f64, f64)> {
    (0..n)
        .map(|i| {
            let i = i as f64;
            (60.1 + i * 0.0001, 24.9 - i * 0.0002, 10.0 + i * 0.5)
        })
        .collect()
}

/// Document holding `points`, all well-formed
pub fn document(points: &[(f64, f64, f64)]) -> Vec<u8> {
    points
        .iter()
        .fold(GpxBuilder::new(), |b, &(lat, lon, ele)| b.point(lat, lon, ele))
        .build()
}
