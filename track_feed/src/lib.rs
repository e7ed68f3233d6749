//! Parser for the line-oriented position-tracking feed.
//!
//! Every poll delivers a snapshot of whitespace-separated records, one per
//! tracked point. Fields 3 and 5 carry the raw planar coordinates; they are
//! scaled by the per-axis multipliers, lifted to the table surface height,
//! and partitioned by the sign of the scaled length coordinate (negative is
//! side one).

use glam::Vec3;
use thiserror::Error;

/// Field index of the raw length-axis coordinate.
const LENGTH_FIELD: usize = 3;
/// Field index of the raw width-axis coordinate.
const WIDTH_FIELD: usize = 5;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("record has {got} fields, need at least {need}")]
    MissingField { got: usize, need: usize },
    #[error("field {index} is not a number: {source}")]
    BadNumber {
        index: usize,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Scaling from raw tracker units into table units.
#[derive(Debug, Clone, Copy)]
pub struct FeedScale {
    pub length_multi: f32,
    pub width_multi: f32,
    pub surface_y: f32,
}

impl Default for FeedScale {
    fn default() -> Self {
        Self {
            length_multi: 73.0,
            width_multi: 36.0,
            surface_y: 5.0,
        }
    }
}

/// One tracking snapshot split by table side.
#[derive(Debug, Clone, Default)]
pub struct ParsedFrame {
    pub one: Vec<Vec3>,
    pub two: Vec<Vec3>,
}

impl ParsedFrame {
    /// File a point with the side picked by the sign of its length coordinate.
    pub fn push(&mut self, point: Vec3) {
        if point.x < 0.0 {
            self.one.push(point);
        } else {
            self.two.push(point);
        }
    }

    pub fn len(&self) -> usize {
        self.one.len() + self.two.len()
    }

    pub fn is_empty(&self) -> bool {
        self.one.is_empty() && self.two.is_empty()
    }
}

/// Parse a single feed record into a scaled point on the table surface.
pub fn parse_record(line: &str, scale: &FeedScale) -> Result<Vec3, FeedError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() <= WIDTH_FIELD {
        return Err(FeedError::MissingField {
            got: fields.len(),
            need: WIDTH_FIELD + 1,
        });
    }
    let x = parse_field(&fields, LENGTH_FIELD)? * scale.length_multi;
    let z = parse_field(&fields, WIDTH_FIELD)? * scale.width_multi;
    Ok(Vec3::new(x, scale.surface_y, z))
}

fn parse_field(fields: &[&str], index: usize) -> Result<f32, FeedError> {
    fields[index]
        .parse()
        .map_err(|source| FeedError::BadNumber { index, source })
}

/// Parse a whole poll snapshot, one record per line. Blank lines are
/// ignored; any malformed record fails the frame.
pub fn parse_frame(input: &str, scale: &FeedScale) -> Result<ParsedFrame, FeedError> {
    let mut frame = ParsedFrame::default();
    for line in input.lines() {
        if line.trim().is_empty() {
            continue;
        }
        frame.push(parse_record(line, scale)?);
    }
    Ok(frame)
}
