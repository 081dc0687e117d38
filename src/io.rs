//! Plain-text exchange format for polygons and triangle lists.
//!
//! A polygon file starts with the vertex count, followed by one `x y` line per
//! vertex. A triangle file starts with the triangle count, followed by three
//! `x y` lines per triangle, each triangle terminated by a blank line.
//!
//! ```text
//! 4          2
//! 0 0        0 1
//! 4 0        0 0
//! 4 4        4 0
//! 0 4
//!            4 0
//!            4 4
//!            0 1
//! ```

use core::fmt::Display;
use core::str::FromStr;
use std::io::{self, BufRead, Write};
use std::string::{String, ToString};
use std::vec::Vec;

use num_traits::float::Float;

use crate::{Point, Triangle};

/// Malformed or unreadable exchange data.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The underlying reader failed
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The input holds no non-blank line
    #[error("missing count line")]
    MissingCount,

    /// The first non-blank line is not a non-negative integer
    #[error("line {line}: invalid count {value:?}")]
    InvalidCount { line: usize, value: String },

    /// A point line does not hold exactly two finite numbers
    #[error("line {line}: expected two finite coordinates, found {value:?}")]
    InvalidPoint { line: usize, value: String },

    /// The input ended before the announced number of points
    #[error("expected {expected} points, found {found}")]
    CountMismatch { expected: usize, found: usize },
}

/// numbered line reader that skips blank separator lines
struct Lines<R> {
    inner: io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            line: 0,
        }
    }

    fn next_non_blank(&mut self) -> Result<Option<(usize, String)>, FormatError> {
        for text in self.inner.by_ref() {
            let text = text?;
            self.line += 1;
            if !text.trim().is_empty() {
                return Ok(Some((self.line, text)));
            }
        }
        Ok(None)
    }

    fn read_count(&mut self) -> Result<usize, FormatError> {
        let (line, text) = self.next_non_blank()?.ok_or(FormatError::MissingCount)?;
        text.trim().parse().map_err(|_| FormatError::InvalidCount {
            line,
            value: text.trim().to_string(),
        })
    }

    fn read_points<T: Float + FromStr>(
        &mut self,
        count: usize,
    ) -> Result<Vec<Point<T>>, FormatError> {
        // the count is untrusted input
        let mut points = Vec::with_capacity(count.min(4096));
        while points.len() < count {
            let Some((line, text)) = self.next_non_blank()? else {
                return Err(FormatError::CountMismatch {
                    expected: count,
                    found: points.len(),
                });
            };
            points.push(parse_point(&text).ok_or_else(|| FormatError::InvalidPoint {
                line,
                value: text.trim().to_string(),
            })?);
        }
        Ok(points)
    }
}

/// `None` unless the line is exactly two finite numbers
fn parse_point<T: Float + FromStr>(text: &str) -> Option<Point<T>> {
    let mut fields = text.split_whitespace();
    let x: T = fields.next()?.parse().ok()?;
    let y: T = fields.next()?.parse().ok()?;
    if fields.next().is_some() || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some([x, y])
}

/// Reads a polygon: a vertex count followed by that many `x y` lines.
pub fn read_polygon<T: Float + FromStr>(
    reader: impl BufRead,
) -> Result<Vec<Point<T>>, FormatError> {
    let mut lines = Lines::new(reader);
    let count = lines.read_count()?;
    lines.read_points(count)
}

/// Reads a triangle list written by [`write_triangles`].
pub fn read_triangles<T: Float + FromStr>(
    reader: impl BufRead,
) -> Result<Vec<Triangle<T>>, FormatError> {
    let mut lines = Lines::new(reader);
    let count = lines.read_count()?;
    let points = lines.read_points(count.saturating_mul(3))?;
    Ok(points.chunks_exact(3).map(|t| [t[0], t[1], t[2]]).collect())
}

/// Writes `polygon` as a vertex count followed by one `x y` line per vertex.
pub fn write_polygon<T: Float + Display>(
    mut writer: impl Write,
    polygon: &[Point<T>],
) -> io::Result<()> {
    writeln!(writer, "{}", polygon.len())?;
    for [x, y] in polygon {
        writeln!(writer, "{} {}", x, y)?;
    }
    Ok(())
}

/// Writes the triangle count, then each triangle as three `x y` lines and a
/// blank line. An empty list is written as a lone `0` line, which readers take
/// as a rejected polygon.
pub fn write_triangles<T: Float + Display>(
    mut writer: impl Write,
    triangles: &[Triangle<T>],
) -> io::Result<()> {
    writeln!(writer, "{}", triangles.len())?;
    for triangle in triangles {
        for [x, y] in triangle {
            writeln!(writer, "{} {}", x, y)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
