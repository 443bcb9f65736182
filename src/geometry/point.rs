//! Planar points and Euclidean distance.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// A city location in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Euclidean norm of `a - b`.
///
/// Symmetric, non-negative, and zero iff `a == b`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(&b)
}

/// Checks that a point set is non-empty and every coordinate is finite.
pub fn validate_points(points: &[Point]) -> Result<()> {
    if points.is_empty() {
        return Err(TspError::EmptyInstance);
    }
    if let Some((i, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(TspError::InvalidPoint(format!(
            "city {i} has non-finite coordinates ({}, {})",
            p.x, p.y
        )));
    }
    Ok(())
}
