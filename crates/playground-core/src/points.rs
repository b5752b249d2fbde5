//! 2D point rotation through a rotation matrix.
//!
//! Points come from a free-form text area, one `x,y` pair per line. Lines
//! that are not exactly two comma-separated numbers are skipped, so blank
//! lines or half-typed input never block the plot.
//!
//! # Coordinate System
//!
//! - Angles are in degrees, positive = counter-clockwise
//! - Rotation is about the origin
//!
//! ```text
//! x' = x * cos(θ) - y * sin(θ)
//! y' = x * sin(θ) + y * cos(θ)
//! ```

use serde::{Deserialize, Serialize};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Parse a single `x,y` line. Returns `None` for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split(',');
        let x = parts.next()?.trim().parse::<f64>().ok()?;
        let y = parts.next()?.trim().parse::<f64>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { x, y })
    }
}

/// 2x2 counter-clockwise rotation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationMatrix {
    /// Row-major entries `[[cos, -sin], [sin, cos]]`.
    pub m: [[f64; 2]; 2],
}

impl RotationMatrix {
    /// Build the matrix for an angle in degrees.
    pub fn from_degrees(angle_degrees: f64) -> Self {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Self {
            m: [[cos, -sin], [sin, cos]],
        }
    }

    /// Multiply a point (as a column vector) by the matrix.
    #[inline]
    pub fn apply(&self, p: Point2D) -> Point2D {
        Point2D {
            x: self.m[0][0] * p.x + self.m[0][1] * p.y,
            y: self.m[1][0] * p.x + self.m[1][1] * p.y,
        }
    }
}

/// The "Apply" action: rotate the current points by an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationRequest {
    /// Any real value; wraps through the trigonometric functions.
    pub angle_degrees: f64,
}

/// Both polylines handed to the plotting collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationResult {
    pub original: Vec<Point2D>,
    pub rotated: Vec<Point2D>,
    pub matrix: RotationMatrix,
}

impl RotationRequest {
    pub fn new(angle_degrees: f64) -> Self {
        Self { angle_degrees }
    }

    /// Rotate `points`. Returns `None` when there is nothing to plot.
    pub fn apply(&self, points: &[Point2D]) -> Option<RotationResult> {
        if points.is_empty() {
            return None;
        }

        Some(RotationResult {
            original: points.to_vec(),
            rotated: rotate_points(points, self.angle_degrees),
            matrix: RotationMatrix::from_degrees(self.angle_degrees),
        })
    }
}

/// Parse newline-separated `x,y` pairs, skipping malformed lines.
pub fn parse_points(text: &str) -> Vec<Point2D> {
    let mut skipped = 0usize;
    let points: Vec<Point2D> = text
        .lines()
        .filter_map(|line| {
            let parsed = Point2D::parse(line);
            if parsed.is_none() {
                skipped += 1;
            }
            parsed
        })
        .collect();

    if skipped > 0 {
        log::debug!("skipped {} malformed point line(s)", skipped);
    }
    points
}

/// Rotate points counter-clockwise about the origin, preserving order.
pub fn rotate_points(points: &[Point2D], angle_degrees: f64) -> Vec<Point2D> {
    let matrix = RotationMatrix::from_degrees(angle_degrees);
    points.iter().map(|&p| matrix.apply(p)).collect()
}
