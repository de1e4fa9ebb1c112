//! # Right Triangle Model
//!
//! A right triangle whose legs are parallel to the axes, located by its
//! right-angle vertex (bottom-left). Only the bottom-left point, the length
//! (along x) and the height (along y) are stored; every other vertex and
//! measure is derived on demand.
//!
//! Scaling multiplies the current length or height in place, so repeated
//! scaling compounds.
//!
//! ## Example
//!
//! ```rust
//! use primer_core::programs::triangle::Triangle;
//!
//! let mut tri = Triangle::new(0.0, 0.0, 3.0, 4.0);
//! assert_eq!(tri.hypotenuse(), 5.0);
//! assert_eq!(tri.perimeter(), 12.0);
//!
//! tri.scale_length(2.0);
//! tri.scale_height(0.5);
//! assert_eq!((tri.length(), tri.height()), (6.0, 2.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{PrimerError, PrimerResult};
use crate::format::general;

/// Border line around the display block
const BORDER: &str = "----------------------------------------";

/// An (x, y) coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }
}

/// Axis-aligned right triangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Triangle {
    bottom_left: Point,
    length: f64,
    height: f64,
}

impl Triangle {
    pub fn new(x: f64, y: f64, length: f64, height: f64) -> Self {
        Triangle {
            bottom_left: Point::new(x, y),
            length,
            height,
        }
    }

    pub fn set_bottom_left_x(&mut self, x: f64) {
        self.bottom_left.set_x(x);
    }

    pub fn set_bottom_left_y(&mut self, y: f64) {
        self.bottom_left.set_y(y);
    }

    pub fn set_length(&mut self, length: f64) {
        self.length = length;
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// The right-angle vertex
    pub fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    /// `(bl.x + length, bl.y)`
    pub fn bottom_right(&self) -> Point {
        Point::new(self.bottom_left.x + self.length, self.bottom_left.y)
    }

    /// `(bl.x, bl.y + height)`
    pub fn top_left(&self) -> Point {
        Point::new(self.bottom_left.x, self.bottom_left.y + self.height)
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn hypotenuse(&self) -> f64 {
        (self.length * self.length + self.height * self.height).sqrt()
    }

    pub fn perimeter(&self) -> f64 {
        self.length + self.height + self.hypotenuse()
    }

    /// Multiply the current length by `sx`.
    pub fn scale_length(&mut self, sx: f64) {
        self.length *= sx;
    }

    /// Multiply the current height by `sy`.
    pub fn scale_height(&mut self, sy: f64) {
        self.height *= sy;
    }
}

/// Values read from the user to build a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleInput {
    pub bottom_left_x: f64,
    pub bottom_left_y: f64,
    pub length: f64,
    pub height: f64,
}

impl TriangleInput {
    /// Validate input parameters (strict mode only).
    pub fn validate(&self) -> PrimerResult<()> {
        check_finite("bottom_left_x", self.bottom_left_x)?;
        check_finite("bottom_left_y", self.bottom_left_y)?;
        check_positive("length", self.length)?;
        check_positive("height", self.height)
    }

    pub fn to_triangle(&self) -> Triangle {
        let mut tri = Triangle::default();
        tri.set_bottom_left_x(self.bottom_left_x);
        tri.set_bottom_left_y(self.bottom_left_y);
        tri.set_length(self.length);
        tri.set_height(self.height);
        tri
    }
}

/// Scale factors applied after the first display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleInput {
    pub sx: f64,
    pub sy: f64,
}

impl ScaleInput {
    /// Validate input parameters (strict mode only).
    pub fn validate(&self) -> PrimerResult<()> {
        check_positive("sx", self.sx)?;
        check_positive("sy", self.sy)
    }
}

fn check_finite(field: &str, value: f64) -> PrimerResult<()> {
    if !value.is_finite() {
        return Err(PrimerError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    Ok(())
}

fn check_positive(field: &str, value: f64) -> PrimerResult<()> {
    check_finite(field, value)?;
    if value <= 0.0 {
        return Err(PrimerError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

/// Every displayed quantity of a triangle at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleSnapshot {
    pub bottom_left: Point,
    pub top_left: Point,
    pub bottom_right: Point,
    pub length: f64,
    pub height: f64,
    pub hypotenuse: f64,
    pub perimeter: f64,
}

impl From<&Triangle> for TriangleSnapshot {
    fn from(tri: &Triangle) -> Self {
        TriangleSnapshot {
            bottom_left: tri.bottom_left(),
            top_left: tri.top_left(),
            bottom_right: tri.bottom_right(),
            length: tri.length(),
            height: tri.height(),
            hypotenuse: tri.hypotenuse(),
            perimeter: tri.perimeter(),
        }
    }
}

/// The triangle before and after scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleReport {
    pub before: TriangleSnapshot,
    pub after: TriangleSnapshot,
}

/// Build the triangle, scale it, and capture both states.
pub fn calculate(input: &TriangleInput, scale: &ScaleInput) -> TriangleReport {
    let mut tri = input.to_triangle();
    let before = TriangleSnapshot::from(&tri);

    tri.scale_length(scale.sx);
    tri.scale_height(scale.sy);
    tracing::debug!(sx = scale.sx, sy = scale.sy, hypotenuse = tri.hypotenuse(), "scaled triangle");

    TriangleReport {
        before,
        after: TriangleSnapshot::from(&tri),
    }
}

fn point(p: Point) -> String {
    format!("({}, {})", general(p.x()), general(p.y()))
}

/// Render the bordered display block, including the blank lines around it.
pub fn render_block(snapshot: &TriangleSnapshot) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(BORDER);
    out.push('\n');
    out.push_str(&format!("Lower Left Vertex {}\n", point(snapshot.bottom_left)));
    out.push_str(&format!("Top Left Vertex {}\n", point(snapshot.top_left)));
    out.push_str(&format!("Bottom Right Vertex {}\n", point(snapshot.bottom_right)));
    out.push_str(&format!("Dimensions ({}, {})\n", general(snapshot.length), general(snapshot.height)));
    out.push_str(&format!("Hypotenuse = {}\n", general(snapshot.hypotenuse)));
    out.push_str(&format!("Perimeter = {}\n", general(snapshot.perimeter)));
    out.push_str(BORDER);
    out.push('\n');
    out.push('\n');
    out
}
