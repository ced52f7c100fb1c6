//! Geometric primitives: Point, Size, GraphicsLayer

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2D point or translation vector in logical pixels.
///
/// Drag translations, escape vectors and animated card offsets all use this
/// type; `y` grows downwards like every host layout system we target.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean length of the vector.
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Larger of the two absolute components.
    pub fn max_abs_component(&self) -> f32 {
        self.x.abs().max(self.y.abs())
    }

    pub fn scale(&self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns true when both components are within `epsilon` of zero.
    pub fn is_near_zero(&self, epsilon: f32) -> bool {
        self.x.abs() <= epsilon && self.y.abs() <= epsilon
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        self.scale(rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Length of the container diagonal.
    pub fn diagonal(&self) -> f32 {
        self.width.hypot(self.height)
    }

    pub fn max_dimension(&self) -> f32 {
        self.width.max(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Per-card transform handed to the host renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub scale: f32,
    pub translation_x: f32,
    pub translation_y: f32,
    /// Rotation around the card center, in degrees.
    pub rotation_z: f32,
}

impl GraphicsLayer {
    pub fn translation(&self) -> Point {
        Point::new(self.translation_x, self.translation_y)
    }
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            scale: 1.0,
            translation_x: 0.0,
            translation_y: 0.0,
            rotation_z: 0.0,
        }
    }
}
