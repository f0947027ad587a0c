//! Shape model and the registry of recognised shape kinds.

use crate::area::Area;
use std::fmt;

/// Approximation of pi used for circle areas.
///
/// Reports depend on this exact constant; a more precise value changes the
/// printed digits.
pub const PI_APPROX: f64 = 3.14;

/// Anything whose area can be computed.
pub trait ComputeArea {
    /// Compute the area of this shape.
    fn area(&self) -> Area;
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    /// Length of one side.
    pub length: i64,
    /// Length of the adjacent side.
    pub width: i64,
}

/// Circle given by its radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    /// Radius.
    pub radius: i64,
}

/// Triangle given by base and perpendicular height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    /// Length of the base.
    pub base: i64,
    /// Height perpendicular to the base.
    pub height: i64,
}

impl ComputeArea for Rectangle {
    fn area(&self) -> Area {
        Area::Integer(i128::from(self.length) * i128::from(self.width))
    }
}

impl ComputeArea for Circle {
    fn area(&self) -> Area {
        // Square exactly, then round once.
        let r_squared = i128::from(self.radius) * i128::from(self.radius);
        Area::Float(PI_APPROX * r_squared as f64)
    }
}

impl ComputeArea for Triangle {
    fn area(&self) -> Area {
        Area::Float(0.5 * self.base as f64 * self.height as f64)
    }
}

/// A parsed shape record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Triangle(Triangle),
}

impl Shape {
    /// The kind this shape belongs to.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }
}

impl ComputeArea for Shape {
    fn area(&self) -> Area {
        match self {
            Shape::Rectangle(r) => r.area(),
            Shape::Circle(c) => c.area(),
            Shape::Triangle(t) => t.area(),
        }
    }
}

/// Recognised shape kinds.
///
/// Each kind knows its name in the input format, how many integer
/// parameters follow the name, and how to build a [`Shape`] from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
}

impl ShapeKind {
    /// All recognised kinds.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Triangle];

    /// Look up a kind by its exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<ShapeKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Name used in the input format.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Triangle => "Triangle",
        }
    }

    /// Number of integer parameters following the kind name.
    pub fn arity(&self) -> usize {
        match self {
            ShapeKind::Rectangle | ShapeKind::Triangle => 2,
            ShapeKind::Circle => 1,
        }
    }

    /// Build a shape from its parameters.
    ///
    /// Returns `None` when `params.len()` does not match [`arity`](Self::arity).
    pub fn construct(&self, params: &[i64]) -> Option<Shape> {
        match (self, params) {
            (ShapeKind::Rectangle, &[length, width]) => {
                Some(Shape::Rectangle(Rectangle { length, width }))
            }
            (ShapeKind::Circle, &[radius]) => Some(Shape::Circle(Circle { radius })),
            (ShapeKind::Triangle, &[base, height]) => {
                Some(Shape::Triangle(Triangle { base, height }))
            }
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
