use serde::{Deserialize, Serialize};

/// Fixed approximation of π used by every shape formula.
#[allow(clippy::approx_constant)]
pub const APPROX_PI: f64 = 3.14;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rectangle { length: f64, width: f64 },
    Circle { radius: f64 },
}

impl Shape {
    pub fn rectangle(length: f64, width: f64) -> Self {
        Shape::Rectangle { length, width }
    }

    pub fn circle(radius: f64) -> Self {
        Shape::Circle { radius }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Rectangle { .. } => "rectangle",
            Shape::Circle { .. } => "circle",
        }
    }

    pub fn area(&self) -> f64 {
        match *self {
            Shape::Rectangle { length, width } => length * width,
            Shape::Circle { radius } => APPROX_PI * radius * radius,
        }
    }

    pub fn perimeter(&self) -> f64 {
        match *self {
            Shape::Rectangle { length, width } => 2.0 * (length + width),
            Shape::Circle { radius } => 2.0 * APPROX_PI * radius,
        }
    }

    /// Dimensions as `(field, value)` pairs, for validation messages.
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Shape::Rectangle { length, width } => vec![("length", length), ("width", width)],
            Shape::Circle { radius } => vec![("radius", radius)],
        }
    }
}
