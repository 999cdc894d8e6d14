//! Units for screen space, the 2D pixel plane that hexes get projected
//! onto. See the module docs in [crate::hex] for how the two coordinate
//! spaces relate; the projection itself lives on
//! [Layout](crate::Layout).

use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A 2D point in screen space. The y axis grows downward, matching the
/// convention of the drawing surfaces this library feeds.
///
/// Scalar multiplication/division is component-wise against an `f64`.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round this point to whole pixel coordinates. Rounding is
    /// half-away-from-zero, the standard [f64::round] behavior.
    pub fn to_pixel(self) -> Pixel {
        Pixel {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }
}

// A single scalar is treated as a uniform value for both components. Mostly
// useful for layout sizes, where regular hexagons are the common case.
impl From<f64> for Point2 {
    fn from(value: f64) -> Self {
        Self { x: value, y: value }
    }
}

impl From<nalgebra::Vector2<f64>> for Point2 {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Pixel> for Point2 {
    fn from(other: Pixel) -> Self {
        Self {
            x: other.x as f64,
            y: other.y as f64,
        }
    }
}

/// A whole-valued screen position, i.e. an addressable pixel. This is what
/// rendering and input-handling code exchanges with the library: polygon
/// corners come out as pixels, mouse clicks come back in as pixels.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
