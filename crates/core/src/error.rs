use crate::hex::{CompassPoint, Hex, HexAxis};
use thiserror::Error;

/// All the ways the hex math can be misused. Every variant is a programming
/// error on the caller's side: none of them are retried or silently papered
/// over, they propagate immediately.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    /// Three cube coordinates were supplied that don't fall on the plane
    /// `q + r + s = 0`. For fractional coordinates the check allows a
    /// tolerance of [FracHex::SUM_EPSILON](crate::FracHex::SUM_EPSILON).
    #[error("invalid cube coordinates ({q}, {r}, {s}); q + r + s must equal 0")]
    InvalidCoordinates { q: f64, r: f64, s: f64 },

    /// A clock- or compass-dependent operation was invoked on a layout that
    /// has no such table configured. Only custom layouts can be in this
    /// state; the pointy and flat constructors always install both tables.
    #[error("no {what} configured for this layout; add one with Layout::with_{what}")]
    ConfigurationMissing { what: &'static str },

    /// An hour lookup missed the clock. The full clocks hold all 12 hours
    /// (lookups wrap modulo 12), but sub-clocks such as the one returned by
    /// direction queries only hold half of them.
    #[error("clock has no hour {hour}; valid hours are {valid:?}")]
    InvalidHour { hour: i32, valid: Vec<u8> },

    /// A compass lookup missed the table. Pointy compasses carry
    /// NE/E/SE/SW/W/NW, flat ones N/NE/SE/S/SW/NW.
    #[error("compass has no point {point}; valid points are {valid:?}")]
    UnknownCompassPoint {
        point: CompassPoint,
        valid: Vec<CompassPoint>,
    },

    /// A map operation that requires the key to be present didn't find it.
    #[error("no value at {hex}")]
    HexNotFound { hex: Hex },

    /// The same axis was named twice where two distinct axes are required,
    /// e.g. building a hex from axis values or generating a two-axis shape.
    #[error("axis {axis:?} referenced twice; two distinct axes are required")]
    DuplicateAxis { axis: HexAxis },

    /// A custom orientation was given a singular forward matrix, so no
    /// pixel-to-hex transform exists.
    #[error("forward matrix is not invertible")]
    NonInvertibleMatrix,

    /// Spacing properties (width, height, ...) have closed forms only for
    /// the pointy and flat orientations.
    #[error("{what} is not defined for custom orientations")]
    UnsupportedOrientation { what: &'static str },
}
