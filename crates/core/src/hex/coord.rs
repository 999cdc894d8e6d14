//! The coordinate value types: [Hex], [FracHex] and [HexAxis]. See the
//! parent module docs for a description of the coordinate system.

use crate::error::HexError;
use derive_more::{Add, Display, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::ops;
use strum::EnumIter;

/// A cell of the hexagonal grid, in cube coordinates.
///
/// Only `q` and `r` are stored; `s` is derived as `-(q + r)`, which keeps
/// the `q + r + s = 0` invariant true by construction and the memory
/// footprint down by a third. Equality and hashing consequently only look
/// at `(q, r)`.
///
/// `Hex` is a plain value: all operations return new values, nothing
/// mutates in place. Addition, subtraction and negation are component-wise,
/// multiplication scales by an integer factor. Scaling by a fractional
/// factor leaves the grid, so it goes through [Hex::scaled] and gives back
/// a [FracHex].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    Add,
    Sub,
    Neg,
    Mul,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s()")]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    /// The center of the grid, `(0, 0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a hex from its two axial coordinates. `s` is derived, so
    /// this can never produce an invalid position.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct a hex from all three cube coordinates, validating that
    /// they sum to zero. Axial input can't be wrong; cube input can, and
    /// this constructor is the safer choice when the three components come
    /// from somewhere untrusted.
    pub fn cube(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        if q + r + s != 0 {
            Err(HexError::InvalidCoordinates {
                q: q as f64,
                r: r as f64,
                s: s as f64,
            })
        } else {
            Ok(Self::new(q, r))
        }
    }

    /// Construct a hex from values on any two distinct named axes, deriving
    /// the third coordinate. Fails if the same axis is named twice, since
    /// the remaining coordinate would be ambiguous.
    pub fn from_axes(
        a: (HexAxis, i32),
        b: (HexAxis, i32),
    ) -> Result<Self, HexError> {
        use HexAxis::*;
        match (a, b) {
            ((Q, q), (R, r)) | ((R, r), (Q, q)) => Ok(Self::new(q, r)),
            ((Q, q), (S, s)) | ((S, s), (Q, q)) => Ok(Self::new(q, -q - s)),
            ((R, r), (S, s)) | ((S, s), (R, r)) => Ok(Self::new(-r - s, r)),
            ((axis, _), _) => Err(HexError::DuplicateAxis { axis }),
        }
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    pub const fn s(&self) -> i32 {
        -(self.q + self.r)
    }

    /// The two stored coordinates
    pub const fn axial(&self) -> (i32, i32) {
        (self.q, self.r)
    }

    /// All three coordinates, with `s` derived
    pub const fn cube_coords(&self) -> (i32, i32, i32) {
        (self.q, self.r, self.s())
    }

    /// Pick out the coordinate on a single named axis
    pub const fn coord(&self, axis: HexAxis) -> i32 {
        match axis {
            HexAxis::Q => self.q,
            HexAxis::R => self.r,
            HexAxis::S => self.s(),
        }
    }

    /// The ring distance from this hex to the origin: the least number of
    /// cells you pass through walking there, which is half the manhattan
    /// distance of the cube coordinates. A single step in any of the six
    /// neighbor directions has length 1.
    pub const fn length(&self) -> u32 {
        ((self.q.abs() + self.r.abs() + self.s().abs()) / 2) as u32
    }

    /// The ring distance between two hexes
    pub fn distance(self, other: Self) -> u32 {
        (self - other).length()
    }

    /// Scale by a fractional factor. The result generally falls between
    /// cells, hence the fractional return type; round it to get back on the
    /// grid.
    pub fn scaled(self, k: f64) -> FracHex {
        FracHex::new(self.q as f64 * k, self.r as f64 * k)
    }

    /// Rotate `steps * 60°` counterclockwise around the origin. A single
    /// step maps `(q, r, s)` to `(-s, -q, -r)`: the coordinates permute
    /// cyclically and flip sign, which is the closed form of a 60° rotation
    /// in cube space. Negative steps rotate the other way.
    pub fn rotated_left(self, steps: i32) -> Self {
        let (q, r, s) = self.cube_coords();
        // Three lefts make a point reflection, so the permutation cycles
        // with period 3 and the sign with period 2
        let permuted = match steps.rem_euclid(3) {
            0 => Self::new(q, r),
            1 => Self::new(s, q),
            _ => Self::new(r, s),
        };
        if steps.rem_euclid(2) == 1 {
            -permuted
        } else {
            permuted
        }
    }

    /// Rotate `steps * 60°` counterclockwise around another hex
    pub fn rotated_left_around(self, center: Self, steps: i32) -> Self {
        (self - center).rotated_left(steps) + center
    }

    /// Rotate `steps * 60°` clockwise around the origin
    pub fn rotated_right(self, steps: i32) -> Self {
        self.rotated_left(-steps)
    }

    /// Rotate `steps * 60°` clockwise around another hex
    pub fn rotated_right_around(self, center: Self, steps: i32) -> Self {
        (self - center).rotated_right(steps) + center
    }

    /// Reflect over one of the three axes. The named axis keeps its
    /// coordinate, the other two swap theirs.
    pub fn reflected(self, axis: HexAxis) -> Self {
        let (q, r, s) = self.cube_coords();
        match axis {
            HexAxis::Q => Self::new(q, s),
            HexAxis::R => Self::new(s, r),
            HexAxis::S => Self::new(r, q),
        }
    }

    /// Reflect over an axis through an arbitrary center
    pub fn reflected_around(self, center: Self, axis: HexAxis) -> Self {
        (self - center).reflected(axis) + center
    }

    /// Point-reflect through another hex. Plain negation covers the
    /// origin-centered case.
    pub fn negated_around(self, center: Self) -> Self {
        -(self - center) + center
    }

    /// Linearly interpolate toward another hex. At `t = 0` the result sits
    /// on `self`, at `t = 1` on `other`. The result is not renormalized in
    /// any way; round it to land on a cell.
    pub fn lerp(self, other: Self, t: f64) -> FracHex {
        FracHex::from(self).lerp(other.into(), t)
    }

    /// The ordered sequence of cells forming a discrete line from this hex
    /// to another, both endpoints included. The line has exactly
    /// `distance + 1` cells and consecutive cells are always direct
    /// neighbors.
    ///
    /// Both endpoints are nudged before sampling so that samples landing
    /// exactly on a cell boundary round consistently to one side. Without
    /// that, boundary ties would resolve by floating-point accident and the
    /// same line could wobble between runs of adjacent cells.
    pub fn linedraw(self, other: Self) -> Vec<Self> {
        let steps = self.distance(other);
        let from = FracHex::from(self).nudged(1.0);
        let to = FracHex::from(other).nudged(1.0);

        let step_size = 1.0 / steps.max(1) as f64;
        (0..=steps)
            .map(|i| from.lerp(to, i as f64 * step_size).round())
            .collect()
    }
}

/// A point of the hexagonal coordinate plane that need not sit on a cell.
///
/// Fractional positions are intermediate values: the output of an
/// interpolation or of an inverse pixel projection, on their way to being
/// [rounded](FracHex::round) onto the grid. They carry no `Eq`/`Hash` and
/// can't key a map.
#[derive(
    Copy, Clone, Debug, Default, Display, PartialEq, Add, Sub, Neg, Mul,
    Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s()")]
pub struct FracHex {
    q: f64,
    r: f64,
}

impl FracHex {
    /// Tolerance for the cube-sum validation in [FracHex::cube]. Anything
    /// further from the `q + r + s = 0` plane than this is rejected.
    pub const SUM_EPSILON: f64 = 1e-6;

    /// Size of the bias applied by [FracHex::nudged].
    pub const NUDGE_EPSILON: f64 = 1e-6;

    /// Construct a fractional position from its two axial coordinates
    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }

    /// Construct from all three cube coordinates, validating that they sum
    /// to zero within [Self::SUM_EPSILON].
    pub fn cube(q: f64, r: f64, s: f64) -> Result<Self, HexError> {
        if (q + r + s).abs() > Self::SUM_EPSILON {
            Err(HexError::InvalidCoordinates { q, r, s })
        } else {
            Ok(Self::new(q, r))
        }
    }

    pub const fn q(&self) -> f64 {
        self.q
    }

    pub const fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        -(self.q + self.r)
    }

    /// Ring distance to the origin, unrounded
    pub fn length(&self) -> f64 {
        (self.q.abs() + self.r.abs() + self.s().abs()) / 2.0
    }

    /// Round onto the nearest cell of the grid.
    ///
    /// Rounding each coordinate independently can drift off the
    /// `q + r + s = 0` plane, so whichever coordinate moved furthest in the
    /// rounding is thrown away and recomputed from the other two. That
    /// tie-break is what makes pixel picking and line drawing land on the
    /// cell whose center is actually closest.
    pub fn round(self) -> Hex {
        let q = self.q.round();
        let r = self.r.round();
        let s = self.s().round();

        let dq = (q - self.q).abs();
        let dr = (r - self.r).abs();
        let ds = (s - self.s()).abs();

        if dq > dr && dq > ds {
            Hex::new((-r - s) as i32, r as i32)
        } else if dr > ds {
            Hex::new(q as i32, (-q - s) as i32)
        } else {
            // s had the largest error; it's derived, so dropping it is free
            Hex::new(q as i32, r as i32)
        }
    }

    /// Shift by a tiny fixed bias, `-ε` on `q` and `+ε` on `r`. The sum of
    /// the coordinates is unchanged, so the position stays valid; what
    /// changes is which side of a cell boundary an exactly-between point
    /// falls on. [Hex::linedraw] nudges both endpoints for deterministic
    /// boundary behavior.
    pub fn nudged(self, factor: f64) -> Self {
        Self::new(
            self.q - Self::NUDGE_EPSILON * factor,
            self.r + Self::NUDGE_EPSILON * factor,
        )
    }

    /// Linearly interpolate toward another fractional position
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.q * (1.0 - t) + other.q * t,
            self.r * (1.0 - t) + other.r * t,
        )
    }
}

impl From<Hex> for FracHex {
    fn from(other: Hex) -> Self {
        Self::new(other.q() as f64, other.r() as f64)
    }
}

impl ops::Div<f64> for FracHex {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.q / rhs, self.r / rhs)
    }
}

/// The three axes of the cube coordinate system
#[derive(Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash)]
pub enum HexAxis {
    Q,
    R,
    S,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_cube_validation() {
        assert_eq!(Hex::cube(1, 2, -3), Ok(Hex::new(1, 2)));
        assert_eq!(
            Hex::cube(1, 2, 3),
            Err(HexError::InvalidCoordinates {
                q: 1.0,
                r: 2.0,
                s: 3.0
            })
        );

        assert!(FracHex::cube(0.5, 0.25, -0.75).is_ok());
        assert!(FracHex::cube(0.5, 0.25, -0.7500001).is_err());
    }

    #[test]
    fn test_from_axes() {
        use HexAxis::*;
        assert_eq!(Hex::from_axes((Q, 1), (R, 2)), Ok(Hex::new(1, 2)));
        assert_eq!(Hex::from_axes((R, 2), (Q, 1)), Ok(Hex::new(1, 2)));
        assert_eq!(Hex::from_axes((Q, 1), (S, -3)), Ok(Hex::new(1, 2)));
        assert_eq!(Hex::from_axes((S, -3), (R, 2)), Ok(Hex::new(1, 2)));
        assert_eq!(
            Hex::from_axes((Q, 1), (Q, 2)),
            Err(HexError::DuplicateAxis { axis: Q })
        );
    }

    #[test]
    fn test_length_and_distance() {
        assert_eq!(Hex::ORIGIN.length(), 0);
        assert_eq!(Hex::new(1, 2).length(), 3);
        assert_eq!(Hex::new(1, 2).distance(Hex::new(3, 4)), 4);
        assert_eq!(Hex::new(3, 4).distance(Hex::new(1, 2)), 4);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Hex::new(1, 2) + Hex::new(3, 4), Hex::new(4, 6));
        assert_eq!(Hex::new(1, 2) - Hex::new(3, 4), Hex::new(-2, -2));
        assert_eq!(-Hex::new(1, 2), Hex::new(-1, -2));
        assert_eq!(Hex::new(1, 2) * 2, Hex::new(2, 4));

        let half = Hex::new(1, 2).scaled(0.5);
        assert_eq!(half, FracHex::new(0.5, 1.0));
    }

    #[test]
    fn test_rotation() {
        // One step left of (1, 2, -3) is (3, -1, -2)
        assert_eq!(Hex::new(1, 2).rotated_left(1), Hex::new(3, -1));
        // Two steps left of (1, 0, -1) is (0, -1, 1)
        assert_eq!(Hex::new(1, 0).rotated_left(2), Hex::new(0, -1));
        // Two steps right of (1, 0, -1) is (-1, 1, 0)
        assert_eq!(Hex::new(1, 0).rotated_right(2), Hex::new(-1, 1));
        // Negative steps go the other way
        assert_eq!(
            Hex::new(4, -2).rotated_left(-1),
            Hex::new(4, -2).rotated_right(1)
        );
    }

    #[test]
    fn test_rotation_around() {
        let center = Hex::new(-2, 0);
        assert_eq!(
            Hex::new(1, 0).rotated_left_around(center, 1),
            Hex::new(1, -3)
        );
        // Rotating around the origin matches the plain rotation
        assert_eq!(
            Hex::new(1, 2).rotated_left_around(Hex::ORIGIN, 2),
            Hex::new(1, 2).rotated_left(2)
        );
    }

    #[test]
    fn test_reflection() {
        let hex = Hex::new(1, 2);
        assert_eq!(hex.reflected(HexAxis::Q), Hex::new(1, -3));
        assert_eq!(hex.reflected(HexAxis::R), Hex::new(-3, 2));
        assert_eq!(hex.reflected(HexAxis::S), Hex::new(2, 1));
        for axis in HexAxis::iter() {
            assert_eq!(hex.reflected(axis).reflected(axis), hex);
        }
    }

    #[test]
    fn test_negated_around() {
        assert_eq!(Hex::new(1, 0).negated_around(Hex::new(2, 0)), Hex::new(3, 0));
        assert_eq!(Hex::new(1, 2).negated_around(Hex::ORIGIN), -Hex::new(1, 2));
    }

    #[test]
    fn test_round_recomputes_largest_error() {
        // q drifts the most, so it gets recomputed from r and s
        assert_eq!(FracHex::new(0.6, 2.1).round(), Hex::new(1, 2));
        // A rounded whole position is untouched
        assert_eq!(FracHex::new(1.0, 2.0).round(), Hex::new(1, 2));
        // The result is always a valid cell regardless of ties
        let rounded = FracHex::new(0.5, 0.5).round();
        let (q, r, s) = rounded.cube_coords();
        assert_eq!(q + r + s, 0);
    }

    #[test]
    fn test_nudge_preserves_validity() {
        let nudged = FracHex::new(0.5, -0.25).nudged(1.0);
        assert!((nudged.q() + nudged.r() + nudged.s()).abs() < 1e-12);
        // The nudge is small enough to never move off a cell center
        assert_eq!(FracHex::from(Hex::new(3, -7)).nudged(1.0).round(), Hex::new(3, -7));
    }

    #[test]
    fn test_lerp() {
        let from = Hex::new(0, 0);
        let to = Hex::new(2, -4);
        assert_eq!(from.lerp(to, 0.0), FracHex::new(0.0, 0.0));
        assert_eq!(from.lerp(to, 0.5), FracHex::new(1.0, -2.0));
        assert_eq!(from.lerp(to, 1.0), FracHex::new(2.0, -4.0));
    }

    #[test]
    fn test_linedraw() {
        let from = Hex::new(0, 0);
        let to = Hex::new(3, -1);
        let line = from.linedraw(to);

        assert_eq!(line.len() as u32, from.distance(to) + 1);
        assert_eq!(*line.first().unwrap(), from);
        assert_eq!(*line.last().unwrap(), to);
        for pair in line.windows(2) {
            assert_eq!(pair[0].distance(pair[1]), 1);
        }

        // Degenerate line: a hex to itself
        assert_eq!(from.linedraw(from), vec![from]);
    }
}
