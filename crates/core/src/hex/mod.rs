//! Basic types for the hexagonal coordinate system.
//!
//! ## Cube coordinates
//!
//! Positions on the grid are expressed in the [cube coordinate system
//! defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each position has three components (`q`, `r` and `s`) and **every valid
//! position satisfies `q + r + s = 0`**. The redundancy is what makes the
//! math nice: distance is a halved manhattan distance, rotation by 60° is a
//! cyclic permutation of the components, and reflection over an axis is a
//! swap of the other two.
//!
//! Because `s` is always derivable from the other two components, the types
//! in this module only store `q` and `r` and compute `s` on demand. Two
//! coordinates (axial form) are enough to construct a position; supplying
//! all three (cube form) buys an extra validation of the invariant.
//!
//! ## Whole vs fractional positions
//!
//! [Hex] stores integer components and always refers to an actual cell of
//! the grid. It's the key type of every container in this crate.
//!
//! [FracHex] stores float components and refers to any point of the
//! coordinate plane. Fractional positions show up transiently: in the
//! middle of an interpolation, or as the raw result of projecting a pixel
//! back onto the grid. They are collapsed onto a cell with
//! [FracHex::round], which repairs any rounding drift so the invariant
//! survives the trip.
//!
//! ## Navigation
//!
//! The six neighbors of a cell (and the six diagonal cells behind them) are
//! addressed like positions on a clock face, through [HexClock], or by
//! compass points through [HexCompass]. Which clock hours are direct
//! neighbors and which are diagonals depends on the orientation of the
//! active [Layout](crate::Layout).

mod clock;
mod coord;

pub use self::{clock::*, coord::*};
