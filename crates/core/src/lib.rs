//! Hexagonal grid math: cube coordinates, pixel projection and map
//! containers. This crate is the board-and-geometry core that hex-based
//! games and visualizations build on; drawing and game rules live with the
//! consumer.
//!
//! ```
//! use hexa::{map, Hex, HexMap, Layout};
//!
//! // One layout per application, built at startup
//! let layout = Layout::pointy(10.0, (400.0, 300.0));
//!
//! // A board: the origin cell plus two rings around it
//! let mut board: HexMap<u8> = map::hexagon(2, 0, Hex::ORIGIN, false);
//!
//! // A click comes in as a pixel, the board is keyed by hexes
//! let clicked = layout.pixel_to_hex((417.0, 305.0));
//! if board.contains(clicked) {
//!     board.insert(clicked, 1);
//! }
//!
//! // And each cell renders as the polygon around its center
//! for hex in board.hexes() {
//!     let _corners = layout.polygon_pixels(hex, 0.9);
//! }
//! ```
//!
//! See [hex] for the coordinate system itself and [HexMap] for the
//! container and its set algebra.

mod error;
pub mod hex;
mod layout;
pub mod map;
mod screen;
mod util;

pub use crate::{
    error::HexError,
    hex::{CompassPoint, FracHex, Hex, HexAxis, HexClock, HexCompass},
    layout::{Layout, Orientation, OrientationKind},
    map::HexMap,
    screen::{Pixel, Point2},
    util::{hexagon_len, ring_len},
};
