//! The bridge between hex space and screen space: [Orientation] fixes how
//! the grid is tilted, [Layout] adds scale and offset and owns the
//! direction tables. A layout is built once at startup and then passed by
//! reference to everything that needs pixel positions or neighbors; there
//! is no ambient global to initialize or forget to initialize.

use crate::{
    error::HexError,
    hex::{FracHex, Hex, HexClock, HexCompass},
    screen::{Pixel, Point2},
};
use nalgebra::{Matrix2, Vector2};
use std::f64::consts::PI;

/// Which of the canonical tilts an orientation is, if any. Pointy-top
/// grids have a vertex of every hex pointing up, flat-top grids an edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OrientationKind {
    Pointy,
    Flat,
    Custom,
}

/// An immutable pairing of the 2x2 linear map from axial coordinates to
/// unit screen offsets (the forward matrix) with its inverse (backward),
/// plus the angle at which a hex's first corner sits.
///
/// Only two orientations matter in practice, [pointy](Self::pointy) and
/// [flat](Self::flat); [custom](Self::custom) exists for the occasional
/// sheared or mirrored grid and computes the inverse for you.
#[derive(Clone, Debug, PartialEq)]
pub struct Orientation {
    kind: OrientationKind,
    forward: Matrix2<f64>,
    backward: Matrix2<f64>,
    /// Corner placement offset, in sixths of a full turn
    start_angle: f64,
}

impl Orientation {
    /// The pointy-top orientation ⬢. Rows of constant `r` run horizontally.
    pub fn pointy() -> Self {
        let sqrt3 = 3.0_f64.sqrt();
        Self {
            kind: OrientationKind::Pointy,
            forward: Matrix2::new(sqrt3, sqrt3 / 2.0, 0.0, 3.0 / 2.0),
            // The closed-form inverse; cheaper and exact compared to
            // inverting at runtime
            backward: Matrix2::new(sqrt3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0),
            start_angle: 0.5,
        }
    }

    /// The flat-top orientation ⬣. Columns of constant `q` run vertically.
    pub fn flat() -> Self {
        let sqrt3 = 3.0_f64.sqrt();
        Self {
            kind: OrientationKind::Flat,
            forward: Matrix2::new(3.0 / 2.0, 0.0, sqrt3 / 2.0, sqrt3),
            backward: Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, sqrt3 / 3.0),
            start_angle: 0.0,
        }
    }

    /// Build an orientation from an arbitrary forward matrix. Fails if the
    /// matrix is singular, because then no pixel-to-hex mapping exists.
    pub fn custom(
        forward: Matrix2<f64>,
        start_angle: f64,
    ) -> Result<Self, HexError> {
        let backward =
            forward.try_inverse().ok_or(HexError::NonInvertibleMatrix)?;
        Ok(Self {
            kind: OrientationKind::Custom,
            forward,
            backward,
            start_angle,
        })
    }

    pub fn kind(&self) -> OrientationKind {
        self.kind
    }

    pub fn forward(&self) -> &Matrix2<f64> {
        &self.forward
    }

    pub fn backward(&self) -> &Matrix2<f64> {
        &self.backward
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }
}

/// Everything needed to move between hex space and screen space: an
/// [Orientation], a per-axis pixel `size`, a pixel `origin` (where
/// [Hex::ORIGIN] lands on screen) and the clock/compass tables matching
/// the orientation.
///
/// Build one with [Layout::pointy] or [Layout::flat] at startup and pass
/// it by reference wherever hexes meet pixels. The layout is read-only
/// after construction, so sharing a single instance across an application
/// is the intended pattern.
#[derive(Clone, Debug)]
pub struct Layout {
    orientation: Orientation,
    size: Point2,
    origin: Point2,
    clock: Option<HexClock>,
    compass: Option<HexCompass>,
}

impl Layout {
    /// A pointy-top layout, with clock and compass installed.
    ///
    /// `size` is the pixel distance from a hex's center to its corners,
    /// per axis; pass a single `f64` for regular hexagons. Panics if
    /// either size component is not strictly positive, since the
    /// projection would collapse.
    pub fn pointy(size: impl Into<Point2>, origin: impl Into<Point2>) -> Self {
        Self::build(
            Orientation::pointy(),
            size.into(),
            origin.into(),
            Some(HexClock::pointy()),
            Some(HexCompass::pointy()),
        )
    }

    /// A flat-top layout, with clock and compass installed. Panics if
    /// either size component is not strictly positive.
    pub fn flat(size: impl Into<Point2>, origin: impl Into<Point2>) -> Self {
        Self::build(
            Orientation::flat(),
            size.into(),
            origin.into(),
            Some(HexClock::flat()),
            Some(HexCompass::flat()),
        )
    }

    /// A layout over a custom orientation. No clock or compass is assumed;
    /// install them with [with_clock](Self::with_clock) and
    /// [with_compass](Self::with_compass) if neighbor queries are needed.
    /// Panics if either size component is not strictly positive.
    pub fn custom(
        orientation: Orientation,
        size: impl Into<Point2>,
        origin: impl Into<Point2>,
    ) -> Self {
        Self::build(orientation, size.into(), origin.into(), None, None)
    }

    fn build(
        orientation: Orientation,
        size: Point2,
        origin: Point2,
        clock: Option<HexClock>,
        compass: Option<HexCompass>,
    ) -> Self {
        if size.x <= 0.0 || size.y <= 0.0 {
            panic!("hex size must be positive, but was {size}");
        }
        Self {
            orientation,
            size,
            origin,
            clock,
            compass,
        }
    }

    /// Replace the clock table
    pub fn with_clock(mut self, clock: HexClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Replace the compass table
    pub fn with_compass(mut self, compass: HexCompass) -> Self {
        self.compass = Some(compass);
        self
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn size(&self) -> Point2 {
        self.size
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// The clock table, or an error for a custom layout that never got one
    pub fn clock(&self) -> Result<&HexClock, HexError> {
        self.clock
            .as_ref()
            .ok_or(HexError::ConfigurationMissing { what: "clock" })
    }

    /// The compass table, or an error for a custom layout that never got
    /// one
    pub fn compass(&self) -> Result<&HexCompass, HexError> {
        self.compass
            .as_ref()
            .ok_or(HexError::ConfigurationMissing { what: "compass" })
    }

    // Derived spacing properties. These have closed forms for the two
    // canonical orientations only.

    /// Corner-to-corner extent of one hex along the x axis
    pub fn width(&self) -> Result<f64, HexError> {
        match self.orientation.kind() {
            OrientationKind::Pointy => Ok(3.0_f64.sqrt() * self.size.x),
            OrientationKind::Flat => Ok(2.0 * self.size.x),
            OrientationKind::Custom => {
                Err(HexError::UnsupportedOrientation { what: "width" })
            }
        }
    }

    /// Corner-to-corner extent of one hex along the y axis
    pub fn height(&self) -> Result<f64, HexError> {
        match self.orientation.kind() {
            OrientationKind::Pointy => Ok(2.0 * self.size.y),
            OrientationKind::Flat => Ok(3.0_f64.sqrt() * self.size.y),
            OrientationKind::Custom => {
                Err(HexError::UnsupportedOrientation { what: "height" })
            }
        }
    }

    /// Center-to-center x distance between horizontally adjacent hexes
    pub fn horizontal_spacing(&self) -> Result<f64, HexError> {
        match self.orientation.kind() {
            OrientationKind::Pointy => Ok(3.0_f64.sqrt() * self.size.x),
            OrientationKind::Flat => Ok(3.0 / 2.0 * self.size.x),
            OrientationKind::Custom => Err(HexError::UnsupportedOrientation {
                what: "horizontal_spacing",
            }),
        }
    }

    /// Center-to-center y distance between vertically adjacent hexes
    pub fn vertical_spacing(&self) -> Result<f64, HexError> {
        match self.orientation.kind() {
            OrientationKind::Pointy => Ok(3.0 / 2.0 * self.size.y),
            OrientationKind::Flat => Ok(3.0_f64.sqrt() * self.size.y),
            OrientationKind::Custom => Err(HexError::UnsupportedOrientation {
                what: "vertical_spacing",
            }),
        }
    }

    // Projection

    /// The exact screen position of a hex's center:
    /// `forward * (q, r) * size + origin`
    pub fn hex_to_point(&self, hex: impl Into<FracHex>) -> Point2 {
        let hex = hex.into();
        let unit = self.orientation.forward() * Vector2::new(hex.q(), hex.r());
        Point2::new(
            unit.x * self.size.x + self.origin.x,
            unit.y * self.size.y + self.origin.y,
        )
    }

    /// The screen position of a hex's center, rounded to a whole pixel
    pub fn hex_to_pixel(&self, hex: impl Into<FracHex>) -> Pixel {
        self.hex_to_point(hex).to_pixel()
    }

    /// The exact (fractional) hex position under a screen point, by the
    /// inverse affine map
    pub fn point_to_hex(&self, point: impl Into<Point2>) -> FracHex {
        let point = point.into();
        let unit = Vector2::new(
            (point.x - self.origin.x) / self.size.x,
            (point.y - self.origin.y) / self.size.y,
        );
        let axial = self.orientation.backward() * unit;
        FracHex::new(axial.x, axial.y)
    }

    /// The grid cell under a screen point. This is the click-to-cell
    /// mapping: inverse-project, then round onto the grid.
    pub fn pixel_to_hex(&self, point: impl Into<Point2>) -> Hex {
        self.point_to_hex(point).round()
    }

    // Polygon geometry

    /// Offset from a hex's center to its corner number `corner` (0 through
    /// 5, proceeding clockwise from the orientation's start angle)
    pub fn corner_offset(&self, corner: usize) -> Point2 {
        let angle = 2.0 * PI * (self.orientation.start_angle() - corner as f64)
            / 6.0;
        Point2::new(angle.cos() * self.size.x, angle.sin() * self.size.y)
    }

    /// The six exact corner positions of a hex, scaled around its center
    /// by `factor`. A factor below 1 shrinks the polygon, handy for
    /// drawing gaps between cells.
    pub fn polygon_points(
        &self,
        hex: impl Into<FracHex>,
        factor: f64,
    ) -> [Point2; 6] {
        let center = self.hex_to_point(hex);
        let mut corners = [Point2::default(); 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            let offset = self.corner_offset(i);
            *corner = Point2::new(
                center.x + offset.x * factor,
                center.y + offset.y * factor,
            );
        }
        corners
    }

    /// The six corner positions of a hex, rounded to whole pixels
    pub fn polygon_pixels(
        &self,
        hex: impl Into<FracHex>,
        factor: f64,
    ) -> [Pixel; 6] {
        self.polygon_points(hex, factor).map(Point2::to_pixel)
    }

    // Neighbor queries. All of these go through the clock, so on a custom
    // layout without one they fail instead of guessing.

    /// The six direct-neighbor directions, as a sub-clock
    pub fn directions(&self) -> Result<HexClock, HexError> {
        Ok(self.clock()?.directions(&self.orientation))
    }

    /// The six diagonal directions, as a sub-clock
    pub fn diagonals(&self) -> Result<HexClock, HexError> {
        Ok(self.clock()?.diagonals(&self.orientation))
    }

    /// The cell adjacent to `hex` at a clock hour. Any of the twelve hours
    /// is valid here; even and odd hours reach direct and diagonal
    /// neighbors respectively (or the other way around, per orientation).
    pub fn neighbor(&self, hex: Hex, hour: i32) -> Result<Hex, HexError> {
        Ok(hex + self.clock()?.at_hour(hour)?)
    }

    /// All six direct neighbors of `hex`, keyed by their clock hour
    pub fn direct_neighbors(&self, hex: Hex) -> Result<HexClock, HexError> {
        Ok(self.directions()?.shifted(hex))
    }

    /// All six diagonal neighbors of `hex`, keyed by their clock hour
    pub fn diagonal_neighbors(&self, hex: Hex) -> Result<HexClock, HexError> {
        Ok(self.diagonals()?.shifted(hex))
    }

    /// The full twelve-cell surround of `hex`, keyed by clock hour
    pub fn all_neighbors(&self, hex: Hex) -> Result<HexClock, HexError> {
        Ok(self.clock()?.shifted(hex))
    }
}
