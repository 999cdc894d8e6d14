//! Direction tables: [HexClock] addresses the twelve surrounding cells
//! like positions on a clock face, [HexCompass] addresses the six direct
//! neighbors by compass point. See the parent module docs for how the
//! tables relate to orientation.

use crate::{
    error::HexError,
    hex::Hex,
    layout::{Orientation, OrientationKind},
};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// An ordered map from clock hour (or compass point) to a direction hex.
/// Ordered so that iteration always walks the dial clockwise.
type DialMap<K> = IndexMap<K, Hex, FnvBuildHasher>;

/// A mapping from clock hour to a unit direction.
///
/// Picture a clock face laid over a hex: hour 12 (stored as 0) points
/// straight up and the hours proceed clockwise. The twelve hours split
/// evenly into the six **directions** (the direct neighbors, one step away)
/// and the six **diagonals** (the second-ring corner cells, two steps
/// away). On a flat-top grid the even hours are the directions; on a
/// pointy-top grid it's the odd hours, because the neighbor midpoints sit
/// rotated half an hour.
///
/// Sub-clocks returned by [directions](Self::directions),
/// [diagonals](Self::diagonals) and [at_hours](Self::at_hours) keep their
/// original hour keys, so a direction stays addressable by the same hour no
/// matter which table it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct HexClock {
    hours: DialMap<u8>,
}

impl HexClock {
    /// The clock for pointy-top grids. Hour 0 points at the diagonal cell
    /// straight above; the direct neighbors sit at the odd hours.
    pub fn pointy() -> Self {
        Self::custom([
            (0, Hex::new(1, -2)),
            (1, Hex::new(1, -1)),
            (2, Hex::new(2, -1)),
            (3, Hex::new(1, 0)),
            (4, Hex::new(1, 1)),
            (5, Hex::new(0, 1)),
            (6, Hex::new(-1, 2)),
            (7, Hex::new(-1, 1)),
            (8, Hex::new(-2, 1)),
            (9, Hex::new(-1, 0)),
            (10, Hex::new(-1, -1)),
            (11, Hex::new(0, -1)),
        ])
    }

    /// The clock for flat-top grids. Hour 0 points at the neighbor straight
    /// above; the direct neighbors sit at the even hours.
    pub fn flat() -> Self {
        Self::custom([
            (0, Hex::new(0, -1)),
            (1, Hex::new(1, -2)),
            (2, Hex::new(1, -1)),
            (3, Hex::new(2, -1)),
            (4, Hex::new(1, 0)),
            (5, Hex::new(1, 1)),
            (6, Hex::new(0, 1)),
            (7, Hex::new(-1, 2)),
            (8, Hex::new(-1, 1)),
            (9, Hex::new(-2, 1)),
            (10, Hex::new(-1, 0)),
            (11, Hex::new(-1, -1)),
        ])
    }

    /// Build a clock from arbitrary entries. Hours wrap modulo 12; later
    /// duplicates overwrite earlier ones.
    pub fn custom(entries: impl IntoIterator<Item = (i32, Hex)>) -> Self {
        Self {
            hours: entries
                .into_iter()
                .map(|(hour, hex)| (hour.rem_euclid(12) as u8, hex))
                .collect(),
        }
    }

    /// Look up the direction at a single hour. Hours wrap modulo 12, so 12
    /// is the same as 0 and -1 the same as 11. Fails when this (sub-)clock
    /// has no entry at the slot.
    pub fn at_hour(&self, hour: i32) -> Result<Hex, HexError> {
        self.hours
            .get(&(hour.rem_euclid(12) as u8))
            .copied()
            .ok_or_else(|| HexError::InvalidHour {
                hour,
                valid: self.hours.keys().copied().collect(),
            })
    }

    /// Look up the direction at an angle in degrees, measured clockwise
    /// from straight up. Angles snap down to the hour they fall in (30° per
    /// hour).
    pub fn at_angle(&self, degrees: i32) -> Result<Hex, HexError> {
        self.at_hour(degrees.div_euclid(30))
    }

    /// Look up several hours at once, as a sub-clock keyed by the same
    /// hours. Fails on the first missing hour.
    pub fn at_hours(&self, hours: &[i32]) -> Result<Self, HexError> {
        let mut sub = DialMap::default();
        for &hour in hours {
            sub.insert(hour.rem_euclid(12) as u8, self.at_hour(hour)?);
        }
        Ok(Self { hours: sub })
    }

    /// Translate every direction by a hex. Shifting the full clock by a
    /// cell's position turns the direction table into that cell's neighbor
    /// table in one call.
    pub fn shifted(&self, hex: Hex) -> Self {
        Self {
            hours: self
                .hours
                .iter()
                .map(|(&hour, &dir)| (hour, hex + dir))
                .collect(),
        }
    }

    /// The six direct-neighbor directions for the given orientation, as a
    /// sub-clock. Flat-top grids neighbor on the even hours; everything
    /// else (pointy and custom) on the odd hours.
    pub fn directions(&self, orientation: &Orientation) -> Self {
        self.half(direction_parity(orientation))
    }

    /// The six diagonal directions for the given orientation: the
    /// complement of [directions](Self::directions).
    pub fn diagonals(&self, orientation: &Orientation) -> Self {
        self.half(1 - direction_parity(orientation))
    }

    fn half(&self, parity: u8) -> Self {
        Self {
            hours: self
                .hours
                .iter()
                .filter(|&(&hour, _)| hour % 2 == parity)
                .map(|(&hour, &dir)| (hour, dir))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    pub fn contains_hour(&self, hour: i32) -> bool {
        self.hours.contains_key(&(hour.rem_euclid(12) as u8))
    }

    /// Iterate the entries in clockwise dial order
    pub fn iter(&self) -> impl Iterator<Item = (u8, Hex)> + '_ {
        self.hours.iter().map(|(&hour, &dir)| (hour, dir))
    }

    /// Iterate just the direction hexes in clockwise dial order
    pub fn hexes(&self) -> impl Iterator<Item = Hex> + '_ {
        self.hours.values().copied()
    }
}

/// Which hour parity holds the direct neighbors for an orientation
fn direction_parity(orientation: &Orientation) -> u8 {
    match orientation.kind() {
        OrientationKind::Flat => 0,
        _ => 1,
    }
}

/// The eight cardinal and intercardinal compass points. Any given
/// orientation only uses six of them: a pointy-top hex has no vertical
/// neighbor pair (no N/S), a flat-top hex no horizontal one (no E/W).
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// A mapping from compass point to a unit direction, covering the six
/// direct neighbors of the active orientation. The clock covers the full
/// twelve-cell surround; the compass is the friendlier vocabulary for code
/// that only ever steps to adjacent cells.
#[derive(Clone, Debug, PartialEq)]
pub struct HexCompass {
    points: DialMap<CompassPoint>,
}

impl HexCompass {
    /// The compass for pointy-top grids (no N or S)
    pub fn pointy() -> Self {
        use CompassPoint::*;
        Self::custom([
            (NE, Hex::new(1, -1)),
            (E, Hex::new(1, 0)),
            (SE, Hex::new(0, 1)),
            (SW, Hex::new(-1, 1)),
            (W, Hex::new(-1, 0)),
            (NW, Hex::new(0, -1)),
        ])
    }

    /// The compass for flat-top grids (no E or W)
    pub fn flat() -> Self {
        use CompassPoint::*;
        Self::custom([
            (N, Hex::new(0, -1)),
            (NE, Hex::new(1, -1)),
            (SE, Hex::new(1, 0)),
            (S, Hex::new(0, 1)),
            (SW, Hex::new(-1, 1)),
            (NW, Hex::new(-1, 0)),
        ])
    }

    /// Build a compass from arbitrary entries
    pub fn custom(
        entries: impl IntoIterator<Item = (CompassPoint, Hex)>,
    ) -> Self {
        Self {
            points: entries.into_iter().collect(),
        }
    }

    /// Look up the direction at a compass point. Fails naming the points
    /// this compass actually has, since each orientation only carries six
    /// of the eight.
    pub fn at_point(&self, point: CompassPoint) -> Result<Hex, HexError> {
        self.points.get(&point).copied().ok_or_else(|| {
            HexError::UnknownCompassPoint {
                point,
                valid: self.points.keys().copied().collect(),
            }
        })
    }

    /// Look up several points at once, as a sub-compass. Fails on the first
    /// missing point.
    pub fn at_points(&self, points: &[CompassPoint]) -> Result<Self, HexError> {
        let mut sub = DialMap::default();
        for &point in points {
            sub.insert(point, self.at_point(point)?);
        }
        Ok(Self { points: sub })
    }

    /// Translate every direction by a hex
    pub fn shifted(&self, hex: Hex) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|(&point, &dir)| (point, hex + dir))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: CompassPoint) -> bool {
        self.points.contains_key(&point)
    }

    /// Iterate the entries in clockwise dial order
    pub fn iter(&self) -> impl Iterator<Item = (CompassPoint, Hex)> + '_ {
        self.points.iter().map(|(&point, &dir)| (point, dir))
    }

    /// Iterate just the direction hexes in clockwise dial order
    pub fn hexes(&self) -> impl Iterator<Item = Hex> + '_ {
        self.points.values().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_clock_wraps_modulo_12() {
        let clock = HexClock::pointy();
        assert_eq!(clock.at_hour(12).unwrap(), clock.at_hour(0).unwrap());
        assert_eq!(clock.at_hour(-1).unwrap(), clock.at_hour(11).unwrap());
        assert_eq!(clock.at_hour(27).unwrap(), clock.at_hour(3).unwrap());
    }

    #[test]
    fn test_clock_direction_lengths() {
        let clock = HexClock::pointy();
        let orientation = Orientation::pointy();
        assert_eq!(clock.len(), 12);
        for dir in clock.directions(&orientation).hexes() {
            assert_eq!(dir.length(), 1);
        }
        for diag in clock.diagonals(&orientation).hexes() {
            assert_eq!(diag.length(), 2);
        }

        let clock = HexClock::flat();
        let orientation = Orientation::flat();
        assert_eq!(clock.len(), 12);
        for dir in clock.directions(&orientation).hexes() {
            assert_eq!(dir.length(), 1);
        }
        for diag in clock.diagonals(&orientation).hexes() {
            assert_eq!(diag.length(), 2);
        }
    }

    #[test]
    fn test_subclock_keeps_hours_and_errors_name_valid_set() {
        let clock = HexClock::pointy();
        let directions = clock.directions(&Orientation::pointy());
        assert_eq!(directions.len(), 6);
        assert_eq!(
            directions.at_hour(3).unwrap(),
            clock.at_hour(3).unwrap()
        );

        match directions.at_hour(2) {
            Err(HexError::InvalidHour { hour: 2, valid }) => {
                assert_eq!(valid, vec![1, 3, 5, 7, 9, 11]);
            }
            other => panic!("expected InvalidHour, got {other:?}"),
        }
    }

    #[test]
    fn test_at_angle() {
        let clock = HexClock::flat();
        assert_eq!(clock.at_angle(0).unwrap(), clock.at_hour(0).unwrap());
        assert_eq!(clock.at_angle(90).unwrap(), clock.at_hour(3).unwrap());
        assert_eq!(clock.at_angle(119).unwrap(), clock.at_hour(3).unwrap());
        assert_eq!(clock.at_angle(-30).unwrap(), clock.at_hour(11).unwrap());
    }

    #[test]
    fn test_shifted() {
        let hex = Hex::new(2, -1);
        let neighbors = HexClock::pointy().shifted(hex);
        for (hour, neighbor) in neighbors.iter() {
            let dir = HexClock::pointy().at_hour(hour as i32).unwrap();
            assert_eq!(neighbor, hex + dir);
        }
    }

    #[test]
    fn test_compass_points() {
        let pointy = HexCompass::pointy();
        assert_eq!(pointy.at_point(CompassPoint::E).unwrap(), Hex::new(1, 0));
        assert!(!pointy.contains(CompassPoint::N));

        let flat = HexCompass::flat();
        assert_eq!(flat.at_point(CompassPoint::N).unwrap(), Hex::new(0, -1));
        assert!(!flat.contains(CompassPoint::E));

        match pointy.at_point(CompassPoint::S) {
            Err(HexError::UnknownCompassPoint { point, valid }) => {
                assert_eq!(point, CompassPoint::S);
                assert_eq!(valid.len(), 6);
            }
            other => panic!("expected UnknownCompassPoint, got {other:?}"),
        }
    }

    #[test]
    fn test_compass_point_strings() {
        assert_eq!(CompassPoint::from_str("NE"), Ok(CompassPoint::NE));
        assert_eq!(CompassPoint::NW.to_string(), "NW");
        assert!(CompassPoint::from_str("NNE").is_err());
    }

    #[test]
    fn test_compass_direction_lengths() {
        for compass in [HexCompass::pointy(), HexCompass::flat()] {
            assert_eq!(compass.len(), 6);
            for dir in compass.hexes() {
                assert_eq!(dir.length(), 1);
            }
        }
    }
}
