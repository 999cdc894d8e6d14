//! [HexMap], the associative container every board and grid in a consumer
//! is built on, plus the factory functions that generate the common grid
//! shapes. Maps combine through set algebra (union, intersection,
//! difference, symmetric difference) and move as a whole through the
//! geometric bulk operations, so game rules can be phrased as "this board,
//! minus the occupied cells, unioned with the new piece positions".

use crate::{
    error::HexError,
    hex::{Hex, HexAxis},
    util::{hexagon_len, ring_len},
};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::ops;

/// The inner store. Insertion-ordered so that iteration (and everything
/// derived from it, like rendering order) is deterministic.
type HexValueMap<V> = IndexMap<Hex, V, FnvBuildHasher>;

/// An associative container from [Hex] to an arbitrary value type.
///
/// Beyond plain map access, a `HexMap` carries two pieces of metadata:
///
/// - `default_value`: what [insert_default](Self::insert_default) (and the
///   shape generators, which go through it) assign to new cells.
/// - `origin_offset`: a hex added to every inserted key. A shape can be
///   generated around [Hex::ORIGIN] and logically live elsewhere; the
///   offset is baked in transparently on every insert, and derived maps
///   (from set algebra or bulk transforms) inherit it.
///
/// The container deliberately does not expose its inner map: every write
/// path goes through the offset rule above, so there is no back door that
/// ends up with half-translated keys.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HexMap<V> {
    #[serde(with = "serde_hex_pairs")]
    hexes: HexValueMap<V>,
    default_value: V,
    origin_offset: Hex,
}

impl<V> HexMap<V> {
    /// An empty map centered on the origin
    pub fn new(default_value: V) -> Self {
        Self::with_origin(default_value, Hex::ORIGIN)
    }

    /// An empty map whose inserts are offset by `origin_offset`
    pub fn with_origin(default_value: V, origin_offset: Hex) -> Self {
        Self {
            hexes: HexValueMap::default(),
            default_value,
            origin_offset,
        }
    }

    /// Build a map from explicit entries. The given keys are taken as
    /// already positioned: the origin offset applies to subsequent
    /// inserts, not to these.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (Hex, V)>,
        default_value: V,
        origin_offset: Hex,
    ) -> Self {
        Self {
            hexes: pairs.into_iter().collect(),
            default_value,
            origin_offset,
        }
    }

    /// Build a map assigning one value to every given hex. Like
    /// [from_pairs](Self::from_pairs), the keys are taken as already
    /// positioned.
    pub fn from_hexes(
        hexes: impl IntoIterator<Item = Hex>,
        value: V,
        origin_offset: Hex,
    ) -> Self
    where
        V: Clone,
    {
        Self {
            hexes: hexes
                .into_iter()
                .map(|hex| (hex, value.clone()))
                .collect(),
            default_value: value,
            origin_offset,
        }
    }

    pub fn default_value(&self) -> &V {
        &self.default_value
    }

    pub fn origin_offset(&self) -> Hex {
        self.origin_offset
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.hexes.contains_key(&hex)
    }

    /// The value at a hex, if present. Lookups are by the stored key; the
    /// origin offset applies to writes only.
    pub fn get(&self, hex: Hex) -> Option<&V> {
        self.hexes.get(&hex)
    }

    pub fn get_mut(&mut self, hex: Hex) -> Option<&mut V> {
        self.hexes.get_mut(&hex)
    }

    /// The values at a batch of hexes. Fails on the first absent key; use
    /// [get](Self::get) per hex when absence is expected.
    pub fn values_at(
        &self,
        hexes: impl IntoIterator<Item = Hex>,
    ) -> Result<Vec<&V>, HexError> {
        hexes
            .into_iter()
            .map(|hex| {
                self.hexes
                    .get(&hex)
                    .ok_or(HexError::HexNotFound { hex })
            })
            .collect()
    }

    /// Insert a value at `hex + origin_offset`, returning the displaced
    /// value if the cell was occupied
    pub fn insert(&mut self, hex: Hex, value: V) -> Option<V> {
        self.hexes.insert(hex + self.origin_offset, value)
    }

    /// Insert the map's default value at `hex + origin_offset`
    pub fn insert_default(&mut self, hex: Hex) -> Option<V>
    where
        V: Clone,
    {
        self.insert(hex, self.default_value.clone())
    }

    /// Insert one value at a whole batch of hexes (each offset as usual)
    pub fn paint(
        &mut self,
        hexes: impl IntoIterator<Item = Hex>,
        value: &V,
    ) where
        V: Clone,
    {
        for hex in hexes {
            self.insert(hex, value.clone());
        }
    }

    /// Insert a batch of entries (each key offset as usual)
    pub fn extend(&mut self, pairs: impl IntoIterator<Item = (Hex, V)>) {
        for (hex, value) in pairs {
            self.insert(hex, value);
        }
    }

    /// Overwrite the value of every existing cell, keeping the keys
    pub fn set_all(&mut self, value: &V)
    where
        V: Clone,
    {
        for slot in self.hexes.values_mut() {
            *slot = value.clone();
        }
    }

    /// Remove and return the value at a hex. An absent key is an error;
    /// popping is for cells the caller knows exist.
    pub fn pop(&mut self, hex: Hex) -> Result<V, HexError> {
        self.hexes
            .shift_remove(&hex)
            .ok_or(HexError::HexNotFound { hex })
    }

    /// Iterate all entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Hex, &V)> + '_ {
        self.hexes.iter().map(|(&hex, value)| (hex, value))
    }

    /// Iterate all keys in insertion order
    pub fn hexes(&self) -> impl Iterator<Item = Hex> + '_ {
        self.hexes.keys().copied()
    }

    /// Iterate all values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.hexes.values()
    }

    /// The keys currently holding the given value
    pub fn hexes_with_value<'a>(
        &'a self,
        value: &'a V,
    ) -> impl Iterator<Item = Hex> + 'a
    where
        V: PartialEq,
    {
        self.hexes
            .iter()
            .filter(move |&(_, v)| v == value)
            .map(|(&hex, _)| hex)
    }

    /// The keys currently holding any of the given values
    pub fn hexes_with_values<'a>(
        &'a self,
        values: &'a [V],
    ) -> impl Iterator<Item = Hex> + 'a
    where
        V: PartialEq,
    {
        self.hexes
            .iter()
            .filter(move |&(_, v)| values.contains(v))
            .map(|(&hex, _)| hex)
    }

    /// A map with every key shifted by `offset`, values untouched
    pub fn translated(self, offset: Hex) -> Self {
        self.transform(|hex| hex + offset)
    }

    /// A map with every key passed through `f`, values untouched. This is
    /// the bulk-geometry hook: rotating or reflecting a whole shape is a
    /// transform with the matching [Hex] operation.
    pub fn transform(self, mut f: impl FnMut(Hex) -> Hex) -> Self {
        let Self {
            hexes,
            default_value,
            origin_offset,
        } = self;
        Self {
            hexes: hexes
                .into_iter()
                .map(|(hex, value)| (f(hex), value))
                .collect(),
            default_value,
            origin_offset,
        }
    }

    /// A map with every value passed through `f`, keys untouched
    pub fn apply(self, mut f: impl FnMut(V) -> V) -> Self {
        let Self {
            hexes,
            default_value,
            origin_offset,
        } = self;
        Self {
            hexes: hexes
                .into_iter()
                .map(|(hex, value)| (hex, f(value)))
                .collect(),
            default_value,
            origin_offset,
        }
    }

    /// The union of two maps. Where both maps hold a key, **the other
    /// map's value wins**; "union with the new state" is the idiom for
    /// applying an update on top of a board. Metadata comes from `self`.
    pub fn union(self, other: Self) -> Self {
        let Self {
            mut hexes,
            default_value,
            origin_offset,
        } = self;
        // extend overwrites values but keeps the original key positions,
        // so the left map also dictates iteration order for shared keys
        hexes.extend(other.hexes);
        Self {
            hexes,
            default_value,
            origin_offset,
        }
    }

    /// The union of two maps, resolving each key conflict through
    /// `resolve(self_value, other_value)`
    pub fn union_with(
        self,
        other: Self,
        mut resolve: impl FnMut(V, V) -> V,
    ) -> Self {
        let Self {
            hexes,
            default_value,
            origin_offset,
        } = self;
        let mut remaining = other.hexes;
        let mut merged = HexValueMap::with_capacity_and_hasher(
            hexes.len() + remaining.len(),
            FnvBuildHasher::default(),
        );
        for (hex, value) in hexes {
            let merged_value = match remaining.shift_remove(&hex) {
                Some(other_value) => resolve(value, other_value),
                None => value,
            };
            merged.insert(hex, merged_value);
        }
        merged.extend(remaining);
        Self {
            hexes: merged,
            default_value,
            origin_offset,
        }
    }

    /// The intersection of two maps, keeping this map's values
    pub fn intersection(self, other: &Self) -> Self {
        let Self {
            hexes,
            default_value,
            origin_offset,
        } = self;
        Self {
            hexes: hexes
                .into_iter()
                .filter(|(hex, _)| other.contains(*hex))
                .collect(),
            default_value,
            origin_offset,
        }
    }

    /// The intersection of two maps, combining each pair of values through
    /// `combine(self_value, other_value)`
    pub fn intersection_with(
        self,
        other: Self,
        mut combine: impl FnMut(V, V) -> V,
    ) -> Self {
        let Self {
            hexes,
            default_value,
            origin_offset,
        } = self;
        let mut remaining = other.hexes;
        Self {
            hexes: hexes
                .into_iter()
                .filter_map(|(hex, value)| {
                    remaining
                        .shift_remove(&hex)
                        .map(|other_value| (hex, combine(value, other_value)))
                })
                .collect(),
            default_value,
            origin_offset,
        }
    }

    /// The keys of this map that the other map doesn't have, values
    /// untouched
    pub fn difference(self, other: &Self) -> Self {
        let Self {
            hexes,
            default_value,
            origin_offset,
        } = self;
        Self {
            hexes: hexes
                .into_iter()
                .filter(|(hex, _)| !other.contains(*hex))
                .collect(),
            default_value,
            origin_offset,
        }
    }

    /// The keys present in exactly one of the two maps, each keeping the
    /// value it came with
    pub fn symmetric_difference(self, other: Self) -> Self {
        let Self {
            hexes,
            default_value,
            origin_offset,
        } = self;
        let mut remaining = other.hexes;
        let mut kept = HexValueMap::default();
        for (hex, value) in hexes {
            if remaining.shift_remove(&hex).is_none() {
                kept.insert(hex, value);
            }
        }
        kept.extend(remaining);
        Self {
            hexes: kept,
            default_value,
            origin_offset,
        }
    }
}

// Entry comparison ignores insertion order; two maps with the same cells,
// default and offset are the same map.
impl<V: PartialEq> PartialEq for HexMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.hexes == other.hexes
            && self.default_value == other.default_value
            && self.origin_offset == other.origin_offset
    }
}

// Translation by a hex and set algebra between maps are distinct
// operations with distinct right-hand types; Rust's operator traits let
// both coexist without any runtime type dispatch.

impl<V> ops::Add<Hex> for HexMap<V> {
    type Output = Self;

    /// Translate every key by `rhs`
    fn add(self, rhs: Hex) -> Self {
        self.translated(rhs)
    }
}

impl<V> ops::Sub<Hex> for HexMap<V> {
    type Output = Self;

    /// Translate every key by `-rhs`
    fn sub(self, rhs: Hex) -> Self {
        self.translated(-rhs)
    }
}

impl<V> ops::BitOr for HexMap<V> {
    type Output = Self;

    /// Union; the right operand's values win on shared keys
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<V> ops::BitAnd for HexMap<V> {
    type Output = Self;

    /// Intersection, keeping the left operand's values
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(&rhs)
    }
}

impl<V> ops::Sub for HexMap<V> {
    type Output = Self;

    /// Difference: keys of the left operand not in the right
    fn sub(self, rhs: Self) -> Self {
        self.difference(&rhs)
    }
}

impl<V> ops::BitXor for HexMap<V> {
    type Output = Self;

    /// Symmetric difference: keys in exactly one operand
    fn bitxor(self, rhs: Self) -> Self {
        self.symmetric_difference(rhs)
    }
}

// Hexes can't be keys in most serialized map representations (JSON keys
// must be strings), so the inner map travels as a sequence of pairs.
mod serde_hex_pairs {
    use super::HexValueMap;
    use crate::hex::Hex;
    use serde::{
        de::Deserializer, ser::SerializeSeq, ser::Serializer, Deserialize,
        Serialize,
    };

    pub fn serialize<V, S>(
        map: &HexValueMap<V>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        V: Serialize,
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for entry in map {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }

    pub fn deserialize<'de, V, D>(
        deserializer: D,
    ) -> Result<HexValueMap<V>, D::Error>
    where
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let pairs: Vec<(Hex, V)> = Vec::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

/// An inclusive range of coordinates along one axis, for the two-axis
/// shape generators. A plain integer converts to the symmetric span
/// `-n..=n`, a pair to the explicit `min..=max`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub min: i32,
    pub max: i32,
}

impl Span {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    fn iter(self) -> ops::RangeInclusive<i32> {
        self.min..=self.max
    }
}

impl From<i32> for Span {
    fn from(extent: i32) -> Self {
        Self::new(-extent, extent)
    }
}

impl From<(i32, i32)> for Span {
    fn from((min, max): (i32, i32)) -> Self {
        Self::new(min, max)
    }
}

/// A hexagon-shaped map ⬢: every cell within `radius` rings of the origin,
/// or only the boundary ring itself when `hollow`. Cardinality is
/// `3r² + 3r + 1` filled and `6r` hollow.
pub fn hexagon<V: Clone>(
    radius: u16,
    value: V,
    origin_offset: Hex,
    hollow: bool,
) -> HexMap<V> {
    let mut map = HexMap::with_origin(value, origin_offset);
    map.hexes.reserve(if hollow {
        ring_len(radius)
    } else {
        hexagon_len(radius)
    });

    let radius = radius as i32;
    for q in -radius..=radius {
        let r_min = (-radius).max(-q - radius);
        let r_max = radius.min(-q + radius);
        if !hollow || q == -radius || q == radius {
            for r in r_min..=r_max {
                map.insert_default(Hex::new(q, r));
            }
        } else {
            map.insert_default(Hex::new(q, r_min));
            map.insert_default(Hex::new(q, r_max));
        }
    }

    debug!(
        "generated hexagon map: radius {}, hollow {}, {} hexes",
        radius,
        hollow,
        map.len()
    );
    map
}

/// A parallelogram-shaped map ▰ spanning two axial ranges: the true
/// parallelogram of axial space, with no offset correction. When `hollow`,
/// only the perimeter cells are kept. Fails if both ranges name the same
/// axis.
pub fn parallelogram<V: Clone>(
    a: (HexAxis, impl Into<Span>),
    b: (HexAxis, impl Into<Span>),
    value: V,
    origin_offset: Hex,
    hollow: bool,
) -> Result<HexMap<V>, HexError> {
    let (axis_a, span_a) = (a.0, a.1.into());
    let (axis_b, span_b) = (b.0, b.1.into());

    let mut map = HexMap::with_origin(value, origin_offset);
    for c1 in span_a.iter() {
        if !hollow || c1 == span_a.min || c1 == span_a.max {
            for c2 in span_b.iter() {
                map.insert_default(Hex::from_axes((axis_a, c1), (axis_b, c2))?);
            }
        } else {
            map.insert_default(Hex::from_axes(
                (axis_a, c1),
                (axis_b, span_b.min),
            )?);
            map.insert_default(Hex::from_axes(
                (axis_a, c1),
                (axis_b, span_b.max),
            )?);
        }
    }

    debug!(
        "generated parallelogram map over {:?}/{:?}: {} hexes",
        axis_a,
        axis_b,
        map.len()
    );
    Ok(map)
}

/// A rhombus-shaped map ⬧: a parallelogram with equal spans on both axes
pub fn rhombus<V: Clone>(
    size: impl Into<Span>,
    axes: (HexAxis, HexAxis),
    value: V,
    origin_offset: Hex,
    hollow: bool,
) -> Result<HexMap<V>, HexError> {
    let span = size.into();
    parallelogram(
        (axes.0, span),
        (axes.1, span),
        value,
        origin_offset,
        hollow,
    )
}

/// A rectangle-shaped map ▬. Axial axes aren't orthogonal on screen, so
/// each row's column range is shifted back by `floor(row / 2)`; the result
/// is ragged in axial space but visually rectangular once projected. When
/// `hollow`, only the perimeter cells are kept. Fails if both ranges name
/// the same axis.
pub fn rectangle<V: Clone>(
    cols: (HexAxis, impl Into<Span>),
    rows: (HexAxis, impl Into<Span>),
    value: V,
    origin_offset: Hex,
    hollow: bool,
) -> Result<HexMap<V>, HexError> {
    let (col_axis, col_span) = (cols.0, cols.1.into());
    let (row_axis, row_span) = (rows.0, rows.1.into());

    let mut map = HexMap::with_origin(value, origin_offset);
    for row in row_span.iter() {
        let shift = row.div_euclid(2);
        let first = col_span.min - shift;
        let last = col_span.max - shift;
        if !hollow || row == row_span.min || row == row_span.max {
            for col in first..=last {
                map.insert_default(Hex::from_axes(
                    (row_axis, row),
                    (col_axis, col),
                )?);
            }
        } else {
            map.insert_default(Hex::from_axes(
                (row_axis, row),
                (col_axis, first),
            )?);
            map.insert_default(Hex::from_axes(
                (row_axis, row),
                (col_axis, last),
            )?);
        }
    }

    debug!(
        "generated rectangle map over {:?}/{:?}: {} hexes",
        col_axis,
        row_axis,
        map.len()
    );
    Ok(map)
}

/// A square-shaped map ■: a rectangle with equal spans on both axes
pub fn square<V: Clone>(
    size: impl Into<Span>,
    axes: (HexAxis, HexAxis),
    value: V,
    origin_offset: Hex,
    hollow: bool,
) -> Result<HexMap<V>, HexError> {
    let span = size.into();
    rectangle((axes.0, span), (axes.1, span), value, origin_offset, hollow)
}

/// A triangle-shaped map ▲ centered on the origin, bounded by a linear
/// inequality on the two given axes. A triangle of size `s` has
/// `(3s + 1)(3s + 2) / 2` cells. Fails if both axes are the same.
pub fn triangle<V: Clone>(
    size: i32,
    axes: (HexAxis, HexAxis),
    value: V,
    origin_offset: Hex,
) -> Result<HexMap<V>, HexError> {
    let mut map = HexMap::with_origin(value, origin_offset);
    for c1 in -2 * size..=size {
        for c2 in -size - c1..=size {
            let hex = Hex::from_axes((axes.0, c1), (axes.1, c2))?;
            map.insert_default(-hex);
        }
    }

    debug!("generated triangle map of size {}: {} hexes", size, map.len());
    Ok(map)
}

/// The outline of a polygon whose corners are the given hexes, traced with
/// [Hex::linedraw] from corner to corner and wrapping back around from the
/// last to the first
pub fn polygon<V: Clone>(
    corners: &[Hex],
    value: V,
    origin_offset: Hex,
) -> HexMap<V> {
    let mut map = HexMap::with_origin(value, origin_offset);
    if corners.is_empty() {
        return map;
    }

    for (i, &corner) in corners.iter().enumerate() {
        let next = corners[(i + 1) % corners.len()];
        for hex in corner.linedraw(next) {
            map.insert_default(hex);
        }
    }

    debug!(
        "generated polygon map with {} corners: {} hexes",
        corners.len(),
        map.len()
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_applies_origin_offset() {
        let offset = Hex::new(3, -1);
        let mut map = HexMap::with_origin(0, offset);
        map.insert(Hex::new(1, 1), 7);
        map.insert_default(Hex::ORIGIN);

        assert_eq!(map.get(Hex::new(4, 0)), Some(&7));
        assert_eq!(map.get(offset), Some(&0));
        // Reads are by stored key, so the un-offset key is absent
        assert_eq!(map.get(Hex::new(1, 1)), None);
    }

    #[test]
    fn test_get_and_pop() {
        let mut map = HexMap::new(0);
        map.insert(Hex::new(1, 2), 5);

        assert_eq!(map.get(Hex::new(1, 2)), Some(&5));
        assert_eq!(map.pop(Hex::new(1, 2)), Ok(5));
        assert_eq!(
            map.pop(Hex::new(1, 2)),
            Err(HexError::HexNotFound {
                hex: Hex::new(1, 2)
            })
        );
    }

    #[test]
    fn test_values_at() {
        let mut map = HexMap::new(0);
        map.insert(Hex::new(0, 0), 1);
        map.insert(Hex::new(1, 0), 2);

        assert_eq!(
            map.values_at([Hex::new(0, 0), Hex::new(1, 0)]).unwrap(),
            vec![&1, &2]
        );
        assert_eq!(
            map.values_at([Hex::new(0, 0), Hex::new(5, 5)]),
            Err(HexError::HexNotFound {
                hex: Hex::new(5, 5)
            })
        );
    }

    #[test]
    fn test_paint_and_set_all() {
        let mut map = HexMap::new(0);
        map.paint([Hex::new(0, 0), Hex::new(1, 0), Hex::new(0, 1)], &4);
        assert_eq!(map.len(), 3);
        assert!(map.values().all(|&v| v == 4));

        map.set_all(&9);
        assert!(map.values().all(|&v| v == 9));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_union_right_wins() {
        let mut left = HexMap::new(0);
        left.insert(Hex::ORIGIN, 1);
        let mut right = HexMap::new(0);
        right.insert(Hex::ORIGIN, 2);

        let union = left.union(right);
        assert_eq!(union.len(), 1);
        assert_eq!(union.get(Hex::ORIGIN), Some(&2));
    }

    #[test]
    fn test_union_with_resolver() {
        let mut left = HexMap::new(0);
        left.insert(Hex::ORIGIN, 1);
        left.insert(Hex::new(1, 0), 10);
        let mut right = HexMap::new(0);
        right.insert(Hex::ORIGIN, 2);
        right.insert(Hex::new(0, 1), 20);

        let union = left.union_with(right, |a, b| a + b);
        assert_eq!(union.get(Hex::ORIGIN), Some(&3));
        assert_eq!(union.get(Hex::new(1, 0)), Some(&10));
        assert_eq!(union.get(Hex::new(0, 1)), Some(&20));
        assert_eq!(union.len(), 3);
    }

    #[test]
    fn test_intersection() {
        let left = HexMap::from_hexes(
            [Hex::new(0, 0), Hex::new(1, 0), Hex::new(2, 0)],
            1,
            Hex::ORIGIN,
        );
        let right = HexMap::from_hexes(
            [Hex::new(1, 0), Hex::new(2, 0), Hex::new(3, 0)],
            2,
            Hex::ORIGIN,
        );

        let both = left.clone().intersection(&right);
        assert_eq!(both.len(), 2);
        // Left values survive a plain intersection
        assert!(both.values().all(|&v| v == 1));

        let combined = left.intersection_with(right, |a, b| a + b);
        assert_eq!(combined.len(), 2);
        assert!(combined.values().all(|&v| v == 3));
    }

    #[test]
    fn test_difference_and_symmetric_difference() {
        let left = HexMap::from_hexes(
            [Hex::new(0, 0), Hex::new(1, 0)],
            1,
            Hex::ORIGIN,
        );
        let right = HexMap::from_hexes(
            [Hex::new(1, 0), Hex::new(2, 0)],
            2,
            Hex::ORIGIN,
        );

        let only_left = left.clone().difference(&right);
        assert_eq!(only_left.len(), 1);
        assert_eq!(only_left.get(Hex::new(0, 0)), Some(&1));

        let either = left.symmetric_difference(right);
        assert_eq!(either.len(), 2);
        // Each key keeps the value of the side it came from
        assert_eq!(either.get(Hex::new(0, 0)), Some(&1));
        assert_eq!(either.get(Hex::new(2, 0)), Some(&2));
    }

    #[test]
    fn test_operators_match_named_ops() {
        let a = HexMap::from_hexes([Hex::new(0, 0), Hex::new(1, 0)], 1, Hex::ORIGIN);
        let b = HexMap::from_hexes([Hex::new(1, 0), Hex::new(2, 0)], 2, Hex::ORIGIN);

        assert_eq!(a.clone() | b.clone(), a.clone().union(b.clone()));
        assert_eq!(a.clone() & b.clone(), a.clone().intersection(&b));
        assert_eq!(a.clone() - b.clone(), a.clone().difference(&b));
        assert_eq!(
            a.clone() ^ b.clone(),
            a.clone().symmetric_difference(b.clone())
        );
        assert_eq!(
            (a.clone() + Hex::new(1, 1)) - Hex::new(1, 1),
            a
        );
    }

    #[test]
    fn test_transform_and_apply() {
        let map = HexMap::from_hexes(
            [Hex::new(1, 0), Hex::new(0, 1)],
            1,
            Hex::ORIGIN,
        );

        let rotated = map.clone().transform(|hex| hex.rotated_left(2));
        assert!(rotated.contains(Hex::new(1, 0).rotated_left(2)));
        assert!(rotated.contains(Hex::new(0, 1).rotated_left(2)));
        assert_eq!(rotated.len(), 2);

        let doubled = map.apply(|v| v * 2);
        assert!(doubled.values().all(|&v| v == 2));
    }

    #[test]
    fn test_hexes_with_value() {
        let mut map = HexMap::new(0);
        map.insert(Hex::new(0, 0), 1);
        map.insert(Hex::new(1, 0), 2);
        map.insert(Hex::new(2, 0), 1);

        let ones: Vec<_> = map.hexes_with_value(&1).collect();
        assert_eq!(ones, vec![Hex::new(0, 0), Hex::new(2, 0)]);

        let any: Vec<_> = map.hexes_with_values(&[1, 2]).collect();
        assert_eq!(any.len(), 3);
    }

    #[test]
    fn test_generator_counts() {
        for radius in 0..5 {
            assert_eq!(
                hexagon(radius, (), Hex::ORIGIN, false).len(),
                hexagon_len(radius)
            );
            assert_eq!(
                hexagon(radius, (), Hex::ORIGIN, true).len(),
                ring_len(radius)
            );
        }

        // (2 * 2 + 1) * (2 * 1 + 1) cells
        let shape = parallelogram(
            (HexAxis::Q, 2),
            (HexAxis::R, 1),
            (),
            Hex::ORIGIN,
            false,
        )
        .unwrap();
        assert_eq!(shape.len(), 15);

        // The row shift doesn't change the count, only the outline
        let shape = rectangle(
            (HexAxis::Q, 3),
            (HexAxis::R, 2),
            (),
            Hex::ORIGIN,
            false,
        )
        .unwrap();
        assert_eq!(shape.len(), 35);

        let shape = square(2, (HexAxis::Q, HexAxis::R), (), Hex::ORIGIN, false)
            .unwrap();
        assert_eq!(shape.len(), 25);

        // (3 * 1 + 1)(3 * 1 + 2) / 2
        let shape =
            triangle(1, (HexAxis::Q, HexAxis::R), (), Hex::ORIGIN).unwrap();
        assert_eq!(shape.len(), 10);
    }

    #[test]
    fn test_hollow_shapes_are_perimeters() {
        let shape = parallelogram(
            (HexAxis::Q, 2),
            (HexAxis::R, 2),
            (),
            Hex::ORIGIN,
            true,
        )
        .unwrap();
        // 5x5 block minus the 3x3 interior
        assert_eq!(shape.len(), 16);

        let shape = rectangle(
            (HexAxis::Q, 2),
            (HexAxis::R, 2),
            (),
            Hex::ORIGIN,
            true,
        )
        .unwrap();
        assert_eq!(shape.len(), 16);
    }

    #[test]
    fn test_generators_reject_duplicate_axes() {
        assert_eq!(
            parallelogram((HexAxis::Q, 1), (HexAxis::Q, 1), (), Hex::ORIGIN, false)
                .unwrap_err(),
            HexError::DuplicateAxis { axis: HexAxis::Q }
        );
        assert_eq!(
            triangle(1, (HexAxis::S, HexAxis::S), (), Hex::ORIGIN).unwrap_err(),
            HexError::DuplicateAxis { axis: HexAxis::S }
        );
    }

    #[test]
    fn test_polygon_outline() {
        let corners = [Hex::new(3, 0), Hex::new(0, 3), Hex::new(-3, 3)];
        let outline = polygon(&corners, (), Hex::ORIGIN);

        for corner in corners {
            assert!(outline.contains(corner));
        }
        // The outline is closed: every cell has a neighbor in the outline
        let layout = crate::layout::Layout::pointy(1.0, (0.0, 0.0));
        for hex in outline.hexes() {
            let has_neighbor = layout
                .direct_neighbors(hex)
                .unwrap()
                .hexes()
                .any(|neighbor| outline.contains(neighbor));
            assert!(has_neighbor, "outline cell {hex} is isolated");
        }

        assert!(polygon(&[], (), Hex::ORIGIN).is_empty());
        assert_eq!(polygon(&[Hex::new(1, 1)], (), Hex::ORIGIN).len(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let map = hexagon(1, 3, Hex::new(2, -1), false);
        let json = serde_json::to_string(&map).unwrap();
        let back: HexMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
