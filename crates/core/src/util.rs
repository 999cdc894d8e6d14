/// The number of cells in a filled hexagon-shaped map of the given radius.
/// Radius 0 is the single center cell, 1 adds the 6 neighbors, and every
/// further ring adds 6 more cells than the last, which reduces to
/// `3r² + 3r + 1`.
pub fn hexagon_len(radius: u16) -> usize {
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

/// The number of cells in just the boundary ring at the given radius: `6r`,
/// except that ring 0 is the center cell itself.
pub fn ring_len(radius: u16) -> usize {
    if radius == 0 {
        1
    } else {
        6 * radius as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexagon_len() {
        assert_eq!(hexagon_len(0), 1);
        assert_eq!(hexagon_len(1), 7);
        assert_eq!(hexagon_len(2), 19);
        assert_eq!(hexagon_len(3), 37);
    }

    #[test]
    fn test_ring_len() {
        assert_eq!(ring_len(0), 1);
        assert_eq!(ring_len(1), 6);
        assert_eq!(ring_len(2), 12);
        // Rings partition the hexagon
        assert_eq!((0..=4).map(ring_len).sum::<usize>(), hexagon_len(4));
    }
}
