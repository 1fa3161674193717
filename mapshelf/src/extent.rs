//! Types and functions for working with geographic extents.

/// Geographic bounding rectangle with longitude/latitude corners in degrees.
pub type Extent = geo_types::Rect;

/// Construct `Extent` from the western, southern, eastern and northern edges.
pub fn extent(west: f64, south: f64, east: f64, north: f64) -> Extent {
    Extent::new((west, south), (east, north))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn extent_keeps_the_given_edges() {
        let extent = extent(14.07, 49.0, 24.09, 54.84);

        assert_relative_eq!(extent.min().x, 14.07);
        assert_relative_eq!(extent.min().y, 49.0);
        assert_relative_eq!(extent.max().x, 24.09);
        assert_relative_eq!(extent.max().y, 54.84);
    }

    #[test]
    fn extent_normalizes_swapped_corners() {
        let extent = extent(24.09, 54.84, 14.07, 49.0);

        assert_relative_eq!(extent.min().x, 14.07);
        assert_relative_eq!(extent.max().y, 54.84);
    }
}
