use geo::BoundingRect;
use serde::{Deserialize, Serialize};

/// Geographic bounding box in degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Bounding box of a GeoJSON geometry, `None` for empty or unsupported
    /// geometries.
    pub fn of_geometry(geometry: &geojson::Geometry) -> Option<Self> {
        let geom: geo::Geometry<f64> = geom_from_geojson(geometry)?;
        let rect = geom.bounding_rect()?;
        let bounds = Self {
            south: rect.min().y,
            west: rect.min().x,
            north: rect.max().y,
            east: rect.max().x,
        };
        bounds.is_valid().then_some(bounds)
    }

    pub fn of_feature(feature: &geojson::Feature) -> Option<Self> {
        feature.geometry.as_ref().and_then(Self::of_geometry)
    }

    pub fn is_valid(&self) -> bool {
        [self.south, self.west, self.north, self.east]
            .iter()
            .all(|v| v.is_finite())
            && self.south <= self.north
            && self.west <= self.east
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            south: self.south.min(other.south),
            west: self.west.min(other.west),
            north: self.north.max(other.north),
            east: self.east.max(other.east),
        }
    }

    /// Union of all boxes, `None` when the iterator is empty
    pub fn union_all<'a, I>(items: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = &'a Bounds>,
    {
        items
            .into_iter()
            .fold(None, |acc: Option<Bounds>, b| match acc {
                Some(a) => Some(a.union(b)),
                None => Some(*b),
            })
    }

    /// Leaflet `LatLngBoundsExpression`: `[[south, west], [north, east]]`
    pub fn to_corners(&self) -> [[f64; 2]; 2] {
        [[self.south, self.west], [self.north, self.east]]
    }
}

fn geom_from_geojson(geometry: &geojson::Geometry) -> Option<geo::Geometry<f64>> {
    match geo::Geometry::<f64>::try_from(geometry.value.clone()) {
        Ok(g) => Some(g),
        Err(e) => {
            log::debug!("Unsupported geometry skipped for bounds: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Geometry, Value};

    fn square(x: f64, y: f64, size: f64) -> Geometry {
        Geometry::new(Value::Polygon(vec![vec![
            vec![x, y],
            vec![x + size, y],
            vec![x + size, y + size],
            vec![x, y + size],
            vec![x, y],
        ]]))
    }

    #[test]
    fn test_bounds_of_polygon() {
        let b = Bounds::of_geometry(&square(-75.0, 4.0, 2.0)).unwrap();
        assert_eq!(b, Bounds { south: 4.0, west: -75.0, north: 6.0, east: -73.0 });
        assert_eq!(b.to_corners(), [[4.0, -75.0], [6.0, -73.0]]);
    }

    #[test]
    fn test_union_all() {
        let a = Bounds::of_geometry(&square(-75.0, 4.0, 1.0)).unwrap();
        let b = Bounds::of_geometry(&square(-70.0, -2.0, 1.0)).unwrap();
        let u = Bounds::union_all([a, b].iter()).unwrap();
        assert_eq!(u, Bounds { south: -2.0, west: -75.0, north: 5.0, east: -69.0 });
        assert_eq!(Bounds::union_all(std::iter::empty()), None);
    }

    #[test]
    fn test_empty_multipolygon_has_no_bounds() {
        let g = Geometry::new(Value::MultiPolygon(vec![]));
        assert_eq!(Bounds::of_geometry(&g), None);
    }
}
