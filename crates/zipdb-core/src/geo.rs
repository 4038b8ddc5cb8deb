// crates/zipdb-core/src/geo.rs

//! Pure geometry for the radius search: validated query points, the
//! per-query bounding rectangle, and great-circle distance.

use crate::error::{Result, ZipError};

/// Miles spanned by one degree of latitude.
///
/// Nearly constant across the latitude range of the dataset, so a single
/// fixed value is used rather than a latitude-dependent one.
pub const MILES_PER_LAT_DEGREE: f64 = 69.172;

/// Mean Earth radius in miles, used by the haversine formula.
pub const EARTH_RADIUS_MILES: f64 = 3958.7613;

/// A query point in decimal degrees. Not persisted.
///
/// Both components are validated to be finite at construction, so every
/// `SearchPoint` handed to the search engine is usable as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchPoint {
    latitude: f64,
    longitude: f64,
}

impl SearchPoint {
    /// Build a point from decimal-degree components.
    ///
    /// Fails with [`ZipError::InvalidPoint`] if either component is NaN
    /// or infinite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ZipError::InvalidPoint(format!(
                "latitude and longitude must be finite, got ({latitude}, {longitude})"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Internal constructor for coordinates already held by the store.
    pub(crate) const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// A latitude/longitude rectangle used as a cheap pre-filter before exact
/// distance computation. Derived per query, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl BoundingBox {
    /// Compute the rectangle enclosing a circle of `distance_miles` around
    /// `center`.
    ///
    /// The east-west scale shrinks with the cosine of the latitude; the
    /// latitude is converted to radians before taking the cosine. The
    /// min/max pair per axis is normalized so the rectangle is well-formed
    /// for any input.
    pub fn around(center: SearchPoint, distance_miles: f64) -> Self {
        let miles_per_lng_degree = center.latitude.to_radians().cos() * MILES_PER_LAT_DEGREE;

        let lat_radius = distance_miles / MILES_PER_LAT_DEGREE;
        let lng_radius = distance_miles / miles_per_lng_degree;

        let mut lat_min = center.latitude - lat_radius;
        let mut lat_max = center.latitude + lat_radius;
        let mut lng_min = center.longitude - lng_radius;
        let mut lng_max = center.longitude + lng_radius;

        if lat_min > lat_max {
            std::mem::swap(&mut lat_min, &mut lat_max);
        }
        if lng_min > lng_max {
            std::mem::swap(&mut lng_min, &mut lng_max);
        }

        Self {
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        }
    }

    /// Open-interval containment test: the box edges themselves are
    /// excluded. A zero-radius box therefore contains nothing, not even
    /// its own center.
    pub fn contains_strict(&self, latitude: f64, longitude: f64) -> bool {
        latitude > self.lat_min
            && latitude < self.lat_max
            && longitude > self.lng_min
            && longitude < self.lng_max
    }
}

/// Great-circle distance in miles between two points, by the haversine
/// formula over a sphere of mean Earth radius.
pub fn haversine_miles(a: SearchPoint, b: SearchPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlng = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_rejects_non_finite_components() {
        assert!(SearchPoint::new(f64::NAN, -81.0).is_err());
        assert!(SearchPoint::new(41.0, f64::INFINITY).is_err());
        assert!(SearchPoint::new(f64::NEG_INFINITY, f64::NAN).is_err());
        assert!(SearchPoint::new(41.4993, -81.6944).is_ok());
    }

    #[test]
    fn haversine_is_zero_for_identical_points() {
        let p = SearchPoint::new(41.4993, -81.6944).unwrap();
        assert!(haversine_miles(p, p).abs() < 1e-9);
    }

    #[test]
    fn haversine_one_degree_of_latitude() {
        // One degree of latitude on the mean sphere: pi/180 * radius.
        let a = SearchPoint::new(40.0, -81.0).unwrap();
        let b = SearchPoint::new(41.0, -81.0).unwrap();
        let expected = std::f64::consts::PI / 180.0 * EARTH_RADIUS_MILES;
        assert!((haversine_miles(a, b) - expected).abs() < 1e-6);
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = SearchPoint::new(41.4993, -81.6944).unwrap();
        let b = SearchPoint::new(39.9612, -83.0007).unwrap();
        let ab = haversine_miles(a, b);
        let ba = haversine_miles(b, a);
        assert!((ab - ba).abs() < 1e-9);
        // Cleveland to Columbus is roughly 115 to 130 miles.
        assert!(ab > 100.0 && ab < 150.0, "got {ab}");
    }

    #[test]
    fn box_spans_one_degree_of_latitude_per_69_172_miles() {
        let center = SearchPoint::new(40.0, -81.0).unwrap();
        let bbox = BoundingBox::around(center, MILES_PER_LAT_DEGREE);
        assert!((bbox.lat_min - 39.0).abs() < 1e-9);
        assert!((bbox.lat_max - 41.0).abs() < 1e-9);
        // East-west extent widens by 1/cos(latitude).
        let lng_half_span = (bbox.lng_max - bbox.lng_min) / 2.0;
        assert!(lng_half_span > 1.0);
    }

    #[test]
    fn box_is_normalized_for_southern_latitudes() {
        let center = SearchPoint::new(-33.9, 18.4).unwrap();
        let bbox = BoundingBox::around(center, 10.0);
        assert!(bbox.lat_min < bbox.lat_max);
        assert!(bbox.lng_min < bbox.lng_max);
    }

    #[test]
    fn zero_radius_box_contains_nothing() {
        let center = SearchPoint::new(41.4993, -81.6944).unwrap();
        let bbox = BoundingBox::around(center, 0.0);
        assert!(!bbox.contains_strict(center.latitude(), center.longitude()));
    }

    #[test]
    fn box_edges_are_excluded() {
        let center = SearchPoint::new(40.0, -81.0).unwrap();
        let bbox = BoundingBox::around(center, MILES_PER_LAT_DEGREE);
        assert!(!bbox.contains_strict(bbox.lat_min, -81.0));
        assert!(!bbox.contains_strict(bbox.lat_max, -81.0));
        assert!(!bbox.contains_strict(40.0, bbox.lng_min));
        assert!(!bbox.contains_strict(40.0, bbox.lng_max));
        assert!(bbox.contains_strict(40.0, -81.0));
    }
}
