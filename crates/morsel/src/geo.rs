//! Great-circle distance math and the stored-coordinate text format.
//!
//! Restaurants carry their position as `"latitude,longitude"` text; the same
//! parser backs query validation and result enrichment so both agree on what
//! a well-formed location looks like.

/// Unit for reported distances.
///
/// The raw formula yields statute miles; the unit scales the result and is
/// always supplied explicitly by the caller rather than defaulting inside the
/// computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    Miles,
    #[default]
    Kilometers,
    NauticalMiles,
}

impl DistanceUnit {
    /// Scale factor from statute miles.
    fn scale(self) -> f64 {
        match self {
            Self::Miles => 1.0,
            Self::Kilometers => 1.609344,
            Self::NauticalMiles => 0.8684,
        }
    }
}

/// Split a `"lat,lon"` string on its comma and parse both halves as floats.
///
/// Halves are trimmed, so `"12.9, 77.6"` parses; anything without exactly a
/// leading number on each side of one comma does not.
pub(crate) fn parse_coordinates(text: &str) -> Option<(f64, f64)> {
    let (lat, lon) = text.split_once(',')?;
    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
}

/// Great-circle distance between two points via the spherical law of cosines.
///
/// One degree of arc is 60 minutes of 1.1515 statute miles each; the unit
/// scales from there.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: DistanceUnit) -> f64 {
    let rad_lat1 = lat1.to_radians();
    let rad_lat2 = lat2.to_radians();
    let rad_theta = (lon1 - lon2).to_radians();

    let cos_arc =
        rad_lat1.sin() * rad_lat2.sin() + rad_lat1.cos() * rad_lat2.cos() * rad_theta.cos();
    // Rounding can push the cosine just past 1.0 for coincident points, where
    // acos returns NaN.
    let arc = cos_arc.clamp(-1.0, 1.0).acos();

    arc.to_degrees() * 60.0 * 1.1515 * unit.scale()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn self_distance_is_zero() {
        for (lat, lon) in [(0.0, 0.0), (12.9716, 77.5946), (-33.8688, 151.2093)] {
            let d = distance(lat, lon, lat, lon, DistanceUnit::Kilometers);
            assert!(d.abs() < EPSILON, "self-distance at ({lat},{lon}) was {d}");
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            ((12.9716, 77.5946), (13.0827, 80.2707)),
            ((40.7128, -74.0060), (51.5074, -0.1278)),
            ((-1.2921, 36.8219), (35.6762, 139.6503)),
        ];
        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let forward = distance(lat1, lon1, lat2, lon2, DistanceUnit::Kilometers);
            let backward = distance(lat2, lon2, lat1, lon1, DistanceUnit::Kilometers);
            assert!((forward - backward).abs() < EPSILON);
        }
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let d = distance(0.0, 0.0, 0.0, 1.0, DistanceUnit::Kilometers);
        assert!((d - 111.19).abs() < 0.15, "expected ~111.19 km, got {d}");
    }

    #[test]
    fn units_scale_from_statute_miles() {
        let miles = distance(0.0, 0.0, 0.0, 1.0, DistanceUnit::Miles);
        let km = distance(0.0, 0.0, 0.0, 1.0, DistanceUnit::Kilometers);
        let nautical = distance(0.0, 0.0, 0.0, 1.0, DistanceUnit::NauticalMiles);

        assert!((km / miles - 1.609344).abs() < EPSILON);
        assert!((nautical / miles - 0.8684).abs() < EPSILON);
    }

    #[test]
    fn parses_well_formed_coordinate_strings() {
        assert_eq!(parse_coordinates("12.9,77.6"), Some((12.9, 77.6)));
        assert_eq!(parse_coordinates("12.9, 77.6"), Some((12.9, 77.6)));
        assert_eq!(parse_coordinates("-33.8688,151.2093"), Some((-33.8688, 151.2093)));
    }

    #[test]
    fn rejects_malformed_coordinate_strings() {
        for text in ["abc", "12.9", "12.9,", ",77.6", "12.9,east", "12.9;77.6", ""] {
            assert_eq!(parse_coordinates(text), None, "{text:?} should not parse");
        }
    }
}
