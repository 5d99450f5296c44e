//! Travel time estimation from coordinates.
//!
//! Great-circle distance (haversine, mean Earth radius) divided by a
//! constant average speed. A leg with an unknown endpoint costs nothing.
//!
//! # Reference
//! Sinnott (1984), "Virtues of the Haversine", Sky and Telescope 68(2)

use crate::models::Coordinates;

/// Mean Earth radius (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default average travel speed (km/h).
pub const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Great-circle distance between two points (km).
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Travel time between two optional locations (minutes).
///
/// Returns 0 when either endpoint is unknown or the speed is not positive.
///
/// ```
/// use u_field_schedule::geo::travel_minutes;
/// use u_field_schedule::models::Coordinates;
///
/// let a = Coordinates::new(51.5007, -0.1246);
/// assert_eq!(travel_minutes(Some(a), None, 40.0), 0.0);
/// assert_eq!(travel_minutes(Some(a), Some(a), 40.0), 0.0);
/// ```
pub fn travel_minutes(from: Option<Coordinates>, to: Option<Coordinates>, speed_kmh: f64) -> f64 {
    match (from, to) {
        (Some(from), Some(to)) if speed_kmh > 0.0 => haversine_km(from, to) / speed_kmh * 60.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_one_degree_latitude() {
        // One degree of latitude ≈ 111.19 km on a 6371 km sphere
        let d = haversine_km(Coordinates::new(10.0, 20.0), Coordinates::new(11.0, 20.0));
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn test_haversine_known_pair() {
        // London → Paris ≈ 343.5 km
        let london = Coordinates::new(51.5074, -0.1278);
        let paris = Coordinates::new(48.8566, 2.3522);
        let d = haversine_km(london, paris);
        assert!((d - 343.5).abs() < 1.0, "got {d}");
        assert!((haversine_km(paris, london) - d).abs() < 1e-9); // symmetric
    }

    #[test]
    fn test_travel_minutes_speed() {
        // 111.195 km at 40 km/h → 166.79 minutes
        let a = Coordinates::new(10.0, 20.0);
        let b = Coordinates::new(11.0, 20.0);
        let t = travel_minutes(Some(a), Some(b), DEFAULT_SPEED_KMH);
        assert!((t - 166.79).abs() < 0.05, "got {t}");

        let faster = travel_minutes(Some(a), Some(b), 80.0);
        assert!((faster - t / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_travel_minutes_missing_endpoint() {
        let a = Coordinates::new(10.0, 20.0);
        assert_eq!(travel_minutes(None, Some(a), 40.0), 0.0);
        assert_eq!(travel_minutes(Some(a), None, 40.0), 0.0);
        assert_eq!(travel_minutes(None, None, 40.0), 0.0);
    }

    #[test]
    fn test_travel_minutes_non_positive_speed() {
        let a = Coordinates::new(10.0, 20.0);
        let b = Coordinates::new(11.0, 20.0);
        assert_eq!(travel_minutes(Some(a), Some(b), 0.0), 0.0);
    }
}
