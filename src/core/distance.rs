use crate::models::{Coordinates, Venue};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Degree-space bounding box used as a cheap pre-screen before the exact
/// haversine test. 1° latitude ≈ 111km, 1° longitude ≈ 111km * cos(latitude).
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

pub fn calculate_bounding_box(lat: f64, lon: f64, radius_km: f64) -> BoundingBox {
    let lat_delta = radius_km / 111.0;
    let lon_delta = radius_km / (111.0 * lat.to_radians().cos().abs());

    BoundingBox {
        min_lat: lat - lat_delta,
        max_lat: lat + lat_delta,
        min_lon: lon - lon_delta,
        max_lon: lon + lon_delta,
    }
}

#[inline]
pub fn is_within_bounding_box(lat: f64, lon: f64, bbox: &BoundingBox) -> bool {
    lat >= bbox.min_lat && lat <= bbox.max_lat && lon >= bbox.min_lon && lon <= bbox.max_lon
}

/// Round a distance to 2 decimals for display.
#[inline]
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}

/// Distance from `origin` to the venue, if the venue has coordinates.
#[inline]
pub fn venue_distance_km(origin: Coordinates, venue: &Venue) -> Option<f64> {
    venue
        .coordinates()
        .map(|c| haversine_distance(origin.lat, origin.lng, c.lat, c.lng))
}

/// Radius filter over candidate venues.
///
/// A venue without coordinates is retained: absent geo data must not
/// silently drop a venue that has no other disqualifying signal. Each kept
/// venue is paired with its distance so the pipeline never computes it twice.
pub fn filter_by_radius(
    venues: Vec<Venue>,
    origin: Coordinates,
    radius_km: f64,
) -> Vec<(Venue, Option<f64>)> {
    let bbox = calculate_bounding_box(origin.lat, origin.lng, radius_km);

    venues
        .into_iter()
        .filter_map(|venue| match venue.coordinates() {
            None => Some((venue, None)),
            Some(c) => {
                // The bbox rejects most far-away venues without trig; the
                // haversine check decides the rest exactly.
                if !is_within_bounding_box(c.lat, c.lng, &bbox) {
                    return None;
                }
                let distance = haversine_distance(origin.lat, origin.lng, c.lat, c.lng);
                (distance <= radius_km).then_some((venue, Some(distance)))
            }
        })
        .collect()
}
