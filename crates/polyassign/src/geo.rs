//! Great-circle distance and planar centroids on latitude/longitude.
//!
//! Centroids are plain arithmetic means of degrees, not geodesic centres.

use crate::types::LatLon;

/// Mean Earth radius used by the haversine model.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres on a sphere of radius `EARTH_RADIUS_KM`.
///
/// Out-of-range coordinates are not rejected; they flow through the trigonometry.
pub fn haversine_km(a: LatLon, b: LatLon) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lon - a.lon).to_radians();
    let s_phi = (d_phi / 2.0).sin();
    let s_lambda = (d_lambda / 2.0).sin();
    let h = s_phi * s_phi + phi1.cos() * phi2.cos() * s_lambda * s_lambda;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Arithmetic mean of latitudes and longitudes. `None` for an empty input.
pub fn planar_centroid<I>(points: I) -> Option<LatLon>
where
    I: IntoIterator<Item = LatLon>,
{
    let mut n = 0usize;
    let (mut lat, mut lon) = (0.0, 0.0);
    for p in points {
        lat += p.lat;
        lon += p.lon;
        n += 1;
    }
    if n == 0 {
        return None;
    }
    let k = n as f64;
    Some(LatLon::new(lat / k, lon / k))
}
