// src/latlng.rs

use crate::constants::{EPSILON_RAD, M_180_PI, M_PI_180, M_PI_2};
use crate::types::LatLng;
use crate::GeoSegError;

/// Wraps `value` into the half-open range `[start, end)`.
///
/// Values already inside the range are returned unchanged; values outside are
/// shifted by whole multiples of `end - start`.
#[inline]
#[must_use]
pub(crate) fn normalize_range(value: f64, start: f64, end: f64) -> f64 {
  let width = end - start;
  let offset = value - start;
  offset - (offset / width).floor() * width + start
}

/// Checks that a lat/lng pair can be indexed.
///
/// Latitude must lie within `[-PI/2, PI/2]` (give or take `EPSILON_RAD`); any finite
/// longitude is accepted, since the conversion to a direction wraps it.
///
/// # Errors
/// `GeoSegError::LatLngDomain` for non-finite components or an out-of-range latitude.
#[inline]
pub(crate) fn _validate_lat_lng(geo: &LatLng) -> Result<(), GeoSegError> {
  if !geo.lat.is_finite() || !geo.lng.is_finite() || geo.lat.abs() > M_PI_2 + EPSILON_RAD {
    return Err(GeoSegError::LatLngDomain);
  }
  Ok(())
}

/// Converts an angle in degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts an angle in radians to degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

/// The great circle distance in radians between two spherical coordinates.
///
/// Uses the haversine formula.
#[must_use]
pub fn great_circle_distance_rads(a: &LatLng, b: &LatLng) -> f64 {
  let sin_lat = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng = ((b.lng - a.lng) * 0.5).sin();
  let h = sin_lat * sin_lat + a.lat.cos() * b.lat.cos() * sin_lng * sin_lng;
  2.0 * h.sqrt().min(1.0).asin()
}
