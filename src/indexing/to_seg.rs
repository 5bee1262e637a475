// src/indexing/to_seg.rs

use crate::coords::face_ab::{locate, project_to_cell};
use crate::latlng::_validate_lat_lng;
use crate::math::vec3d::_geo_to_vec3d;
use crate::seg_index::_face_cell_to_seg;
use crate::types::{GeoSegError, LatLng, Resolution, SegIndex, Vec3d};

/// Finds the segment containing the given `LatLng` point at subdivision `n`.
///
/// # Arguments
/// * `geo` - The latitude/longitude point (in radians).
/// * `n` - Subdivision factor, `1..=MAX_RESOLUTION`.
///
/// # Returns
/// `Ok(SegIndex)` on success, or a `GeoSegError` if the input is invalid.
pub fn lat_lng_to_seg(geo: &LatLng, n: u32) -> Result<SegIndex, GeoSegError> {
  Resolution::new(n)?;
  // Longitude may lie outside [-PI, PI]; the direction wraps it.
  _validate_lat_lng(geo)?;
  vec3d_to_seg(&_geo_to_vec3d(geo), n)
}

/// Finds the segment a 3D direction points into at subdivision `n`.
///
/// `direction` need not be normalized, but must be finite and non-zero.
pub fn vec3d_to_seg(direction: &Vec3d, n: u32) -> Result<SegIndex, GeoSegError> {
  Resolution::new(n)?;
  let (face, hit) = locate(direction)?;
  let cell = project_to_cell(face, &hit, n)?;
  _face_cell_to_seg(n, &cell)
}
