// src/indexing/from_seg.rs

use crate::coords::face_ab::{_cell_center, _cell_corners};
use crate::math::vec3d::_vec3d_to_geo;
use crate::seg_index::_seg_to_face_cell;
use crate::types::{GeoSegError, LatLng, Resolution, SegIndex, Vec3d};

/// Finds the center `LatLng` point of the given segment.
///
/// The center is the centroid of the segment's three corners, pushed out onto
/// the unit sphere.
///
/// # Arguments
/// * `n` - Subdivision factor the identifier was produced with.
/// * `seg` - The segment.
///
/// # Returns
/// `Ok(LatLng)` with latitude in `[-PI/2, PI/2]` and longitude in `[-PI, PI)`.
pub fn seg_to_lat_lng(n: u32, seg: SegIndex) -> Result<LatLng, GeoSegError> {
  let res = Resolution::new(n)?;
  let cell = _seg_to_face_cell(n, seg)?;
  let center = _cell_center(&cell, res)?;
  Ok(_vec3d_to_geo(&center))
}

/// The three corners of the given segment.
///
/// Corners lie on the flat icosahedron face unless `normalize` is set, in which
/// case they are projected onto the unit sphere. Order is the segment's own
/// winding: bottom cells start at their AB origin, top cells at the opposite corner.
pub fn seg_to_corners(n: u32, seg: SegIndex, normalize: bool) -> Result<[Vec3d; 3], GeoSegError> {
  let res = Resolution::new(n)?;
  let cell = _seg_to_face_cell(n, seg)?;
  let mut corners = _cell_corners(&cell, res)?;
  if normalize {
    for c in &mut corners {
      *c = c.normalized().ok_or(GeoSegError::TopologyInvariant)?;
    }
  }
  Ok(corners)
}

/// Finds the boundary of the given segment as three `LatLng` vertices.
pub fn seg_to_boundary(n: u32, seg: SegIndex) -> Result<[LatLng; 3], GeoSegError> {
  let corners = seg_to_corners(n, seg, false)?;
  Ok(corners.map(|c| _vec3d_to_geo(&c)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::indexing::to_seg::lat_lng_to_seg;
  use crate::latlng::great_circle_distance_rads;

  #[test]
  fn test_seg_to_lat_lng_invalid_input() {
    assert_eq!(seg_to_lat_lng(0, SegIndex(0)), Err(GeoSegError::ResDomain));
    assert_eq!(seg_to_lat_lng(2, SegIndex(80)), Err(GeoSegError::SegInvalid));
    assert_eq!(seg_to_corners(2, SegIndex(80), true), Err(GeoSegError::SegInvalid));
    assert_eq!(seg_to_boundary(2, SegIndex(80)), Err(GeoSegError::SegInvalid));
  }

  #[test]
  fn test_seg_to_lat_lng_known_values() {
    let c = seg_to_lat_lng(1, SegIndex(0)).unwrap();
    assert!(c.lat.abs() < 1e-12);
    assert!((c.lng + 1.205_932_498_681_413_5).abs() < 1e-12);

    let c = seg_to_lat_lng(4, SegIndex(77)).unwrap();
    assert!((c.lat + 1.212_053_626_522_994_4).abs() < 1e-12);
    assert!((c.lng + 2.646_966_913_062_197).abs() < 1e-12);
  }

  #[test]
  fn test_center_round_trip() {
    for n in [1u32, 2, 3, 5, 16] {
      for id in 0..(20 * n * n) {
        let seg = SegIndex(id);
        let center = seg_to_lat_lng(n, seg).unwrap();
        assert_eq!(lat_lng_to_seg(&center, n), Ok(seg), "n={} seg={}", n, id);
      }
    }
  }

  #[test]
  fn test_corners_normalized() {
    let corners = seg_to_corners(6, SegIndex(123), true).unwrap();
    for c in &corners {
      assert!((c.mag() - 1.0).abs() < 1e-12);
    }
    let flat = seg_to_corners(6, SegIndex(123), false).unwrap();
    for c in &flat {
      assert!(c.mag() <= 1.0 + 1e-12);
    }
  }

  #[test]
  fn test_boundary_surrounds_center() {
    let n = 8;
    let seg = SegIndex(1000);
    let center = seg_to_lat_lng(n, seg).unwrap();
    let boundary = seg_to_boundary(n, seg).unwrap();
    let d: Vec<f64> = boundary.iter().map(|v| great_circle_distance_rads(&center, v)).collect();
    // Segments are close to equilateral, so the corners sit at similar distances.
    let max = d.iter().copied().fold(f64::MIN, f64::max);
    let min = d.iter().copied().fold(f64::MAX, f64::min);
    assert!(min > 0.0);
    assert!(max / min < 1.5, "corner distances {:?}", d);
  }
}
