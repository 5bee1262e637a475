// src/coords/face_ab.rs

use crate::constants::NUM_ICOSA_FACES;
use crate::coords::topology::{_face_vertices, topology};
use crate::math::intersect::{_ray_point, _ray_triangle};
use crate::types::{CoordAB, FaceCell, GeoSegError, Resolution, Vec3d};

/// Finds the face whose triangle a direction passes through.
///
/// The direction is normalized, then cast as a ray from twice its length back
/// toward the origin against each face triangle (grown slightly so rays through
/// shared edges and vertices still hit). The first face hit wins.
///
/// # Returns
/// The face number and the hit point on that face's (inflated) triangle.
///
/// # Errors
/// * `GeoSegError::LatLngDomain` for a zero-length or non-finite direction.
/// * `GeoSegError::NoFaceIntersection` if no triangle is hit.
pub fn locate(direction: &Vec3d) -> Result<(i32, Vec3d), GeoSegError> {
  let unit = direction.normalized().ok_or(GeoSegError::LatLngDomain)?;
  let topo = topology()?;

  let origin = unit * 2.0;
  let ray = unit * -2.0;
  for face in 0..NUM_ICOSA_FACES as usize {
    let [v0, v1, v2] = topo.inflated_triangle(face);
    if let Some(hit) = _ray_triangle(&origin, &ray, v0, v1, v2) {
      tracing::trace!(face, u = hit.u, v = hit.v, "direction located");
      return Ok((face as i32, _ray_point(&origin, &ray, hit.t)));
    }
  }

  tracing::error!(x = unit.x, y = unit.y, z = unit.z, "direction missed every face");
  Err(GeoSegError::NoFaceIntersection)
}

/// Affine coordinates `(ap, bp)` of `point` in the basis `(v1 - v0, v2 - v0)` of `face`.
///
/// The plain projections onto each edge are corrected for the 60 degree skew
/// between the two axes, so `point = v0 + ap * e1 + bp * e2` for points in the
/// face plane.
fn _face_affine(face: i32, point: &Vec3d) -> Result<(f64, f64), GeoSegError> {
  let [v0, v1, v2] = _face_vertices(face)?;
  let p = *point - v0;
  let e1 = v1 - v0;
  let e2 = v2 - v0;

  let a = p.dot(&e1) / e1.mag_sq();
  let b = p.dot(&e2) / e2.mag_sq();
  let tan_delta = e1.cross(&e2).mag() / e1.dot(&e2);

  let ap = a - (p - e1 * a).mag() / (tan_delta * e1.mag());
  let bp = b - (p - e2 * b).mag() / (tan_delta * e2.mag());
  Ok((ap, bp))
}

/// Maps a point on `face` to the segment that contains it at subdivision `n`.
///
/// Coordinates are clamped into the face, so points that land a hair outside
/// (inflated triangles, rounding on the outer diagonal) still map to a valid cell.
///
/// # Errors
/// `GeoSegError::ResDomain`, `GeoSegError::FaceDomain`, or `GeoSegError::LatLngDomain`
/// for a non-finite point.
pub fn project_to_cell(face: i32, point: &Vec3d, n: u32) -> Result<FaceCell, GeoSegError> {
  let res = Resolution::new(n)?;
  if !point.is_finite() {
    return Err(GeoSegError::LatLngDomain);
  }
  let (ap, bp) = _face_affine(face, point)?;

  let scale = f64::from(res.get());
  let x = ap * scale;
  let y = bp * scale;

  let max = i64::from(res.get()) - 1;
  let mut a = (x.floor() as i64).clamp(0, max);
  let mut b = (y.floor() as i64).clamp(0, max);
  while a + b > max {
    if a > b {
      a -= 1;
    } else {
      b -= 1;
    }
  }
  let frac_a = (x - a as f64).clamp(0.0, 1.0);
  let frac_b = (y - b as f64).clamp(0.0, 1.0);
  // No upper triangle on the outer diagonal.
  let top = frac_a + frac_b > 1.0 && a + b < max;

  Ok(FaceCell {
    face,
    coord: CoordAB::new(a as i32, b as i32),
    top,
  })
}

/// The three corners of a segment, in face space (on the flat face, not the sphere).
///
/// Bottom cells list `[corner, corner + ea, corner + eb]`, top cells
/// `[corner + ea + eb, corner + ea, corner + eb]`, where `corner` is the cell's AB
/// origin and `ea`, `eb` are the face edges divided by `n`.
pub(crate) fn _cell_corners(cell: &FaceCell, n: Resolution) -> Result<[Vec3d; 3], GeoSegError> {
  let [v0, v1, v2] = _face_vertices(cell.face)?;
  let scale = f64::from(n.get());
  let ea = (v1 - v0) / scale;
  let eb = (v2 - v0) / scale;
  let corner = v0 + ea * f64::from(cell.coord.a) + eb * f64::from(cell.coord.b);

  if cell.top {
    Ok([corner + ea + eb, corner + ea, corner + eb])
  } else {
    Ok([corner, corner + ea, corner + eb])
  }
}

/// Centroid of a segment's corners, pushed out onto the unit sphere.
pub(crate) fn _cell_center(cell: &FaceCell, n: Resolution) -> Result<Vec3d, GeoSegError> {
  let [c0, c1, c2] = _cell_corners(cell, n)?;
  ((c0 + c1 + c2) / 3.0).normalized().ok_or(GeoSegError::TopologyInvariant)
}
