// src/math/intersect.rs

use crate::constants::INTERSECT_EPSILON;
use crate::types::Vec3d;

/// Hit of a ray segment against a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RayHit {
  /// Fraction of the ray direction travelled to the hit, in `[0, 1]`.
  pub(crate) t: f64,
  /// Barycentric weight of `vert1`.
  pub(crate) u: f64,
  /// Barycentric weight of `vert2`.
  pub(crate) v: f64,
}

/// Intersects the segment `origin .. origin + direction` with triangle `(vert0, vert1, vert2)`
/// (Möller–Trumbore).
///
/// Hits behind the origin or beyond `origin + direction` are misses, as are rays
/// (nearly) parallel to the triangle plane. Both windings are accepted.
#[must_use]
pub(crate) fn _ray_triangle(origin: &Vec3d, direction: &Vec3d, vert0: &Vec3d, vert1: &Vec3d, vert2: &Vec3d) -> Option<RayHit> {
  let edge1 = *vert1 - *vert0;
  let edge2 = *vert2 - *vert0;

  let p_vec = direction.cross(&edge2);
  let det = edge1.dot(&p_vec);
  if det.abs() < INTERSECT_EPSILON {
    return None;
  }
  let inv_det = 1.0 / det;

  let t_vec = *origin - *vert0;
  let u = t_vec.dot(&p_vec) * inv_det;
  if !(0.0..=1.0).contains(&u) {
    return None;
  }

  let q_vec = t_vec.cross(&edge1);
  let v = direction.dot(&q_vec) * inv_det;
  if v < 0.0 || u + v > 1.0 {
    return None;
  }

  let t = edge2.dot(&q_vec) * inv_det;
  if !(0.0..=1.0).contains(&t) {
    return None;
  }

  Some(RayHit { t, u, v })
}

/// Point reached after travelling fraction `t` along the ray.
#[inline]
#[must_use]
pub(crate) fn _ray_point(origin: &Vec3d, direction: &Vec3d, t: f64) -> Vec3d {
  *origin + *direction * t
}

#[cfg(test)]
mod tests {
  use super::*;

  fn unit_triangle() -> (Vec3d, Vec3d, Vec3d) {
    (
      Vec3d::new(0.0, 0.0, 1.0),
      Vec3d::new(1.0, 0.0, 1.0),
      Vec3d::new(0.0, 1.0, 1.0),
    )
  }

  #[test]
  fn test_ray_hits_triangle() {
    let (v0, v1, v2) = unit_triangle();
    let origin = Vec3d::new(0.25, 0.25, 2.0);
    let direction = Vec3d::new(0.0, 0.0, -2.0);
    let hit = _ray_triangle(&origin, &direction, &v0, &v1, &v2).expect("ray should hit");
    assert!((hit.t - 0.5).abs() < 1e-12);
    assert!((hit.u - 0.25).abs() < 1e-12);
    assert!((hit.v - 0.25).abs() < 1e-12);
    let p = _ray_point(&origin, &direction, hit.t);
    assert!((p.z - 1.0).abs() < 1e-12);
  }

  #[test]
  fn test_ray_hits_either_winding() {
    let (v0, v1, v2) = unit_triangle();
    let origin = Vec3d::new(0.1, 0.2, 2.0);
    let direction = Vec3d::new(0.0, 0.0, -2.0);
    assert!(_ray_triangle(&origin, &direction, &v0, &v2, &v1).is_some());
  }

  #[test]
  fn test_ray_misses() {
    let (v0, v1, v2) = unit_triangle();
    let down = Vec3d::new(0.0, 0.0, -2.0);
    // Outside the triangle.
    assert!(_ray_triangle(&Vec3d::new(0.8, 0.8, 2.0), &down, &v0, &v1, &v2).is_none());
    // Triangle lies behind the origin.
    assert!(_ray_triangle(&Vec3d::new(0.2, 0.2, 0.5), &down, &v0, &v1, &v2).is_none());
    // Segment stops short of the triangle.
    let short = Vec3d::new(0.0, 0.0, -0.5);
    assert!(_ray_triangle(&Vec3d::new(0.2, 0.2, 2.0), &short, &v0, &v1, &v2).is_none());
    // Parallel to the plane.
    let sideways = Vec3d::new(1.0, 0.0, 0.0);
    assert!(_ray_triangle(&Vec3d::new(-1.0, 0.2, 1.0), &sideways, &v0, &v1, &v2).is_none());
  }
}
