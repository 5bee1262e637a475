// src/math/vec3d.rs

use crate::types::{LatLng, Vec3d};
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Vec3d {
  /// Creates a new vector.
  #[inline]
  #[must_use]
  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }

  /// Dot product.
  #[inline]
  #[must_use]
  pub fn dot(&self, other: &Vec3d) -> f64 {
    self.x * other.x + self.y * other.y + self.z * other.z
  }

  /// Cross product.
  #[inline]
  #[must_use]
  pub fn cross(&self, other: &Vec3d) -> Vec3d {
    Vec3d {
      x: self.y * other.z - self.z * other.y,
      y: self.z * other.x - self.x * other.z,
      z: self.x * other.y - self.y * other.x,
    }
  }

  /// Squared Euclidean length.
  #[inline]
  #[must_use]
  pub fn mag_sq(&self) -> f64 {
    self.dot(self)
  }

  /// Euclidean length.
  #[inline]
  #[must_use]
  pub fn mag(&self) -> f64 {
    self.mag_sq().sqrt()
  }

  /// Unit vector in the same direction. Returns `None` for a zero or non-finite vector.
  #[must_use]
  pub fn normalized(&self) -> Option<Vec3d> {
    let len = self.mag();
    if len == 0.0 || !len.is_finite() {
      return None;
    }
    Some(*self / len)
  }

  /// Whether all three components are finite.
  #[inline]
  #[must_use]
  pub fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
  }
}

impl Add for Vec3d {
  type Output = Vec3d;

  #[inline]
  fn add(self, rhs: Vec3d) -> Vec3d {
    Vec3d::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
  }
}

impl Sub for Vec3d {
  type Output = Vec3d;

  #[inline]
  fn sub(self, rhs: Vec3d) -> Vec3d {
    Vec3d::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
  }
}

impl Mul<f64> for Vec3d {
  type Output = Vec3d;

  #[inline]
  fn mul(self, rhs: f64) -> Vec3d {
    Vec3d::new(self.x * rhs, self.y * rhs, self.z * rhs)
  }
}

impl Div<f64> for Vec3d {
  type Output = Vec3d;

  #[inline]
  fn div(self, rhs: f64) -> Vec3d {
    Vec3d::new(self.x / rhs, self.y / rhs, self.z / rhs)
  }
}

impl Neg for Vec3d {
  type Output = Vec3d;

  #[inline]
  fn neg(self) -> Vec3d {
    Vec3d::new(-self.x, -self.y, -self.z)
  }
}

/// Calculate the 3D Cartesian coordinate on a unit sphere from latitude and longitude.
///
/// The Y axis points at the north pole; longitude is measured from +X toward +Z.
#[inline]
#[must_use]
pub(crate) fn _geo_to_vec3d(geo: &LatLng) -> Vec3d {
  let r = geo.lat.cos();
  Vec3d {
    x: geo.lng.cos() * r,
    y: geo.lat.sin(),
    z: geo.lng.sin() * r,
  }
}

/// Latitude and longitude of the direction `v`, which need not be normalized.
///
/// Latitude lies in `[-PI/2, PI/2]`, longitude in `[-PI, PI)`.
#[inline]
#[must_use]
pub(crate) fn _vec3d_to_geo(v: &Vec3d) -> LatLng {
  let horizontal = v.x.hypot(v.z);
  LatLng {
    lat: v.y.atan2(horizontal),
    lng: crate::latlng::normalize_range(v.z.atan2(v.x), -crate::constants::M_PI, crate::constants::M_PI),
  }
}
