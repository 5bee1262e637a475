//! Core geodesic segment data structures.

use crate::constants::{MAX_RESOLUTION, NUM_ICOSA_FACES};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Dense global identifier of a segment (cell): `face * n * n + local_index`.
///
/// An identifier is only meaningful together with the subdivision factor `n`
/// it was produced with.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegIndex(pub u32);

impl From<SegIndex> for u32 {
  fn from(value: SegIndex) -> Self {
    value.0
  }
}

impl std::fmt::Display for SegIndex {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Latitude/longitude coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

/// 3D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

/// Integer AB coordinates of a unit parallelogram within a face's oblique grid.
/// The A axis runs from face vertex 0 to vertex 1, the B axis from vertex 0 to vertex 2.
///
/// Values may be negative or exceed the face while a neighbor is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordAB {
  /// A component.
  pub a: i32,
  /// B component.
  pub b: i32,
}

impl CoordAB {
  /// Creates a new coordinate pair.
  #[inline]
  #[must_use]
  pub const fn new(a: i32, b: i32) -> Self {
    Self { a, b }
  }
}

/// Face number, AB coordinates and top flag of one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceCell {
  /// Icosahedron face number (0-19).
  pub face: i32,
  /// AB coordinates on that face.
  pub coord: CoordAB,
  /// Whether this is the upper of the two triangles sharing the unit parallelogram.
  pub top: bool,
}

/// A validated subdivision factor `n`.
///
/// Every face is split into `n * n` segments, so the whole sphere holds `20 * n * n`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "u32", into = "u32"))]
pub struct Resolution(u32);

impl Resolution {
  /// Validates `n` against `1 <= n <= MAX_RESOLUTION`.
  ///
  /// # Errors
  /// `GeoSegError::ResDomain` when `n` is zero or so large that identifiers overflow `u32`.
  pub const fn new(n: u32) -> Result<Self, GeoSegError> {
    if n == 0 || n > MAX_RESOLUTION {
      return Err(GeoSegError::ResDomain);
    }
    Ok(Self(n))
  }

  /// The subdivision factor.
  #[inline]
  #[must_use]
  pub const fn get(self) -> u32 {
    self.0
  }

  /// Number of segments per face, `n * n`.
  #[inline]
  #[must_use]
  pub const fn cells_per_face(self) -> u32 {
    self.0 * self.0
  }

  /// Number of segments on the whole sphere, `20 * n * n`.
  #[inline]
  #[must_use]
  pub const fn cell_count(self) -> u64 {
    NUM_ICOSA_FACES as u64 * self.cells_per_face() as u64
  }
}

impl TryFrom<u32> for Resolution {
  type Error = GeoSegError;

  fn try_from(value: u32) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl From<Resolution> for u32 {
  fn from(value: Resolution) -> Self {
    value.0
  }
}

/// Errors produced by the segment index.
///
/// Variants up to `InsideNeighborsDomain` are range errors: the caller passed
/// something outside the domain of the operation. The remaining variants are
/// logic errors: an internal invariant broke, which points at a defect in the
/// topology tables or offset tables rather than at the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum GeoSegError {
  /// Subdivision factor `n` was zero or above `MAX_RESOLUTION`.
  #[error("subdivision factor is out of range")]
  ResDomain = 1,
  /// Latitude, longitude or direction argument was not usable.
  #[error("latitude, longitude or direction is out of range")]
  LatLngDomain = 2,
  /// AB coordinates or top flag do not address a segment of the face.
  #[error("AB coordinates are out of range")]
  CoordDomain = 3,
  /// Face number was outside `[0, 20)`.
  #[error("face number is out of range")]
  FaceDomain = 4,
  /// Local index was outside `[0, n * n)`.
  #[error("local segment index is out of range")]
  LocalIndexDomain = 5,
  /// Global identifier was outside `[0, 20 * n * n)`.
  #[error("segment index is not valid for this subdivision")]
  SegInvalid = 6,
  /// In-face neighbor listing needs `n >= 4`.
  #[error("in-face neighbors need a subdivision factor of at least 4")]
  InsideNeighborsDomain = 7,
  /// A normalized direction missed all 20 face triangles.
  #[error("no face intersected the direction")]
  NoFaceIntersection = 100,
  /// The fixed icosahedron tables violated an adjacency invariant.
  #[error("icosahedron topology invariant violated")]
  TopologyInvariant = 101,
  /// A two-edge crossing landed on a face other than the expected corner face.
  #[error("corner crossing did not land on the expected face")]
  CornerCrossingMismatch = 102,
  /// A 1-ring neighbor was classified into a region it can never occupy.
  #[error("neighbor coordinates fell into an unexpected region")]
  UnexpectedRegion = 103,
}

impl GeoSegError {
  /// Whether the error reports bad input that the caller can fix.
  #[inline]
  #[must_use]
  pub const fn is_range_error(self) -> bool {
    (self as u32) < 100
  }

  /// Whether the error reports a broken internal invariant.
  #[inline]
  #[must_use]
  pub const fn is_logic_error(self) -> bool {
    !self.is_range_error()
  }
}

/// Handedness of a face's AB axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum AxisOrientation {
  /// Counter-clockwise.
  #[default]
  Ccw = 0,
  /// Clockwise.
  Cw = 1,
}

impl AxisOrientation {
  /// The opposite handedness.
  #[inline]
  #[must_use]
  pub const fn invert(self) -> Self {
    match self {
      AxisOrientation::Ccw => AxisOrientation::Cw,
      AxisOrientation::Cw => AxisOrientation::Ccw,
    }
  }
}

/// One of the three edges of a face, named by the face vertex it lies opposite to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum EdgeRole {
  /// Edge opposite vertex 0 (the origin); the outer diagonal.
  O = 0,
  /// Edge opposite vertex 1; lies along the B axis.
  A = 1,
  /// Edge opposite vertex 2; lies along the A axis.
  B = 2,
}

impl EdgeRole {
  /// All edges in table order.
  pub const ALL: [EdgeRole; 3] = [EdgeRole::O, EdgeRole::A, EdgeRole::B];

  /// Index of the opposite vertex, which is also the slot in a face's neighbor table.
  #[inline]
  #[must_use]
  pub const fn index(self) -> usize {
    self as usize
  }
}

impl TryFrom<u8> for EdgeRole {
  type Error = GeoSegError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(EdgeRole::O),
      1 => Ok(EdgeRole::A),
      2 => Ok(EdgeRole::B),
      _ => Err(GeoSegError::CoordDomain),
    }
  }
}

/// Where the neighbor face puts its AB origin relative to the shared edge.
///
/// A plain letter names the vertex of the crossing-from face that is also the
/// neighbor's origin. A primed letter means the neighbor's origin is its own
/// apex, the vertex it does not share, lying across the edge of that letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum OriginMap {
  /// Neighbor origin is this face's vertex 0.
  O = 0,
  /// Neighbor origin is this face's vertex 1.
  A = 1,
  /// Neighbor origin is this face's vertex 2.
  B = 2,
  /// Neighbor origin is its apex across edge O.
  Op = 3,
  /// Neighbor origin is its apex across edge A.
  Ap = 4,
  /// Neighbor origin is its apex across edge B.
  Bp = 5,
}

impl OriginMap {
  /// The plain origin naming vertex `index` of the crossing-from face.
  #[inline]
  #[must_use]
  pub(crate) const fn shared(index: usize) -> Self {
    match index {
      0 => OriginMap::O,
      1 => OriginMap::A,
      _ => OriginMap::B,
    }
  }

  /// The primed origin for an apex lying across `edge`.
  #[inline]
  #[must_use]
  pub(crate) const fn apex(edge: EdgeRole) -> Self {
    match edge {
      EdgeRole::O => OriginMap::Op,
      EdgeRole::A => OriginMap::Ap,
      EdgeRole::B => OriginMap::Bp,
    }
  }
}

/// Position of AB coordinates relative to one face's `n x n` parallelogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum ParallelogramGroup {
  /// Lower triangle of the parallelogram: the face itself.
  Bottom = 0,
  /// Upper triangle of the parallelogram: belongs to the face across edge O.
  Top = 1,
  /// Outside the parallelogram.
  Outside = 2,
}

/// Which face, relative to the current one, AB coordinates fall on.
///
/// Two-letter variants are corner crossings: first over the edge of the first
/// letter, then over the edge of the intermediate face that leads away from the
/// current face's vertex named by the second letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum NeighborRegion {
  /// Inside the current face.
  Inside = 0,
  /// Across edge O.
  O = 1,
  /// Across edge A.
  A = 2,
  /// Across edge B.
  B = 3,
  /// Across edge O, then toward A.
  Oa = 4,
  /// Across edge O, then toward B.
  Ob = 5,
  /// Across edge A, then toward O.
  Ao = 6,
  /// Across edge A, then toward B.
  Ab = 7,
  /// Across edge B, then toward O.
  Bo = 8,
  /// Across edge B, then toward A.
  Ba = 9,
  /// Not reachable within one ring of the face.
  Outside = 10,
}

impl NeighborRegion {
  /// The edges crossed to reach this region, in order.
  #[must_use]
  pub const fn edges(self) -> Option<(EdgeRole, Option<EdgeRole>)> {
    match self {
      NeighborRegion::Inside | NeighborRegion::Outside => None,
      NeighborRegion::O => Some((EdgeRole::O, None)),
      NeighborRegion::A => Some((EdgeRole::A, None)),
      NeighborRegion::B => Some((EdgeRole::B, None)),
      NeighborRegion::Oa => Some((EdgeRole::O, Some(EdgeRole::A))),
      NeighborRegion::Ob => Some((EdgeRole::O, Some(EdgeRole::B))),
      NeighborRegion::Ao => Some((EdgeRole::A, Some(EdgeRole::O))),
      NeighborRegion::Ab => Some((EdgeRole::A, Some(EdgeRole::B))),
      NeighborRegion::Bo => Some((EdgeRole::B, Some(EdgeRole::O))),
      NeighborRegion::Ba => Some((EdgeRole::B, Some(EdgeRole::A))),
    }
  }

  /// The region reached by crossing `first` and then `second`.
  #[must_use]
  pub const fn corner(first: EdgeRole, second: EdgeRole) -> Option<Self> {
    match (first, second) {
      (EdgeRole::O, EdgeRole::A) => Some(NeighborRegion::Oa),
      (EdgeRole::O, EdgeRole::B) => Some(NeighborRegion::Ob),
      (EdgeRole::A, EdgeRole::O) => Some(NeighborRegion::Ao),
      (EdgeRole::A, EdgeRole::B) => Some(NeighborRegion::Ab),
      (EdgeRole::B, EdgeRole::O) => Some(NeighborRegion::Bo),
      (EdgeRole::B, EdgeRole::A) => Some(NeighborRegion::Ba),
      _ => None,
    }
  }
}

impl From<EdgeRole> for NeighborRegion {
  fn from(edge: EdgeRole) -> Self {
    match edge {
      EdgeRole::O => NeighborRegion::O,
      EdgeRole::A => NeighborRegion::A,
      EdgeRole::B => NeighborRegion::B,
    }
  }
}
