// src/traversal/region.rs

use crate::types::{AxisOrientation, CoordAB, EdgeRole, GeoSegError, NeighborRegion, OriginMap, ParallelogramGroup, Resolution};

/// Translations probed, in order, when AB coordinates fall outside the face
/// parallelogram, with the region reported when the translated coordinates land
/// in the bottom or top half of it.
#[rustfmt::skip]
const REGION_PROBES: [(i32, i32, NeighborRegion, NeighborRegion); 6] = [
  // (da in n,  db in n,  bottom hit,          top hit)
  (-1,  0, NeighborRegion::Ob, NeighborRegion::Outside),
  ( 1,  0, NeighborRegion::Ab, NeighborRegion::A),
  ( 0, -1, NeighborRegion::Oa, NeighborRegion::Outside),
  ( 0,  1, NeighborRegion::Ba, NeighborRegion::B),
  ( 1, -1, NeighborRegion::Ao, NeighborRegion::Outside),
  (-1,  1, NeighborRegion::Bo, NeighborRegion::Outside),
];

/// Places AB coordinates relative to the face's `n x n` parallelogram.
///
/// The lower triangle (`a + b < n - 1`, or on the diagonal with `top` clear) is the
/// face itself; the upper triangle belongs to the face across edge O.
///
/// # Errors
/// `GeoSegError::ResDomain` for a bad `n`.
pub fn check_parallelogram_group(n: u32, coord: CoordAB, top: bool) -> Result<ParallelogramGroup, GeoSegError> {
  let n = Resolution::new(n)?.get() as i32;
  Ok(_parallelogram_group(n, coord, top))
}

#[inline]
fn _parallelogram_group(n: i32, coord: CoordAB, top: bool) -> ParallelogramGroup {
  let CoordAB { a, b } = coord;
  if a < 0 || a >= n || b < 0 || b >= n {
    return ParallelogramGroup::Outside;
  }
  let sum = a + b;
  if sum < n - 1 || (sum == n - 1 && !top) {
    ParallelogramGroup::Bottom
  } else {
    ParallelogramGroup::Top
  }
}

/// Names the face, relative to the current one, that AB coordinates fall on.
///
/// Coordinates inside the parallelogram are either this face or the face across
/// edge O. Otherwise the parallelogram is shifted by `n` along the axes and
/// diagonals until it covers the coordinates; which shift and which half
/// identifies the region. Only the 1-ring of a valid segment is covered; anything
/// farther is `Outside`.
///
/// # Errors
/// `GeoSegError::ResDomain` for a bad `n`.
pub fn check_neighbor_region(n: u32, coord: CoordAB, top: bool) -> Result<NeighborRegion, GeoSegError> {
  let n = Resolution::new(n)?.get() as i32;
  Ok(_neighbor_region(n, coord, top))
}

pub(crate) fn _neighbor_region(n: i32, coord: CoordAB, top: bool) -> NeighborRegion {
  match _parallelogram_group(n, coord, top) {
    ParallelogramGroup::Bottom => return NeighborRegion::Inside,
    ParallelogramGroup::Top => return NeighborRegion::O,
    ParallelogramGroup::Outside => {}
  }
  for (da, db, bottom, upper) in REGION_PROBES {
    let shifted = CoordAB::new(coord.a + da * n, coord.b + db * n);
    match _parallelogram_group(n, shifted, top) {
      ParallelogramGroup::Bottom => return bottom,
      ParallelogramGroup::Top => return upper,
      ParallelogramGroup::Outside => {}
    }
  }
  NeighborRegion::Outside
}

/// Carries AB coordinates across one edge into the neighbor face's frame.
///
/// `origin` says where the neighbor puts its AB origin. The coordinates are
/// swapped when `face_orientation` (the crossing-from face's own handedness) and
/// `relative_orientation` (the neighbor's, as stored in the edge record) differ.
/// The top flag always flips: the cell on the far side of an edge has the
/// opposite orientation.
///
/// # Errors
/// * `GeoSegError::ResDomain` for a bad `n`.
/// * `GeoSegError::TopologyInvariant` when `origin` cannot occur across `edge`.
pub fn cross_edge(
  n: u32,
  edge: EdgeRole,
  origin: OriginMap,
  face_orientation: AxisOrientation,
  relative_orientation: AxisOrientation,
  coord: CoordAB,
  top: bool,
) -> Result<(CoordAB, bool), GeoSegError> {
  let n = Resolution::new(n)?.get() as i32;
  _cross_edge(n, edge, origin, face_orientation != relative_orientation, coord, top)
}

pub(crate) fn _cross_edge(
  n: i32,
  edge: EdgeRole,
  origin: OriginMap,
  swap: bool,
  coord: CoordAB,
  top: bool,
) -> Result<(CoordAB, bool), GeoSegError> {
  let CoordAB { a, b } = coord;
  let t = i32::from(top);
  let (a2, b2) = match (edge, origin) {
    (EdgeRole::O, OriginMap::A) => (a + b + t - n, -a + n - 1),
    (EdgeRole::O, OriginMap::B) => (-b + n - 1, a + b + t - n),
    (EdgeRole::O, OriginMap::Op) => (-a + n - 1, -b + n - 1),
    (EdgeRole::A, OriginMap::Ap) => (-b + n - 1, a + b + t),
    (EdgeRole::A, OriginMap::B) => (-a - 1, -b + n - 1),
    (EdgeRole::A, OriginMap::O) => (a + b + t, -a - 1),
    (EdgeRole::B, OriginMap::A) => (-a + n - 1, -b - 1),
    (EdgeRole::B, OriginMap::Bp) => (a + b + t, -a + n - 1),
    (EdgeRole::B, OriginMap::O) => (-b - 1, a + b + t),
    _ => {
      tracing::error!(?edge, ?origin, "origin cannot lie across this edge");
      return Err(GeoSegError::TopologyInvariant);
    }
  };
  let crossed = if swap { CoordAB::new(b2, a2) } else { CoordAB::new(a2, b2) };
  Ok((crossed, !top))
}

/// Crossing used by the canonical frame: every face sees its neighbors laid out
/// the same way, O-neighbors rotated half a turn, A and B neighbors mirrored.
#[inline]
fn _canonical_crossing(edge: EdgeRole) -> (OriginMap, bool) {
  match edge {
    EdgeRole::O => (OriginMap::Op, false),
    EdgeRole::A | EdgeRole::B => (OriginMap::O, true),
  }
}

/// Converts out-of-face AB coordinates into the region they fall on and the
/// coordinates they have there, assuming an idealized (canonical) neighbor frame.
///
/// Unlike `resolve_neighbor_cell` this ignores the real icosahedron; it describes
/// the neighborhood as one face sees it, which is the same for every face.
///
/// # Errors
/// * `GeoSegError::ResDomain` for a bad `n`.
/// * `GeoSegError::UnexpectedRegion` for coordinates beyond the 1-ring.
/// * `GeoSegError::CornerCrossingMismatch` if a corner crossing does not end in
///   the region its name promises.
pub fn ab_to_neighbor_ab(n: u32, coord: CoordAB, top: bool) -> Result<(NeighborRegion, CoordAB, bool), GeoSegError> {
  let n = Resolution::new(n)?.get() as i32;
  _canonical_neighbor(n, coord, top, 2)
}

pub(crate) fn _canonical_neighbor(
  n: i32,
  coord: CoordAB,
  top: bool,
  hops_left: u8,
) -> Result<(NeighborRegion, CoordAB, bool), GeoSegError> {
  let region = _neighbor_region(n, coord, top);
  let Some((first, second)) = region.edges() else {
    return match region {
      NeighborRegion::Inside => Ok((region, coord, top)),
      _ => Err(GeoSegError::UnexpectedRegion),
    };
  };
  let needed = if second.is_some() { 2 } else { 1 };
  if needed > hops_left {
    return Err(GeoSegError::UnexpectedRegion);
  }

  let (origin, swap) = _canonical_crossing(first);
  let (coord, top) = _cross_edge(n, first, origin, swap, coord, top)?;
  let Some(second) = second else {
    return Ok((region, coord, top));
  };

  let (landed, coord, top) = _canonical_neighbor(n, coord, top, hops_left - 1)?;
  let expected = NeighborRegion::from(second);
  if landed != expected {
    tracing::error!(?region, ?landed, "canonical corner crossing went astray");
    return Err(GeoSegError::CornerCrossingMismatch);
  }
  Ok((region, coord, top))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ab(a: i32, b: i32) -> CoordAB {
    CoordAB::new(a, b)
  }

  #[test]
  fn test_check_parallelogram_group() {
    use crate::types::ParallelogramGroup::{Bottom, Outside, Top};
    assert_eq!(check_parallelogram_group(0, ab(0, 0), false), Err(GeoSegError::ResDomain));

    assert_eq!(check_parallelogram_group(1, ab(0, 0), false), Ok(Bottom));
    assert_eq!(check_parallelogram_group(1, ab(0, 0), true), Ok(Top));
    for c in [ab(1, 0), ab(0, 1), ab(1, 1), ab(-1, -1)] {
      assert_eq!(check_parallelogram_group(1, c, true), Ok(Outside), "{:?}", c);
    }

    let n2 = [
      (ab(0, 0), false, Bottom),
      (ab(0, 0), true, Bottom),
      (ab(1, 0), false, Bottom),
      (ab(1, 0), true, Top),
      (ab(0, 1), false, Bottom),
      (ab(0, 1), true, Top),
      (ab(1, 1), false, Top),
      (ab(1, 1), true, Top),
    ];
    for (c, top, expected) in n2 {
      assert_eq!(check_parallelogram_group(2, c, top), Ok(expected), "{:?} {}", c, top);
    }
  }

  #[test]
  fn test_check_neighbor_region_n1() {
    use crate::types::NeighborRegion::*;
    let cases = [
      (ab(0, 0), false, Inside),
      (ab(0, 0), true, O),
      (ab(1, 0), false, Oa),
      (ab(-1, 0), false, Ab),
      (ab(-1, 0), true, A),
      (ab(-1, 1), false, Ao),
      (ab(0, 1), false, Ob),
      (ab(0, -1), false, Ba),
      (ab(0, -1), true, B),
      (ab(1, -1), false, Bo),
      (ab(1, 0), true, Outside),
      (ab(0, 1), true, Outside),
      (ab(1, 1), false, Outside),
      (ab(1, -1), true, Outside),
      (ab(-1, 1), true, Outside),
      (ab(-1, -1), false, Outside),
      (ab(-1, -1), true, Outside),
    ];
    for (c, top, expected) in cases {
      assert_eq!(check_neighbor_region(1, c, top), Ok(expected), "{:?} {}", c, top);
    }
    assert_eq!(check_neighbor_region(0, ab(0, 0), false), Err(GeoSegError::ResDomain));
  }

  #[test]
  fn test_cross_edge_table() {
    use crate::types::AxisOrientation::{Ccw, Cw};
    let n = 5;
    let c = ab(1, 2);
    let cases = [
      (EdgeRole::O, OriginMap::A, ab(-1, 3)),
      (EdgeRole::O, OriginMap::B, ab(2, -1)),
      (EdgeRole::O, OriginMap::Op, ab(3, 2)),
      (EdgeRole::A, OriginMap::Ap, ab(2, 4)),
      (EdgeRole::A, OriginMap::B, ab(-2, 2)),
      (EdgeRole::A, OriginMap::O, ab(4, -2)),
      (EdgeRole::B, OriginMap::A, ab(3, -3)),
      (EdgeRole::B, OriginMap::Bp, ab(4, 3)),
      (EdgeRole::B, OriginMap::O, ab(-3, 4)),
    ];
    for (edge, origin, expected) in cases {
      // top = true adds one to every `a + b` term.
      assert_eq!(
        cross_edge(n, edge, origin, Ccw, Ccw, c, true),
        Ok((expected, false)),
        "{:?}/{:?}",
        edge,
        origin
      );
      let swapped = ab(expected.b, expected.a);
      assert_eq!(cross_edge(n, edge, origin, Cw, Ccw, c, true), Ok((swapped, false)));
      assert_eq!(cross_edge(n, edge, origin, Cw, Cw, c, true), Ok((expected, false)));
    }
    assert_eq!(
      cross_edge(n, EdgeRole::O, OriginMap::O, Ccw, Ccw, c, false),
      Err(GeoSegError::TopologyInvariant)
    );
    assert_eq!(
      cross_edge(n, EdgeRole::A, OriginMap::Bp, Ccw, Ccw, c, false),
      Err(GeoSegError::TopologyInvariant)
    );
  }

  #[test]
  fn test_ab_to_neighbor_ab() {
    use crate::types::NeighborRegion::*;
    #[rustfmt::skip]
    let cases = [
      // n, a, b, top  =>  region, a, b, top
      (1,  0,  0, false, Inside, 0, 0, false),
      (1,  0,  0, true,  O,      0, 0, false),
      (1, -1,  0, true,  A,      0, 0, false),
      (1,  0, -1, true,  B,      0, 0, false),

      (2,  0,  0, false, Inside, 0, 0, false),
      (2,  0,  0, true,  Inside, 0, 0, true),
      (2,  1,  0, false, Inside, 1, 0, false),
      (2,  0,  1, false, Inside, 0, 1, false),

      (2,  1,  0, true,  O, 0, 1, false),
      (2,  0,  1, true,  O, 1, 0, false),
      (2,  1,  1, false, O, 0, 0, true),
      (2,  1,  1, true,  O, 0, 0, false),

      (2, -1,  0, true,  A, 0, 0, false),
      (2, -1,  1, false, A, 0, 0, true),
      (2, -2,  1, true,  A, 1, 0, false),
      (2, -1,  1, true,  A, 0, 1, false),

      (2,  0, -1, true,  B, 0, 0, false),
      (2,  1, -1, false, B, 0, 0, true),
      (2,  1, -1, true,  B, 1, 0, false),
      (2,  1, -2, true,  B, 0, 1, false),

      (2,  2,  1, false, Oa, 0, 0, false),
      (2,  2,  0, true,  Oa, 0, 0, true),
      (2,  3,  0, false, Oa, 1, 0, false),
      (2,  2,  0, false, Oa, 0, 1, false),

      (2,  1,  2, false, Ob, 0, 0, false),
      (2,  0,  2, true,  Ob, 0, 0, true),
      (2,  0,  2, false, Ob, 1, 0, false),
      (2,  0,  3, false, Ob, 0, 1, false),

      (2, -2,  3, false, Ao, 0, 0, false),
      (2, -2,  2, true,  Ao, 0, 0, true),
      (2, -1,  2, false, Ao, 1, 0, false),
      (2, -2,  2, false, Ao, 0, 1, false),

      (2, -1,  0, false, Ab, 0, 0, false),
      (2, -2,  0, true,  Ab, 0, 0, true),
      (2, -2,  1, false, Ab, 1, 0, false),
      (2, -2,  0, false, Ab, 0, 1, false),

      (2,  3, -2, false, Bo, 0, 0, false),
      (2,  2, -2, true,  Bo, 0, 0, true),
      (2,  2, -2, false, Bo, 1, 0, false),
      (2,  2, -1, false, Bo, 0, 1, false),

      (2,  0, -1, false, Ba, 0, 0, false),
      (2,  0, -2, true,  Ba, 0, 0, true),
      (2,  0, -2, false, Ba, 1, 0, false),
      (2,  1, -2, false, Ba, 0, 1, false),
    ];
    for (n, a, b, top, region, ea, eb, etop) in cases {
      assert_eq!(
        ab_to_neighbor_ab(n, ab(a, b), top),
        Ok((region, ab(ea, eb), etop)),
        "n={} ({}, {}, {})",
        n,
        a,
        b,
        top
      );
    }
  }

  #[test]
  fn test_ab_to_neighbor_ab_beyond_ring() {
    assert_eq!(ab_to_neighbor_ab(1, ab(1, 1), false), Err(GeoSegError::UnexpectedRegion));
    assert_eq!(ab_to_neighbor_ab(0, ab(0, 0), false), Err(GeoSegError::ResDomain));
  }
}
