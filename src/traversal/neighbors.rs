// src/traversal/neighbors.rs

use crate::coords::topology::{topology, Topology};
use crate::seg_index::{_face_cell_to_seg, _seg_to_face_cell, decode_local, encode_local, is_valid_seg};
use crate::traversal::region::{_canonical_neighbor, _cross_edge, _neighbor_region};
use crate::types::{CoordAB, FaceCell, GeoSegError, NeighborRegion, Resolution, SegIndex};

/// Relative `(da, db, top)` of a neighbor.
type Offset = (i32, i32, bool);

/// Neighbors of the only cell of a face at `n == 1`.
#[rustfmt::skip]
const OFFSETS_N1: [Offset; 9] = [
  (0, -1, false), (0, -1, true), (1, -1, false),
  (-1, 0, false), (-1, 0, true), (0, 0, true), (1, 0, false),
  (-1, 1, false), (0, 1, false),
];

/// Neighbors of a top cell: bottom row, current row, top row.
#[rustfmt::skip]
const OFFSETS_TOP: [Offset; 12] = [
  (0, -1, true), (1, -1, false), (1, -1, true),
  (-1, 0, true), (0, 0, false), (1, 0, false), (1, 0, true),
  (-1, 1, false), (-1, 1, true), (0, 1, false), (0, 1, true), (1, 1, false),
];

/// Neighbors of a bottom cell: bottom row, current row, top row.
#[rustfmt::skip]
const OFFSETS_BOTTOM: [Offset; 12] = [
  (-1, -1, true), (0, -1, false), (0, -1, true), (1, -1, false), (1, -1, true),
  (-1, 0, false), (-1, 0, true), (0, 0, true), (1, 0, false),
  (-1, 1, false), (-1, 1, true), (0, 1, false),
];

/// Offsets of the 1-ring of `(coord, top)`.
///
/// The bottom cells at the three corners of a face touch only five faces around
/// the icosahedron vertex, so one offset of the bottom table (the one that would
/// point past the vertex) is dropped there.
fn _ring_offsets(n: i32, coord: CoordAB, top: bool) -> impl Iterator<Item = Offset> {
  let (table, skip): (&'static [Offset], Option<usize>) = if n == 1 {
    (&OFFSETS_N1[..], None)
  } else if top {
    (&OFFSETS_TOP[..], None)
  } else {
    let skip = match (coord.a, coord.b) {
      (0, 0) => Some(0),
      (a, 0) if a == n - 1 => Some(4),
      (0, b) if b == n - 1 => Some(10),
      _ => None,
    };
    (&OFFSETS_BOTTOM[..], skip)
  };
  table
    .iter()
    .enumerate()
    .filter(move |(i, _)| Some(*i) != skip)
    .map(move |(_, &(da, db, t))| (coord.a + da, coord.b + db, t))
}

/// Carries AB coordinates relative to `face` onto the face they actually lie on.
///
/// Coordinates within the 1-ring of a segment of `face` are classified by
/// `check_neighbor_region`; single-edge regions take one crossing using the
/// face's edge record, corner regions cross the first edge and then resolve
/// again from the intermediate face. At most two crossings are made.
///
/// # Errors
/// * `GeoSegError::ResDomain` or `GeoSegError::FaceDomain` for bad input.
/// * `GeoSegError::UnexpectedRegion` for coordinates outside the 1-ring.
/// * `GeoSegError::CornerCrossingMismatch` if a corner crossing does not end on
///   the face sharing that corner.
pub fn resolve_neighbor_cell(n: u32, face: i32, coord: CoordAB, top: bool) -> Result<FaceCell, GeoSegError> {
  let n = Resolution::new(n)?.get() as i32;
  _resolve(topology()?, n, face, coord, top, 2)
}

fn _resolve(topo: &Topology, n: i32, face: i32, coord: CoordAB, top: bool, hops_left: u8) -> Result<FaceCell, GeoSegError> {
  let region = _neighbor_region(n, coord, top);
  let Some((first, second)) = region.edges() else {
    if region == NeighborRegion::Inside {
      return Ok(FaceCell { face, coord, top });
    }
    tracing::error!(face, a = coord.a, b = coord.b, top, "coordinates beyond the 1-ring");
    return Err(GeoSegError::UnexpectedRegion);
  };
  let needed = if second.is_some() { 2 } else { 1 };
  if needed > hops_left {
    tracing::error!(face, a = coord.a, b = coord.b, top, ?region, "crossing needs more hops than allowed");
    return Err(GeoSegError::UnexpectedRegion);
  }

  let record = topo.edge_neighbor(face, first)?;
  let swap = topo.face_orientation(face)? != record.orientation;
  let (crossed, crossed_top) = _cross_edge(n, first, record.origin, swap, coord, top)?;

  let Some(second) = second else {
    // A single crossing must land inside the neighbor.
    return _resolve(topo, n, record.face, crossed, crossed_top, 0);
  };

  tracing::trace!(face, via = record.face, ?region, "corner crossing");
  let landed = _resolve(topo, n, record.face, crossed, crossed_top, 1)?;
  let expected = topo.corner_neighbor(face, first, second)?;
  if landed.face != expected {
    tracing::error!(face, via = record.face, landed = landed.face, expected, ?region, "corner crossing landed on the wrong face");
    return Err(GeoSegError::CornerCrossingMismatch);
  }
  Ok(landed)
}

/// Lists the segments sharing an edge or a vertex with `seg`.
///
/// Most segments have 12 neighbors; bottom segments at a face corner have 11
/// (five faces meet at each icosahedron vertex) and at `n == 1` every segment
/// has 9. The order follows the fixed offset tables (lower row, same row, upper
/// row), not identifier order.
///
/// # Errors
/// `GeoSegError::ResDomain`, `GeoSegError::SegInvalid`, or a logic error if the
/// topology tables are inconsistent.
pub fn seg_neighbors(n: u32, seg: SegIndex) -> Result<Vec<SegIndex>, GeoSegError> {
  let res = Resolution::new(n)?;
  let cell = _seg_to_face_cell(n, seg)?;
  let topo = topology()?;
  let n_i = res.get() as i32;

  _ring_offsets(n_i, cell.coord, cell.top)
    .map(|(a, b, t)| {
      let found = _resolve(topo, n_i, cell.face, CoordAB::new(a, b), t, 2)?;
      _face_cell_to_seg(n, &found)
    })
    .collect()
}

/// Whether `destination` is in the 1-ring of `origin`.
///
/// # Errors
/// Same as `seg_neighbors`, for either identifier.
pub fn are_neighbor_segs(n: u32, origin: SegIndex, destination: SegIndex) -> Result<bool, GeoSegError> {
  Resolution::new(n)?;
  if !is_valid_seg(n, destination) {
    return Err(GeoSegError::SegInvalid);
  }
  Ok(seg_neighbors(n, origin)?.contains(&destination))
}

/// The 1-ring of a local segment, as seen from its own face in the canonical
/// neighbor frame.
///
/// # Returns
/// `(region, local_index)` pairs in offset-table order; `region` names the face
/// (relative to this one) the neighbor belongs to and `local_index` is its index
/// there.
pub fn local_neighbors(n: u32, local: u32) -> Result<Vec<(NeighborRegion, u32)>, GeoSegError> {
  let res = Resolution::new(n)?;
  let (coord, top) = decode_local(n, local)?;
  let n_i = res.get() as i32;

  _ring_offsets(n_i, coord, top)
    .map(|(a, b, t)| {
      let (region, c, t) = _canonical_neighbor(n_i, CoordAB::new(a, b), t, 2)?;
      Ok((region, encode_local(n, c.a, c.b, t)?))
    })
    .collect()
}

/// Local indices of the 1-ring of a segment that lies well inside its face.
///
/// Every neighbor must be on the same face; this holds for all segments not
/// touching the face border, which needs `n >= 4` for any segment to qualify.
///
/// # Errors
/// * `GeoSegError::InsideNeighborsDomain` if `n < 4`.
/// * `GeoSegError::LocalIndexDomain` for `local >= n * n`.
/// * `GeoSegError::CoordDomain` if a neighbor falls outside the face.
pub fn inside_neighbors(n: u32, local: u32) -> Result<Vec<u32>, GeoSegError> {
  if n < 4 {
    return Err(GeoSegError::InsideNeighborsDomain);
  }
  let res = Resolution::new(n)?;
  let (coord, top) = decode_local(n, local)?;

  _ring_offsets(res.get() as i32, coord, top)
    .map(|(a, b, t)| encode_local(n, a, b, t))
    .collect()
}
