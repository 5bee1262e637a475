// src/coords/topology.rs

use std::sync::OnceLock;

use crate::constants::{FACE_INFLATION, FACE_VERTICES, ICOSA_VERTICES, NUM_FACE_EDGES, NUM_ICOSA_FACES};
use crate::types::{AxisOrientation, EdgeRole, GeoSegError, OriginMap, Vec3d};

const NUM_FACES: usize = NUM_ICOSA_FACES as usize;

/// What lies across one edge of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeNeighbor {
  /// Face across the edge.
  pub face: i32,
  /// The crossed edge, named from the crossing-from face.
  pub edge: EdgeRole,
  /// Where the neighbor places its AB origin.
  pub origin: OriginMap,
  /// Handedness of the neighbor's AB axes, relative to a CCW crossing-from face.
  pub orientation: AxisOrientation,
}

/// Derived icosahedron tables: per-face handedness, edge adjacency and the
/// slightly inflated triangles used for ray localization.
///
/// Built once from `ICOSA_VERTICES` and `FACE_VERTICES`, never mutated.
#[derive(Debug, Clone)]
pub struct Topology {
  orientations: [AxisOrientation; NUM_FACES],
  neighbors: [[EdgeNeighbor; NUM_FACE_EDGES]; NUM_FACES],
  triangles: [[Vec3d; 3]; NUM_FACES],
}

static TOPOLOGY: OnceLock<Result<Topology, GeoSegError>> = OnceLock::new();

/// Shared topology tables, derived on first use.
///
/// # Errors
/// `GeoSegError::TopologyInvariant` if the constant tables do not describe a closed icosahedron.
pub fn topology() -> Result<&'static Topology, GeoSegError> {
  TOPOLOGY.get_or_init(Topology::build).as_ref().map_err(|e| *e)
}

/// Validates a face number and returns it as a table index.
#[inline]
pub(crate) fn _face_index(face: i32) -> Result<usize, GeoSegError> {
  if (0..NUM_ICOSA_FACES).contains(&face) {
    Ok(face as usize)
  } else {
    Err(GeoSegError::FaceDomain)
  }
}

/// The three exact (non-inflated) corner vectors of `face`, in AB order.
pub(crate) fn _face_vertices(face: i32) -> Result<[Vec3d; 3], GeoSegError> {
  let idx = FACE_VERTICES[_face_index(face)?];
  Ok([ICOSA_VERTICES[idx[0]], ICOSA_VERTICES[idx[1]], ICOSA_VERTICES[idx[2]]])
}

/// Handedness of a triangle's AB axes seen from outside the sphere.
///
/// `Cw` when `(v1 - v0) x (v2 - v0)` points away from the origin, which is the
/// positive-angle case about the centroid direction.
fn _base_orientation(verts: &[Vec3d; 3]) -> AxisOrientation {
  let centroid = verts[0] + verts[1] + verts[2];
  let normal = (verts[1] - verts[0]).cross(&(verts[2] - verts[0]));
  if centroid.dot(&normal) > 0.0 {
    AxisOrientation::Cw
  } else {
    AxisOrientation::Ccw
  }
}

/// Classifies the edge `face` shares with `neighbor` and how the neighbor's axes sit on it.
///
/// Both arguments are vertex-index triples in AB order (origin, A end, B end).
/// `face_orientation` is the handedness of `face` itself; the returned orientation
/// is relative to it.
///
/// # Returns
/// `(edge, origin, orientation)`: the shared edge named from `face`, where the
/// neighbor's origin lies, and the neighbor's relative handedness.
///
/// # Errors
/// `GeoSegError::TopologyInvariant` when the triples do not share exactly two vertices.
pub fn determine_coordinate(
  face: &[usize; 3],
  face_orientation: AxisOrientation,
  neighbor: &[usize; 3],
) -> Result<(EdgeRole, OriginMap, AxisOrientation), GeoSegError> {
  let position = |v: usize| neighbor.iter().position(|&x| x == v);
  let mut missing = (0..3).filter(|&i| position(face[i]).is_none());
  let (Some(m), None) = (missing.next(), missing.next()) else {
    tracing::error!(?face, ?neighbor, "faces do not share exactly one edge");
    return Err(GeoSegError::TopologyInvariant);
  };

  let p = (m + 1) % 3;
  let q = (m + 2) % 3;
  let (Some(sp), Some(sq)) = (position(face[p]), position(face[q])) else {
    return Err(GeoSegError::TopologyInvariant);
  };
  let apex = 3 - sp - sq;

  let cw_if = |cond: bool| if cond { AxisOrientation::Cw } else { AxisOrientation::Ccw };
  let (origin, orientation) = if apex == 0 {
    (OriginMap::apex(edge_role(m)), cw_if(neighbor[1] == face[p]))
  } else if sp == 0 {
    (OriginMap::shared(p), cw_if(neighbor[1] == face[q]))
  } else {
    (OriginMap::shared(q), cw_if(neighbor[1] != face[p]))
  };

  let orientation = match face_orientation {
    AxisOrientation::Ccw => orientation,
    AxisOrientation::Cw => orientation.invert(),
  };
  Ok((edge_role(m), origin, orientation))
}

#[inline]
fn edge_role(index: usize) -> EdgeRole {
  match index {
    0 => EdgeRole::O,
    1 => EdgeRole::A,
    _ => EdgeRole::B,
  }
}

impl Topology {
  fn build() -> Result<Self, GeoSegError> {
    let mut orientations = [AxisOrientation::Ccw; NUM_FACES];
    let mut triangles = [[Vec3d::default(); 3]; NUM_FACES];
    for face in 0..NUM_FACES {
      let verts = _face_vertices(face as i32)?;
      orientations[face] = _base_orientation(&verts);

      let centroid = (verts[0] + verts[1] + verts[2]) / 3.0;
      for (slot, v) in triangles[face].iter_mut().zip(verts.iter()) {
        let outward = (*v - centroid).normalized().ok_or(GeoSegError::TopologyInvariant)?;
        *slot = *v + outward * FACE_INFLATION;
      }
    }

    let mut neighbors = [[None::<EdgeNeighbor>; NUM_FACE_EDGES]; NUM_FACES];
    for (face, row) in neighbors.iter_mut().enumerate() {
      let verts = &FACE_VERTICES[face];
      for (other, other_verts) in FACE_VERTICES.iter().enumerate() {
        let shared = verts.iter().filter(|v| other_verts.contains(*v)).count();
        if other == face || shared != 2 {
          continue;
        }
        let (edge, origin, orientation) = determine_coordinate(verts, orientations[face], other_verts)?;
        let slot = &mut row[edge.index()];
        if slot.is_some() {
          tracing::error!(face, other, ?edge, "two faces claim the same edge");
          return Err(GeoSegError::TopologyInvariant);
        }
        *slot = Some(EdgeNeighbor {
          face: other as i32,
          edge,
          origin,
          orientation,
        });
      }
    }

    let mut table = [[EdgeNeighbor {
      face: 0,
      edge: EdgeRole::O,
      origin: OriginMap::O,
      orientation: AxisOrientation::Ccw,
    }; NUM_FACE_EDGES]; NUM_FACES];
    for (face, row) in neighbors.iter().enumerate() {
      for (edge, entry) in row.iter().enumerate() {
        table[face][edge] = entry.ok_or_else(|| {
          tracing::error!(face, edge, "face edge has no neighbor");
          GeoSegError::TopologyInvariant
        })?;
      }
    }

    let cw = orientations.iter().filter(|o| **o == AxisOrientation::Cw).count();
    tracing::debug!(faces = NUM_FACES, cw, ccw = NUM_FACES - cw, "built icosahedron topology");

    Ok(Self {
      orientations,
      neighbors: table,
      triangles,
    })
  }

  /// Handedness of `face`'s AB axes.
  pub fn face_orientation(&self, face: i32) -> Result<AxisOrientation, GeoSegError> {
    Ok(self.orientations[_face_index(face)?])
  }

  /// The three neighbor records of `face`, indexed by `EdgeRole::index()`.
  pub fn edge_neighbors(&self, face: i32) -> Result<&[EdgeNeighbor; NUM_FACE_EDGES], GeoSegError> {
    Ok(&self.neighbors[_face_index(face)?])
  }

  /// The neighbor record across one edge of `face`.
  pub fn edge_neighbor(&self, face: i32, edge: EdgeRole) -> Result<EdgeNeighbor, GeoSegError> {
    Ok(self.edge_neighbors(face)?[edge.index()])
  }

  /// The face reached by crossing edge `first` of `face`, then the edge of that
  /// intermediate face leading away from `face`'s vertex at slot `second`.
  ///
  /// # Errors
  /// `GeoSegError::CoordDomain` when `first == second`, which names no corner.
  pub fn corner_neighbor(&self, face: i32, first: EdgeRole, second: EdgeRole) -> Result<i32, GeoSegError> {
    if first == second {
      return Err(GeoSegError::CoordDomain);
    }
    let intermediate = self.edge_neighbor(face, first)?.face;
    let pivot = FACE_VERTICES[_face_index(face)?][second.index()];
    self
      .edge_neighbors(intermediate)?
      .iter()
      .find(|n| n.face != face && !FACE_VERTICES[n.face as usize].contains(&pivot))
      .map(|n| n.face)
      .ok_or_else(|| {
        tracing::error!(face, intermediate, ?first, ?second, "no face across the corner");
        GeoSegError::TopologyInvariant
      })
  }

  /// `face`'s triangle grown outward by `FACE_INFLATION`, for ray tests.
  pub(crate) fn inflated_triangle(&self, face: usize) -> &[Vec3d; 3] {
    &self.triangles[face]
  }
}
