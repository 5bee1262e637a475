//! Geodesic segment index constants.

use std::f64::consts;

use crate::types::Vec3d;

// Mathematical constants
/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * PI
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// Epsilon for floating point comparisons. ~0.1mm in degrees.
pub const EPSILON_DEG: f64 = 0.000_000_001;
/// Epsilon for floating point comparisons. ~0.1mm in radians.
pub const EPSILON_RAD: f64 = EPSILON_DEG * M_PI_180;

/// Determinant threshold below which a ray is treated as parallel to a triangle.
pub const INTERSECT_EPSILON: f64 = 0.000_001;

/// Distance each face triangle is grown outward (away from its centroid) before
/// ray testing, so a ray through a shared edge or vertex always hits some face.
pub const FACE_INFLATION: f64 = 0.000_001;

/// Number of icosahedron faces (segment groups).
pub const NUM_ICOSA_FACES: i32 = 20;
/// Number of icosahedron vertices.
pub const NUM_ICOSA_VERTS: usize = 12;
/// Number of edges (and neighbor faces) per face.
pub const NUM_FACE_EDGES: usize = 3;

/// Largest subdivision factor `n` for which `20 * n * n` identifiers fit in a `u32`.
pub const MAX_RESOLUTION: u32 = 14_654;

/// Half the short side of the golden rectangles whose corners are the icosahedron
/// vertices: `2 / sqrt(10 + 2 * sqrt(5))`.
pub const ICOSA_HALF_HEIGHT: f64 = 0.525_731_112_119_133_6;
/// Half the long side of the golden rectangles: `ICOSA_HALF_HEIGHT * (1 + sqrt(5)) / 2`.
pub const ICOSA_HALF_WIDTH: f64 = 0.850_650_808_352_04;

const HH: f64 = ICOSA_HALF_HEIGHT;
const WH: f64 = ICOSA_HALF_WIDTH;

/// Icosahedron vertices on the unit sphere, built from three orthogonal golden rectangles.
#[rustfmt::skip]
pub static ICOSA_VERTICES: [Vec3d; NUM_ICOSA_VERTS] = [
  Vec3d { x: 0.0, y: -HH, z: -WH }, // 0
  Vec3d { x: 0.0, y: HH,  z: -WH }, // 1
  Vec3d { x: 0.0, y: HH,  z: WH },  // 2
  Vec3d { x: 0.0, y: -HH, z: WH },  // 3
  Vec3d { x: -WH, y: 0.0, z: -HH }, // 4
  Vec3d { x: -WH, y: 0.0, z: HH },  // 5
  Vec3d { x: WH,  y: 0.0, z: HH },  // 6
  Vec3d { x: WH,  y: 0.0, z: -HH }, // 7
  Vec3d { x: -HH, y: -WH, z: 0.0 }, // 8
  Vec3d { x: HH,  y: -WH, z: 0.0 }, // 9
  Vec3d { x: HH,  y: WH,  z: 0.0 }, // 10
  Vec3d { x: -HH, y: WH,  z: 0.0 }, // 11
];

/// Vertex indices of each face. Vertex 0 is the face's AB origin, vertex 1 ends the
/// A axis and vertex 2 ends the B axis.
#[rustfmt::skip]
pub static FACE_VERTICES: [[usize; 3]; NUM_ICOSA_FACES as usize] = [
  [0, 1, 7],   // face 0
  [0, 4, 1],   // face 1
  [0, 7, 9],   // face 2
  [0, 8, 4],   // face 3
  [0, 9, 8],   // face 4
  [1, 11, 10], // face 5
  [1, 10, 7],  // face 6
  [1, 4, 11],  // face 7
  [2, 3, 6],   // face 8
  [2, 5, 3],   // face 9
  [2, 6, 10],  // face 10
  [2, 10, 11], // face 11
  [2, 11, 5],  // face 12
  [3, 5, 8],   // face 13
  [3, 8, 9],   // face 14
  [3, 9, 6],   // face 15
  [4, 5, 11],  // face 16
  [4, 8, 5],   // face 17
  [6, 7, 10],  // face 18
  [6, 9, 7],   // face 19
];
