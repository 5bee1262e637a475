#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]
#![allow(clippy::wildcard_imports)]

//! `xs-geoseg` is a triangular geodesic grid over the sphere.
//!
//! Each face of an icosahedron is cut into `n * n` triangular segments, and every
//! segment gets a dense `u32` identifier. The crate maps points to segments and
//! back, and walks the 1-ring of neighbors across face edges and corners.
//!
//! ```
//! use xs_geoseg::{lat_lng_to_seg, seg_neighbors, seg_to_lat_lng, LatLng};
//!
//! let geo = LatLng { lat: 0.6545, lng: -2.1337 };
//! let seg = lat_lng_to_seg(&geo, 7).unwrap();
//! let center = seg_to_lat_lng(7, seg).unwrap();
//! assert_eq!(lat_lng_to_seg(&center, 7), Ok(seg));
//! assert_eq!(seg_neighbors(7, seg).unwrap().len(), 12);
//! ```

pub mod constants;
pub mod coords;
pub mod indexing;
pub mod latlng;
pub mod math;
pub mod seg_index;
pub mod traversal;
pub mod types;

pub use constants::{MAX_RESOLUTION, NUM_ICOSA_FACES};
pub use coords::{determine_coordinate, locate, project_to_cell, topology, EdgeNeighbor, Topology};
pub use indexing::{lat_lng_to_seg, seg_to_boundary, seg_to_corners, seg_to_lat_lng, vec3d_to_seg};
pub use latlng::{degs_to_rads, great_circle_distance_rads, rads_to_degs};
pub use seg_index::{
  decode_global, decode_local, encode_global, encode_local, get_num_cells, is_valid_seg, max_resolution,
  row_start_index, search_for_b,
};
pub use traversal::{
  ab_to_neighbor_ab, are_neighbor_segs, check_neighbor_region, check_parallelogram_group, cross_edge,
  inside_neighbors, local_neighbors, resolve_neighbor_cell, seg_neighbors,
};
pub use types::{
  AxisOrientation, CoordAB, EdgeRole, FaceCell, GeoSegError, LatLng, NeighborRegion, OriginMap, ParallelogramGroup,
  Resolution, SegIndex, Vec3d,
};
