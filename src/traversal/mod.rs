// src/traversal/mod.rs

pub mod neighbors;
pub mod region;

pub use neighbors::{are_neighbor_segs, inside_neighbors, local_neighbors, resolve_neighbor_cell, seg_neighbors};
pub use region::{ab_to_neighbor_ab, check_neighbor_region, check_parallelogram_group, cross_edge};
