// src/indexing/mod.rs

pub mod from_seg;
pub mod to_seg;

// Re-export public functions from submodules for easier access
pub use from_seg::{seg_to_boundary, seg_to_corners, seg_to_lat_lng};
pub use to_seg::{lat_lng_to_seg, vec3d_to_seg};
