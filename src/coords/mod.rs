// src/coords/mod.rs

pub mod face_ab;
pub mod topology;

pub use face_ab::{locate, project_to_cell};
pub use topology::{determine_coordinate, topology, EdgeNeighbor, Topology};
