// src/math/mod.rs
#![allow(clippy::module_name_repetitions)] // Common in math modules

pub mod intersect;
pub mod vec3d;
