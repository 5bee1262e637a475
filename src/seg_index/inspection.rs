// src/seg_index/inspection.rs

use crate::constants::MAX_RESOLUTION;
use crate::types::{GeoSegError, Resolution, SegIndex};

/// Number of segments on the whole sphere at subdivision `n`: `20 * n * n`.
pub fn get_num_cells(n: u32) -> Result<u64, GeoSegError> {
  Ok(Resolution::new(n)?.cell_count())
}

/// Whether `seg` addresses a segment at subdivision `n`.
///
/// Every identifier below `20 * n * n` is valid; there are no gaps in the dense packing.
#[must_use]
pub fn is_valid_seg(n: u32, seg: SegIndex) -> bool {
  Resolution::new(n).is_ok_and(|res| u64::from(seg.0) < res.cell_count())
}

/// Finest subdivision whose identifiers still fit in a `u32`.
#[inline]
#[must_use]
pub fn max_resolution() -> u32 {
  MAX_RESOLUTION
}
