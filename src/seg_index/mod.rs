// src/seg_index/mod.rs

pub mod inspection;

use crate::coords::topology::_face_index;
use crate::types::{CoordAB, FaceCell, GeoSegError, Resolution, SegIndex};

pub use inspection::{get_num_cells, is_valid_seg, max_resolution};

/// Local index of cell `(0, b, bottom)`, the first cell of row `b`.
///
/// Rows shrink by one unit parallelogram each step up, and every parallelogram
/// except the last of its row holds two cells.
#[inline]
fn _row_start(n: i64, b: i64) -> i64 {
  2 * (b * n - b * (b - 1) / 2) - b
}

/// Encodes `(a, b, top)` as a local index within one face.
///
/// Local indices run row by row (increasing `b`), then by `a`, bottom before top,
/// so they are monotonic in `(b, a, top)`.
///
/// # Errors
/// * `GeoSegError::ResDomain` if `n` is not a valid subdivision factor.
/// * `GeoSegError::CoordDomain` if `a < 0`, `b < 0`, `a + b >= n`, or `top` is set on the outer diagonal.
pub fn encode_local(n: u32, a: i32, b: i32, top: bool) -> Result<u32, GeoSegError> {
  let res = Resolution::new(n)?;
  let n = i64::from(res.get());
  let (a, b) = (i64::from(a), i64::from(b));
  if a < 0 || b < 0 || a + b >= n {
    return Err(GeoSegError::CoordDomain);
  }
  if top && a + b == n - 1 {
    return Err(GeoSegError::CoordDomain);
  }
  let local = _row_start(n, b) + 2 * a + i64::from(top);
  Ok(local as u32)
}

/// Local index of the first cell in row `b`; strictly increasing in `b`.
///
/// # Errors
/// `GeoSegError::ResDomain`, or `GeoSegError::CoordDomain` when `b` is not in `[0, n)`.
pub fn row_start_index(n: u32, b: i32) -> Result<u32, GeoSegError> {
  encode_local(n, 0, b, false)
}

/// Finds the row holding `local` by bisecting rows `b0..=b1`.
///
/// # Returns
/// The largest `b` in `[b0, b1]` whose row starts at or before `local`.
///
/// # Errors
/// * `GeoSegError::ResDomain` for a bad `n`.
/// * `GeoSegError::CoordDomain` unless `0 <= b0 <= b1 < n`.
/// * `GeoSegError::LocalIndexDomain` if `local` lies before row `b0` or after the start of row `b1`.
pub fn search_for_b(n: u32, b0: i32, b1: i32, local: u32) -> Result<i32, GeoSegError> {
  let res = Resolution::new(n)?;
  if b0 < 0 || i64::from(b1) >= i64::from(res.get()) || b0 > b1 {
    return Err(GeoSegError::CoordDomain);
  }

  let n = i64::from(res.get());
  let local = i64::from(local);
  let (mut lo, mut hi) = (i64::from(b0), i64::from(b1));
  let (start_lo, start_hi) = (_row_start(n, lo), _row_start(n, hi));
  if local < start_lo || local > start_hi {
    return Err(GeoSegError::LocalIndexDomain);
  }
  if local == start_hi {
    return Ok(hi as i32);
  }

  // Invariant: row_start(lo) <= local < row_start(hi).
  while hi - lo > 1 {
    let mid = lo + (hi - lo) / 2;
    let start_mid = _row_start(n, mid);
    if start_mid == local {
      return Ok(mid as i32);
    }
    if start_mid < local {
      lo = mid;
    } else {
      hi = mid;
    }
  }
  Ok(lo as i32)
}

/// Decodes a local index back to `(a, b)` and the top flag.
///
/// # Errors
/// `GeoSegError::ResDomain`, or `GeoSegError::LocalIndexDomain` when `local >= n * n`.
pub fn decode_local(n: u32, local: u32) -> Result<(CoordAB, bool), GeoSegError> {
  let res = Resolution::new(n)?;
  if local >= res.cells_per_face() {
    return Err(GeoSegError::LocalIndexDomain);
  }
  let b = search_for_b(n, 0, (res.get() - 1) as i32, local)?;
  let start = _row_start(i64::from(res.get()), i64::from(b));
  let offset = i64::from(local) - start;
  let a = offset / 2;
  let top = (i64::from(b) + i64::from(local)) % 2 == 1;
  Ok((CoordAB::new(a as i32, b), top))
}

/// Combines a face number and a local index into a dense global identifier.
///
/// # Errors
/// * `GeoSegError::ResDomain` if `20 * n * n` identifiers would not fit in a `u32`.
/// * `GeoSegError::FaceDomain` if `face` is not in `[0, 20)`.
/// * `GeoSegError::LocalIndexDomain` if `local >= n * n`.
pub fn encode_global(n: u32, face: i32, local: u32) -> Result<SegIndex, GeoSegError> {
  let res = Resolution::new(n)?;
  let face = _face_index(face)?;
  if local >= res.cells_per_face() {
    return Err(GeoSegError::LocalIndexDomain);
  }
  let id = face as u64 * u64::from(res.cells_per_face()) + u64::from(local);
  Ok(SegIndex(id as u32))
}

/// Splits a global identifier into its face number and local index.
///
/// # Errors
/// `GeoSegError::ResDomain`, or `GeoSegError::SegInvalid` when the identifier is
/// not below `20 * n * n`.
pub fn decode_global(n: u32, seg: SegIndex) -> Result<(i32, u32), GeoSegError> {
  let res = Resolution::new(n)?;
  if u64::from(seg.0) >= res.cell_count() {
    return Err(GeoSegError::SegInvalid);
  }
  let per_face = res.cells_per_face();
  Ok(((seg.0 / per_face) as i32, seg.0 % per_face))
}

/// Encodes a face cell straight to its global identifier.
pub(crate) fn _face_cell_to_seg(n: u32, cell: &FaceCell) -> Result<SegIndex, GeoSegError> {
  let local = encode_local(n, cell.coord.a, cell.coord.b, cell.top)?;
  encode_global(n, cell.face, local)
}

/// Decodes a global identifier straight to its face cell.
pub(crate) fn _seg_to_face_cell(n: u32, seg: SegIndex) -> Result<FaceCell, GeoSegError> {
  let (face, local) = decode_global(n, seg)?;
  let (coord, top) = decode_local(n, local)?;
  Ok(FaceCell { face, coord, top })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_encode_local_examples() {
    assert_eq!(encode_local(2, 0, 0, false), Ok(0));
    assert_eq!(encode_local(2, 0, 0, true), Ok(1));
    assert_eq!(encode_local(2, 1, 0, false), Ok(2));
    assert_eq!(encode_local(2, 0, 1, false), Ok(3));
  }

  #[test]
  fn test_encode_local_rejects_out_of_face() {
    assert_eq!(encode_local(0, 0, 0, false), Err(GeoSegError::ResDomain));
    assert_eq!(encode_local(2, -1, 0, false), Err(GeoSegError::CoordDomain));
    assert_eq!(encode_local(2, 0, -1, false), Err(GeoSegError::CoordDomain));
    assert_eq!(encode_local(2, 1, 1, false), Err(GeoSegError::CoordDomain));
    assert_eq!(encode_local(2, 1, 0, true), Err(GeoSegError::CoordDomain), "no top on the diagonal");
    assert_eq!(encode_local(1, 0, 0, true), Err(GeoSegError::CoordDomain));
  }

  #[test]
  fn test_row_start_index() {
    assert_eq!(row_start_index(1, 0), Ok(0));
    assert_eq!(row_start_index(2, 0), Ok(0));
    assert_eq!(row_start_index(2, 1), Ok(3));
    assert_eq!(row_start_index(7, 2), Ok(24));
    assert_eq!(row_start_index(7, 3), Ok(33));
    assert_eq!(row_start_index(0, 0), Err(GeoSegError::ResDomain));
    assert_eq!(row_start_index(3, 3), Err(GeoSegError::CoordDomain));
    // The last row holds a single cell, the last of the face.
    for n in 1..40u32 {
      assert_eq!(row_start_index(n, n as i32 - 1), Ok(n * n - 1));
    }
  }

  #[test]
  fn test_search_for_b() {
    assert_eq!(search_for_b(0, 0, 1, 0), Err(GeoSegError::ResDomain));
    assert_eq!(search_for_b(1, 0, 0, 0), Ok(0));

    for (local, b) in [(0, 0), (1, 0), (2, 0), (3, 1)] {
      assert_eq!(search_for_b(2, 0, 1, local), Ok(b), "n=2 local={}", local);
    }
    assert_eq!(search_for_b(2, 0, 2, 0), Err(GeoSegError::CoordDomain));

    for (local, b) in [(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 1), (6, 1), (7, 1), (8, 2)] {
      assert_eq!(search_for_b(3, 0, 2, local), Ok(b), "n=3 local={}", local);
    }
    assert_eq!(search_for_b(3, 0, 3, 0), Err(GeoSegError::CoordDomain));
    assert_eq!(search_for_b(3, -1, 2, 0), Err(GeoSegError::CoordDomain));
    assert_eq!(search_for_b(3, 2, 1, 0), Err(GeoSegError::CoordDomain));
    assert_eq!(search_for_b(3, 1, 2, 4), Err(GeoSegError::LocalIndexDomain));
    assert_eq!(search_for_b(3, 0, 1, 6), Err(GeoSegError::LocalIndexDomain));
  }

  #[test]
  fn test_decode_local_examples() {
    let cell = |a: i32, b: i32, top: bool| -> Result<(CoordAB, bool), GeoSegError> { Ok((CoordAB::new(a, b), top)) };
    assert_eq!(decode_local(0, 0), Err(GeoSegError::ResDomain));
    assert_eq!(decode_local(1, 0), cell(0, 0, false));

    assert_eq!(decode_local(2, 0), cell(0, 0, false));
    assert_eq!(decode_local(2, 1), cell(0, 0, true));
    assert_eq!(decode_local(2, 2), cell(1, 0, false));
    assert_eq!(decode_local(2, 3), cell(0, 1, false));

    let n3 = [
      (0, 0, false),
      (0, 0, true),
      (1, 0, false),
      (1, 0, true),
      (2, 0, false),
      (0, 1, false),
      (0, 1, true),
      (1, 1, false),
      (0, 2, false),
    ];
    for (local, &(a, b, top)) in n3.iter().enumerate() {
      assert_eq!(decode_local(3, local as u32), cell(a, b, top), "n=3 local={}", local);
    }

    assert_eq!(decode_local(7, 27), cell(1, 2, true));
    assert_eq!(decode_local(7, 49), Err(GeoSegError::LocalIndexDomain));
  }

  #[test]
  fn test_local_round_trip_exhaustive_small() {
    for n in 1..=12u32 {
      let mut expected = 0u32;
      for b in 0..n as i32 {
        for a in 0..(n as i32 - b) {
          for top in [false, true] {
            if top && a + b == n as i32 - 1 {
              continue;
            }
            let local = encode_local(n, a, b, top).unwrap();
            assert_eq!(local, expected, "n={} dense order", n);
            expected += 1;
            assert_eq!(decode_local(n, local), Ok((CoordAB::new(a, b), top)));
          }
        }
      }
      assert_eq!(expected, n * n);
    }
  }

  #[test]
  fn test_global_codec() {
    assert_eq!(encode_global(3, 2, 4), Ok(SegIndex(22)));
    assert_eq!(decode_global(3, SegIndex(22)), Ok((2, 4)));
    assert_eq!(encode_global(3, 20, 0), Err(GeoSegError::FaceDomain));
    assert_eq!(encode_global(3, -1, 0), Err(GeoSegError::FaceDomain));
    assert_eq!(encode_global(3, 0, 9), Err(GeoSegError::LocalIndexDomain));
    assert_eq!(decode_global(3, SegIndex(180)), Err(GeoSegError::SegInvalid));
    assert_eq!(decode_global(3, SegIndex(179)), Ok((19, 8)));
    assert_eq!(encode_global(crate::constants::MAX_RESOLUTION + 1, 0, 0), Err(GeoSegError::ResDomain));
  }

  #[test]
  fn test_global_codec_at_max_resolution() {
    let n = crate::constants::MAX_RESOLUTION;
    let last_local = n * n - 1;
    let last = encode_global(n, 19, last_local).unwrap();
    assert_eq!(decode_global(n, last), Ok((19, last_local)));
    let (coord, top) = decode_local(n, last_local).unwrap();
    assert_eq!((coord, top), (CoordAB::new(0, n as i32 - 1), false));
  }

  #[test]
  fn test_face_cell_helpers() {
    let cell = FaceCell {
      face: 11,
      coord: CoordAB::new(2, 1),
      top: true,
    };
    let seg = _face_cell_to_seg(5, &cell).unwrap();
    assert_eq!(_seg_to_face_cell(5, seg), Ok(cell));
  }
}
