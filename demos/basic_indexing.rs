// demos/basic_indexing.rs

use xs_geoseg::{
  decode_global, decode_local, degs_to_rads, get_num_cells, is_valid_seg, lat_lng_to_seg, rads_to_degs,
  seg_to_boundary, seg_to_lat_lng, GeoSegError, LatLng,
};

fn main() -> Result<(), GeoSegError> {
  println!("--- Basic Segment Indexing Example ---");

  // 1. A point near San Francisco City Hall
  let lat_deg = 37.779265;
  let lng_deg = -122.419277;
  let point = LatLng {
    lat: degs_to_rads(lat_deg),
    lng: degs_to_rads(lng_deg),
  };
  println!("Original Point: Lat {:.6} deg, Lng {:.6} deg", lat_deg, lng_deg);

  // 2. Find the segment at a few subdivision factors
  for n in [1u32, 7, 100, 10_000] {
    let seg = lat_lng_to_seg(&point, n)?;
    let (face, local) = decode_global(n, seg)?;
    let (coord, top) = decode_local(n, local)?;
    println!(
      "n = {:>5}: seg {:>10} of {:>11} (face {}, local {}, a = {}, b = {}, top = {})",
      n,
      seg,
      get_num_cells(n)?,
      face,
      local,
      coord.a,
      coord.b,
      top
    );
    assert!(is_valid_seg(n, seg));
  }

  // 3. Center and boundary of the n = 100 segment
  let n = 100;
  let seg = lat_lng_to_seg(&point, n)?;
  let center = seg_to_lat_lng(n, seg)?;
  println!(
    "Segment Center: Lat {:.6} deg, Lng {:.6} deg",
    rads_to_degs(center.lat),
    rads_to_degs(center.lng)
  );
  println!("Segment Boundary:");
  for (i, v) in seg_to_boundary(n, seg)?.iter().enumerate() {
    println!("  Vertex {}: Lat {:.6} deg, Lng {:.6} deg", i, rads_to_degs(v.lat), rads_to_degs(v.lng));
  }

  Ok(())
}
