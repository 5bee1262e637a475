// demos/segment_neighbors.rs

use xs_geoseg::{
  decode_global, degs_to_rads, lat_lng_to_seg, local_neighbors, seg_neighbors, topology, EdgeRole, GeoSegError,
  LatLng, NUM_ICOSA_FACES,
};

fn main() -> Result<(), GeoSegError> {
  println!("--- Segment Neighbors Example ---");

  // 1. Face adjacency of the icosahedron
  let topo = topology()?;
  for face in 0..NUM_ICOSA_FACES {
    let faces: Vec<i32> = EdgeRole::ALL
      .iter()
      .map(|&edge| topo.edge_neighbor(face, edge).map(|rec| rec.face))
      .collect::<Result<_, _>>()?;
    println!(
      "Face {:>2} ({:?}): across O {:>2}, across A {:>2}, across B {:>2}",
      face,
      topo.face_orientation(face)?,
      faces[0],
      faces[1],
      faces[2]
    );
  }

  // 2. The 1-ring of a segment somewhere in Europe
  let n = 12;
  let point = LatLng {
    lat: degs_to_rads(48.85),
    lng: degs_to_rads(2.35),
  };
  let seg = lat_lng_to_seg(&point, n)?;
  println!("\nNeighbors of seg {} at n = {}:", seg, n);
  for neighbor in seg_neighbors(n, seg)? {
    let (face, local) = decode_global(n, neighbor)?;
    println!("  {:>5} (face {:>2}, local {:>3})", neighbor, face, local);
  }

  // 3. The same ring seen from the face's own frame, for a corner segment
  println!("\nCanonical ring of local 0 at n = {}:", n);
  for (region, local) in local_neighbors(n, 0)? {
    println!("  {:?}: local {}", region, local);
  }

  Ok(())
}
