use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xs_geoseg::*;

fn bench_seg_neighbors(c: &mut Criterion) {
  let n = 64;
  // Interior segment on face 3, and the bottom corner of face 3 at its origin.
  let interior = encode_global(n, 3, encode_local(n, 20, 20, true).unwrap()).unwrap();
  let corner = encode_global(n, 3, 0).unwrap();

  c.benchmark_group("seg_neighbors")
    .bench_function("interior", |b| b.iter(|| seg_neighbors(black_box(n), black_box(interior))))
    .bench_function("face_corner", |b| b.iter(|| seg_neighbors(black_box(n), black_box(corner))));
}

fn bench_local_neighbors(c: &mut Criterion) {
  let n = 64;
  c.benchmark_group("local_neighbors")
    .bench_function("canonical_corner", |b| b.iter(|| local_neighbors(black_box(n), black_box(0))))
    .bench_function("inside", |b| b.iter(|| inside_neighbors(black_box(n), black_box(500))));
}

fn bench_full_ring_sweep(c: &mut Criterion) {
  let n = 8;
  let cells = get_num_cells(n).unwrap() as u32;
  c.bench_function("seg_neighbors_sweep_n8", |b| {
    b.iter(|| {
      let mut total = 0usize;
      for id in 0..cells {
        total += seg_neighbors(n, SegIndex(id)).map_or(0, |ring| ring.len());
      }
      black_box(total)
    });
  });
}

criterion_group!(traversal_benches, bench_seg_neighbors, bench_local_neighbors, bench_full_ring_sweep);
criterion_main!(traversal_benches);
