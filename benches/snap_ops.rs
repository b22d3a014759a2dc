//! Benchmarks for UV editing operations.

use criterion::{criterion_group, criterion_main, Criterion};
use skerry::algo::bounds::bounding_box;
use skerry::algo::snap::{snap_islands, SnapOptions};
use skerry::prelude::*;

/// Build an n x n grid of quad faces laid out in UV space with the given
/// offset, one island per grid.
fn create_grid_island(n: usize, offset: f64) -> (UvMesh, Island) {
    let mut faces = Vec::with_capacity(n * n);
    let step = 1.0 / n as f64;

    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            let u0 = offset + i as f64 * step;
            let v0 = j as f64 * step;
            faces.push((
                vec![v00, v10, v11, v01],
                vec![
                    [u0, v0],
                    [u0 + step, v0],
                    [u0 + step, v0 + step],
                    [u0, v0 + step],
                ],
            ));
        }
    }

    let mesh = build_from_uv_polygons((n + 1) * (n + 1), &faces).unwrap();
    let island = Island::from_indices(&(0..n * n).collect::<Vec<_>>());
    (mesh, island)
}

/// Merge two grids into one mesh: the scanned island and a candidate island
/// shifted slightly off it.
fn two_grid_mesh(n: usize) -> (UvMesh, Island, Island) {
    let (mesh_a, _) = create_grid_island(n, 0.0);
    let (mesh_b, _) = create_grid_island(n, 0.001);

    let num_faces = mesh_a.num_faces();
    let mut faces = Vec::with_capacity(num_faces * 2);
    for m in [&mesh_a, &mesh_b] {
        let layer = m.active_layer().unwrap();
        let coords = m.layer(layer).as_slice();
        for f in m.face_ids() {
            let idx: Vec<usize> = m.face_corners(f).map(|c| m.corner(c).vertex.index()).collect();
            let uvs: Vec<[f64; 2]> = m
                .face_corners(f)
                .map(|c| [coords[c.index()].x, coords[c.index()].y])
                .collect();
            faces.push((idx, uvs));
        }
    }

    let mesh = build_from_uv_polygons((n + 1) * (n + 1), &faces).unwrap();
    let scanned = Island::from_indices(&(0..num_faces).collect::<Vec<_>>());
    let candidates = Island::from_indices(&(num_faces..num_faces * 2).collect::<Vec<_>>());
    (mesh, scanned, candidates)
}

fn bench_bounding_box(c: &mut Criterion) {
    let (mut mesh, island) = create_grid_island(20, 0.0);
    let islands = vec![island];

    c.bench_function("bounding_box_grid_20x20", |b| {
        let session = UvEditSession::begin(&mut mesh).unwrap();
        b.iter(|| bounding_box(&session, &islands).unwrap());
    });
}

fn bench_snap(c: &mut Criterion) {
    c.bench_function("snap_grid_10x10_sequential", |b| {
        let (mut mesh, scanned, candidate) = two_grid_mesh(10);
        let candidates = vec![candidate];
        let options = SnapOptions::new(0.01).sequential();
        b.iter(|| {
            let mut session = UvEditSession::begin(&mut mesh).unwrap();
            snap_islands(&mut session, &scanned, &candidates, &options).unwrap()
        });
    });

    c.bench_function("snap_grid_10x10_parallel", |b| {
        let (mut mesh, scanned, candidate) = two_grid_mesh(10);
        let candidates = vec![candidate];
        let options = SnapOptions::new(0.01);
        b.iter(|| {
            let mut session = UvEditSession::begin(&mut mesh).unwrap();
            snap_islands(&mut session, &scanned, &candidates, &options).unwrap()
        });
    });
}

criterion_group!(benches, bench_bounding_box, bench_snap);
criterion_main!(benches);
