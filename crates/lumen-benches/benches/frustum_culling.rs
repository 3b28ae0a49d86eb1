// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::expect_used)]
//! Benchmark: frustum culling throughput for points, spheres, and boxes.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lumen_geom::{Aabb, Frustum};
use lumen_math::{Mat4, Vec3};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn camera() -> Frustum {
    let proj = Mat4::perspective(60.0, 16.0 / 9.0, 0.1, 500.0);
    let view = Mat4::look_at(Vec3::new(0.0, 10.0, 30.0), Vec3::ZERO, Vec3::UNIT_Y);
    Frustum::from_projection_view(&(proj * view)).expect("camera invertible")
}

fn scatter(n: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-200.0..200.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-400.0..100.0),
            )
        })
        .collect()
}

fn bench_culling(c: &mut Criterion) {
    let frustum = camera();
    let mut group = c.benchmark_group("frustum_culling");
    for &n in &[100usize, 1_000, 10_000] {
        let points = scatter(n, n as u64);
        let boxes: Vec<Aabb> = points
            .iter()
            .map(|p| Aabb::from_center_half_extents(*p, 1.0, 2.0, 1.0))
            .collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("points", n), &points, |b, pts| {
            b.iter(|| pts.iter().filter(|p| frustum.point_in_frustum(p)).count());
        });
        group.bench_with_input(BenchmarkId::new("spheres", n), &points, |b, pts| {
            b.iter(|| pts.iter().filter(|p| frustum.sphere_in_frustum(p, 1.5)).count());
        });
        group.bench_with_input(BenchmarkId::new("boxes", n), &boxes, |b, bxs| {
            b.iter(|| bxs.iter().filter(|bb| frustum.bounds_in_frustum(bb)).count());
        });
    }
    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let proj = Mat4::perspective(60.0, 16.0 / 9.0, 0.1, 500.0);
    let inv = proj.inverse().expect("projection invertible");
    let mut frustum = camera();
    c.bench_function("frustum_update", |b| {
        b.iter(|| frustum.update(&inv));
    });
}

criterion_group!(benches, bench_culling, bench_rebuild);
criterion_main!(benches);
