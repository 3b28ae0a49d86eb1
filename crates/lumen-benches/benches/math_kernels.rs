// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: core matrix, quaternion, and vector kernels.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lumen_math::{Mat4, Quat, Vec3};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_vec3(rng: &mut StdRng, range: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
    )
}

fn random_affine(rng: &mut StdRng) -> Mat4 {
    let t = random_vec3(rng, 100.0);
    let axis = random_vec3(rng, 1.0);
    Mat4::translation(t.x(), t.y(), t.z())
        * Mat4::rotation_axis_angle(axis, rng.gen_range(-180.0..180.0))
        * Mat4::scale(2.0, 0.5, 1.5)
}

fn bench_mat4(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x4c55_4d45);
    let a = random_affine(&mut rng);
    let b = random_affine(&mut rng);
    let mut group = c.benchmark_group("mat4");
    group.bench_function("multiply", |bench| {
        bench.iter(|| black_box(&a).multiply(black_box(&b)));
    });
    group.bench_function("inverse", |bench| {
        bench.iter(|| black_box(&a).inverse());
    });
    group.bench_function("determinant", |bench| {
        bench.iter(|| black_box(&a).determinant());
    });
    let p = random_vec3(&mut rng, 10.0);
    group.bench_function("project_point", |bench| {
        bench.iter(|| black_box(&a).project_point(black_box(&p)));
    });
    group.finish();
}

fn bench_quat(c: &mut Criterion) {
    let q0 = Quat::from_axis_angle(Vec3::UNIT_Y, 10.0);
    let q1 = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 170.0);
    let near = Quat::from_axis_angle(Vec3::UNIT_Y, 12.0);
    let mut group = c.benchmark_group("quat");
    group.bench_function("slerp_spherical", |bench| {
        bench.iter(|| black_box(&q0).slerp(black_box(&q1), black_box(0.37)));
    });
    group.bench_function("slerp_linear_fallback", |bench| {
        bench.iter(|| black_box(&q0).slerp(black_box(&near), black_box(0.37)));
    });
    group.bench_function("to_mat4", |bench| {
        bench.iter(|| black_box(&q1).to_mat4());
    });
    group.finish();
}

fn bench_vec3(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let vs: Vec<Vec3> = (0..1_024).map(|_| random_vec3(&mut rng, 50.0)).collect();
    c.bench_function("vec3_normalize_1k", |bench| {
        bench.iter(|| {
            vs.iter()
                .map(Vec3::normalize)
                .fold(0.0_f32, |acc, v| acc + v.x())
        });
    });
}

criterion_group!(benches, bench_mat4, bench_quat, bench_vec3);
criterion_main!(benches);
