// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::expect_used, clippy::float_cmp)]
//! Planes, rays, segments, transforms, and intersection queries.

use lumen_geom::intersect::{is_point_in_triangle, ray_aabb, ray_plane, ray_sphere};
use lumen_geom::{Aabb, MathError, Plane, PlaneSide, Ray, Segment, Sphere, Transform};
use lumen_math::{Mat4, Quat, Vec3, Viewport};

fn approx_vec3(a: Vec3, b: Vec3, eps: f32) {
    assert!(a.distance(&b) <= eps, "{a:?} vs {b:?}");
}

#[test]
fn plane_normal_is_normalised() {
    let p = Plane::new(Vec3::new(0.0, 3.0, 0.0), -6.0);
    assert_eq!(p.normal().to_array(), [0.0, 1.0, 0.0]);
    assert_eq!(p.d(), -6.0);
    assert_eq!(p.distance(&Vec3::new(9.0, 8.0, -1.0)), 2.0);
}

#[test]
fn plane_side_classification() {
    let p = Plane::from_normal_and_point(Vec3::UNIT_Z, Vec3::new(0.0, 0.0, 2.0));
    assert_eq!(p.side(&Vec3::new(1.0, 1.0, 3.0)), PlaneSide::Front);
    assert_eq!(p.side(&Vec3::new(1.0, 1.0, 1.0)), PlaneSide::Back);
    assert_eq!(p.side(&Vec3::new(-4.0, 7.0, 2.0)), PlaneSide::OnPlane);
}

#[test]
fn plane_from_points_follows_winding() {
    let a = Vec3::ZERO;
    let b = Vec3::UNIT_X;
    let c = Vec3::UNIT_Y;
    // (a − b) × (b − c) = (−1,0,0) × (1,−1,0) = (0,0,1)
    let p = Plane::from_points(a, b, c);
    approx_vec3(p.normal(), Vec3::UNIT_Z, 1e-6);
    assert_eq!(p.d(), 0.0);
    let flipped = Plane::from_points(a, c, b);
    approx_vec3(flipped.normal(), Vec3::UNIT_Z.negate(), 1e-6);
}

#[test]
fn plane_front_facing() {
    let p = Plane::new(Vec3::UNIT_Z, 0.0);
    assert!(p.is_front_facing(&Vec3::new(0.0, 0.0, -1.0)));
    assert!(p.is_front_facing(&Vec3::UNIT_X), "grazing counts as front");
    assert!(!p.is_front_facing(&Vec3::UNIT_Z));
}

#[test]
fn ray_end_point_and_transform() {
    let r = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::UNIT_Y);
    assert_eq!(r.end_point(2.5).to_array(), [1.0, 2.5, 0.0]);

    let moved = r.transformed(&Mat4::translation(0.0, 0.0, 4.0));
    assert_eq!(moved.origin().to_array(), [1.0, 0.0, 4.0]);
    assert_eq!(moved.direction(), Vec3::UNIT_Y);

    let stretched = r.transformed(&Mat4::scale(1.0, 3.0, 1.0));
    assert_eq!(stretched.direction().to_array(), [0.0, 3.0, 0.0]);
}

#[test]
fn pick_ray_through_viewport_centre() {
    let eye = Vec3::new(0.0, 0.0, 5.0);
    let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UNIT_Y);
    let proj = Mat4::perspective(60.0, 1.0, 1.0, 100.0);
    let vp = Viewport::new(0.0, 0.0, 100.0, 100.0);

    let r = Ray::pick(50.0, 50.0, &view, &proj, &vp).expect("invertible camera");
    approx_vec3(r.origin(), Vec3::new(0.0, 0.0, 4.0), 1e-4);
    approx_vec3(r.direction(), Vec3::new(0.0, 0.0, -1.0), 1e-4);
    assert!(r.direction().is_unit());
}

#[test]
fn pick_ray_fails_on_singular_camera() {
    let vp = Viewport::new(0.0, 0.0, 10.0, 10.0);
    let flat = Mat4::scale(1.0, 0.0, 1.0);
    let err = Ray::pick(1.0, 1.0, &Mat4::identity(), &flat, &vp).expect_err("singular");
    assert!(matches!(err, MathError::SingularMatrix { .. }));
}

#[test]
fn segment_measures() {
    let s = Segment::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(4.0, 5.0, 1.0));
    assert_eq!(s.length(), 5.0);
    assert_eq!(s.length_squared(), 25.0);
    assert_eq!(s.midpoint().to_array(), [2.5, 3.0, 1.0]);
    assert_eq!(s.a().to_array(), [1.0, 1.0, 1.0]);
    assert_eq!(s.b().to_array(), [4.0, 5.0, 1.0]);
}

#[test]
fn transform_applies_scale_then_rotation_then_translation() {
    let t = Transform::new(
        Vec3::new(10.0, 0.0, 0.0),
        Quat::from_axis_angle(Vec3::UNIT_Z, 90.0),
        Vec3::new(2.0, 1.0, 1.0),
    );
    let p = t.transform_point(&Vec3::UNIT_X);
    approx_vec3(p, Vec3::new(10.0, 2.0, 0.0), 1e-5);
    approx_vec3(t.to_mat4().transform_point(&Vec3::UNIT_X), p, 1e-5);
}

#[test]
fn transform_identity_and_builders() {
    let id = Transform::identity();
    assert_eq!(id, Transform::default());
    assert_eq!(id.to_mat4(), Mat4::identity());

    let t = id
        .with_translation(Vec3::new(1.0, 2.0, 3.0))
        .with_scale(Vec3::splat(2.0));
    assert_eq!(t.translation().to_array(), [1.0, 2.0, 3.0]);
    assert_eq!(t.scale().to_array(), [2.0, 2.0, 2.0]);
    assert_eq!(t.rotation(), Quat::identity());
    assert_eq!(t.transform_point(&Vec3::splat(1.0)).to_array(), [3.0, 4.0, 5.0]);

    let q = Quat::from_axis_angle(Vec3::UNIT_Y, 30.0);
    assert_eq!(t.with_rotation(q).rotation(), q);
}

#[test]
fn point_in_triangle_inside_outside_and_edge() {
    let a = Vec3::ZERO;
    let b = Vec3::new(2.0, 0.0, 0.0);
    let c = Vec3::new(0.0, 2.0, 0.0);
    assert!(is_point_in_triangle(Vec3::new(0.5, 0.5, 0.0), a, b, c));
    assert!(!is_point_in_triangle(Vec3::new(2.0, 0.5, 0.0), a, b, c));
    assert!(is_point_in_triangle(Vec3::new(1.0, 0.0, 0.0), a, b, c), "edge");
    assert!(!is_point_in_triangle(Vec3::new(-0.1, 0.5, 0.0), a, b, c));
}

#[test]
fn ray_plane_hits_and_misses() {
    let ground = Plane::new(Vec3::UNIT_Y, 0.0);
    let down = Ray::new(Vec3::new(3.0, 10.0, -1.0), Vec3::new(0.0, -1.0, 0.0));
    let t = ray_plane(&down, &ground).expect("hits the ground");
    assert_eq!(t, 10.0);
    assert_eq!(down.end_point(t).to_array(), [3.0, 0.0, -1.0]);

    let up = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::UNIT_Y);
    assert_eq!(ray_plane(&up, &ground), None, "crossing is behind the origin");
    let level = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::UNIT_X);
    assert_eq!(ray_plane(&level, &ground), None, "parallel");
}

#[test]
fn ray_sphere_reports_nearest_hit() {
    let s = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0);
    let r = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(ray_sphere(&r, &s), Some(8.0));

    let inside = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(ray_sphere(&inside, &s), Some(2.0));

    let away = Ray::new(Vec3::ZERO, Vec3::UNIT_Z);
    assert_eq!(ray_sphere(&away, &s), None);
    let wide = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(ray_sphere(&wide, &s), None);
}

#[test]
fn ray_aabb_slab_test() {
    let b = Aabb::new(Vec3::new(-1.0, -1.0, -6.0), Vec3::new(1.0, 1.0, -4.0));
    let r = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(ray_aabb(&r, &b), Some((4.0, 6.0)));

    let from_inside = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(ray_aabb(&from_inside, &b), Some((0.0, 1.0)));

    let behind = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(ray_aabb(&behind, &b), None);
    let beside = Ray::new(Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(ray_aabb(&beside, &b), None);
}
