// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used, clippy::float_cmp)]
use lumen_math::{Mat4, MathError, Quat, Vec3, Vec4, Viewport};

const EPS: f32 = 1e-5;

fn approx_eq16(a: [f32; 16], b: [f32; 16], eps: f32) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= eps, "index {i}: {a:?} vs {b:?}");
    }
}

fn approx_vec3(a: Vec3, b: Vec3, eps: f32) {
    let (a, b) = (a.to_array(), b.to_array());
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= eps, "component {i}: {a:?} vs {b:?}");
    }
}

#[test]
fn mat4_mul_operator_matches_method() {
    let s = Mat4::scale(2.0, 3.0, 4.0);
    let r = Mat4::rotation_z(30.0);
    approx_eq16((r * s).to_array(), r.multiply(&s).to_array(), EPS);
    approx_eq16((s * r).to_array(), s.multiply(&r).to_array(), EPS);
}

#[test]
fn mat4_mul_assign_variants_work() {
    let lhs_rot_x = Mat4::rotation_x(45.0);
    let rhs_scale = Mat4::scale(2.0, 3.0, 4.0);
    let expected = (lhs_rot_x * rhs_scale).to_array();

    let mut owned = lhs_rot_x;
    owned *= rhs_scale;
    approx_eq16(owned.to_array(), expected, EPS);
    assert_ne!(owned.to_array(), lhs_rot_x.to_array());

    let mut borrowed = lhs_rot_x;
    borrowed *= &rhs_scale;
    approx_eq16(borrowed.to_array(), expected, EPS);
}

#[test]
fn product_applies_right_operand_first() {
    let t = Mat4::translation(10.0, 0.0, 0.0);
    let s = Mat4::scale(2.0, 2.0, 2.0);
    let p = Vec3::new(1.0, 1.0, 1.0);
    assert_eq!((t * s).transform_point(&p).to_array(), [12.0, 2.0, 2.0]);
    assert_eq!((s * t).transform_point(&p).to_array(), [22.0, 2.0, 2.0]);
}

#[test]
fn builders_post_multiply() {
    let built = Mat4::identity()
        .translated(1.0, 2.0, 3.0)
        .rotated(Vec3::UNIT_Y, 90.0)
        .scaled(2.0, 2.0, 2.0);
    let expected = Mat4::translation(1.0, 2.0, 3.0)
        * Mat4::rotation_axis_angle(Vec3::UNIT_Y, 90.0)
        * Mat4::scale(2.0, 2.0, 2.0);
    approx_eq16(built.to_array(), expected.to_array(), EPS);
    let moved = built.transform_point(&Vec3::UNIT_X);
    approx_vec3(moved, Vec3::new(1.0, 2.0, 1.0), EPS);
}

#[test]
fn axis_rotations_agree_with_quaternion_path() {
    for deg in [-135.0, -30.0, 0.0, 45.0, 90.0, 200.0] {
        approx_eq16(
            Mat4::rotation_x(deg).to_array(),
            Mat4::rotation_axis_angle(Vec3::UNIT_X, deg).to_array(),
            EPS,
        );
        approx_eq16(
            Mat4::rotation_y(deg).to_array(),
            Mat4::rotation_axis_angle(Vec3::UNIT_Y, deg).to_array(),
            EPS,
        );
        approx_eq16(
            Mat4::rotation_z(deg).to_array(),
            Mat4::rotation_axis_angle(Vec3::UNIT_Z, deg).to_array(),
            EPS,
        );
    }
}

#[test]
fn zero_angle_rotation_is_identity() {
    assert_eq!(
        Mat4::rotation_axis_angle(Vec3::new(0.3, -2.0, 1.0), 0.0),
        Mat4::identity()
    );
}

#[test]
fn euler_rotation_matches_quaternion_euler() {
    let m = Mat4::rotation_from_euler(30.0, -20.0, 75.0);
    let q = Quat::from_euler(30.0, -20.0, 75.0);
    approx_eq16(m.to_array(), q.to_mat4().to_array(), EPS);
}

#[test]
fn inverse_of_general_matrix_round_trips() {
    // Non-affine: perspective row is populated, so every cofactor matters.
    let m = Mat4::perspective(60.0, 1.5, 0.5, 40.0)
        * Mat4::look_at(Vec3::new(3.0, 2.0, 6.0), Vec3::ZERO, Vec3::UNIT_Y)
        * Mat4::scale(1.5, 0.5, 2.0);
    let inv = m.inverse().expect("invertible");
    approx_eq16((m * inv).to_array(), Mat4::identity().to_array(), 1e-4);
    approx_eq16((inv * m).to_array(), Mat4::identity().to_array(), 1e-4);
}

#[test]
fn inverse_matches_hand_computed_adjugate() {
    #[rustfmt::skip]
    let m = Mat4::new([
        2.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        1.0, 0.0, 0.0, 1.0,
    ]);
    #[rustfmt::skip]
    let expected = [
        0.5,  0.0, -0.5, 0.0,
        0.0,  1.0,  0.0, 0.0,
        0.0,  0.0,  1.0, 0.0,
        -0.5, 0.0,  0.5, 1.0,
    ];
    assert_eq!(m.determinant(), 2.0);
    approx_eq16(m.inverse().expect("invertible").to_array(), expected, EPS);
}

#[test]
fn singular_matrix_is_rejected() {
    let m = Mat4::from([
        1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
    ]);
    let err = m.inverse().unwrap_err();
    assert_eq!(err, MathError::SingularMatrix { determinant: 0.0 });
    assert!(Mat4::scale(1.0, 0.0, 1.0).inverse().is_err());
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let m = Mat4::translation(1.0, 2.0, 3.0).transpose();
    assert_eq!(m.at(3, 0), 1.0);
    assert_eq!(m.at(3, 1), 2.0);
    assert_eq!(m.at(3, 2), 3.0);
    assert_eq!(m.transpose(), Mat4::translation(1.0, 2.0, 3.0));
}

#[test]
fn perspective_layout_places_w_terms() {
    let p = Mat4::perspective(45.0, 4.0 / 3.0, 0.1, 100.0);
    assert!((p.at(0, 0) - 1.8107).abs() < 1e-4);
    assert!((p.at(1, 1) - 2.4142).abs() < 1e-4);
    assert!((p.at(2, 2) + 1.002).abs() < 1e-4);
    assert_eq!(p.at(3, 2), -1.0);
    assert!((p.at(2, 3) + 0.2002).abs() < 1e-4);
    assert_eq!(p.at(3, 3), 0.0);
}

#[test]
fn perspective_maps_near_and_far_to_ndc_bounds() {
    let p = Mat4::perspective(70.0, 1.0, 2.0, 50.0);
    let near = p.project_point(&Vec3::new(0.0, 0.0, -2.0));
    let far = p.project_point(&Vec3::new(0.0, 0.0, -50.0));
    assert!((near.z() + 1.0).abs() < 1e-5);
    assert!((far.z() - 1.0).abs() < 1e-5);
}

#[test]
fn orthographic_2d_maps_rectangle_to_ndc() {
    let m = Mat4::orthographic_2d(0.0, 0.0, 800.0, 600.0);
    approx_vec3(
        m.transform_point(&Vec3::new(800.0, 600.0, 0.0)),
        Vec3::new(1.0, 1.0, -1.0),
        EPS,
    );
    approx_vec3(
        m.transform_point(&Vec3::new(0.0, 0.0, 0.0)),
        Vec3::new(-1.0, -1.0, -1.0),
        EPS,
    );
}

#[test]
fn look_at_moves_eye_to_origin_and_target_down_negative_z() {
    let eye = Vec3::new(4.0, 3.0, 3.0);
    let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UNIT_Y);
    approx_vec3(view.transform_point(&eye), Vec3::ZERO, 1e-5);
    let target = view.transform_point(&Vec3::ZERO);
    approx_vec3(target, Vec3::new(0.0, 0.0, -eye.length()), 1e-5);
}

#[test]
fn world_is_inverse_of_look_at() {
    let pos = Vec3::new(-2.0, 5.0, 1.0);
    let forward = Vec3::new(1.0, -1.0, -2.0);
    let world = Mat4::world(pos, forward, Vec3::UNIT_Y);
    let view = Mat4::look_at(pos, pos.add(&forward), Vec3::UNIT_Y);
    approx_eq16((view * world).to_array(), Mat4::identity().to_array(), 1e-5);
    approx_vec3(world.extract_translation(), pos, 0.0);
}

#[test]
fn look_in_direction_has_no_translation() {
    let m = Mat4::look_in_direction(Vec3::new(0.0, 0.0, -1.0), Vec3::UNIT_Y);
    approx_eq16(m.to_array(), Mat4::identity().to_array(), EPS);
}

#[test]
fn transform_vec4_keeps_w_and_project_point_divides() {
    let p = Mat4::perspective(90.0, 1.0, 1.0, 10.0);
    let clip = p.transform_vec4(&Vec4::new(1.0, 1.0, -2.0, 1.0));
    assert!((clip.w() - 2.0).abs() < EPS);
    let ndc = p.project_point(&Vec3::new(1.0, 1.0, -2.0));
    approx_vec3(ndc, clip.truncate().scale(1.0 / clip.w()), EPS);
}

#[test]
fn project_centers_origin_in_viewport() {
    let mv = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::UNIT_Y);
    let proj = Mat4::perspective(60.0, 4.0 / 3.0, 1.0, 50.0);
    let vp = Viewport::new(0.0, 0.0, 800.0, 600.0);
    let win = Mat4::project(&Vec3::ZERO, &mv, &proj, &vp);
    assert!((win.x() - 400.0).abs() < 1e-3);
    assert!((win.y() - 300.0).abs() < 1e-3);
    assert!(win.z() > 0.0 && win.z() < 1.0);
}

#[test]
fn unproject_inverts_project() {
    let mv = Mat4::look_at(Vec3::new(1.0, 2.0, 8.0), Vec3::ZERO, Vec3::UNIT_Y);
    let proj = Mat4::perspective(60.0, 4.0 / 3.0, 1.0, 50.0);
    let vp = Viewport::new(10.0, 20.0, 800.0, 600.0);
    let p = Vec3::new(1.0, -0.5, 0.3);
    let win = Mat4::project(&p, &mv, &proj, &vp);
    let back = Mat4::unproject(&win, &mv, &proj, &vp).expect("invertible");
    approx_vec3(back, p, 1e-3);
}

#[test]
fn unproject_reports_singular_transform() {
    let vp = Viewport::new(0.0, 0.0, 100.0, 100.0);
    let err = Mat4::unproject(
        &Vec3::new(50.0, 50.0, 0.5),
        &Mat4::scale(0.0, 1.0, 1.0),
        &Mat4::identity(),
        &vp,
    );
    assert!(matches!(err, Err(MathError::SingularMatrix { .. })));
}

#[test]
fn decomposition_recovers_translation_and_rotation() {
    let q = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 40.0);
    let m = Mat4::translation(3.0, -1.0, 2.0) * q.to_mat4() * Mat4::scale(2.0, 2.0, 2.0);
    approx_vec3(m.extract_translation(), Vec3::new(3.0, -1.0, 2.0), 0.0);
    let r = m.to_quat();
    let same = r.approx_eq(&q, &lumen_math::Tolerance::LOOSE)
        || r.negate().approx_eq(&q, &lumen_math::Tolerance::LOOSE);
    assert!(same, "{r:?} vs {q:?}");
}

#[test]
fn translation_and_scale_equals_product() {
    let t = Vec3::new(1.0, 2.0, 3.0);
    let s = Vec3::new(4.0, 5.0, 6.0);
    assert_eq!(
        Mat4::translation_and_scale(t, s),
        Mat4::translation(1.0, 2.0, 3.0) * Mat4::scale(4.0, 5.0, 6.0)
    );
}

#[test]
fn rotation_between_aligns_directions() {
    let from = Vec3::new(0.0, 0.0, 3.0);
    let to = Vec3::new(1.0, 1.0, 0.0);
    let r = Mat4::rotation_between(from, to);
    approx_vec3(r.transform_direction(&from.normalize()), to.normalize(), 1e-5);
}
