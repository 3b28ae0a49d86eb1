// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Point-in-triangle and ray intersection queries.
//!
//! Ray queries return the ray parameter `t` of the hit; callers turn it into a
//! point with [`Ray::end_point`]. Hits behind the ray origin are rejected.

use lumen_math::{Vec3, EPSILON};

use crate::{Aabb, Plane, Ray, Sphere};

/// Returns whether `point` lies inside the triangle `t1, t2, t3`.
///
/// The point is assumed to lie on the triangle's plane; this is not checked.
/// Points on an edge count as inside.
///
/// ```
/// use lumen_geom::intersect::is_point_in_triangle;
/// use lumen_math::Vec3;
/// let (a, b, c) = (Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
/// assert!(is_point_in_triangle(Vec3::new(0.5, 0.5, 0.0), a, b, c));
/// assert!(!is_point_in_triangle(Vec3::new(2.0, 0.5, 0.0), a, b, c));
/// ```
pub fn is_point_in_triangle(point: Vec3, t1: Vec3, t2: Vec3, t3: Vec3) -> bool {
    let v0 = t1.sub(&point);
    let v1 = t2.sub(&point);
    let v2 = t3.sub(&point);

    let ab = v0.dot(&v1);
    let ac = v0.dot(&v2);
    let bc = v1.dot(&v2);
    let cc = v2.dot(&v2);
    if bc * ac - cc * ab < 0.0 {
        return false;
    }
    let bb = v1.dot(&v1);
    ab * bc - ac * bb >= 0.0
}

/// Ray parameter where `ray` crosses `plane`.
///
/// `None` when the ray runs parallel to the plane or the crossing is behind
/// the origin.
pub fn ray_plane(ray: &Ray, plane: &Plane) -> Option<f32> {
    let denom = plane.normal().dot(&ray.direction());
    if denom.abs() < EPSILON {
        return None;
    }
    let t = -plane.distance(&ray.origin()) / denom;
    (t >= 0.0).then_some(t)
}

/// Nearest non-negative ray parameter where `ray` meets `sphere`.
///
/// A ray starting inside the sphere reports its exit point.
pub fn ray_sphere(ray: &Ray, sphere: &Sphere) -> Option<f32> {
    let oc = ray.origin().sub(&sphere.center());
    let dir = ray.direction();
    let a = dir.length_squared();
    if a <= 0.0 {
        return None;
    }
    let b = 2.0 * oc.dot(&dir);
    let c = oc.length_squared() - sphere.radius() * sphere.radius();
    let disc = b.mul_add(b, -4.0 * a * c);
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let near = (-b - root) / (2.0 * a);
    let far = (-b + root) / (2.0 * a);
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

/// Entry and exit parameters of `ray` through `bounds` (slab method).
///
/// The entry is clamped to zero when the origin is inside the box. Axis
/// parallel rays rely on IEEE infinities from the reciprocal direction.
pub fn ray_aabb(ray: &Ray, bounds: &Aabb) -> Option<(f32, f32)> {
    let origin = ray.origin().to_array();
    let dir = ray.direction().to_array();
    let lo = bounds.min().to_array();
    let hi = bounds.max().to_array();

    let (t_min, t_max) = (0..3).fold(
        (f32::NEG_INFINITY, f32::INFINITY),
        |(t_min, t_max), axis| {
            let inv = 1.0 / dir[axis];
            let t1 = (lo[axis] - origin[axis]) * inv;
            let t2 = (hi[axis] - origin[axis]) * inv;
            (t_min.max(t1.min(t2)), t_max.min(t1.max(t2)))
        },
    );

    (t_max >= t_min && t_max >= 0.0).then_some((t_min.max(0.0), t_max))
}
