//! Closed-form ray/primitive intersection.
//!
//! Every function returns the distance along the ray to the hit, measured in
//! multiples of `direction`, or `None` when the ray misses. Distances are never
//! negative.

use glam::DVec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Ray { origin, direction }
    }

    pub fn at(&self, distance: f64) -> DVec3 {
        self.origin + self.direction * distance
    }
}

pub trait Intersectable {
    fn intersect(&self, ray: &Ray) -> Option<f64>;
}

/// Distance to the plane through `position` with normal `normal`.
///
/// A ray lying parallel to the plane never hits it, even when it lies inside
/// the plane. A hit exactly at the origin (`t == 0`) counts.
pub fn plane_intersection(
    origin: DVec3,
    direction: DVec3,
    position: DVec3,
    normal: DVec3,
) -> Option<f64> {
    let a = normal.dot(direction);
    if a == 0.0 || !a.is_finite() {
        return None;
    }
    let d = (position - origin).dot(normal);
    let t = d / a;

    if t.is_finite() && t >= 0.0 {
        Some(t)
    } else {
        None
    }
}

/// Nearest positive distance to the sphere at `center`.
///
/// When the near root is not in front of the origin (the origin is inside the
/// sphere or on its surface) the far root is used instead.
pub fn sphere_intersection(
    origin: DVec3,
    direction: DVec3,
    center: DVec3,
    radius: f64,
) -> Option<f64> {
    let oc = origin - center;
    let a = direction.length_squared();
    if a == 0.0 || !a.is_finite() {
        return None;
    }
    let b = 2.0 * direction.dot(oc);
    let c = oc.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 || !discriminant.is_finite() {
        return None;
    }
    let root = discriminant.sqrt();

    let t0 = (-b - root) / (2.0 * a);
    if t0 > 0.0 {
        return Some(t0);
    }
    let t1 = (-b + root) / (2.0 * a);
    if t1 > 0.0 {
        return Some(t1);
    }
    None
}
