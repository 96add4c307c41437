use crate::raytracer::intersection::{plane_intersection, Intersectable, Ray};
use glam::DVec3;

/// An infinite plane through `position`. `normal` is kept as given and need
/// not be unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub position: DVec3,
    pub color: DVec3,
    pub normal: DVec3,
}

impl Plane {
    pub fn new(position: DVec3, color: DVec3, normal: DVec3) -> Self {
        Plane {
            position,
            color,
            normal,
        }
    }
}

impl Intersectable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        plane_intersection(ray.origin, ray.direction, self.position, self.normal)
    }
}
