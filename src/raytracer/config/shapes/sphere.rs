use crate::raytracer::intersection::{sphere_intersection, Intersectable, Ray};
use glam::DVec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub position: DVec3,
    pub color: DVec3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(position: DVec3, color: DVec3, radius: f64) -> Self {
        Sphere {
            position,
            color,
            radius,
        }
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        sphere_intersection(ray.origin, ray.direction, self.position, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect() {
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, -5.0), DVec3::new(255.0, 0.0, 0.0), 1.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::NEG_Z);
        assert_eq!(sphere.intersect(&ray), Some(4.0));
        assert_eq!(sphere.intersect(&Ray::new(DVec3::ZERO, DVec3::Z)), None);
    }
}
