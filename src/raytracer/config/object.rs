use crate::raytracer::config::camera::Camera;
use crate::raytracer::config::light::Light;
use crate::raytracer::config::object_builder::ObjectKind;
use crate::raytracer::config::shapes::{Plane, Sphere};
use crate::raytracer::intersection::{Intersectable, Ray};
use glam::DVec3;
use std::fmt;

/// One entry of a scene document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneObject {
    Camera(Camera),
    Sphere(Sphere),
    Plane(Plane),
    Light(Light),
}

impl SceneObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            SceneObject::Camera(_) => ObjectKind::Camera,
            SceneObject::Sphere(_) => ObjectKind::Sphere,
            SceneObject::Plane(_) => ObjectKind::Plane,
            SceneObject::Light(_) => ObjectKind::Light,
        }
    }

    /// Surface color of a shape, `None` for cameras and lights.
    pub fn color(&self) -> Option<DVec3> {
        match self {
            SceneObject::Sphere(sphere) => Some(sphere.color),
            SceneObject::Plane(plane) => Some(plane.color),
            SceneObject::Camera(_) | SceneObject::Light(_) => None,
        }
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, SceneObject::Sphere(_) | SceneObject::Plane(_))
    }
}

impl Intersectable for SceneObject {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            SceneObject::Sphere(sphere) => sphere.intersect(ray),
            SceneObject::Plane(plane) => plane.intersect(ray),
            SceneObject::Camera(_) | SceneObject::Light(_) => None,
        }
    }
}

struct Vector(DVec3);

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.0.x, self.0.y, self.0.z)
    }
}

/// Writes the object in scene-document syntax, on a single line.
impl fmt::Display for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ \"type\": \"{}\"", self.kind())?;
        match self {
            SceneObject::Camera(camera) => {
                write!(f, ", \"width\": {}, \"height\": {}", camera.width, camera.height)?;
            }
            SceneObject::Sphere(sphere) => {
                write!(
                    f,
                    ", \"color\": {}, \"position\": {}, \"radius\": {}",
                    Vector(sphere.color),
                    Vector(sphere.position),
                    sphere.radius
                )?;
            }
            SceneObject::Plane(plane) => {
                write!(
                    f,
                    ", \"color\": {}, \"position\": {}, \"normal\": {}",
                    Vector(plane.color),
                    Vector(plane.position),
                    Vector(plane.normal)
                )?;
            }
            SceneObject::Light(light) => {
                write!(
                    f,
                    ", \"color\": {}, \"position\": {}, \"radial_a0\": {}, \"radial_a1\": {}, \"radial_a2\": {}",
                    Vector(light.color),
                    Vector(light.position),
                    light.radial.x,
                    light.radial.y,
                    light.radial.z
                )?;
                if let Some(spot) = &light.spot {
                    write!(
                        f,
                        ", \"theta\": {}, \"angular_a0\": {}, \"direction\": {}",
                        spot.theta,
                        spot.angular_a0,
                        Vector(spot.direction)
                    )?;
                }
            }
        }
        write!(f, " }}")
    }
}
