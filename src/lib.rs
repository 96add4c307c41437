//! Scene description loading and ray/primitive intersection for a ray tracer.
//!
//! [`load_scene_file`] reads a scene document into a [`Scene`], the ordered
//! list of its cameras, shapes and lights. [`plane_intersection`] and
//! [`sphere_intersection`] give the distance along a ray to each kind of shape.

pub mod raytracer;

pub use raytracer::{
    load_scene_file, parse_scene, parse_scene_str, plane_intersection, sphere_intersection,
    Intersectable, Ray, Scene, SceneError, SceneObject,
};
