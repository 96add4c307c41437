pub mod config;
pub mod intersection;

pub use config::{load_scene_file, parse_scene, parse_scene_str, Scene, SceneError, SceneObject};
pub use intersection::{plane_intersection, sphere_intersection, Intersectable, Ray};
