mod camera;
mod config_builder;
mod error;
pub mod light;
mod object;
mod object_builder;
pub mod scanner;
pub mod shapes;

pub use camera::Camera;
pub use config_builder::{load_scene_file, parse_scene, parse_scene_str, Hit, Scene};
pub use error::{SceneError, SceneResult, SyntaxError};
pub use light::{Light, SpotCone};
pub use object::SceneObject;
pub use object_builder::{ObjectBuilder, ObjectKind};
