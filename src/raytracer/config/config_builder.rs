use crate::raytracer::config::camera::Camera;
use crate::raytracer::config::error::{SceneError, SceneResult, SyntaxError};
use crate::raytracer::config::light::Light;
use crate::raytracer::config::object::SceneObject;
use crate::raytracer::config::object_builder::{ObjectBuilder, ObjectKind};
use crate::raytracer::config::scanner::Scanner;
use crate::raytracer::intersection::{Intersectable, Ray};

use log::{debug, info};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The objects of a scene document, in file order.
///
/// Objects are only reachable through the getters, so a `Scene` always holds
/// what the parser validated: at most one camera and fully populated records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

/// Nearest object hit by a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<'a> {
    pub object: &'a SceneObject,
    pub distance: f64,
}

impl Scene {
    /// Returns every object of the scene, the camera included, in file order.
    pub fn get_scene_objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn get_camera(&self) -> Option<&Camera> {
        self.objects.iter().find_map(|object| match object {
            SceneObject::Camera(camera) => Some(camera),
            _ => None,
        })
    }

    pub fn get_lights(&self) -> impl Iterator<Item = &Light> {
        self.objects.iter().filter_map(|object| match object {
            SceneObject::Light(light) => Some(light),
            _ => None,
        })
    }

    /// Returns the spheres and planes of the scene.
    pub fn get_shapes(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|object| object.is_shape())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Finds the closest shape in front of the ray. On a tie the object that
    /// comes first in the file wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        self.objects
            .iter()
            .filter_map(|object| object.intersect(ray).map(|distance| Hit { object, distance }))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    pub fn log_summary(&self) {
        info!("Scene summary:");
        match self.get_camera() {
            Some(camera) => info!("Camera: {}x{}", camera.width, camera.height),
            None => info!("Camera: none"),
        }
        let count = |kind| self.objects.iter().filter(|o| o.kind() == kind).count();
        info!("Spheres: {}", count(ObjectKind::Sphere));
        info!("Planes: {}", count(ObjectKind::Plane));
        info!(
            "Lights: {} ({} spot)",
            count(ObjectKind::Light),
            self.get_lights().filter(|light| light.is_spot()).count()
        );
    }
}

/// Writes the scene back as a scene document that parses to the same objects.
impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for (i, object) in self.objects.iter().enumerate() {
            let separator = if i + 1 < self.objects.len() { "," } else { "" };
            writeln!(f, "  {object}{separator}")?;
        }
        writeln!(f, "]")
    }
}

/// Loads and parses a scene file
///
/// The file is closed when this returns, whether parsing succeeded or not.
///
/// # Arguments
/// * `file_path` - Path to the scene file to load
///
/// # Returns
/// * `Ok(Scene)` - The objects of the scene, in file order
/// * `Err(SceneError)` - The first problem found in the file
pub fn load_scene_file(file_path: impl AsRef<Path>) -> SceneResult<Scene> {
    let file_path = file_path.as_ref();
    debug!("Loading scene from {}", file_path.display());
    let file = File::open(file_path)?;
    parse_scene(file)
}

pub fn parse_scene_str(source: &str) -> SceneResult<Scene> {
    parse_scene(source.as_bytes())
}

/// Parses a scene document from `reader`.
///
/// Reading stops at the bracket closing the top-level list; whatever follows
/// it is left unread.
pub fn parse_scene<R: Read>(reader: R) -> SceneResult<Scene> {
    let mut scanner = Scanner::new(reader);

    scanner.skip_whitespace()?;
    scanner.expect_char(b'[')?;
    scanner.skip_whitespace()?;
    if scanner.peek_char()? == b']' {
        return Err(SceneError::EmptyScene);
    }

    let mut objects = Vec::new();
    let mut camera_seen = false;
    loop {
        let object = parse_object(&mut scanner)?;
        if let SceneObject::Camera(_) = object {
            if camera_seen {
                return Err(SceneError::DuplicateCamera {
                    line: scanner.line(),
                });
            }
            camera_seen = true;
        }
        debug!("Parsed {} ending on line {}", object.kind(), scanner.line());
        objects.push(object);

        scanner.skip_whitespace()?;
        match scanner.next_char()? {
            b',' => scanner.skip_whitespace()?,
            b']' => break,
            _ => return Err(scanner.syntax(SyntaxError::ExpectedSeparator)),
        }
    }

    debug!("Scene has {} objects", objects.len());
    Ok(Scene { objects })
}

/// Parses one `{ "type": ..., ... }` entry.
fn parse_object<R: Read>(scanner: &mut Scanner<R>) -> SceneResult<SceneObject> {
    scanner.expect_char(b'{')?;
    scanner.skip_whitespace()?;
    if scanner.read_string()? != "type" {
        return Err(scanner.syntax(SyntaxError::ExpectedTypeKey));
    }
    scanner.skip_whitespace()?;
    scanner.expect_char(b':')?;
    scanner.skip_whitespace()?;

    let line = scanner.line();
    let type_name = scanner.read_string()?;
    let kind = ObjectKind::from_type_name(&type_name).ok_or(SceneError::UnknownObjectType {
        value: type_name,
        line,
    })?;

    ObjectBuilder::new(kind).read_fields(scanner)
}
