use crate::raytracer::config::camera::Camera;
use crate::raytracer::config::error::{SceneError, SceneResult, SyntaxError};
use crate::raytracer::config::light::{Light, SpotCone};
use crate::raytracer::config::object::SceneObject;
use crate::raytracer::config::scanner::Scanner;
use crate::raytracer::config::shapes::{Plane, Sphere};
use glam::DVec3;
use log::trace;
use std::fmt;
use std::io::Read;

pub const MAX_COLOR: f64 = 255.0;

/// The `"type"` of a scene object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Camera,
    Sphere,
    Plane,
    Light,
}

impl ObjectKind {
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "camera" => Some(ObjectKind::Camera),
            "sphere" => Some(ObjectKind::Sphere),
            "plane" => Some(ObjectKind::Plane),
            "light" => Some(ObjectKind::Light),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ObjectKind::Camera => "camera",
            ObjectKind::Sphere => "sphere",
            ObjectKind::Plane => "plane",
            ObjectKind::Light => "light",
        }
    }

    fn fields(&self) -> &'static [FieldSpec] {
        match self {
            ObjectKind::Camera => CAMERA_FIELDS,
            ObjectKind::Sphere => SPHERE_FIELDS,
            ObjectKind::Plane => PLANE_FIELDS,
            ObjectKind::Light => LIGHT_FIELDS,
        }
    }

    fn field(&self, name: &str) -> Option<(usize, &'static FieldSpec)> {
        self.fields()
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.name == name)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FieldShape {
    Number,
    Vector,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rule {
    Any,
    /// `x >= 1`
    AtLeastOne,
    /// every component in `[0, 255]`
    Color,
    NonNegative,
    /// degrees in `(0, 180]`
    Angle,
    NonZero,
}

#[derive(Debug)]
struct FieldSpec {
    name: &'static str,
    shape: FieldShape,
    rule: Rule,
    required: bool,
}

impl FieldSpec {
    const fn number(name: &'static str, rule: Rule) -> Self {
        FieldSpec {
            name,
            shape: FieldShape::Number,
            rule,
            required: true,
        }
    }

    const fn vector(name: &'static str, rule: Rule) -> Self {
        FieldSpec {
            name,
            shape: FieldShape::Vector,
            rule,
            required: true,
        }
    }

    const fn optional(self) -> Self {
        FieldSpec {
            required: false,
            ..self
        }
    }
}

const CAMERA_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("width", Rule::AtLeastOne),
    FieldSpec::number("height", Rule::AtLeastOne),
];

const SPHERE_FIELDS: &[FieldSpec] = &[
    FieldSpec::vector("color", Rule::Color),
    FieldSpec::vector("position", Rule::Any),
    FieldSpec::number("radius", Rule::AtLeastOne),
];

const PLANE_FIELDS: &[FieldSpec] = &[
    FieldSpec::vector("color", Rule::Color),
    FieldSpec::vector("position", Rule::Any),
    FieldSpec::vector("normal", Rule::Any),
];

const LIGHT_FIELDS: &[FieldSpec] = &[
    FieldSpec::vector("color", Rule::Color),
    FieldSpec::vector("position", Rule::Any),
    FieldSpec::number("radial_a0", Rule::NonNegative),
    FieldSpec::number("radial_a1", Rule::NonNegative),
    FieldSpec::number("radial_a2", Rule::NonNegative),
    FieldSpec::number("theta", Rule::Angle).optional(),
    FieldSpec::number("angular_a0", Rule::NonNegative).optional(),
    FieldSpec::vector("direction", Rule::NonZero).optional(),
];

#[derive(Clone, Copy, Debug, PartialEq)]
enum FieldValue {
    Number(f64),
    Vector(DVec3),
}

impl FieldValue {
    fn satisfies(&self, rule: Rule) -> bool {
        match (rule, *self) {
            (Rule::Any, _) => true,
            (Rule::AtLeastOne, FieldValue::Number(x)) => x >= 1.0,
            (Rule::NonNegative, FieldValue::Number(x)) => x >= 0.0,
            (Rule::Angle, FieldValue::Number(x)) => x > 0.0 && x <= 180.0,
            (Rule::Color, FieldValue::Vector(v)) => {
                v.cmpge(DVec3::ZERO).all() && v.cmple(DVec3::splat(MAX_COLOR)).all()
            }
            (Rule::NonZero, FieldValue::Vector(v)) => v.try_normalize().is_some(),
            // every schema pairs a rule with the shape it checks
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(x) => write!(f, "{x}"),
            FieldValue::Vector(v) => write!(f, "[{}, {}, {}]", v.x, v.y, v.z),
        }
    }
}

/// Assembles one scene object from the fields of its body.
///
/// Holds a slot per field of the kind's schema; a filled slot means the field
/// was given. The slots never leave the builder: [`ObjectBuilder::finish`]
/// either produces a fully populated [`SceneObject`] or fails.
pub struct ObjectBuilder {
    kind: ObjectKind,
    values: Vec<Option<FieldValue>>,
}

impl ObjectBuilder {
    pub fn new(kind: ObjectKind) -> Self {
        ObjectBuilder {
            kind,
            values: vec![None; kind.fields().len()],
        }
    }

    /// Reads the rest of an object body, from just after the type string up
    /// to and including the closing `}`.
    pub fn read_fields<R: Read>(mut self, scanner: &mut Scanner<R>) -> SceneResult<SceneObject> {
        loop {
            scanner.skip_whitespace()?;
            match scanner.next_char()? {
                b'}' => return self.finish(scanner.line()),
                b',' => {
                    scanner.skip_whitespace()?;
                    let line = scanner.line();
                    let key = scanner.read_string()?;
                    scanner.skip_whitespace()?;
                    scanner.expect_char(b':')?;
                    scanner.skip_whitespace()?;
                    self.read_field(&key, line, scanner)?;
                }
                _ => return Err(scanner.syntax(SyntaxError::ExpectedSeparator)),
            }
        }
    }

    /// Reads the value of `key` from `scanner` and records it.
    ///
    /// `line` is the line the key was found on.
    pub fn read_field<R: Read>(
        &mut self,
        key: &str,
        line: usize,
        scanner: &mut Scanner<R>,
    ) -> SceneResult<()> {
        if key == "type" {
            return Err(self.duplicate(key, line));
        }
        let Some((index, spec)) = self.kind.field(key) else {
            return Err(SceneError::UnknownField {
                kind: self.kind,
                key: key.to_string(),
                line,
            });
        };
        if self.values[index].is_some() {
            return Err(self.duplicate(key, line));
        }

        let value = match spec.shape {
            FieldShape::Number => FieldValue::Number(scanner.read_number()?),
            FieldShape::Vector => FieldValue::Vector(scanner.read_vector3()?),
        };
        if !value.satisfies(spec.rule) {
            return Err(SceneError::InvalidFieldValue {
                kind: self.kind,
                key: key.to_string(),
                value: value.to_string(),
                line,
            });
        }

        trace!("{} {key} = {value}", self.kind);
        self.values[index] = Some(value);
        Ok(())
    }

    /// Checks that every mandatory field was given and builds the object.
    ///
    /// `line` is the line of the closing `}`.
    pub fn finish(self, line: usize) -> SceneResult<SceneObject> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(SceneError::MissingRequiredField {
                kind: self.kind,
                fields: missing,
                line,
            });
        }

        let object = match self.kind {
            ObjectKind::Camera => SceneObject::Camera(Camera::new(
                self.number("width", line)?,
                self.number("height", line)?,
            )),
            ObjectKind::Sphere => SceneObject::Sphere(Sphere::new(
                self.vector("position", line)?,
                self.vector("color", line)?,
                self.number("radius", line)?,
            )),
            ObjectKind::Plane => SceneObject::Plane(Plane::new(
                self.vector("position", line)?,
                self.vector("color", line)?,
                self.vector("normal", line)?,
            )),
            ObjectKind::Light => {
                let radial = DVec3::new(
                    self.number("radial_a0", line)?,
                    self.number("radial_a1", line)?,
                    self.number("radial_a2", line)?,
                );
                let light = Light::new(
                    self.vector("position", line)?,
                    self.vector("color", line)?,
                    radial,
                );
                if self.is_given("theta") {
                    SceneObject::Light(light.with_spot(SpotCone {
                        theta: self.number("theta", line)?,
                        angular_a0: self.optional_number("angular_a0").unwrap_or(0.0),
                        direction: self.vector("direction", line)?,
                    }))
                } else {
                    SceneObject::Light(light)
                }
            }
        };
        Ok(object)
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = self
            .kind
            .fields()
            .iter()
            .zip(&self.values)
            .filter(|(spec, value)| spec.required && value.is_none())
            .map(|(spec, _)| spec.name)
            .collect();

        // A light turns into a spot light once it has a cone angle.
        if self.kind == ObjectKind::Light {
            if self.is_given("theta") {
                if !self.is_given("direction") {
                    missing.push("direction");
                }
            } else if self.is_given("direction") || self.is_given("angular_a0") {
                missing.push("theta");
            }
        }
        missing
    }

    fn value(&self, name: &str) -> Option<FieldValue> {
        let (index, _) = self.kind.field(name)?;
        self.values[index]
    }

    fn is_given(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    fn optional_number(&self, name: &str) -> Option<f64> {
        match self.value(name)? {
            FieldValue::Number(x) => Some(x),
            FieldValue::Vector(_) => None,
        }
    }

    fn number(&self, name: &'static str, line: usize) -> SceneResult<f64> {
        self.optional_number(name)
            .ok_or_else(|| self.missing(name, line))
    }

    fn vector(&self, name: &'static str, line: usize) -> SceneResult<DVec3> {
        match self.value(name) {
            Some(FieldValue::Vector(v)) => Ok(v),
            _ => Err(self.missing(name, line)),
        }
    }

    fn missing(&self, name: &'static str, line: usize) -> SceneError {
        SceneError::MissingRequiredField {
            kind: self.kind,
            fields: vec![name],
            line,
        }
    }

    fn duplicate(&self, key: &str, line: usize) -> SceneError {
        SceneError::DuplicateField {
            kind: self.kind,
            key: key.to_string(),
            line,
        }
    }
}
