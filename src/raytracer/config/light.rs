use glam::DVec3;

/// Cone of a spot light.
///
/// `theta` is the cone's half-angle in degrees, `angular_a0` the angular
/// attenuation exponent and `direction` the axis the cone points along, kept
/// as written in the scene. It is never zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotCone {
    pub theta: f64,
    pub angular_a0: f64,
    pub direction: DVec3,
}

impl SpotCone {
    /// The cone axis as a unit vector.
    pub fn unit_direction(&self) -> DVec3 {
        self.direction.normalize()
    }
}

/// A point light, or a spot light when it carries a [`SpotCone`].
///
/// # Fields
/// * `position` - The 3D position of the light in world space
/// * `color` - RGB color of the light, each channel in 0-255
/// * `radial` - Radial attenuation coefficients `(a0, a1, a2)`
/// * `spot` - The spot cone, `None` for a point light
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: DVec3,
    pub color: DVec3,
    pub radial: DVec3,
    pub spot: Option<SpotCone>,
}

impl Light {
    /// Creates a point light.
    pub fn new(position: DVec3, color: DVec3, radial: DVec3) -> Self {
        Light {
            position,
            color,
            radial,
            spot: None,
        }
    }

    pub fn with_spot(mut self, spot: SpotCone) -> Self {
        self.spot = Some(spot);
        self
    }

    pub fn is_spot(&self) -> bool {
        self.spot.is_some()
    }
}
