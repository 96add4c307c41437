/// Image plane size of the scene's camera, in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub width: f64,
    pub height: f64,
}

impl Camera {
    pub fn new(width: f64, height: f64) -> Self {
        Camera { width, height }
    }
}
