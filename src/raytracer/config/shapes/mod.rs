mod plane;
mod sphere;

pub use plane::Plane;
pub use sphere::Sphere;
