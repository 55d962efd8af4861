mod aabb;
mod interval;
mod line;
mod obb;
mod plane;
mod ray;
mod shape;
mod sphere;
mod triangle;

pub use aabb::Aabb;
pub use interval::Interval;
pub use line::Line;
pub use obb::Obb;
pub use plane::Plane;
pub use ray::Ray;
pub use shape::Shape;
pub use sphere::Sphere;
pub use triangle::Triangle;
