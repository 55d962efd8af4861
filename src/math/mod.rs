pub mod interop;
mod matrix3;
mod matrix4;
mod quaternion;
pub mod scalar;
mod vector2;
mod vector3;
mod vector4;

pub use matrix3::Matrix3;
pub use matrix4::Matrix4;
pub use quaternion::Quaternion;
pub use scalar::{compare, near_zero, Tolerance};
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

/// Machine epsilon for single precision.
pub const EPSILON: f32 = f32::EPSILON;
