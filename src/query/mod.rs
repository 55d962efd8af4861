//! Pairwise intersection tests, ray casts and contact generation.
//!
//! Every function here is pure. "No intersection" is an ordinary result
//! (`false`, `None` or a non-colliding manifold), never an error.

pub mod line;
pub mod manifold;
pub mod overlap;
pub mod raycast;
pub mod sat;
pub mod triangle;

pub use manifold::CollisionManifold;
pub use raycast::RaycastHit;
pub use sat::Project;
