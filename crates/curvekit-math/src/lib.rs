pub mod aabb;
pub mod scalar;

pub use glam::{dvec2, dvec3, DVec2, DVec3};
pub use aabb::{Aabb2, Aabb3};
pub use scalar::{saturate, saturate2, saturate3};

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
