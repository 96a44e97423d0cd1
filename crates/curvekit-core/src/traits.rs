use crate::error::Result;

/// Validate structural integrity of a geometric entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Compute an axis-aligned bounding box.
///
/// The box is derived on demand and never cached by the implementor.
pub trait Bounded {
    type Bounds;
    fn bounding_box(&self) -> Self::Bounds;
}
