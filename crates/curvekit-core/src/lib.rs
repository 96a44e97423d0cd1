//! curvekit core: errors, tolerances, and shared traits.

pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{CurveError, Result};
pub use tolerance::Tolerance;
pub use traits::{Bounded, Validate};
