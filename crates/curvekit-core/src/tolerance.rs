/// Tolerances used by the checked geometry paths.
///
/// The unchecked evaluation paths never consult a tolerance; they propagate
/// whatever the floating point arithmetic produces.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for lengths and coordinates (in model units)
    pub linear: f64,
    /// Angular tolerance (in radians)
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;
    pub const DEFAULT_ANGULAR: f64 = 1e-10;

    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            angular: Self::DEFAULT_ANGULAR,
        }
    }

    pub fn loose() -> Self {
        Self {
            linear: 1e-5,
            angular: 1e-6,
        }
    }

    pub fn tight() -> Self {
        Self {
            linear: 1e-12,
            angular: 1e-12,
        }
    }

    /// Check if two coordinates are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }

    /// Check if a value is zero within linear tolerance.
    ///
    /// NaN is never zero.
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.linear
    }

    /// A length is degenerate when it is non-finite or collapses to zero.
    pub fn is_degenerate_length(self, length: f64) -> bool {
        !length.is_finite() || self.is_zero(length)
    }

    pub fn angular_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
