/// Fixed-precision helpers for rendering coordinates and distances.
pub trait FixedPrecision {
    /// Rounds to `digits` fractional digits.
    fn round_to(self, digits: i32) -> Self;

    /// Renders with exactly `digits` fractional digits. Negative zero renders without a sign.
    fn to_fixed(self, digits: usize) -> String;
}

impl FixedPrecision for f64 {
    fn round_to(self, digits: i32) -> f64 {
        let factor = 10f64.powi(digits);
        (self * factor).round() / factor
    }

    fn to_fixed(self, digits: usize) -> String {
        // -0.0 + 0.0 == +0.0
        format!("{:.*}", digits, self + 0.0)
    }
}
