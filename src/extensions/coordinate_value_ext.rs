/// A value that can stand in for a latitude or longitude: a number, numeric text, or an optional of either.
/// Upstream data is frequently incomplete, so absence is a normal case rather than an error.
pub trait CoordinateValue {
    /// Returns the value as a finite `f64`, or `None` if it is absent, blank or not a finite number.
    fn to_coordinate_value(&self) -> Option<f64>;

    /// Renders the raw value for diagnostics.
    fn describe(&self) -> String;
}

macro_rules! impl_coordinate_value {
    ($($t:ty)*) => ($(
        impl CoordinateValue for $t {
            fn to_coordinate_value(&self) -> Option<f64> {
                Some(*self as f64).filter(|value| value.is_finite())
            }
            fn describe(&self) -> String {
                self.to_string()
            }
        }
    )*)
}

impl_coordinate_value! { f32 f64 i8 i16 i32 i64 u8 u16 u32 u64 }

impl CoordinateValue for str {
    fn to_coordinate_value(&self) -> Option<f64> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return None;
        }

        trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl CoordinateValue for String {
    fn to_coordinate_value(&self) -> Option<f64> {
        self.as_str().to_coordinate_value()
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl<T: CoordinateValue> CoordinateValue for Option<T> {
    fn to_coordinate_value(&self) -> Option<f64> {
        self.as_ref().and_then(CoordinateValue::to_coordinate_value)
    }

    fn describe(&self) -> String {
        self.as_ref().map_or_else(|| "missing".to_string(), CoordinateValue::describe)
    }
}

impl<T: CoordinateValue + ?Sized> CoordinateValue for &T {
    fn to_coordinate_value(&self) -> Option<f64> {
        (**self).to_coordinate_value()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
