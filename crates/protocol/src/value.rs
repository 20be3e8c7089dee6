use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// Scalar linear interpolation. The workhorse behind every channel.
///
/// Pinned at `t == 1` so a channel's end value reproduces exactly instead
/// of accumulating a rounding step from `a + (b - a)`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t >= 1.0 { b } else { a + (b - a) * t }
}

/// An animation output value: a scalar (opacity, rotation degrees, a shader
/// uniform float) or a small vector (translate offset, a vec3 uniform).
///
/// Untagged so scene files write `0.5`, `{ x = 1, y = 2 }`, or `[r, g, b]`
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(f64),
    Vec2(Vec2),
    Vec3([f64; 3]),
}

impl Value {
    /// Interpolate toward `to` by `t`.
    ///
    /// Mismatched kinds hold `self` instead of panicking — animations stay
    /// visually stable, and validated channels never mix kinds anyway.
    pub fn lerp(self, to: Value, t: f64) -> Value {
        match (self, to) {
            (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(lerp(a, b, t)),
            (Value::Vec2(a), Value::Vec2(b)) => Value::Vec2(a.lerp(b, t)),
            (Value::Vec3(a), Value::Vec3(b)) => Value::Vec3([
                lerp(a[0], b[0], t),
                lerp(a[1], b[1], t),
                lerp(a[2], b[2], t),
            ]),
            _ => self,
        }
    }

    pub fn as_scalar(self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec2(self) -> Option<Vec2> {
        match self {
            Value::Vec2(v) => Some(v),
            _ => None,
        }
    }

    /// Whether two values can interpolate between each other.
    pub fn same_kind(self, other: Value) -> bool {
        matches!(
            (self, other),
            (Value::Scalar(_), Value::Scalar(_))
                | (Value::Vec2(_), Value::Vec2(_))
                | (Value::Vec3(_), Value::Vec3(_))
        )
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v)
    }
}

impl From<Vec2> for Value {
    fn from(v: Vec2) -> Self {
        Value::Vec2(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_lerp_midpoint() {
        assert_eq!(Value::Scalar(0.0).lerp(Value::Scalar(1.0), 0.5), Value::Scalar(0.5));
    }

    #[test]
    fn vec3_lerp() {
        let a = Value::Vec3([0.0, 0.0, 0.0]);
        let b = Value::Vec3([1.0, 2.0, 4.0]);
        assert_eq!(a.lerp(b, 0.25), Value::Vec3([0.25, 0.5, 1.0]));
    }

    #[test]
    fn mismatched_kinds_hold_start_value() {
        let a = Value::Scalar(3.0);
        let b = Value::Vec2(Vec2::new(1.0, 1.0));
        assert!(!a.same_kind(b));
        assert_eq!(a.lerp(b, 0.7), a);
    }

    #[test]
    fn untagged_serde_forms() {
        let scalar: Value = serde_json::from_str("0.25").unwrap_or(Value::Scalar(-1.0));
        assert_eq!(scalar, Value::Scalar(0.25));
        let vec2: Value =
            serde_json::from_str(r#"{"x": 1.0, "y": -2.0}"#).unwrap_or(Value::Scalar(-1.0));
        assert_eq!(vec2, Value::Vec2(Vec2::new(1.0, -2.0)));
        let vec3: Value = serde_json::from_str("[1.0, 0.5, 0.0]").unwrap_or(Value::Scalar(-1.0));
        assert_eq!(vec3, Value::Vec3([1.0, 0.5, 0.0]));
    }
}
