//! Typed fixed-width scalars used by actor properties.
//!
//! [`Fixed`] and [`Angle`] behave like `i32` and `u32` for arithmetic but carry
//! their own type identity, so a health value can never be confused with a
//! facing. All arithmetic wraps modulo 2^32, as does every conversion from a
//! wider integer.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Truncate a wide integer to its low 32 bits as a signed value.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Wraparound modulo 2^32 is the scalar contract."
)]
const fn wrap_i32(value: i64) -> i32 {
    value as i32
}

/// Truncate a wide integer to its low 32 bits as an unsigned value.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Wraparound modulo 2^32 is the scalar contract."
)]
const fn wrap_u32(value: i64) -> u32 {
    value as u32
}

/// Interpret a raw field value as a wide integer.
///
/// Integers pass through, booleans map to 0 or 1 and floats are truncated
/// toward zero. Strings are accepted when they hold a decimal integer,
/// surrounding whitespace aside. Integers above `i64::MAX` keep their low 64
/// bits, which is enough to preserve the low 32 bits the scalars care about.
/// Anything else is rejected.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    reason = "Only the low 32 bits survive the final wrap."
)]
pub(crate) fn raw_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|wide| wide as i64))
            .or_else(|| number.as_f64().map(|float| float.trunc() as i64)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

macro_rules! impl_wrapping_ops {
    ($name:ident) => {
        impl Add for $name {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                Self(self.0.wrapping_add(other.0))
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                Self(self.0.wrapping_sub(other.0))
            }
        }

        impl Mul for $name {
            type Output = Self;

            fn mul(self, other: Self) -> Self {
                Self(self.0.wrapping_mul(other.0))
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }

        impl MulAssign for $name {
            fn mul_assign(&mut self, other: Self) {
                *self = *self * other;
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

/// Signed 32-bit fixed-point scalar.
///
/// No fractional scaling is applied by the type; see [`crate::FRACUNIT`] for
/// the engine convention.
///
/// # Examples
/// ```
/// use actor_script::Fixed;
/// let sum = Fixed::new(i32::MAX) + Fixed::new(1);
/// assert_eq!(sum, Fixed::new(i32::MIN));
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fixed(pub i32);

impl Fixed {
    /// The zero scalar.
    pub const ZERO: Self = Self(0);

    /// Wrap an `i32` without conversion.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Return the underlying integer.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }

    /// Convert a wider integer, keeping its low 32 bits.
    #[must_use]
    pub const fn wrapping_from(value: i64) -> Self {
        Self(wrap_i32(value))
    }

    /// Coerce a raw field value, returning `None` when it is not numeric.
    #[must_use]
    pub fn try_from_raw(value: &Value) -> Option<Self> {
        raw_to_i64(value).map(Self::wrapping_from)
    }
}

impl_wrapping_ops!(Fixed);

impl Neg for Fixed {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl From<i32> for Fixed {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Fixed> for i32 {
    fn from(value: Fixed) -> Self {
        value.0
    }
}

impl From<Angle> for Fixed {
    #[expect(
        clippy::cast_possible_wrap,
        reason = "Scalar conversions reinterpret the 32-bit pattern."
    )]
    fn from(value: Angle) -> Self {
        Self(value.0 as i32)
    }
}

/// Unsigned 32-bit binary angle: a full turn maps onto 2^32.
///
/// # Examples
/// ```
/// use actor_script::{Angle, ANG90, ANG270};
/// let turned = Angle::new(ANG270) + Angle::new(ANG90);
/// assert_eq!(turned, Angle::ZERO);
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Angle(pub u32);

impl Angle {
    /// Facing east.
    pub const ZERO: Self = Self(0);

    /// Wrap a `u32` without conversion.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Return the underlying integer.
    #[must_use]
    pub const fn into_inner(self) -> u32 {
        self.0
    }

    /// Convert a wider integer, keeping its low 32 bits.
    #[must_use]
    pub const fn wrapping_from(value: i64) -> Self {
        Self(wrap_u32(value))
    }

    /// Coerce a raw field value, returning `None` when it is not numeric.
    #[must_use]
    pub fn try_from_raw(value: &Value) -> Option<Self> {
        raw_to_i64(value).map(Self::wrapping_from)
    }

    /// Angle in degrees within `[0, 360)`, for diagnostics.
    #[must_use]
    pub fn to_degrees(self) -> f64 {
        f64::from(self.0) * 360.0 / 4_294_967_296.0
    }
}

impl_wrapping_ops!(Angle);

impl From<u32> for Angle {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Angle> for u32 {
    fn from(value: Angle) -> Self {
        value.0
    }
}

impl From<Fixed> for Angle {
    #[expect(
        clippy::cast_sign_loss,
        reason = "Scalar conversions reinterpret the 32-bit pattern."
    )]
    fn from(value: Fixed) -> Self {
        Self(value.0 as u32)
    }
}
