//! Macros for declaring fixed-point vector types.
//!
//! Provides `fixed_vector!`, which defines a three-component struct of
//! [`Fixed`](crate::Fixed) values together with the component traits and
//! wrapping `Add`/`Sub` operators.
//!
//! # Examples
//!
//! ```rust
//! use actor_script::{fixed_vector, V3Fixed};
//!
//! fixed_vector! {
//!     /// Example offset type.
//!     pub struct Offset;
//! }
//!
//! let moved = Offset::new(1, 2, 3) + V3Fixed::new(1, 1, 1);
//! assert_eq!(moved, Offset::new(2, 3, 4));
//! ```
//!
//! Binary operators accept any right-hand side exposing fixed components and
//! always produce the left operand's type.

/// Declare a fixed-point vector type with wrapping `Add`/`Sub` operators.
#[macro_export]
macro_rules! fixed_vector {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name {
            /// X component.
            pub x: $crate::Fixed,
            /// Y component.
            pub y: $crate::Fixed,
            /// Z component.
            pub z: $crate::Fixed,
        }

        impl $name {
            /// The zero vector.
            pub const ZERO: Self = Self {
                x: $crate::Fixed::ZERO,
                y: $crate::Fixed::ZERO,
                z: $crate::Fixed::ZERO,
            };

            /// Build a vector, converting each component into a fixed scalar.
            #[must_use]
            pub fn new(
                x: impl Into<$crate::Fixed>,
                y: impl Into<$crate::Fixed>,
                z: impl Into<$crate::Fixed>,
            ) -> Self {
                Self {
                    x: x.into(),
                    y: y.into(),
                    z: z.into(),
                }
            }
        }

        impl $crate::vector::FixedComponents for $name {
            fn components(&self) -> ($crate::Fixed, $crate::Fixed, $crate::Fixed) {
                (self.x, self.y, self.z)
            }
        }

        impl $crate::vector::FixedVector for $name {
            fn from_components(x: $crate::Fixed, y: $crate::Fixed, z: $crate::Fixed) -> Self {
                Self { x, y, z }
            }
        }

        impl From<($crate::Fixed, $crate::Fixed, $crate::Fixed)> for $name {
            fn from((x, y, z): ($crate::Fixed, $crate::Fixed, $crate::Fixed)) -> Self {
                Self { x, y, z }
            }
        }

        impl<R: $crate::vector::FixedComponents> ::std::ops::Add<R> for $name {
            type Output = Self;

            fn add(self, other: R) -> Self {
                $crate::vector::FixedVector::plus(&self, &other)
            }
        }

        impl<R: $crate::vector::FixedComponents> ::std::ops::Sub<R> for $name {
            type Output = Self;

            fn sub(self, other: R) -> Self {
                $crate::vector::FixedVector::minus(&self, &other)
            }
        }
    };
}
