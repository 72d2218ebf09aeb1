//! Fixed-point vectors.
//!
//! Vector arithmetic is asymmetric: the right operand only has to expose three
//! fixed components, while the result always takes the left operand's
//! concrete type. [`FixedVector::from_components`] is the hook each concrete
//! type provides so that result type is fixed at compile time.

use crate::numeric::Fixed;

/// Anything exposing `x`, `y` and `z` as fixed scalars.
pub trait FixedComponents {
    /// Return the `(x, y, z)` components.
    fn components(&self) -> (Fixed, Fixed, Fixed);
}

/// A concrete vector type that can rebuild itself from components.
pub trait FixedVector: FixedComponents + Sized {
    /// Construct a value of this type from its components.
    fn from_components(x: Fixed, y: Fixed, z: Fixed) -> Self;

    /// Component-wise wrapping sum, typed like `self`.
    fn plus<R: FixedComponents + ?Sized>(&self, other: &R) -> Self {
        let (ax, ay, az) = self.components();
        let (bx, by, bz) = other.components();
        Self::from_components(ax + bx, ay + by, az + bz)
    }

    /// Component-wise wrapping difference, typed like `self`.
    fn minus<R: FixedComponents + ?Sized>(&self, other: &R) -> Self {
        let (ax, ay, az) = self.components();
        let (bx, by, bz) = other.components();
        Self::from_components(ax - bx, ay - by, az - bz)
    }
}

impl FixedComponents for (Fixed, Fixed, Fixed) {
    fn components(&self) -> (Fixed, Fixed, Fixed) {
        *self
    }
}

crate::fixed_vector! {
    /// Three-component fixed-point vector used for actor positions.
    ///
    /// # Examples
    /// ```
    /// use actor_script::V3Fixed;
    /// let moved = V3Fixed::new(50, -50, 0) + V3Fixed::new(1, 1, 1);
    /// assert_eq!(moved, V3Fixed::new(51, -49, 1));
    /// ```
    pub struct V3Fixed;
}
