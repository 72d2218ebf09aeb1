//! Schema-bound actor properties and the coercion applied on assignment.
//!
//! Every schema entry declares a [`PropertyKind`]. Writing a value of another
//! kind runs it through the declared type's constructor; values that the
//! constructor rejects surface as [`CoercionError`].

use std::fmt;

use log::trace;
use serde_json::Value;
use thiserror::Error;

use crate::numeric::{Angle, Fixed};
use crate::vector::V3Fixed;

/// Declared type of a schema property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// A [`V3Fixed`] vector.
    Vector,
    /// A [`Fixed`] scalar.
    Fixed,
    /// An [`Angle`] scalar.
    Angle,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vector => "V3Fixed",
            Self::Fixed => "Fixed",
            Self::Angle => "Angle",
        };
        f.write_str(name)
    }
}

/// A value written to, or read from, an actor attribute.
///
/// `Raw` carries untyped input such as a JSON number taken from a field map.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// Vector value.
    Vector(V3Fixed),
    /// Fixed scalar value.
    Fixed(Fixed),
    /// Angle value.
    Angle(Angle),
    /// Untyped input awaiting coercion.
    Raw(Value),
}

impl PropertyValue {
    /// The declared kind this value already satisfies, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<PropertyKind> {
        match self {
            Self::Vector(_) => Some(PropertyKind::Vector),
            Self::Fixed(_) => Some(PropertyKind::Fixed),
            Self::Angle(_) => Some(PropertyKind::Angle),
            Self::Raw(_) => None,
        }
    }

    /// Render the value as a raw field value.
    ///
    /// Vectors become `[x, y, z]` arrays.
    #[must_use]
    pub fn to_raw(&self) -> Value {
        match self {
            Self::Vector(v) => Value::from(vec![v.x.0, v.y.0, v.z.0]),
            Self::Fixed(f) => Value::from(f.0),
            Self::Angle(a) => Value::from(a.0),
            Self::Raw(raw) => raw.clone(),
        }
    }
}

impl From<V3Fixed> for PropertyValue {
    fn from(value: V3Fixed) -> Self {
        Self::Vector(value)
    }
}

impl From<Fixed> for PropertyValue {
    fn from(value: Fixed) -> Self {
        Self::Fixed(value)
    }
}

impl From<Angle> for PropertyValue {
    fn from(value: Angle) -> Self {
        Self::Angle(value)
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Raw(Value::from(value))
    }
}

/// Raised when a value cannot be converted to its declared property type.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot coerce {value} into {kind} for property `{property}`")]
pub struct CoercionError {
    /// Property being assigned.
    pub property: String,
    /// Declared type of the property.
    pub kind: PropertyKind,
    /// The rejected input, rendered as a raw value.
    pub value: Value,
}

impl CoercionError {
    /// Build an error for `value` rejected by `kind`.
    #[must_use]
    pub fn new(property: impl Into<String>, kind: PropertyKind, value: &PropertyValue) -> Self {
        Self {
            property: property.into(),
            kind,
            value: value.to_raw(),
        }
    }
}

/// One entry of a property schema.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertySchemaEntry {
    /// Attribute name.
    pub name: &'static str,
    /// Declared type.
    pub kind: PropertyKind,
    /// Value assigned on construction.
    pub default: DefaultValue,
    /// Whether the property is serialised. Always `true` for now.
    pub serialize: bool,
}

/// Schema defaults, restricted to values expressible in a constant table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultValue {
    /// A vector default.
    Vector(V3Fixed),
    /// An integer default, coerced like any other write.
    Integer(i64),
}

impl From<DefaultValue> for PropertyValue {
    fn from(value: DefaultValue) -> Self {
        match value {
            DefaultValue::Vector(v) => Self::Vector(v),
            DefaultValue::Integer(i) => Self::from(i),
        }
    }
}

/// Properties every actor carries.
pub const ACTOR_SCHEMA: &[PropertySchemaEntry] = &[
    PropertySchemaEntry {
        name: "position",
        kind: PropertyKind::Vector,
        default: DefaultValue::Vector(V3Fixed::ZERO),
        serialize: true,
    },
    PropertySchemaEntry {
        name: "health",
        kind: PropertyKind::Fixed,
        default: DefaultValue::Integer(0),
        serialize: true,
    },
    PropertySchemaEntry {
        name: "angle",
        kind: PropertyKind::Angle,
        default: DefaultValue::Integer(0),
        serialize: true,
    },
];

/// Find the schema entry for `name`. A miss is not an error.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static PropertySchemaEntry> {
    ACTOR_SCHEMA.iter().find(|entry| entry.name == name)
}

impl PropertySchemaEntry {
    /// Coerce `value` into this entry's declared type.
    ///
    /// Values already of the declared kind are returned unchanged.
    ///
    /// # Errors
    /// Returns [`CoercionError`] when the declared type cannot be built from
    /// `value`.
    pub fn coerce(&self, value: PropertyValue) -> Result<PropertyValue, CoercionError> {
        if value.kind() == Some(self.kind) {
            return Ok(value);
        }
        trace!("coercing {value:?} into {} for `{}`", self.kind, self.name);
        let coerced = match self.kind {
            PropertyKind::Fixed => scalar_fixed(&value).map(PropertyValue::Fixed),
            PropertyKind::Angle => scalar_fixed(&value)
                .map(|f| PropertyValue::Angle(Angle::from(f))),
            PropertyKind::Vector => vector(&value).map(PropertyValue::Vector),
        };
        coerced.ok_or_else(|| CoercionError::new(self.name, self.kind, &value))
    }
}

/// Interpret a scalar value as the 32-bit pattern shared by both scalar types.
fn scalar_fixed(value: &PropertyValue) -> Option<Fixed> {
    match value {
        PropertyValue::Fixed(f) => Some(*f),
        PropertyValue::Angle(a) => Some(Fixed::from(*a)),
        PropertyValue::Raw(raw) => Fixed::try_from_raw(raw),
        PropertyValue::Vector(_) => None,
    }
}

/// Build a vector the way its constructor does: positional components,
/// missing ones defaulting to zero.
fn vector(value: &PropertyValue) -> Option<V3Fixed> {
    match value {
        PropertyValue::Vector(v) => Some(*v),
        PropertyValue::Raw(Value::Array(items)) => {
            if items.len() > 3 {
                return None;
            }
            let mut parts = [Fixed::ZERO; 3];
            for (slot, item) in parts.iter_mut().zip(items) {
                *slot = Fixed::try_from_raw(item)?;
            }
            let [x, y, z] = parts;
            Some(V3Fixed { x, y, z })
        }
        other => scalar_fixed(other).map(|x| V3Fixed {
            x,
            ..V3Fixed::ZERO
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn entry(name: &str) -> &'static PropertySchemaEntry {
        lookup(name).unwrap_or_else(|| panic!("missing schema entry {name}"))
    }

    #[rstest]
    #[case("position", PropertyKind::Vector)]
    #[case("health", PropertyKind::Fixed)]
    #[case("angle", PropertyKind::Angle)]
    fn schema_declares_actor_properties(#[case] name: &str, #[case] kind: PropertyKind) {
        let found = entry(name);
        assert_eq!(found.kind, kind);
        assert!(found.serialize);
    }

    #[rstest]
    fn lookup_misses_are_none() {
        assert!(lookup("properties").is_none());
    }

    #[rstest]
    fn matching_kind_is_kept() {
        let value = PropertyValue::Fixed(Fixed(12));
        assert_eq!(entry("health").coerce(value.clone()), Ok(value));
    }

    #[rstest]
    #[case(PropertyValue::from(100_i64), PropertyValue::Fixed(Fixed(100)))]
    #[case(PropertyValue::Angle(Angle(u32::MAX)), PropertyValue::Fixed(Fixed(-1)))]
    #[case(PropertyValue::Raw(json!(3.7)), PropertyValue::Fixed(Fixed(3)))]
    fn health_coercions(#[case] input: PropertyValue, #[case] expected: PropertyValue) {
        assert_eq!(entry("health").coerce(input), Ok(expected));
    }

    #[rstest]
    fn angle_coercion_wraps_negative() {
        assert_eq!(
            entry("angle").coerce(PropertyValue::from(-1_i64)),
            Ok(PropertyValue::Angle(Angle(u32::MAX)))
        );
    }

    #[rstest]
    #[case(PropertyValue::from(7_i64), V3Fixed::new(7, 0, 0))]
    #[case(PropertyValue::Raw(json!([1, 2])), V3Fixed::new(1, 2, 0))]
    #[case(PropertyValue::Raw(json!([1, 2, 3])), V3Fixed::new(1, 2, 3))]
    #[case(PropertyValue::Raw(json!([])), V3Fixed::ZERO)]
    fn position_coercions(#[case] input: PropertyValue, #[case] expected: V3Fixed) {
        assert_eq!(
            entry("position").coerce(input),
            Ok(PropertyValue::Vector(expected))
        );
    }

    #[rstest]
    #[case("health", PropertyValue::Vector(V3Fixed::ZERO))]
    #[case("health", PropertyValue::Raw(json!("lots")))]
    #[case("angle", PropertyValue::Raw(json!(null)))]
    #[case("position", PropertyValue::Raw(json!([1, 2, 3, 4])))]
    #[case("position", PropertyValue::Raw(json!([1, "two", 3])))]
    #[case("position", PropertyValue::Raw(json!({"x": 1})))]
    fn rejected_inputs_report_the_property(#[case] name: &str, #[case] input: PropertyValue) {
        let err = entry(name)
            .coerce(input.clone())
            .expect_err("coercion should fail");
        assert_eq!(err.property, name);
        assert_eq!(err.value, input.to_raw());
    }

    #[rstest]
    fn vectors_render_as_arrays() {
        let raw = PropertyValue::Vector(V3Fixed::new(50, -50, 0)).to_raw();
        assert_eq!(raw, json!([50, -50, 0]));
    }
}
