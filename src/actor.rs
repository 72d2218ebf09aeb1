//! Actor entity with schema-checked attributes.
//!
//! Every write to a name listed in [`ACTOR_SCHEMA`] is coerced to the declared
//! type before it is stored, so the live position, health and angle always
//! hold their declared types. Names outside the schema are kept verbatim.

use hashbrown::HashMap;
use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::numeric::{Angle, Fixed};
use crate::property::{self, CoercionError, PropertyKind, PropertyValue, ACTOR_SCHEMA};
use crate::vector::V3Fixed;

/// Raw field map exchanged between the engine and thinker scripts.
pub type ActorFields = HashMap<String, Value>;

/// Failures building an actor from raw fields.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActorError {
    /// A required key was absent from the field map.
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    /// A field was present but could not be coerced.
    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

/// Look up a required key.
pub(crate) fn required<'a>(
    fields: &'a ActorFields,
    key: &'static str,
) -> Result<&'a Value, ActorError> {
    fields.get(key).ok_or(ActorError::MissingField(key))
}

/// Read a required key as a [`Fixed`].
pub(crate) fn fixed_field(fields: &ActorFields, key: &'static str) -> Result<Fixed, ActorError> {
    let raw = required(fields, key)?;
    Fixed::try_from_raw(raw).ok_or_else(|| {
        CoercionError::new(key, PropertyKind::Fixed, &PropertyValue::Raw(raw.clone())).into()
    })
}

/// Read a required key as an [`Angle`].
pub(crate) fn angle_field(fields: &ActorFields, key: &'static str) -> Result<Angle, ActorError> {
    let raw = required(fields, key)?;
    Angle::try_from_raw(raw).ok_or_else(|| {
        CoercionError::new(key, PropertyKind::Angle, &PropertyValue::Raw(raw.clone())).into()
    })
}

/// A scripted actor: position, health and facing plus free-form extras.
///
/// # Examples
/// ```
/// use actor_script::{Actor, Fixed, V3Fixed};
/// let mut actor = Actor::new();
/// actor.set_attribute("health", 150_i64).expect("numbers coerce");
/// assert_eq!(actor.health(), Fixed::new(150));
/// assert_eq!(actor.position(), V3Fixed::ZERO);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    position: V3Fixed,
    health: Fixed,
    angle: Angle,
    extras: HashMap<String, PropertyValue>,
}

impl Default for Actor {
    fn default() -> Self {
        let mut actor = Self {
            position: V3Fixed::ZERO,
            health: Fixed::ZERO,
            angle: Angle::ZERO,
            extras: HashMap::new(),
        };
        for entry in ACTOR_SCHEMA {
            // Schema defaults are typed constants and always coerce.
            let applied = actor.set_attribute(entry.name, entry.default);
            debug_assert!(applied.is_ok(), "schema default rejected: {applied:?}");
        }
        actor
    }
}

impl Actor {
    /// Create an actor with every schema default applied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an actor from the raw `x`, `y`, `z`, `angle` and `health` keys.
    ///
    /// # Errors
    /// Returns [`ActorError::MissingField`] for the first absent key and
    /// [`ActorError::Coercion`] when a value is not numeric. Position
    /// components are resolved before `angle`, and `angle` before `health`.
    pub fn from_fields(fields: &ActorFields) -> Result<Self, ActorError> {
        let mut actor = Self::new();
        let position = V3Fixed {
            x: fixed_field(fields, "x")?,
            y: fixed_field(fields, "y")?,
            z: fixed_field(fields, "z")?,
        };
        actor.set_attribute("position", position)?;
        actor.set_attribute("angle", required(fields, "angle")?.clone())?;
        actor.set_attribute("health", required(fields, "health")?.clone())?;
        debug!("actor decoded from fields: {actor:?}");
        Ok(actor)
    }

    /// Assign an attribute by name.
    ///
    /// Names with a schema entry are coerced to the declared type; other names
    /// are stored verbatim.
    ///
    /// # Errors
    /// Returns [`CoercionError`] when the declared type rejects `value`. The
    /// actor is left unchanged in that case.
    pub fn set_attribute(
        &mut self,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<(), CoercionError> {
        let incoming = value.into();
        let Some(entry) = property::lookup(name) else {
            debug!("no schema entry for `{name}`; storing verbatim");
            self.store(name, incoming);
            return Ok(());
        };
        let coerced = entry.coerce(incoming)?;
        self.store(entry.name, coerced);
        Ok(())
    }

    fn store(&mut self, name: &str, value: PropertyValue) {
        match (name, value) {
            ("position", PropertyValue::Vector(v)) => self.position = v,
            ("health", PropertyValue::Fixed(f)) => self.health = f,
            ("angle", PropertyValue::Angle(a)) => self.angle = a,
            (_, other) => {
                self.extras.insert(name.to_owned(), other);
            }
        }
    }

    /// Read an attribute by name, covering schema properties and extras.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<PropertyValue> {
        match name {
            "position" => Some(PropertyValue::Vector(self.position)),
            "health" => Some(PropertyValue::Fixed(self.health)),
            "angle" => Some(PropertyValue::Angle(self.angle)),
            _ => self.extras.get(name).cloned(),
        }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> V3Fixed {
        self.position
    }

    /// Current health.
    #[must_use]
    pub const fn health(&self) -> Fixed {
        self.health
    }

    /// Current facing.
    #[must_use]
    pub const fn angle(&self) -> Angle {
        self.angle
    }

    /// Attributes stored without a schema entry.
    #[must_use]
    pub const fn extras(&self) -> &HashMap<String, PropertyValue> {
        &self.extras
    }

    /// Move the actor to anything convertible into a [`V3Fixed`].
    pub fn set_position(&mut self, position: impl Into<V3Fixed>) {
        self.position = position.into();
    }

    /// Set health from anything convertible into a [`Fixed`].
    pub fn set_health(&mut self, health: impl Into<Fixed>) {
        self.health = health.into();
    }

    /// Set facing from anything convertible into an [`Angle`].
    pub fn set_angle(&mut self, angle: impl Into<Angle>) {
        self.angle = angle.into();
    }

    /// Write `x`, `y`, `z`, `angle` and `health` into an existing field map.
    pub fn write_fields(&self, fields: &mut ActorFields) {
        fields.insert("x".to_owned(), Value::from(self.position.x.0));
        fields.insert("y".to_owned(), Value::from(self.position.y.0));
        fields.insert("z".to_owned(), Value::from(self.position.z.0));
        fields.insert("angle".to_owned(), Value::from(self.angle.0));
        fields.insert("health".to_owned(), Value::from(self.health.0));
    }

    /// Encode the actor as a fresh field map.
    #[must_use]
    pub fn to_fields(&self) -> ActorFields {
        let mut fields = ActorFields::new();
        self.write_fields(&mut fields);
        fields
    }
}
