//! Utility helpers for tests.
//! Builders for raw actor field maps and map objects.

use actor_script::{ActorFields, Angle, MapObject, V3Fixed};
use serde_json::Value;

/// Build a field map from `(key, value)` pairs.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use test_utils::fields_from;
/// let fields = fields_from([("health", json!(5))]);
/// assert_eq!(fields.get("health"), Some(&json!(5)));
/// ```
pub fn fields_from<'a>(pairs: impl IntoIterator<Item = (&'a str, Value)>) -> ActorFields {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

/// Field map carrying exactly the keys an actor is decoded from.
pub fn actor_fields(x: i64, y: i64, z: i64, angle: i64, health: i64) -> ActorFields {
    fields_from([
        ("x", Value::from(x)),
        ("y", Value::from(y)),
        ("z", Value::from(z)),
        ("angle", Value::from(angle)),
        ("health", Value::from(health)),
    ])
}

/// The reference actor: `(50, -50, 0)`, angle `100 << 16`, health 100.
pub fn demo_fields() -> ActorFields {
    actor_fields(50, -50, 0, 100 * 65_536, 100)
}

/// A map object standing at `position` and facing `angle`, with `health`.
pub fn map_object_at(position: V3Fixed, angle: u32, health: i32) -> MapObject {
    MapObject {
        position,
        prev_position: position,
        angle: Angle(angle),
        prev_angle: Angle(angle),
        health,
        ..MapObject::default()
    }
}

/// Assert that `fields` holds `expected` under `key`.
///
/// # Panics
/// Panics with a helpful message when the key is absent or differs.
pub fn assert_field(fields: &ActorFields, key: &str, expected: &Value) {
    match fields.get(key) {
        Some(actual) => assert_eq!(actual, expected, "field `{key}` differs"),
        None => panic!("field `{key}` missing from {fields:?}"),
    }
}
