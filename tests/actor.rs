//! Integration tests for decoding and updating actors from raw fields.
use actor_script::{Actor, ActorError, Angle, Fixed, PropertyValue, V3Fixed};
use rstest::rstest;
use serde_json::json;
use test_utils::{actor_fields, assert_field, demo_fields, fields_from};

#[test]
fn default_actor_matches_schema_defaults() {
    let actor = Actor::new();
    assert_eq!(actor.position(), V3Fixed::new(0, 0, 0));
    assert_eq!(actor.health(), Fixed::new(0));
    assert_eq!(actor.angle(), Angle::new(0));
}

#[test]
fn decodes_reference_actor() {
    let actor = Actor::from_fields(&demo_fields()).expect("complete fields");
    assert_eq!(actor.position(), V3Fixed::new(50, -50, 0));
    assert_eq!(actor.angle(), Angle::new(6_553_600));
    assert_eq!(actor.health(), Fixed::new(100));
}

#[test]
fn manual_health_change_leaves_other_properties() {
    let mut actor =
        Actor::from_fields(&actor_fields(50, -50, 0, 100, 100)).expect("complete fields");
    actor
        .set_attribute("health", 200_i64)
        .expect("integers coerce to Fixed");
    assert_eq!(actor.health(), Fixed::new(200));
    assert_eq!(actor.angle(), Angle::new(100));
    assert_eq!(actor.position(), V3Fixed::new(50, -50, 0));
}

#[test]
fn missing_angle_and_health_is_reported() {
    let fields = fields_from([("x", json!(50)), ("y", json!(-50)), ("z", json!(0))]);
    assert_eq!(
        Actor::from_fields(&fields),
        Err(ActorError::MissingField("angle"))
    );
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(i64::from(i32::MAX))]
#[case(i64::from(i32::MAX) + 1)]
#[case(1_i64 << 40)]
fn health_assignment_stores_wrapped_value(#[case] value: i64) {
    let mut actor = Actor::new();
    actor.set_attribute("health", value).expect("numbers coerce");
    assert_eq!(actor.health(), Fixed::wrapping_from(value));

    // Writing the coerced value back is a no-op.
    actor
        .set_attribute("health", actor.health())
        .expect("already typed");
    assert_eq!(actor.health(), Fixed::wrapping_from(value));
}

#[test]
fn negative_angle_wraps_to_unsigned() {
    let actor = Actor::from_fields(&actor_fields(0, 0, 0, -1, 1)).expect("complete fields");
    assert_eq!(actor.angle(), Angle::new(u32::MAX));
}

#[test]
fn schema_typed_values_are_reported_by_name() {
    let actor = Actor::from_fields(&demo_fields()).expect("complete fields");
    assert_eq!(
        actor.attribute("position"),
        Some(PropertyValue::Vector(V3Fixed::new(50, -50, 0)))
    );
    assert_eq!(actor.attribute("unknown"), None);
}

#[test]
fn encoding_updates_fields_in_place() {
    let mut fields = demo_fields();
    fields.insert("frame".to_owned(), json!(4));
    let mut actor = Actor::from_fields(&fields).expect("complete fields");
    actor.set_health(200);
    actor.set_angle(Angle::new(6_553_600) + Angle::new(100 * 65_536));
    actor.write_fields(&mut fields);
    assert_field(&fields, "health", &json!(200));
    assert_field(&fields, "angle", &json!(13_107_200));
    assert_field(&fields, "frame", &json!(4));
}
