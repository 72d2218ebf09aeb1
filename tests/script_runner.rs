//! Script dispatch against map objects with user-supplied thinkers.
use actor_script::{
    Actor, ActorError, ActorFields, Angle, CoercionError, PropertyKind, ScriptError,
    ScriptRunner, ThinkerError, ThinkerFn, V3Fixed,
};
use rstest::{fixture, rstest};
use serde_json::json;
use test_utils::map_object_at;

/// Decode, heal and turn the actor, then write it back.
fn heal_and_turn(fields: &mut ActorFields) -> Result<i32, ThinkerError> {
    let Ok(mut actor) = Actor::from_fields(fields) else {
        return Ok(1);
    };
    actor.set_health(200);
    actor.set_angle(actor.angle() + Angle::new(100 * 65_536));
    actor.write_fields(fields);
    Ok(0)
}

fn drop_health(fields: &mut ActorFields) -> Result<i32, ThinkerError> {
    fields.remove("health");
    Ok(0)
}

fn corrupt_angle(fields: &mut ActorFields) -> Result<i32, ThinkerError> {
    fields.insert("angle".to_owned(), json!("east"));
    Ok(0)
}

fn quoted_health(fields: &mut ActorFields) -> Result<i32, ThinkerError> {
    fields.insert("health".to_owned(), json!("150"));
    Ok(0)
}

#[fixture]
fn runner() -> ScriptRunner {
    let mut runner = ScriptRunner::with_builtin_modules();
    let functions: [(&str, ThinkerFn); 4] = [
        ("heal_and_turn", heal_and_turn),
        ("drop_health", drop_health),
        ("corrupt_angle", corrupt_angle),
        ("quoted_health", quoted_health),
    ];
    let name = runner
        .import_module("scripts/ai/__init__.py", functions)
        .expect("valid module path");
    assert_eq!(name, "scripts.ai");
    runner
}

#[rstest]
fn thinker_updates_flow_back_into_map_object(mut runner: ScriptRunner) {
    runner.set_thinker("scripts.ai", "heal_and_turn");
    let mut mobj = map_object_at(V3Fixed::new(50, -50, 0), 100 * 65_536, 100);
    assert_eq!(runner.run_actor_thinker(&mut mobj), Ok(0));
    assert_eq!(mobj.health, 200);
    assert_eq!(mobj.angle, Angle::new(200 * 65_536));
    assert_eq!(mobj.position, V3Fixed::new(50, -50, 0));
}

#[rstest]
fn angle_wraps_past_a_full_turn(mut runner: ScriptRunner) {
    runner.set_thinker("scripts.ai", "heal_and_turn");
    let mut mobj = map_object_at(V3Fixed::ZERO, u32::MAX, 1);
    assert_eq!(runner.run_actor_thinker(&mut mobj), Ok(0));
    assert_eq!(mobj.angle, Angle::new(100 * 65_536 - 1));
}

#[rstest]
fn integer_string_output_is_accepted(mut runner: ScriptRunner) {
    runner.set_thinker("scripts.ai", "quoted_health");
    let mut mobj = map_object_at(V3Fixed::ZERO, 0, 10);
    assert_eq!(runner.run_actor_thinker(&mut mobj), Ok(0));
    assert_eq!(mobj.health, 150);
}

#[rstest]
#[case("drop_health", ScriptError::Unmarshal(ActorError::MissingField("health")))]
#[case(
    "corrupt_angle",
    ScriptError::Unmarshal(ActorError::Coercion(CoercionError {
        property: "angle".to_owned(),
        kind: PropertyKind::Angle,
        value: json!("east"),
    }))
)]
fn unusable_output_is_rejected(
    mut runner: ScriptRunner,
    #[case] function: &str,
    #[case] expected: ScriptError,
) {
    runner.set_thinker("scripts.ai", function);
    let original = map_object_at(V3Fixed::new(1, 2, 3), 0, 10);
    let mut mobj = original.clone();
    assert_eq!(runner.run_actor_thinker(&mut mobj), Err(expected));
    assert_eq!(mobj, original);
}

#[rstest]
fn builtin_thinker_still_fails(runner: ScriptRunner) {
    let mut fields = ActorFields::new();
    let err = runner
        .run("test", "run_actor_thinker", &mut fields)
        .expect_err("built-in thinker is disabled");
    assert_eq!(
        err.to_string(),
        "test.run_actor_thinker failed: actor thinker is disabled"
    );
}
