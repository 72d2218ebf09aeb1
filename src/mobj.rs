//! Engine-side map objects and their field-map encoding.
//!
//! [`marshal`] exposes a map object to thinker scripts as a raw field map.
//! [`unmarshal`] reads back the subset scripts are allowed to change:
//! position, previous position, angles and health.

use log::trace;
use serde_json::Value;

use crate::actor::{angle_field, fixed_field, ActorError, ActorFields};
use crate::numeric::{Angle, Fixed};
use crate::vector::V3Fixed;

crate::fixed_vector! {
    /// Per-tic velocity of a map object.
    pub struct Momentum;
}

/// A thing in the level as the engine stores it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapObject {
    /// Current position.
    pub position: V3Fixed,
    /// Position at the end of the previous tic.
    pub prev_position: V3Fixed,
    /// Facing.
    pub angle: Angle,
    /// Facing at the end of the previous tic.
    pub prev_angle: Angle,
    /// Animation frame index.
    pub frame: i32,
    /// Vertical look angle.
    pub pitch: Fixed,
    /// Vertical look angle at the end of the previous tic.
    pub prev_pitch: Fixed,
    /// Render effect flags.
    pub effects: u32,
    /// Height of the floor beneath the object.
    pub floor_z: Fixed,
    /// Height of the ceiling above the object.
    pub ceiling_z: Fixed,
    /// Lowest floor the object could step down to.
    pub dropoff_z: Fixed,
    /// Collision radius.
    pub radius: Fixed,
    /// Collision height.
    pub height: Fixed,
    /// Velocity.
    pub momentum: Momentum,
    /// Hit points.
    pub health: i32,
}

fn put(fields: &mut ActorFields, key: &str, value: impl Into<Value>) {
    fields.insert(key.to_owned(), value.into());
}

/// Encode every scripted field of `mobj`.
#[must_use]
pub fn marshal(mobj: &MapObject) -> ActorFields {
    let mut fields = ActorFields::new();
    put(&mut fields, "x", mobj.position.x.0);
    put(&mut fields, "y", mobj.position.y.0);
    put(&mut fields, "z", mobj.position.z.0);
    put(&mut fields, "prevx", mobj.prev_position.x.0);
    put(&mut fields, "prevy", mobj.prev_position.y.0);
    put(&mut fields, "prevz", mobj.prev_position.z.0);
    put(&mut fields, "angle", mobj.angle.0);
    put(&mut fields, "prevangle", mobj.prev_angle.0);
    put(&mut fields, "frame", mobj.frame);
    put(&mut fields, "pitch", mobj.pitch.0);
    put(&mut fields, "prevpitch", mobj.prev_pitch.0);
    put(&mut fields, "effects", mobj.effects);
    put(&mut fields, "floorz", mobj.floor_z.0);
    put(&mut fields, "ceilingz", mobj.ceiling_z.0);
    put(&mut fields, "dropoffz", mobj.dropoff_z.0);
    put(&mut fields, "radius", mobj.radius.0);
    put(&mut fields, "height", mobj.height.0);
    put(&mut fields, "momx", mobj.momentum.x.0);
    put(&mut fields, "momy", mobj.momentum.y.0);
    put(&mut fields, "momz", mobj.momentum.z.0);
    put(&mut fields, "health", mobj.health);
    trace!("marshalled map object into {} fields", fields.len());
    fields
}

/// Apply script-writable fields back onto `mobj`.
///
/// All fields are validated before any is written, so a failure leaves
/// `mobj` unchanged.
///
/// # Errors
/// Returns [`ActorError::MissingField`] when a writable key is absent and
/// [`ActorError::Coercion`] when one is not numeric.
pub fn unmarshal(fields: &ActorFields, mobj: &mut MapObject) -> Result<(), ActorError> {
    let position = V3Fixed {
        x: fixed_field(fields, "x")?,
        y: fixed_field(fields, "y")?,
        z: fixed_field(fields, "z")?,
    };
    let prev_position = V3Fixed {
        x: fixed_field(fields, "prevx")?,
        y: fixed_field(fields, "prevy")?,
        z: fixed_field(fields, "prevz")?,
    };
    let angle = angle_field(fields, "angle")?;
    let prev_angle = angle_field(fields, "prevangle")?;
    let health = fixed_field(fields, "health")?;

    mobj.position = position;
    mobj.prev_position = prev_position;
    mobj.angle = angle;
    mobj.prev_angle = prev_angle;
    mobj.health = health.into_inner();
    Ok(())
}
