//! Library crate providing typed actor properties for scripted thinkers.
//! Re-exports the scalar and vector types, the actor container and the script
//! runner used by the main application and tests.
mod macros;

pub mod actor;
pub mod constants;
pub mod logging;
pub mod mobj;
pub mod numeric;
pub mod property;
pub mod script;
pub mod thinker;
pub mod vector;
pub use constants::*;

// Re-export commonly used items
pub use actor::{Actor, ActorError, ActorFields};
pub use logging::init as init_logging;
pub use mobj::{marshal, unmarshal, MapObject, Momentum};
pub use numeric::{Angle, Fixed};
pub use property::{
    CoercionError, PropertyKind, PropertySchemaEntry, PropertyValue, ACTOR_SCHEMA,
};
pub use script::{module_name_from_path, ScriptError, ScriptRunner, ThinkerFn};
pub use thinker::{run_actor_thinker, ThinkerError};
pub use vector::{FixedComponents, FixedVector, V3Fixed};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use actor_script::prelude::*;
    //! ```

    pub use crate::Actor;
    pub use crate::ActorFields;
    pub use crate::Angle;
    pub use crate::Fixed;
    pub use crate::FixedVector;
    pub use crate::PropertyValue;
    pub use crate::ScriptRunner;
    pub use crate::V3Fixed;
}
