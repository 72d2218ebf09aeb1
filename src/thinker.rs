//! Scripted actor thinker.
//!
//! The thinker is switched off: it fails before reading or writing the field
//! map it is handed. Callers must treat it as non-functional until it is
//! re-enabled.

use thiserror::Error;

use crate::actor::ActorFields;

/// Errors raised by thinker functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ThinkerError {
    /// The thinker has been disabled and performs no work.
    #[error("actor thinker is disabled")]
    Disabled,
}

/// Run the actor thinker over a marshalled actor.
///
/// Always returns [`ThinkerError::Disabled`]; `fields` is never touched.
///
/// # Errors
/// Unconditionally returns [`ThinkerError::Disabled`].
///
/// # Examples
/// ```
/// use actor_script::{run_actor_thinker, ActorFields, ThinkerError};
/// let mut fields = ActorFields::new();
/// assert_eq!(run_actor_thinker(&mut fields), Err(ThinkerError::Disabled));
/// assert!(fields.is_empty());
/// ```
pub fn run_actor_thinker(_fields: &mut ActorFields) -> Result<i32, ThinkerError> {
    Err(ThinkerError::Disabled)
}
