//! Fixed-point and binary-angle constants shared across the crate.
//!
//! The scalar types carry no scaling of their own; these values document the
//! conventions the engine uses when interpreting them.

/// Number of fractional bits in the engine's 16.16 fixed-point convention.
pub const FRACBITS: u32 = 16;
/// One whole map unit in 16.16 fixed-point.
pub const FRACUNIT: i32 = 1 << FRACBITS;

/// An eighth of a turn. A full turn maps onto 2^32.
pub const ANG45: u32 = 0x2000_0000;
/// A quarter turn.
pub const ANG90: u32 = 0x4000_0000;
/// Half a turn.
pub const ANG180: u32 = 0x8000_0000;
/// Three quarters of a turn.
pub const ANG270: u32 = 0xC000_0000;

/// Script module loaded by [`crate::ScriptRunner::with_builtin_modules`].
pub const DEFAULT_SCRIPT_PATH: &str = "test.py";
/// Module name derived from [`DEFAULT_SCRIPT_PATH`].
pub const DEFAULT_SCRIPT_MODULE: &str = "test";
/// Thinker function invoked for every actor unless overridden.
pub const DEFAULT_THINKER: &str = "run_actor_thinker";

/// Demo actor x coordinate used when the binary has no input file.
pub const DEMO_ACTOR_X: i64 = 50;
/// Demo actor y coordinate.
pub const DEMO_ACTOR_Y: i64 = -50;
/// Demo actor z coordinate.
pub const DEMO_ACTOR_Z: i64 = 0;
/// Demo actor facing, 100 whole angle units.
pub const DEMO_ACTOR_ANGLE: i64 = 100 * 65_536;
/// Demo actor health.
pub const DEMO_ACTOR_HEALTH: i64 = 100;
