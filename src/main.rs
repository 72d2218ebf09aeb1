//! Command-line driver: decodes an actor and runs its thinker once.
use std::fs;
use std::path::PathBuf;

use actor_script::{
    init_logging, Actor, ActorFields, ScriptRunner, DEFAULT_SCRIPT_MODULE, DEFAULT_THINKER,
    DEMO_ACTOR_ANGLE, DEMO_ACTOR_HEALTH, DEMO_ACTOR_X, DEMO_ACTOR_Y, DEMO_ACTOR_Z,
};
use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::{error, info};
use serde_json::Value;

/// Run an actor thinker against a field map
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// JSON object holding the actor's raw fields; the demo actor is used
    /// when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Script module holding the thinker
    #[arg(short, long, default_value = DEFAULT_SCRIPT_MODULE)]
    module: String,
    /// Thinker function to call
    #[arg(short, long, default_value = DEFAULT_THINKER)]
    function: String,
}

fn demo_fields() -> ActorFields {
    [
        ("angle", DEMO_ACTOR_ANGLE),
        ("health", DEMO_ACTOR_HEALTH),
        ("x", DEMO_ACTOR_X),
        ("y", DEMO_ACTOR_Y),
        ("z", DEMO_ACTOR_Z),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_owned(), Value::from(value)))
    .collect()
}

fn load_fields(args: &Args) -> Result<ActorFields> {
    let Some(path) = &args.input else {
        return Ok(demo_fields());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(init_logging(args.verbose), "a logger is already installed");

    let mut fields = load_fields(&args)?;
    let actor = Actor::from_fields(&fields).context("decoding actor")?;
    info!(
        "actor at {:?} facing {:.1} degrees with {} health",
        actor.position(),
        actor.angle().to_degrees(),
        actor.health()
    );

    let runner = ScriptRunner::with_builtin_modules();
    match runner.run(&args.module, &args.function, &mut fields) {
        Ok(status) => {
            let updated = Actor::from_fields(&fields).context("decoding thinker output")?;
            info!("thinker returned {status}; actor now {updated:?}");
            Ok(())
        }
        Err(err) => {
            error!("thinker failed: {err}");
            Err(err.into())
        }
    }
}
