//! Registry and dispatch for actor thinker scripts.
//!
//! Script modules are registered under a dotted module name derived from the
//! file they were loaded from. A thinker is looked up by module and function
//! name and called with a marshalled actor; its integer return value is the
//! status code (0 on success).

use std::path::Path;

use hashbrown::HashMap;
use log::{debug, error, info};
use thiserror::Error;

use crate::actor::{ActorError, ActorFields};
use crate::mobj::{marshal, unmarshal, MapObject};
use crate::thinker::{run_actor_thinker, ThinkerError};
use crate::{DEFAULT_SCRIPT_PATH, DEFAULT_THINKER};

/// Signature shared by every thinker function.
pub type ThinkerFn = fn(&mut ActorFields) -> Result<i32, ThinkerError>;

/// Failures raised while loading or running scripts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptError {
    /// The script path produced no usable module name.
    #[error("cannot derive a module name from `{0}`")]
    EmptyModuleName(String),
    /// No module with this name has been imported.
    #[error("module `{0}` is not loaded")]
    ModuleNotFound(String),
    /// The module exists but exposes no such function.
    #[error("module `{module}` has no function `{function}`")]
    FunctionNotFound {
        /// Module searched.
        module: String,
        /// Function requested.
        function: String,
    },
    /// The thinker itself failed.
    #[error("{module}.{function} failed: {source}")]
    Thinker {
        /// Module holding the thinker.
        module: String,
        /// Thinker function name.
        function: String,
        /// Error returned by the thinker.
        source: ThinkerError,
    },
    /// The thinker returned fields the engine cannot read back.
    #[error("thinker output rejected: {0}")]
    Unmarshal(#[from] ActorError),
}

/// Convert a script file path into a dotted module name.
///
/// The extension of the final component is dropped, path separators become
/// dots, a trailing `__init__` is removed and trailing dots are trimmed.
///
/// # Examples
/// ```
/// use actor_script::module_name_from_path;
/// assert_eq!(module_name_from_path("test.py"), "test");
/// assert_eq!(module_name_from_path("ai/monsters.py"), "ai.monsters");
/// assert_eq!(module_name_from_path("my_module/__init__.py"), "my_module");
/// ```
#[must_use]
pub fn module_name_from_path(path: &str) -> String {
    let file_start = path.rfind(|c: char| c == '/' || c == '\\').map_or(0, |sep| sep + 1);
    let stem_end = path
        .get(file_start..)
        .and_then(|file| file.rfind('.'))
        .filter(|&dot| dot > 0)
        .map_or(path.len(), |dot| file_start + dot);
    let stem = path.get(..stem_end).unwrap_or(path);

    let dotted: String = stem
        .chars()
        .map(|c| if c == '/' || c == '\\' { '.' } else { c })
        .collect();
    let package = dotted.strip_suffix("__init__").unwrap_or(&dotted);
    package.trim_end_matches('.').to_owned()
}

/// A loaded script module.
#[derive(Clone, Debug, Default)]
pub struct ScriptModule {
    functions: HashMap<String, ThinkerFn>,
}

impl ScriptModule {
    /// Names of the functions this module exposes.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

/// Loads thinker modules and dispatches calls into them.
#[derive(Clone, Debug)]
pub struct ScriptRunner {
    modules: HashMap<String, ScriptModule>,
    thinker_module: Option<String>,
    thinker_function: String,
}

impl Default for ScriptRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptRunner {
    /// Create a runner with no modules loaded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
            thinker_module: None,
            thinker_function: DEFAULT_THINKER.to_owned(),
        }
    }

    /// Create a runner with the built-in `test` module loaded and selected as
    /// the actor thinker.
    #[must_use]
    pub fn with_builtin_modules() -> Self {
        let mut runner = Self::new();
        let module = module_name_from_path(DEFAULT_SCRIPT_PATH);
        let functions: [(&str, ThinkerFn); 1] = [(DEFAULT_THINKER, run_actor_thinker)];
        runner.insert_module(module.clone(), functions);
        runner.thinker_module = Some(module);
        runner
    }

    fn insert_module<'a>(
        &mut self,
        name: String,
        functions: impl IntoIterator<Item = (&'a str, ThinkerFn)>,
    ) {
        let module = ScriptModule {
            functions: functions
                .into_iter()
                .map(|(function, thinker)| (function.to_owned(), thinker))
                .collect(),
        };
        info!(
            "loaded script module `{name}` with {} function(s)",
            module.functions.len()
        );
        self.modules.insert(name, module);
    }

    /// Register a module loaded from `path`, returning its module name.
    ///
    /// Importing a name that is already loaded replaces the old module.
    ///
    /// # Errors
    /// Returns [`ScriptError::EmptyModuleName`] when `path` yields no name.
    pub fn import_module<'a>(
        &mut self,
        path: impl AsRef<Path>,
        functions: impl IntoIterator<Item = (&'a str, ThinkerFn)>,
    ) -> Result<String, ScriptError> {
        let display = path.as_ref().to_string_lossy();
        let name = module_name_from_path(&display);
        if name.is_empty() {
            return Err(ScriptError::EmptyModuleName(display.into_owned()));
        }
        self.insert_module(name.clone(), functions);
        Ok(name)
    }

    /// Look up a loaded module.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&ScriptModule> {
        self.modules.get(name)
    }

    /// Select the module and function used by [`Self::run_actor_thinker`].
    pub fn set_thinker(&mut self, module: impl Into<String>, function: impl Into<String>) {
        self.thinker_module = Some(module.into());
        self.thinker_function = function.into();
    }

    /// Call `module.function` with `fields`, returning its status code.
    ///
    /// # Errors
    /// Returns [`ScriptError::ModuleNotFound`] or
    /// [`ScriptError::FunctionNotFound`] when the callee is not loaded, and
    /// [`ScriptError::Thinker`] when the thinker fails.
    pub fn run(
        &self,
        module: &str,
        function: &str,
        fields: &mut ActorFields,
    ) -> Result<i32, ScriptError> {
        let loaded = self
            .modules
            .get(module)
            .ok_or_else(|| ScriptError::ModuleNotFound(module.to_owned()))?;
        let thinker =
            loaded
                .functions
                .get(function)
                .ok_or_else(|| ScriptError::FunctionNotFound {
                    module: module.to_owned(),
                    function: function.to_owned(),
                })?;
        debug!("calling {module}.{function}");
        thinker(fields).map_err(|source| {
            error!("{module}.{function} raised: {source}");
            ScriptError::Thinker {
                module: module.to_owned(),
                function: function.to_owned(),
                source,
            }
        })
    }

    /// Run the selected thinker against a map object.
    ///
    /// The object is marshalled, handed to the thinker and, when the thinker
    /// succeeds, updated from the returned fields. On failure the object is
    /// left as it was.
    ///
    /// # Errors
    /// Returns [`ScriptError::ModuleNotFound`] when no thinker module is
    /// selected, any error from [`Self::run`], and
    /// [`ScriptError::Unmarshal`] when the returned fields are unusable.
    pub fn run_actor_thinker(&self, mobj: &mut MapObject) -> Result<i32, ScriptError> {
        let module = self
            .thinker_module
            .as_deref()
            .ok_or_else(|| ScriptError::ModuleNotFound(String::new()))?;
        let mut fields = marshal(mobj);
        let status = self.run(module, &self.thinker_function, &mut fields)?;
        unmarshal(&fields, mobj)?;
        Ok(status)
    }
}
