//! Custom build rules: archive joining and shared-library linking.
//!
//! A [`BuilderDescriptor`] bundles an action template with the naming
//! conventions for its target. Descriptors are plain data; rendering a
//! concrete command happens through [`BuilderDescriptor::command`] against
//! a [`BuildEnv`].

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::env::{BuildEnv, Value};
use crate::platform::Platform;
use crate::subst::{self, Scope, SubstError};

/// Implicit outputs a builder produces beyond its declared target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emitter {
  /// A web shared-library link also drops the byte-code payload next to
  /// the JS glue target, with a `.wasm` extension.
  WebSharedLib,
}

impl Emitter {
  /// Augment the declared target list with implicit outputs.
  ///
  /// Sources pass through unchanged. Callers declare at least one target.
  pub fn emit(&self, mut targets: Vec<PathBuf>, sources: Vec<PathBuf>) -> (Vec<PathBuf>, Vec<PathBuf>) {
    match self {
      Emitter::WebSharedLib => {
        debug_assert!(!targets.is_empty(), "shared-library build declares a target");
        if let Some(first) = targets.first() {
          // the first target is the JS glue file
          let wasm = first.with_extension("wasm");
          targets.push(wasm);
        }
        (targets, sources)
      }
    }
  }
}

/// A custom build rule: how to produce a target from sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderDescriptor {
  /// Action template, expanded against the environment at render time.
  pub action: String,

  /// Implicit-output emitter, when the rule produces more than its target.
  pub emitter: Option<Emitter>,

  /// Target file-name prefix template.
  pub prefix: String,

  /// Target file-name suffix template.
  pub suffix: String,
}

/// Joins a set of static libraries into one archive.
pub fn archive_join(platform: Platform) -> BuilderDescriptor {
  let action = match platform {
    Platform::Linux => "$AR cq --thin $TARGET $SOURCES",
    // emar's link-time archive mode
    Platform::Web => "$AR cqL $TARGET $SOURCES",
  };

  BuilderDescriptor {
    action: action.to_string(),
    emitter: None,
    prefix: "$LIBPREFIX".to_string(),
    suffix: "$LIBSUFFIX".to_string(),
  }
}

/// Links a set of static libraries into one shared library.
///
/// Both actions bracket the inputs with `--whole-archive` so the linker
/// keeps every archive member instead of dropping the unreferenced ones.
pub fn shared_lib(platform: Platform) -> BuilderDescriptor {
  let (action, emitter) = match platform {
    Platform::Linux => (
      "$LINK $LINKFLAGS -shared -o $TARGET -Wl,--whole-archive $SOURCES -Wl,--no-whole-archive",
      None,
    ),
    // no -shared: emcc picks the output kind from the target suffix, and
    // the JS glue target gains a companion .wasm payload
    Platform::Web => (
      "$LINK $LINKFLAGS -o $TARGET -Wl,--whole-archive $SOURCES -Wl,--no-whole-archive",
      Some(Emitter::WebSharedLib),
    ),
  };

  BuilderDescriptor {
    action: action.to_string(),
    emitter,
    prefix: "$SHLIBPREFIX".to_string(),
    suffix: "$SHLIBSUFFIX".to_string(),
  }
}

/// Scope binding `$TARGET`/`$SOURCES` over an environment for one
/// invocation.
struct CommandScope<'a> {
  env: &'a BuildEnv,
  bindings: BTreeMap<&'static str, Value>,
}

impl<'a> CommandScope<'a> {
  fn new(env: &'a BuildEnv, targets: &[PathBuf], sources: &[PathBuf]) -> Self {
    let paths = |list: &[PathBuf]| -> Vec<String> {
      list.iter().map(|p| p.to_string_lossy().into_owned()).collect()
    };

    let mut bindings = BTreeMap::new();
    if let Some(first) = targets.first() {
      bindings.insert("TARGET", Value::Str(first.to_string_lossy().into_owned()));
    }
    bindings.insert("TARGETS", Value::List(paths(targets)));
    if let Some(first) = sources.first() {
      bindings.insert("SOURCE", Value::Str(first.to_string_lossy().into_owned()));
    }
    bindings.insert("SOURCES", Value::List(paths(sources)));

    Self { env, bindings }
  }
}

impl Scope for CommandScope<'_> {
  fn lookup(&self, name: &str) -> Option<Value> {
    self.bindings.get(name).cloned().or_else(|| self.env.lookup(name))
  }
}

impl BuilderDescriptor {
  /// Render the action into the command line for one invocation.
  ///
  /// Gaps left by empty variables collapse to single spaces, matching how
  /// the build tool splits an action into command words.
  pub fn command(&self, env: &BuildEnv, targets: &[PathBuf], sources: &[PathBuf]) -> Result<String, SubstError> {
    let scope = CommandScope::new(env, targets, sources);
    let expanded = subst::expand(&self.action, &scope)?;
    Ok(expanded.split_whitespace().collect::<Vec<_>>().join(" "))
  }

  /// Render the target file name for a library called `name`, e.g. `core`
  /// becomes `libcore.a`.
  pub fn target_path(&self, env: &BuildEnv, name: &str) -> Result<PathBuf, SubstError> {
    let prefix = subst::expand(&self.prefix, env)?;
    let suffix = subst::expand(&self.suffix, env)?;
    Ok(PathBuf::from(format!("{prefix}{name}{suffix}")))
  }

  /// Apply the emitter, if any, to the declared outputs.
  pub fn emit(&self, targets: Vec<PathBuf>, sources: Vec<PathBuf>) -> (Vec<PathBuf>, Vec<PathBuf>) {
    match &self.emitter {
      Some(emitter) => emitter.emit(targets, sources),
      None => (targets, sources),
    }
  }
}
