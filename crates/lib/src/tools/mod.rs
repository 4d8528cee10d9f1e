//! External build-tool registration.
//!
//! Tools follow the build tool's two-operation protocol: `generate` wires
//! the tool's construction variables into an environment, `exists` probes
//! whether the executable is actually reachable.

pub mod reflex;

use std::path::{Path, PathBuf};

use crate::env::BuildEnv;
use crate::platform::probe::EnvProbe;

/// The registration protocol for external build tools.
pub trait Tool {
  /// The tool's registry name.
  fn name(&self) -> &'static str;

  /// Write the tool's construction variables into the environment.
  fn generate(&self, env: &mut BuildEnv);

  /// Whether the tool's executable is reachable on the probe's `PATH`.
  fn exists(&self, probe: &dyn EnvProbe) -> bool;
}

/// Locate `program` on the probe's `PATH`.
pub fn where_is(probe: &dyn EnvProbe, program: &str) -> Option<PathBuf> {
  let path = probe.var("PATH")?;
  std::env::split_paths(&path)
    .map(|dir| dir.join(program))
    .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
  use std::os::unix::fs::PermissionsExt;

  path.is_file()
    && std::fs::metadata(path)
      .map(|m| m.permissions().mode() & 0o111 != 0)
      .unwrap_or(false)
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
  // resolution through PATHEXT is the shell's job; presence is enough here
  path.is_file() || path.with_extension("exe").is_file()
}
