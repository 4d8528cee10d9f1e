//! Process-environment probing behind an injectable trait.
//!
//! Platform resolution and web setup read the process environment through
//! [`EnvProbe`] so the logic can run against a fixed map in tests instead
//! of mutating real process state.

/// Source of process-level environment facts.
pub trait EnvProbe {
  /// Value of an environment variable. Unset and empty both read as `None`.
  fn var(&self, name: &str) -> Option<String>;

  /// The host operating system, as `std::env::consts::OS` spells it.
  fn host_os(&self) -> String;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProbe for ProcessEnv {
  fn var(&self, name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
  }

  fn host_os(&self) -> String {
    std::env::consts::OS.to_string()
  }
}
