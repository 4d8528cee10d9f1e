//! Test utilities for emforge-lib.

use std::collections::BTreeMap;

use crate::platform::probe::EnvProbe;

/// An [`EnvProbe`] over a fixed variable map and host OS name.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
  host_os: String,
  vars: BTreeMap<String, String>,
}

impl StaticProbe {
  /// A probe reporting `host_os` and no variables.
  pub fn new(host_os: &str) -> Self {
    Self {
      host_os: host_os.to_string(),
      vars: BTreeMap::new(),
    }
  }

  /// Add a variable to the probe.
  pub fn with_var(mut self, name: &str, value: &str) -> Self {
    self.vars.insert(name.to_string(), value.to_string());
    self
  }
}

impl EnvProbe for StaticProbe {
  fn var(&self, name: &str) -> Option<String> {
    self.vars.get(name).cloned().filter(|v| !v.is_empty())
  }

  fn host_os(&self) -> String {
    self.host_os.clone()
  }
}
