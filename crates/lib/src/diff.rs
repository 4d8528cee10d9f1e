//! Configuration diffs: the pure output of platform setup.
//!
//! Platform setup never touches an environment directly. It produces a
//! [`ConfigDiff`], an ordered list of operations the caller applies with
//! [`BuildEnv::apply`](crate::env::BuildEnv::apply). This keeps the setup
//! logic testable without a live build-tool instance and lets callers
//! inspect or serialize what would change before anything does.

use serde::{Deserialize, Serialize};

use crate::env::Value;

/// A single environment operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ConfigOp {
  /// Replace a variable's value.
  Set { key: String, value: Value },

  /// Extend a list variable.
  Append { key: String, items: Vec<String> },

  /// Load a toolchain module.
  LoadTool { name: String },
}

/// An ordered set of environment operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDiff {
  ops: Vec<ConfigOp>,
}

impl ConfigDiff {
  /// Create an empty diff.
  pub fn new() -> Self {
    Self::default()
  }

  /// Record a set operation.
  pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
    self.ops.push(ConfigOp::Set {
      key: key.into(),
      value: value.into(),
    });
  }

  /// Record an append operation.
  pub fn append(&mut self, key: impl Into<String>, items: impl IntoIterator<Item = impl Into<String>>) {
    self.ops.push(ConfigOp::Append {
      key: key.into(),
      items: items.into_iter().map(Into::into).collect(),
    });
  }

  /// Record a tool load.
  pub fn load_tool(&mut self, name: impl Into<String>) {
    self.ops.push(ConfigOp::LoadTool { name: name.into() });
  }

  /// The recorded operations, in order.
  pub fn ops(&self) -> &[ConfigOp] {
    &self.ops
  }

  /// Number of recorded operations.
  pub fn len(&self) -> usize {
    self.ops.len()
  }

  /// Whether the diff records nothing.
  pub fn is_empty(&self) -> bool {
    self.ops.is_empty()
  }
}
