//! The build environment: construction variables and loaded tool modules.
//!
//! A [`BuildEnv`] is the mapping a build tool evaluates action templates
//! against. Variables hold either a single string or a list of strings
//! (flag lists, search paths). The environment itself never decides what a
//! platform needs; it only stores values and applies [`ConfigDiff`]s.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::consts;
use crate::diff::{ConfigDiff, ConfigOp};

/// A construction-variable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
  Str(String),
  List(Vec<String>),
}

impl From<&str> for Value {
  fn from(s: &str) -> Self {
    Value::Str(s.to_string())
  }
}

impl From<String> for Value {
  fn from(s: String) -> Self {
    Value::Str(s)
  }
}

impl From<Vec<String>> for Value {
  fn from(items: Vec<String>) -> Self {
    Value::List(items)
  }
}

impl Value {
  /// The value as a single string, if it is one.
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::Str(s) => Some(s),
      Value::List(_) => None,
    }
  }

  /// The value as a list, if it is one.
  pub fn as_list(&self) -> Option<&[String]> {
    match self {
      Value::Str(_) => None,
      Value::List(items) => Some(items),
    }
  }
}

/// The construction-variable environment a build runs against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildEnv {
  vars: BTreeMap<String, Value>,
  tools: Vec<String>,
}

impl BuildEnv {
  /// Create an empty environment.
  pub fn new() -> Self {
    Self::default()
  }

  /// Create an environment with POSIX-flavoured defaults.
  ///
  /// The link command defaults to the plain C driver; platform setup
  /// overrides it where a different driver is required.
  pub fn with_defaults() -> Self {
    let mut env = Self::new();
    env.set(consts::CC, "cc");
    env.set(consts::CXX, "c++");
    env.set(consts::AR, "ar");
    env.set(consts::LINK, "$CC");
    env.set(consts::LIBPREFIX, "lib");
    env.set(consts::LIBSUFFIX, ".a");
    env.set(consts::SHLIBPREFIX, "lib");
    env.set(consts::SHLIBSUFFIX, ".so");
    env.set(consts::CXXFLAGS, Vec::<String>::new());
    env.set(consts::LINKFLAGS, Vec::<String>::new());
    env.set(consts::CPPPATH, Vec::<String>::new());
    env.set(consts::TOOLPATH, Vec::<String>::new());
    env
  }

  /// Look up a variable.
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.vars.get(key)
  }

  /// Look up a string-valued variable.
  pub fn get_str(&self, key: &str) -> Option<&str> {
    self.get(key).and_then(Value::as_str)
  }

  /// Look up a list-valued variable.
  pub fn get_list(&self, key: &str) -> Option<&[String]> {
    self.get(key).and_then(Value::as_list)
  }

  /// Set a variable, replacing any previous value.
  pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
    let key = key.into();
    let value = value.into();
    trace!(key = %key, "set");
    self.vars.insert(key, value);
  }

  /// Extend a list variable.
  ///
  /// A missing variable becomes a list; a string variable is promoted to a
  /// one-element list before extending.
  pub fn append(&mut self, key: impl Into<String>, items: impl IntoIterator<Item = impl Into<String>>) {
    let key = key.into();
    let items: Vec<String> = items.into_iter().map(Into::into).collect();
    trace!(key = %key, count = items.len(), "append");

    match self.vars.remove(&key) {
      Some(Value::List(mut list)) => {
        list.extend(items);
        self.vars.insert(key, Value::List(list));
      }
      Some(Value::Str(s)) => {
        let mut list = vec![s];
        list.extend(items);
        self.vars.insert(key, Value::List(list));
      }
      None => {
        self.vars.insert(key, Value::List(items));
      }
    }
  }

  /// Record a toolchain module as loaded. Repeated loads are ignored.
  pub fn load_tool(&mut self, name: impl Into<String>) {
    let name = name.into();
    if !self.tools.contains(&name) {
      self.tools.push(name);
    }
  }

  /// The toolchain modules loaded so far, in load order.
  pub fn tools(&self) -> &[String] {
    &self.tools
  }

  /// Whether a toolchain module has been loaded.
  pub fn has_tool(&self, name: &str) -> bool {
    self.tools.iter().any(|t| t == name)
  }

  /// Apply a configuration diff in order.
  pub fn apply(&mut self, diff: &ConfigDiff) {
    for op in diff.ops() {
      match op {
        ConfigOp::Set { key, value } => self.set(key.clone(), value.clone()),
        ConfigOp::Append { key, items } => self.append(key.clone(), items.iter().cloned()),
        ConfigOp::LoadTool { name } => self.load_tool(name.clone()),
      }
    }
  }

  /// Iterate over all variables in key order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
    self.vars.iter().map(|(k, v)| (k.as_str(), v))
  }
}
