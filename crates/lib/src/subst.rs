//! Construction-variable substitution for action templates.
//!
//! Action strings reference construction variables as `$NAME` or
//! `${NAME}`. Expansion is recursive, so `LINK = "$CXX"` renders to the
//! `CXX` value. List values join with single spaces, unknown variables
//! render empty (the usual build-tool convention), and `$$` produces a
//! literal `$`. A lone `$` or `$5` passes through unchanged.
//!
//! # Example
//!
//! ```
//! use emforge_lib::env::BuildEnv;
//! use emforge_lib::subst::expand;
//!
//! let mut env = BuildEnv::new();
//! env.set("CXX", "em++");
//! env.set("LINK", "$CXX");
//! assert_eq!(expand("$LINK -o out.mjs", &env).unwrap(), "em++ -o out.mjs");
//! ```

use thiserror::Error;

use crate::env::{BuildEnv, Value};

/// Expansion depth after which a variable cycle is assumed.
const MAX_DEPTH: usize = 16;

/// Errors from expanding an action template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubstError {
  /// `${` without a closing brace.
  #[error("unclosed `${{` at position {0}")]
  Unclosed(usize),

  /// Expansion did not terminate within the depth limit.
  #[error("expansion of `${0}` exceeded the depth limit (variable cycle?)")]
  RecursionLimit(String),
}

/// A variable scope expansion looks names up in.
pub trait Scope {
  /// The value bound to `name`, if any.
  fn lookup(&self, name: &str) -> Option<Value>;
}

impl Scope for BuildEnv {
  fn lookup(&self, name: &str) -> Option<Value> {
    self.get(name).cloned()
  }
}

/// Expand every variable reference in `input` against `scope`.
pub fn expand(input: &str, scope: &dyn Scope) -> Result<String, SubstError> {
  expand_depth(input, scope, 0)
}

fn expand_depth(input: &str, scope: &dyn Scope, depth: usize) -> Result<String, SubstError> {
  let mut out = String::with_capacity(input.len());
  let mut chars = input.char_indices().peekable();

  while let Some((pos, ch)) = chars.next() {
    if ch != '$' {
      out.push(ch);
      continue;
    }

    match chars.peek() {
      // `$$` is a literal dollar
      Some(&(_, '$')) => {
        chars.next();
        out.push('$');
      }
      Some(&(_, '{')) => {
        chars.next();
        let mut name = String::new();
        let mut closed = false;
        for (_, c) in chars.by_ref() {
          if c == '}' {
            closed = true;
            break;
          }
          name.push(c);
        }
        if !closed {
          return Err(SubstError::Unclosed(pos));
        }
        out.push_str(&expand_var(&name, scope, depth)?);
      }
      Some(&(_, c)) if c.is_ascii_alphabetic() || c == '_' => {
        let mut name = String::new();
        while let Some(&(_, c)) = chars.peek() {
          if c.is_ascii_alphanumeric() || c == '_' {
            name.push(c);
            chars.next();
          } else {
            break;
          }
        }
        out.push_str(&expand_var(&name, scope, depth)?);
      }
      // lone `$` (or `$5`): not a variable reference
      _ => out.push('$'),
    }
  }

  Ok(out)
}

fn expand_var(name: &str, scope: &dyn Scope, depth: usize) -> Result<String, SubstError> {
  if depth >= MAX_DEPTH {
    return Err(SubstError::RecursionLimit(name.to_string()));
  }

  match scope.lookup(name) {
    None => Ok(String::new()),
    Some(Value::Str(s)) => expand_depth(&s, scope, depth + 1),
    Some(Value::List(items)) => {
      let expanded = items
        .iter()
        .map(|item| expand_depth(item, scope, depth + 1))
        .collect::<Result<Vec<_>, _>>()?;
      Ok(expanded.join(" "))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn env(pairs: &[(&str, &str)]) -> BuildEnv {
    let mut env = BuildEnv::new();
    for (key, value) in pairs {
      env.set(*key, *value);
    }
    env
  }

  #[test]
  fn expands_plain_and_braced_references() {
    let env = env(&[("AR", "emar")]);
    assert_eq!(expand("$AR cqL out.a", &env).unwrap(), "emar cqL out.a");
    assert_eq!(expand("${AR}_backup", &env).unwrap(), "emar_backup");
  }

  #[test]
  fn expansion_is_recursive() {
    let env = env(&[("LINK", "$CXX"), ("CXX", "c++")]);
    assert_eq!(expand("$LINK -shared", &env).unwrap(), "c++ -shared");
  }

  #[test]
  fn unknown_variables_render_empty() {
    let env = BuildEnv::new();
    assert_eq!(expand("a $MISSING b", &env).unwrap(), "a  b");
  }

  #[test]
  fn list_values_join_with_spaces() {
    let mut env = BuildEnv::new();
    env.append("LINKFLAGS", ["-lembind", "-fexceptions"]);
    assert_eq!(expand("cc $LINKFLAGS", &env).unwrap(), "cc -lembind -fexceptions");
  }

  #[test]
  fn double_dollar_escapes() {
    let env = env(&[("TARGET", "out.a")]);
    assert_eq!(expand("$$TARGET", &env).unwrap(), "$TARGET");
  }

  #[test]
  fn lone_dollar_and_digits_pass_through() {
    let env = BuildEnv::new();
    assert_eq!(expand("costs $5 or more$", &env).unwrap(), "costs $5 or more$");
  }

  #[test]
  fn unclosed_brace_errors_with_position() {
    let env = BuildEnv::new();
    assert_eq!(expand("ar ${AR", &env), Err(SubstError::Unclosed(3)));
  }

  #[test]
  fn variable_cycle_errors_instead_of_hanging() {
    let env = env(&[("A", "$B"), ("B", "$A")]);
    assert!(matches!(expand("$A", &env), Err(SubstError::RecursionLimit(_))));
  }

  #[test]
  fn underscore_names_are_valid() {
    let env = env(&[("_LEX_HEADER", "--header-file=lex.yy.h")]);
    assert_eq!(expand("$_LEX_HEADER", &env).unwrap(), "--header-file=lex.yy.h");
  }
}
