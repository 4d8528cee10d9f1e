//! RE/flex lexer-generator registration.

use crate::consts;
use crate::env::BuildEnv;
use crate::platform::probe::EnvProbe;

use super::{Tool, where_is};

/// Lexer command template. The header and table markers render empty
/// unless the caller sets `_LEX_HEADER` / `_LEX_TABLES`.
const LEXCOM_TEMPLATE: &str = "$LEX $LEXFLAGS $_LEX_HEADER $_LEX_TABLES --outfile=$TARGET $SOURCES";

/// The RE/flex lexer generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reflex;

impl Tool for Reflex {
  fn name(&self) -> &'static str {
    "reflex"
  }

  fn generate(&self, env: &mut BuildEnv) {
    env.set(consts::LEX, "reflex");
    env.set(consts::LEXCOM, LEXCOM_TEMPLATE);
  }

  fn exists(&self, probe: &dyn EnvProbe) -> bool {
    where_is(probe, "reflex").is_some()
  }
}
