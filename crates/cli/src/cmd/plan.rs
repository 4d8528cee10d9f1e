//! Implementation of the `emforge plan` command.
//!
//! Prints the environment changes a platform setup would apply, without
//! applying anything.

use anyhow::{Context, Result};

use emforge_lib::configure::configure;
use emforge_lib::diff::ConfigOp;
use emforge_lib::env::{BuildEnv, Value};
use emforge_lib::platform::Platform;
use emforge_lib::platform::probe::ProcessEnv;

use crate::output::{print_json, symbols};

pub fn cmd_plan(platform: Option<&str>, json: bool) -> Result<()> {
  let probe = ProcessEnv;

  let platform = match platform {
    Some(name) => name
      .parse::<Platform>()
      .with_context(|| format!("invalid --platform value `{name}`"))?,
    None => Platform::resolve(&BuildEnv::with_defaults(), &probe),
  };

  let diff = configure(platform, &probe);

  if json {
    print_json(&diff)?;
    return Ok(());
  }

  println!("Platform: {}", platform);
  println!();
  for op in diff.ops() {
    match op {
      ConfigOp::Set { key, value } => println!("  {} {} = {}", symbols::TILDE, key, format_value(value)),
      ConfigOp::Append { key, items } => println!("  {} {} += {}", symbols::PLUS, key, items.join(" ")),
      ConfigOp::LoadTool { name } => println!("  {} tool {}", symbols::PLUS, name),
    }
  }
  println!();
  println!("{} change(s)", diff.len());

  Ok(())
}

fn format_value(value: &Value) -> String {
  match value {
    Value::Str(s) => s.clone(),
    Value::List(items) => items.join(" "),
  }
}
