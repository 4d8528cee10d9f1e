//! Implementation of the `emforge tools` command.
//!
//! Reports which registered external tools are reachable on `PATH`.

use anyhow::Result;

use emforge_lib::platform::probe::ProcessEnv;
use emforge_lib::tools::Tool;
use emforge_lib::tools::reflex::Reflex;

use crate::output::{print_check, print_json};

pub fn cmd_tools(json: bool) -> Result<()> {
  let probe = ProcessEnv;
  let tools: Vec<Box<dyn Tool>> = vec![Box::new(Reflex)];

  if json {
    let value: Vec<_> = tools
      .iter()
      .map(|tool| {
        serde_json::json!({
          "name": tool.name(),
          "available": tool.exists(&probe),
        })
      })
      .collect();
    print_json(&value)?;
    return Ok(());
  }

  for tool in &tools {
    print_check(tool.exists(&probe), tool.name());
  }

  Ok(())
}
