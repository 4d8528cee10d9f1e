//! Implementation of the `emforge status` command.
//!
//! Shows the resolved platform together with the host facts resolution
//! read, so a surprising answer can be traced to its cause.

use anyhow::Result;

use emforge_lib::consts;
use emforge_lib::env::BuildEnv;
use emforge_lib::platform::Platform;
use emforge_lib::platform::probe::{EnvProbe, ProcessEnv};

use crate::output::{print_json, print_stat};

pub fn cmd_status(json: bool) -> Result<()> {
  let probe = ProcessEnv;
  let env = BuildEnv::with_defaults();

  let platform = Platform::resolve(&env, &probe);
  let wrapper = probe.var(consts::EMSCRIPTEN_TOOL_PATH);
  let root = probe.var(consts::EMSCRIPTEN_ROOT);

  if json {
    let value = serde_json::json!({
      "platform": platform.as_str(),
      "host_os": probe.host_os(),
      "emscripten_wrapper": wrapper.is_some(),
      "emscripten_root": root,
    });
    print_json(&value)?;
    return Ok(());
  }

  println!("Platform: {}", platform);
  print_stat("Host OS", &probe.host_os());
  print_stat(
    "Emscripten wrapper",
    if wrapper.is_some() { "active" } else { "not detected" },
  );
  print_stat("Emscripten root", root.as_deref().unwrap_or("unset"));

  Ok(())
}
