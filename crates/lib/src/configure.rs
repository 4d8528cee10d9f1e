//! Platform setup: pure configuration diffs and their application.
//!
//! [`configure`] computes what an environment needs for a target platform
//! without touching anything; [`BuildEnv::configure`] resolves the platform
//! when the caller didn't pin one, then applies the diff in place.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::consts;
use crate::diff::ConfigDiff;
use crate::env::BuildEnv;
use crate::platform::Platform;
use crate::platform::probe::EnvProbe;

/// Compute the environment changes a platform requires.
pub fn configure(platform: Platform, probe: &dyn EnvProbe) -> ConfigDiff {
  match platform {
    Platform::Linux => linux_diff(),
    Platform::Web => web_diff(probe),
  }
}

/// Native setup: link through the C++ compiler driver so the matching
/// runtime library is pulled in.
fn linux_diff() -> ConfigDiff {
  let mut diff = ConfigDiff::new();
  diff.set(consts::PLATFORM, Platform::Linux.as_str());
  diff.set(consts::LINK, "$CXX");
  diff
}

/// Web setup: exception support, embind, and `.mjs` module output through
/// the Emscripten toolchain.
fn web_diff(probe: &dyn EnvProbe) -> ConfigDiff {
  let mut diff = ConfigDiff::new();
  diff.set(consts::PLATFORM, Platform::Web.as_str());

  // assume we are running through `emscons`
  match probe.var(consts::EMSCRIPTEN_TOOL_PATH) {
    Some(toolpath) => diff.append(consts::TOOLPATH, [toolpath]),
    None => warn!(
      "{} is not set; the emscripten tool module will not be found",
      consts::EMSCRIPTEN_TOOL_PATH
    ),
  }

  if let Some(root) = probe.var(consts::EMSCRIPTEN_ROOT) {
    // mainly for emscripten/bind.h
    let include = PathBuf::from(root).join("system").join("include");
    diff.append(consts::CPPPATH, [include.to_string_lossy().into_owned()]);
  }

  diff.append(consts::CXXFLAGS, ["-fexceptions"]);
  diff.append(
    consts::LINKFLAGS,
    ["-lembind", "-fexceptions", "-sWASM_BIGINT=1", "-sENVIRONMENT=web"],
  );

  diff.load_tool(consts::EMSCRIPTEN_TOOL);
  diff.set(consts::LIBSUFFIX, ".a");
  diff.set(consts::SHLIBSUFFIX, ".mjs");
  diff
}

impl BuildEnv {
  /// Resolve the platform if none is given, then apply its setup in place.
  ///
  /// Returns the diff that was applied.
  pub fn configure(&mut self, platform: Option<Platform>, probe: &dyn EnvProbe) -> ConfigDiff {
    let platform = platform.unwrap_or_else(|| Platform::resolve(self, probe));
    let diff = configure(platform, probe);
    debug!(platform = %platform, ops = diff.len(), "applying platform setup");
    self.apply(&diff);
    diff
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::util::testutil::StaticProbe;

  #[test]
  fn linux_links_through_the_cxx_driver() {
    let mut env = BuildEnv::with_defaults();
    env.configure(Some(Platform::Linux), &StaticProbe::new("linux"));

    assert_eq!(env.get_str(consts::PLATFORM), Some("linux"));
    assert_eq!(env.get_str(consts::LINK), Some("$CXX"));
    // library naming stays at the defaults
    assert_eq!(env.get_str(consts::LIBSUFFIX), Some(".a"));
    assert_eq!(env.get_str(consts::SHLIBSUFFIX), Some(".so"));
  }

  #[test]
  fn web_switches_suffixes_and_flags() {
    let probe = StaticProbe::new("linux")
      .with_var(consts::EMSCRIPTEN_TOOL_PATH, "/emsdk/tools")
      .with_var(consts::EMSCRIPTEN_ROOT, "/emsdk/upstream/emscripten");

    let mut env = BuildEnv::with_defaults();
    env.configure(Some(Platform::Web), &probe);

    assert_eq!(env.get_str(consts::PLATFORM), Some("web"));
    assert_eq!(env.get_str(consts::LIBSUFFIX), Some(".a"));
    assert_eq!(env.get_str(consts::SHLIBSUFFIX), Some(".mjs"));

    assert_eq!(env.get_list(consts::TOOLPATH), Some(&["/emsdk/tools".to_string()][..]));
    assert_eq!(
      env.get_list(consts::CPPPATH),
      Some(&["/emsdk/upstream/emscripten/system/include".to_string()][..])
    );
    assert_eq!(env.get_list(consts::CXXFLAGS), Some(&["-fexceptions".to_string()][..]));
    assert_eq!(
      env.get_list(consts::LINKFLAGS),
      Some(
        &[
          "-lembind".to_string(),
          "-fexceptions".to_string(),
          "-sWASM_BIGINT=1".to_string(),
          "-sENVIRONMENT=web".to_string(),
        ][..]
      )
    );
    assert!(env.has_tool(consts::EMSCRIPTEN_TOOL));
  }

  #[test]
  fn web_without_sdk_variables_skips_the_paths() {
    let mut env = BuildEnv::with_defaults();
    env.configure(Some(Platform::Web), &StaticProbe::new("linux"));

    assert_eq!(env.get_list(consts::TOOLPATH), Some(&[][..]));
    assert_eq!(env.get_list(consts::CPPPATH), Some(&[][..]));
    // the rest of the web setup still applies
    assert_eq!(env.get_str(consts::SHLIBSUFFIX), Some(".mjs"));
  }

  #[test]
  fn omitted_platform_is_resolved_first() {
    // A pinned `platform` variable drives the dispatch when the caller
    // passes None.
    let mut env = BuildEnv::with_defaults();
    env.set(consts::PLATFORM, "web");

    let diff = env.configure(None, &StaticProbe::new("linux"));

    assert!(!diff.is_empty());
    assert_eq!(env.get_str(consts::SHLIBSUFFIX), Some(".mjs"));
  }

  #[test]
  fn configure_is_pure() {
    let probe = StaticProbe::new("linux").with_var(consts::EMSCRIPTEN_TOOL_PATH, "/emsdk/tools");
    assert_eq!(configure(Platform::Web, &probe), configure(Platform::Web, &probe));
  }
}
