pub mod probe;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts;
use crate::env::BuildEnv;
use probe::EnvProbe;

/// Build target platforms supported by emforge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
  Linux,
  Web,
}

/// Errors from interpreting platform names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
  /// The name is not one of the supported platforms.
  #[error("unsupported platform `{0}`")]
  Unsupported(String),
}

impl Platform {
  /// Determine the active target platform for an environment.
  ///
  /// Resolution order, first match wins:
  /// 1. a recognized `platform` variable already set in the environment
  /// 2. the `emscons` wrapper marker in the process environment
  /// 3. a Linux host
  /// 4. web
  pub fn resolve(env: &BuildEnv, probe: &dyn EnvProbe) -> Self {
    // explicit setting wins; unrecognized values fall through like unset
    if let Some(platform) = env.get_str(consts::PLATFORM).and_then(|s| s.parse().ok()) {
      debug!(platform = %platform, "platform pinned in environment");
      return platform;
    }

    // running through `emscons`, assume web
    if probe.var(consts::EMSCRIPTEN_TOOL_PATH).is_some() {
      debug!("emscripten wrapper marker present");
      return Self::Web;
    }

    // the caller's platform
    if probe.host_os() == "linux" {
      debug!("host is linux");
      return Self::Linux;
    }

    // default
    debug!("defaulting to web");
    Self::Web
  }

  /// Returns the lowercase string identifier for this platform.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::Web => "web",
    }
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Platform {
  type Err = PlatformError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "linux" => Ok(Self::Linux),
      "web" => Ok(Self::Web),
      other => Err(PlatformError::Unsupported(other.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::probe::ProcessEnv;
  use crate::util::testutil::StaticProbe;
  use serial_test::serial;

  #[test]
  fn explicit_value_wins_over_everything() {
    // A pinned platform is returned unchanged no matter what the process
    // environment or host looks like.
    let probe = StaticProbe::new("linux").with_var(consts::EMSCRIPTEN_TOOL_PATH, "/em/tools");

    let mut env = BuildEnv::new();
    env.set(consts::PLATFORM, "linux");
    assert_eq!(Platform::resolve(&env, &probe), Platform::Linux);

    env.set(consts::PLATFORM, "web");
    assert_eq!(Platform::resolve(&env, &probe), Platform::Web);
  }

  #[test]
  fn unrecognized_explicit_value_falls_through() {
    let mut env = BuildEnv::new();
    env.set(consts::PLATFORM, "freebsd");

    let probe = StaticProbe::new("linux");
    assert_eq!(Platform::resolve(&env, &probe), Platform::Linux);
  }

  #[test]
  fn wrapper_marker_means_web_regardless_of_host() {
    let env = BuildEnv::new();
    let probe = StaticProbe::new("linux").with_var(consts::EMSCRIPTEN_TOOL_PATH, "/em/tools");
    assert_eq!(Platform::resolve(&env, &probe), Platform::Web);
  }

  #[test]
  fn empty_marker_counts_as_absent() {
    let env = BuildEnv::new();
    let probe = StaticProbe::new("linux").with_var(consts::EMSCRIPTEN_TOOL_PATH, "");
    assert_eq!(Platform::resolve(&env, &probe), Platform::Linux);
  }

  #[test]
  fn host_os_decides_when_nothing_is_set() {
    let env = BuildEnv::new();

    assert_eq!(Platform::resolve(&env, &StaticProbe::new("linux")), Platform::Linux);
    assert_eq!(Platform::resolve(&env, &StaticProbe::new("macos")), Platform::Web);
    assert_eq!(Platform::resolve(&env, &StaticProbe::new("windows")), Platform::Web);
  }

  #[test]
  fn parse_accepts_only_known_platforms() {
    assert_eq!("linux".parse::<Platform>(), Ok(Platform::Linux));
    assert_eq!("web".parse::<Platform>(), Ok(Platform::Web));
    assert_eq!(
      "macos".parse::<Platform>(),
      Err(PlatformError::Unsupported("macos".to_string()))
    );
  }

  #[test]
  fn display_round_trips_through_parse() {
    for platform in [Platform::Linux, Platform::Web] {
      assert_eq!(platform.to_string().parse::<Platform>(), Ok(platform));
    }
  }

  #[test]
  #[serial]
  #[cfg(target_os = "linux")]
  fn process_env_resolution_follows_the_marker() {
    let env = BuildEnv::new();

    temp_env::with_var(consts::EMSCRIPTEN_TOOL_PATH, None::<&str>, || {
      assert_eq!(Platform::resolve(&env, &ProcessEnv), Platform::Linux);
    });

    temp_env::with_var(consts::EMSCRIPTEN_TOOL_PATH, Some("/em/tools"), || {
      assert_eq!(Platform::resolve(&env, &ProcessEnv), Platform::Web);
    });
  }
}
