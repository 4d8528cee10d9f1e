//! Construction-variable and process-environment names.

/// Environment variable set by the `emscons` wrapper. Its value doubles as
/// the directory holding the Emscripten build-tool modules.
pub const EMSCRIPTEN_TOOL_PATH: &str = "EMSCRIPTEN_TOOL_PATH";

/// Root of the Emscripten SDK checkout, when the caller exports it.
pub const EMSCRIPTEN_ROOT: &str = "EMSCRIPTEN_ROOT";

/// Name of the toolchain module the web setup loads.
pub const EMSCRIPTEN_TOOL: &str = "emscripten";

// Construction variables.
pub const PLATFORM: &str = "platform";
pub const CC: &str = "CC";
pub const CXX: &str = "CXX";
pub const AR: &str = "AR";
pub const LINK: &str = "LINK";
pub const CXXFLAGS: &str = "CXXFLAGS";
pub const LINKFLAGS: &str = "LINKFLAGS";
pub const CPPPATH: &str = "CPPPATH";
pub const TOOLPATH: &str = "toolpath";
pub const LIBPREFIX: &str = "LIBPREFIX";
pub const LIBSUFFIX: &str = "LIBSUFFIX";
pub const SHLIBPREFIX: &str = "SHLIBPREFIX";
pub const SHLIBSUFFIX: &str = "SHLIBSUFFIX";
pub const LEX: &str = "LEX";
pub const LEXFLAGS: &str = "LEXFLAGS";
pub const LEXCOM: &str = "LEXCOM";
pub const LEX_HEADER: &str = "_LEX_HEADER";
pub const LEX_TABLES: &str = "_LEX_TABLES";
