//! emforge-lib: Core types and logic for emforge
//!
//! This crate provides the fundamental types used throughout emforge:
//! - `BuildEnv`: the construction-variable environment builds run against
//! - `Platform`: the resolved build target, native Linux or Emscripten web
//! - `ConfigDiff`: the ordered environment changes a platform setup applies
//! - `BuilderDescriptor`: action templates for the custom build rules
//! - `Tool`: the registration protocol for external build tools

pub mod builders;
pub mod configure;
pub mod consts;
pub mod diff;
pub mod env;
pub mod platform;
pub mod subst;
pub mod tools;
pub mod util;
