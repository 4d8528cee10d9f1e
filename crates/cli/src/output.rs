//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored
//! status symbols and JSON emission.

use anyhow::Context;
use owo_colors::{OwoColorize, Stream};

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const PLUS: &str = "+";
  pub const TILDE: &str = "~";
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_check(available: bool, name: &str) {
  if available {
    println!(
      "  {} {}",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      name
    );
  } else {
    println!(
      "  {} {}",
      symbols::ERROR.if_supports_color(Stream::Stdout, |s| s.red()),
      name
    );
  }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
