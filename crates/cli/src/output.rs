//! CLI output formatting utilities.
//!
//! Colored status messages go to stderr so that stdout carries only listings, file
//! contents and the output of staged processes.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

use samplefs_lib::SampleListing;
use samplefs_lib::stage::SkippedFile;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
  pub const REMOVE: &str = "-";
}

/// Width of the size column in listings; wide enough for "1023.9 MB".
const SIZE_WIDTH: usize = 10;

pub fn format_bytes(bytes: u64) -> String {
  const KB: u64 = 1024;
  const MB: u64 = KB * 1024;
  const GB: u64 = MB * 1024;

  if bytes >= GB {
    format!("{:.1} GB", bytes as f64 / GB as f64)
  } else if bytes >= MB {
    format!("{:.1} MB", bytes as f64 / MB as f64)
  } else if bytes >= KB {
    format!("{:.1} KB", bytes as f64 / KB as f64)
  } else {
    format!("{} B", bytes)
  }
}

/// `size sha256 name`, uncolored.
pub fn format_listing_row(row: &SampleListing) -> String {
  format!("{:>width$} {} {}", format_bytes(row.size), row.sha256, row.name, width = SIZE_WIDTH)
}

pub fn print_listing(rows: &[SampleListing]) {
  for row in rows {
    println!("{}", format_listing_row(row));
  }
}

pub fn print_removed(name: &str) {
  println!(
    "{} {}",
    symbols::REMOVE.if_supports_color(Stream::Stdout, |s| s.red()),
    name
  );
}

pub fn print_skipped(action: &str, skipped: &SkippedFile) {
  print_warning(&format!("{} {}: {}", action, skipped.path, skipped.reason));
}

pub fn print_success(message: &str) {
  eprintln!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stderr, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
