//! Line-level redaction of captured process output.

use crate::platform::current_username;

/// Drops every output line that contains a sensitive needle (by default the account name).
///
/// This is a plain substring match: a name that also occurs inside unrelated content
/// removes that line too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redactor {
  needle: Vec<u8>,
}

impl Redactor {
  pub fn new(needle: impl Into<Vec<u8>>) -> Self {
    Self { needle: needle.into() }
  }

  /// Redact lines mentioning the account running this process.
  pub fn for_current_user() -> Self {
    Self::new(current_username())
  }

  /// A redactor that keeps everything.
  pub fn disabled() -> Self {
    Self::new(Vec::new())
  }

  /// Keep the lines that do not mention the needle, in order, with their line endings.
  pub fn filter(&self, output: &[u8]) -> Vec<u8> {
    if self.needle.is_empty() {
      return output.to_vec();
    }

    split_records(output)
      .filter(|record| !contains(record, &self.needle))
      .flatten()
      .copied()
      .collect()
  }
}

/// Split `output` into lines, each keeping its terminator (`\n`, `\r\n` or `\r`).
///
/// A final line without a terminator is yielded as-is; empty input yields nothing.
pub fn split_records(output: &[u8]) -> impl Iterator<Item = &[u8]> {
  let mut rest = output;
  std::iter::from_fn(move || {
    if rest.is_empty() {
      return None;
    }

    let end = match rest.iter().position(|&b| b == b'\n' || b == b'\r') {
      Some(i) if rest[i] == b'\r' && rest.get(i + 1) == Some(&b'\n') => i + 2,
      Some(i) => i + 1,
      None => rest.len(),
    };

    let (record, tail) = rest.split_at(end);
    rest = tail;
    Some(record)
  })
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
  haystack.windows(needle.len()).any(|window| window == needle)
}
