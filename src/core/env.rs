//! .env text parsing.
//!
//! Turns dotenv-style text into a [`SecretMap`]. Parsing never fails: lines
//! that are not `KEY=VALUE` are skipped so a partially broken file still
//! yields every well-formed secret.
//!
//! The parser is a two-state machine:
//!
//! | State       | Input                                   | Action                               | Next        |
//! |-------------|-----------------------------------------|--------------------------------------|-------------|
//! | ScanningKey | blank or `#` line                       | skip                                 | ScanningKey |
//! | ScanningKey | not `KEY=VALUE`                         | skip                                 | ScanningKey |
//! | ScanningKey | `KEY="...` without unescaped closing quote | buffer value minus opening quote  | Multiline   |
//! | ScanningKey | `KEY=VALUE`                             | strip wrapping quotes, commit        | ScanningKey |
//! | Multiline   | raw line ending in unescaped `"`        | append, drop closing quote, commit   | ScanningKey |
//! | Multiline   | any other line                          | append raw line                      | Multiline   |
//!
//! A single-line value may close with either quote character, so `"value'`
//! is stripped like any other wrapped value. Continuation lines are kept
//! byte for byte, including trailing whitespace.
//! | Multiline   | end of input                            | commit buffer as-is                  | done        |

use tracing::{debug, trace};

use crate::core::domain::SecretMap;
use crate::core::validation::is_secret_name;

#[derive(Debug)]
enum State {
    ScanningKey,
    Multiline { key: String, buffer: String },
}

/// Parse .env text into secrets.
///
/// Later occurrences of a key overwrite earlier ones.
pub fn parse(text: &str) -> SecretMap {
    let mut secrets = SecretMap::new();
    let mut state = State::ScanningKey;

    for (index, raw) in text.lines().enumerate() {
        state = match state {
            State::ScanningKey => scan_line(&mut secrets, raw, index + 1),
            State::Multiline { key, mut buffer } => {
                buffer.push('\n');
                if ends_with_unescaped(raw, '"') {
                    buffer.push_str(&raw[..raw.len() - 1]);
                    commit(&mut secrets, key, buffer);
                    State::ScanningKey
                } else {
                    buffer.push_str(raw);
                    State::Multiline { key, buffer }
                }
            }
        };
    }

    if let State::Multiline { key, buffer } = state {
        debug!(key = %key, "unterminated quoted value, keeping buffered text");
        commit(&mut secrets, key, buffer);
    }

    debug!(secrets = secrets.len(), "parsed env input");
    secrets
}

fn scan_line(secrets: &mut SecretMap, raw: &str, line_no: usize) -> State {
    let line = raw.trim();

    if line.is_empty() || line.starts_with('#') {
        return State::ScanningKey;
    }

    let Some((key, value)) = line.split_once('=') else {
        debug!(line = line_no, "skipping line without '='");
        return State::ScanningKey;
    };

    if !is_secret_name(key) {
        debug!(line = line_no, "skipping line with invalid key");
        return State::ScanningKey;
    }

    if let Some(rest) = value.strip_prefix('"') {
        if !ends_with_unescaped(rest, '"') && !ends_with_unescaped(rest, '\'') {
            trace!(key = %key, line = line_no, "entering multiline value");
            return State::Multiline {
                key: key.to_string(),
                buffer: rest.to_string(),
            };
        }
    }

    commit(secrets, key.to_string(), strip_quotes(value).to_string());
    State::ScanningKey
}

fn commit(secrets: &mut SecretMap, key: String, value: String) {
    if secrets.insert(key.as_str(), value) {
        debug!(key = %key, "duplicate key, later value wins");
    }
}

/// Whether `s` ends with `quote` not preceded by a backslash.
fn ends_with_unescaped(s: &str, quote: char) -> bool {
    let mut chars = s.chars().rev();
    chars.next() == Some(quote) && chars.next() != Some('\\')
}

/// Strip one leading and one trailing quote character.
///
/// Either quote character is accepted on each end independently, so a
/// mismatched pair such as `"value'` is stripped too.
fn strip_quotes(value: &str) -> &str {
    let is_quote = |b: u8| b == b'"' || b == b'\'';
    let bytes = value.as_bytes();

    if bytes.len() >= 2 && is_quote(bytes[0]) && is_quote(bytes[bytes.len() - 1]) {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
