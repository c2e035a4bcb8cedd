//! Argument value helpers: size parsing and output-name derivation.

use super::constants::{KB, LZ4_EXTENSION, MB};
use crate::io::{STDIN_MARK, STDOUT_MARK};

/// Parses a byte count with an optional size suffix.
///
/// Recognised suffixes (case-sensitive):
///   `K` / `KB` / `KiB`  → multiply by 1 024
///   `M` / `MB` / `MiB`  → multiply by 1 048 576
///
/// Used as a clap `value_parser`, hence the `String` error.
pub fn parse_size(s: &str) -> Result<usize, String> {
    let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if digits_end == 0 {
        return Err(format!("invalid size '{s}': expected digits"));
    }
    let value: u64 = s[..digits_end]
        .parse()
        .map_err(|_| format!("invalid size '{s}': number too large"))?;

    let multiplier = match &s[digits_end..] {
        "" => 1,
        "K" | "KB" | "KiB" => KB,
        "M" | "MB" | "MiB" => MB,
        other => return Err(format!("invalid size suffix '{other}'")),
    };

    value
        .checked_mul(multiplier)
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| format!("invalid size '{s}': number too large"))
}

/// Default decode destination for `input`: stdout for stdin, otherwise the
/// name with its `.lz4` extension removed.
///
/// Returns `None` when `input` does not end in `.lz4`.
pub fn decoded_name(input: &str) -> Option<String> {
    if input == STDIN_MARK {
        return Some(STDOUT_MARK.to_owned());
    }
    input
        .strip_suffix(LZ4_EXTENSION)
        .filter(|stem| !stem.is_empty())
        .map(str::to_owned)
}

/// Default encode destination for `input`: stdout for stdin, otherwise the
/// name with `.lz4` appended.
pub fn encoded_name(input: &str) -> String {
    if input == STDIN_MARK {
        STDOUT_MARK.to_owned()
    } else {
        format!("{input}{LZ4_EXTENSION}")
    }
}
