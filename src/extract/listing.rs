//! Address-column stripping for hex-dump style disassembly listings.
//!
//! Each listing line starts with a memory address followed by the bytes at
//! that address in hexadecimal, e.g.
//!
//! ```text
//! 00401000 4D 5A 90 00 03 00 00 00 04 00 00 00 FF FF 00 00
//! 00401010 B8 00 00 00 ?? ?? ?? ?? 40 00 00 00 00 00 00 00
//! ```
//!
//! `??` marks a byte the disassembler could not read and decodes as 0, as
//! does any token that is not a valid one-byte hex value.

use encoding_rs::WINDOWS_1252;
use memchr::memchr_iter;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Data tokens carried by one strict-width line.
pub const STRICT_DATA_TOKENS: usize = 16;

/// Placeholder for an unreadable byte.
pub const MASKED_TOKEN: &str = "??";

// Eight hex digits of address, then one whitespace character.
static RE_ADDRESS_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Fa-f]{8}\s").expect("valid address prefix regex"));

/// Which lines of a listing are accepted and how they are tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingPolicy {
    /// Split on single spaces; accept only address + exactly 16 non-empty tokens.
    #[default]
    StrictWidth,
    /// Accept lines starting with 8 hex digits and whitespace; the rest of the
    /// line is split on whitespace into any number of tokens.
    PrefixPattern,
}

/// Per-listing counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingStats {
    pub accepted_lines: usize,
    pub rejected_lines: usize,
    /// Tokens other than `??` that failed to parse as a byte
    pub unparsable_tokens: usize,
}

/// Strips the address column from every accepted line and decodes the
/// remaining hex tokens, in file order.
pub fn strip_address_column(data: &[u8], policy: ListingPolicy) -> (Vec<u8>, ListingStats) {
    let mut out = Vec::with_capacity(data.len() / 3);
    let mut stats = ListingStats::default();

    let text = match policy {
        ListingPolicy::StrictWidth => data,
        // Leading whitespace of the whole listing is dropped before matching.
        ListingPolicy::PrefixPattern => data.trim_ascii_start(),
    };

    for (index, raw_line) in split_lines(text).enumerate() {
        let line = decode_line(raw_line);
        let accepted = match policy {
            ListingPolicy::StrictWidth => strict_width_line(&line, &mut out, &mut stats),
            ListingPolicy::PrefixPattern => prefix_pattern_line(&line, &mut out, &mut stats),
        };
        if accepted {
            stats.accepted_lines += 1;
        } else {
            stats.rejected_lines += 1;
            trace!(line = index + 1, ?policy, "Rejected listing line");
        }
    }

    (out, stats)
}

/// Decodes one line with a single-byte code page: one char per input byte.
pub fn decode_line(raw: &[u8]) -> std::borrow::Cow<'_, str> {
    WINDOWS_1252.decode_without_bom_handling(raw).0
}

/// Splits on `\n`, dropping one trailing `\r` per line. A trailing newline
/// does not produce an extra empty line.
fn split_lines(data: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    let mut start = 0;
    let mut ends = memchr_iter(b'\n', data);
    std::iter::from_fn(move || {
        let end = match ends.next() {
            Some(end) => end,
            None if start < data.len() => data.len(),
            None => return None,
        };
        let line = &data[start..end];
        start = end + 1;
        Some(line.strip_suffix(b"\r").unwrap_or(line))
    })
}

fn strict_width_line(line: &str, out: &mut Vec<u8>, stats: &mut ListingStats) -> bool {
    // The address token is discarded unchecked.
    let data: Vec<&str> = line.split(' ').skip(1).collect();
    if data.len() != STRICT_DATA_TOKENS || data.iter().any(|t| t.is_empty()) {
        return false;
    }
    out.extend(data.into_iter().map(|t| parse_token(t, stats)));
    true
}

fn prefix_pattern_line(line: &str, out: &mut Vec<u8>, stats: &mut ListingStats) -> bool {
    let Some(prefix) = RE_ADDRESS_PREFIX.find(line) else {
        return false;
    };
    let rest = &line[prefix.end()..];
    if rest.is_empty() {
        return false;
    }
    out.extend(rest.split_whitespace().map(|t| parse_token(t, stats)));
    true
}

/// Decodes one data token; `??` and malformed tokens become 0.
pub fn parse_token(token: &str, stats: &mut ListingStats) -> u8 {
    if token == MASKED_TOKEN {
        return 0;
    }
    match u8::from_str_radix(token, 16) {
        Ok(value) => value,
        Err(_) => {
            stats.unparsable_tokens += 1;
            0
        }
    }
}
