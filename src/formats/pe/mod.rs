//! Minimal PE header walker used to strip the header region of executables.
//!
//! Only the fields needed to find the end of the headers are read: the `MZ`
//! magic, `e_lfanew`, the `PE\0\0` signature and `SizeOfHeaders`. Everything
//! after `SizeOfHeaders` is returned verbatim.

pub mod headers;
pub mod types;
pub mod utils;

pub use headers::parse_header_layout;
pub use types::*;

/// Returns the body of a PE image: every byte from `SizeOfHeaders` to EOF.
///
/// A `SizeOfHeaders` equal to the file length yields an empty body; one past
/// the end is an error.
pub fn strip_headers(data: &[u8]) -> Result<&[u8]> {
    let layout = parse_header_layout(data)?;
    let start = layout.size_of_headers as usize;
    data.get(start..).ok_or(PeError::HeadersPastEof {
        size_of_headers: layout.size_of_headers,
        file_len: data.len(),
    })
}
