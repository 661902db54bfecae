//! Core PE data types and constants

use thiserror::Error;

// PE constants
pub const DOS_SIGNATURE: u16 = 0x5A4D; // MZ
pub const PE_SIGNATURE: [u8; 4] = *b"PE\0\0";

/// Offset of `e_lfanew` within the DOS header.
pub const E_LFANEW_OFFSET: usize = 0x3C;
/// Minimum DOS header length needed to read `e_lfanew`.
pub const DOS_HEADER_MIN_LEN: usize = E_LFANEW_OFFSET + 4;
/// Offset of `SizeOfHeaders` relative to the PE signature.
///
/// Signature (4) + COFF header (20) + 60 bytes into the optional header. The
/// field sits at the same place for PE32 and PE32+.
pub const SIZE_OF_HEADERS_OFFSET: usize = 0x54;

/// PE header error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeError {
    #[error("Invalid DOS signature")]
    InvalidDosSignature,
    #[error("Invalid PE signature")]
    InvalidPeSignature,
    #[error("Truncated header: expected {expected} bytes, got {actual}")]
    TruncatedHeader { expected: usize, actual: usize },
    #[error("SizeOfHeaders 0x{size_of_headers:x} exceeds file length 0x{file_len:x}")]
    HeadersPastEof { size_of_headers: u32, file_len: usize },
}

pub type Result<T> = std::result::Result<T, PeError>;

/// The two DOS header fields header stripping needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DosHeader {
    pub e_magic: u16,
    pub e_lfanew: u32,
}

/// Where the header region of a PE image ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// File offset of the `PE\0\0` signature
    pub pe_offset: usize,
    /// `SizeOfHeaders` from the optional header
    pub size_of_headers: u32,
}
