//! PE header parsing

use crate::formats::pe::types::*;
use crate::formats::pe::utils::ReadExt;

/// Parse the DOS header fields from data.
///
/// The `MZ` check runs before the length check so that short non-PE input
/// reports a signature mismatch rather than truncation.
pub fn parse_dos_header(data: &[u8]) -> Result<DosHeader> {
    let e_magic = data
        .read_u16_le_at(0)
        .ok_or(PeError::InvalidDosSignature)?;
    if e_magic != DOS_SIGNATURE {
        return Err(PeError::InvalidDosSignature);
    }

    let e_lfanew = data
        .read_u32_le_at(E_LFANEW_OFFSET)
        .ok_or(PeError::TruncatedHeader {
            expected: DOS_HEADER_MIN_LEN,
            actual: data.len(),
        })?;

    Ok(DosHeader { e_magic, e_lfanew })
}

/// Verify the `PE\0\0` signature at `offset`.
pub fn check_pe_signature(data: &[u8], offset: usize) -> Result<()> {
    let signature = data
        .read_slice_at(offset, PE_SIGNATURE.len())
        .ok_or(PeError::TruncatedHeader {
            expected: offset.saturating_add(PE_SIGNATURE.len()),
            actual: data.len(),
        })?;
    if signature != PE_SIGNATURE {
        return Err(PeError::InvalidPeSignature);
    }
    Ok(())
}

/// Read `SizeOfHeaders` relative to the PE signature at `pe_offset`.
pub fn read_size_of_headers(data: &[u8], pe_offset: usize) -> Result<u32> {
    let field = pe_offset.saturating_add(SIZE_OF_HEADERS_OFFSET);
    data.read_u32_le_at(field).ok_or(PeError::TruncatedHeader {
        expected: field.saturating_add(4),
        actual: data.len(),
    })
}

/// Parse the DOS header, the PE signature and `SizeOfHeaders`.
pub fn parse_header_layout(data: &[u8]) -> Result<HeaderLayout> {
    let dos = parse_dos_header(data)?;
    let pe_offset = dos.e_lfanew as usize;
    check_pe_signature(data, pe_offset)?;
    let size_of_headers = read_size_of_headers(data, pe_offset)?;
    Ok(HeaderLayout {
        pe_offset,
        size_of_headers,
    })
}
