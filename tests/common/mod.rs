//! Common test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Builds a `len`-byte PE image with `MZ`, `e_lfanew`, `PE\0\0` and
/// `SizeOfHeaders` filled in. Other bytes hold `offset ^ 0x5A`.
pub fn craft_pe(len: usize, e_lfanew: u32, size_of_headers: u32) -> Vec<u8> {
    let mut data: Vec<u8> = (0..len).map(|i| (i as u8) ^ 0x5A).collect();
    data[0] = b'M';
    data[1] = b'Z';
    data[0x3C..0x40].copy_from_slice(&e_lfanew.to_le_bytes());
    let pe = e_lfanew as usize;
    data[pe..pe + 4].copy_from_slice(b"PE\0\0");
    data[pe + 0x54..pe + 0x58].copy_from_slice(&size_of_headers.to_le_bytes());
    data
}

/// A strict-width listing whose line `i` holds bytes `16*i .. 16*i+15` (mod 256).
pub fn listing_text(lines: usize) -> String {
    let mut out = String::new();
    for line in 0..lines {
        out.push_str(&format!("{:08X}", 0x0040_1000 + line * 16));
        for i in 0..16 {
            out.push_str(&format!(" {:02X}", (line * 16 + i) % 256));
        }
        out.push('\n');
    }
    out
}

/// Write `content` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap_or_else(|e| panic!("Failed to write fixture {name}: {e}"));
    path
}

/// Decode a PNG on disk as 8-bit grayscale.
pub fn read_gray_png(path: &Path) -> image::GrayImage {
    let data =
        fs::read(path).unwrap_or_else(|_| panic!("Failed to read image: {}", path.display()));
    image::load_from_memory(&data)
        .expect("valid PNG")
        .to_luma8()
}
