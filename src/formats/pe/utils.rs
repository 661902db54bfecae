//! Utility functions for PE parsing

/// Extension trait for reading primitive types from byte slices
pub trait ReadExt {
    fn read_u16_le_at(&self, offset: usize) -> Option<u16>;
    fn read_u32_le_at(&self, offset: usize) -> Option<u32>;
    fn read_slice_at(&self, offset: usize, len: usize) -> Option<&[u8]>;
}

impl ReadExt for [u8] {
    #[inline(always)]
    fn read_u16_le_at(&self, offset: usize) -> Option<u16> {
        self.read_slice_at(offset, 2)
            .and_then(|b| b.try_into().ok())
            .map(u16::from_le_bytes)
    }

    #[inline(always)]
    fn read_u32_le_at(&self, offset: usize) -> Option<u32> {
        self.read_slice_at(offset, 4)
            .and_then(|b| b.try_into().ok())
            .map(u32::from_le_bytes)
    }

    #[inline(always)]
    fn read_slice_at(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        self.get(offset..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_le_values() {
        let data: &[u8] = &[0x4D, 0x5A, 0x78, 0x56, 0x34, 0x12];
        assert_eq!(data.read_u16_le_at(0), Some(0x5A4D));
        assert_eq!(data.read_u32_le_at(2), Some(0x1234_5678));
        assert_eq!(data.read_u32_le_at(3), None);
    }

    #[test]
    fn test_read_slice_overflow() {
        let data: &[u8] = &[1, 2, 3];
        assert_eq!(data.read_slice_at(1, 2), Some(&[2u8, 3][..]));
        assert_eq!(data.read_slice_at(usize::MAX, 2), None);
        assert_eq!(data.read_slice_at(3, 0), Some(&[][..]));
    }
}
