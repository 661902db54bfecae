//! Linear intensity stretch applied before reconciliation when requested.

/// Rescales `payload` in place so its maximum maps to 255.
///
/// `scaled = round(v * 255 / max)`, rounding halves up. An all-zero payload
/// is left untouched.
pub fn normalize_intensity(payload: &mut [u8]) {
    let max = payload.iter().copied().max().unwrap_or(0) as u32;
    if max == 0 || max == 255 {
        return;
    }
    for v in payload.iter_mut() {
        *v = ((*v as u32 * 510 + max) / (2 * max)) as u8;
    }
}
