#![no_main]
use binraster::ConversionConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let config = ConversionConfig {
        side: 16,
        ..ConversionConfig::normalized_tiled()
    };
    if let Ok(conversion) = binraster::convert_bytes(data, &config) {
        assert_eq!(conversion.image.geometry().pixel_count(), 256);
    }
});
