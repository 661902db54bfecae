#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let payload = binraster::extract(data, binraster::ExtractionStrategy::PeHeaderStrip);
    assert!(payload.len() <= data.len());
    if !payload.is_empty() {
        assert_eq!(&data[data.len() - payload.len()..], &payload[..]);
    }
});
