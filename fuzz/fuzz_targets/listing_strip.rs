#![no_main]
use binraster::extract::{strip_address_column, ListingPolicy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let (strict, stats) = strip_address_column(data, ListingPolicy::StrictWidth);
    assert_eq!(strict.len(), stats.accepted_lines * 16);
    let _ = strip_address_column(data, ListingPolicy::PrefixPattern);
});
