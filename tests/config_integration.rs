use binraster::raster::ResizeFilter;
use binraster::{ConversionConfig, ExtractionStrategy, ListingPolicy, RasterError, Reconciliation};
use tempfile::tempdir;

#[test]
fn test_config_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("convert.json");

    let mut config = ConversionConfig::document_fingerprint();
    config.resize_filter = ResizeFilter::Lanczos3;
    config.display_side = Some(128);
    config.to_json_file(&path).unwrap();

    let loaded = ConversionConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_json_shape() {
    let json = ConversionConfig::executable_listing().to_json_string().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["strategy"]["address_column_strip"], "strict_width");
    assert_eq!(value["reconciliation"], "pad_truncate");
    assert_eq!(value["side"], 256);
    assert_eq!(value["resize_filter"], "catmull_rom");
    assert!(value["display_side"].is_null());
}

#[test]
fn test_nested_config_access() {
    let config = ConversionConfig::from_json_str(
        r#"{
            "strategy": "pe_header_strip",
            "reconciliation": "tile_repeat",
            "normalize": true,
            "io": { "max_file_size": 2048 }
        }"#,
    )
    .unwrap();
    assert_eq!(config.strategy, ExtractionStrategy::PeHeaderStrip);
    assert_eq!(config.reconciliation, Reconciliation::TileRepeat);
    assert!(config.normalize);
    assert_eq!(config.io.max_file_size, 2048);
    // Unset fields keep their defaults.
    assert_eq!(config.side, 256);
}

#[test]
fn test_listing_policy_selection() {
    let config = ConversionConfig::from_json_str(
        r#"{ "strategy": { "address_column_strip": "prefix_pattern" } }"#,
    )
    .unwrap();
    assert_eq!(
        config.strategy,
        ExtractionStrategy::AddressColumnStrip(ListingPolicy::PrefixPattern)
    );
}

#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let err = ConversionConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, RasterError::Io { .. }));
}
