//! Integration tests for the configuration system.

use super::*;
use crate::error::ZError;
use std::env;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_default_and_presets_valid() {
    assert!(TableConfig::default().validate().is_ok());
    assert!(TableConfig::performance_preset().validate().is_ok());
    assert!(TableConfig::memory_preset().validate().is_ok());
    assert!(TableConfig::realtime_preset().validate().is_ok());
    assert_eq!(TableConfig::balanced_preset(), TableConfig::default());
}

#[test]
fn test_preset_characteristics() {
    let perf = TableConfig::performance_preset();
    let mem = TableConfig::memory_preset();
    assert!(perf.max_load_factor < mem.max_load_factor);
    assert!(perf.initial_capacity > mem.initial_capacity);
    assert!(TableConfig::realtime_preset().initial_capacity >= perf.initial_capacity);
}

#[test]
fn test_validation_edge_cases() {
    let mut config = TableConfig::default();
    config.initial_capacity = 0;
    assert!(matches!(config.validate(), Err(ZError::Configuration { .. })));

    for bad in [0.0f32, 1.0, 1.5, -0.25, f32::NAN] {
        let config = TableConfig { max_load_factor: bad, ..TableConfig::default() };
        assert!(config.validate().is_err(), "load factor {} accepted", bad);
    }

    let config = TableConfig { max_load_factor: 0.99, ..TableConfig::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn test_environment_variable_parsing() {
    env::set_var("ZC_ENV_TEST_TABLE_INITIAL_CAPACITY", "128");
    env::set_var("ZC_ENV_TEST_TABLE_MAX_LOAD_FACTOR", "0.6");
    env::set_var("ZC_ENV_TEST_TABLE_SEED", "4242");

    let config = TableConfig::from_env_with_prefix("ZC_ENV_TEST_")
        .expect("Failed to parse TableConfig from environment");
    assert_eq!(config.initial_capacity, 128);
    assert!((config.max_load_factor - 0.6).abs() < f32::EPSILON);
    assert_eq!(config.seed, Some(4242));

    env::remove_var("ZC_ENV_TEST_TABLE_INITIAL_CAPACITY");
    env::remove_var("ZC_ENV_TEST_TABLE_MAX_LOAD_FACTOR");
    env::remove_var("ZC_ENV_TEST_TABLE_SEED");
}

#[test]
fn test_environment_unset_and_garbage_fall_back() {
    env::set_var("ZC_GARBAGE_TABLE_INITIAL_CAPACITY", "lots");

    let config = TableConfig::from_env_with_prefix("ZC_GARBAGE_")
        .expect("garbage values should fall back to defaults");
    assert_eq!(config, TableConfig::default());

    env::remove_var("ZC_GARBAGE_TABLE_INITIAL_CAPACITY");
}

#[test]
fn test_environment_invalid_value_rejected() {
    env::set_var("ZC_INVALID_TABLE_MAX_LOAD_FACTOR", "1.25");

    let result = TableConfig::from_env_with_prefix("ZC_INVALID_");
    assert!(matches!(result, Err(ZError::Configuration { .. })));

    env::remove_var("ZC_INVALID_TABLE_MAX_LOAD_FACTOR");
}

#[test]
fn test_file_serialization() -> crate::Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("table.json");

    let original = TableConfig::performance_preset().with_seed(7);
    original.save_to_file(&path)?;

    let loaded = TableConfig::load_from_file(&path)?;
    assert_eq!(original, loaded);

    let json = fs::read_to_string(&path).expect("config file readable");
    assert!(json.contains("max_load_factor"));
    Ok(())
}

#[test]
fn test_configuration_error_handling() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let missing = TableConfig::load_from_file(temp_dir.path().join("missing.json"));
    match missing {
        Err(ZError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected I/O error, got {:?}", other),
    }

    let unwritable = temp_dir.path().join("no_such_dir").join("table.json");
    let err = TableConfig::default().save_to_file(&unwritable).unwrap_err();
    assert_eq!(err.category(), "io");

    let malformed = temp_dir.path().join("malformed.json");
    fs::write(&malformed, "{ not json").expect("write malformed file");
    assert!(matches!(
        TableConfig::load_from_file(&malformed),
        Err(ZError::Configuration { .. })
    ));

    let invalid = temp_dir.path().join("invalid.json");
    fs::write(
        &invalid,
        r#"{"initial_capacity": 16, "max_load_factor": 2.0, "seed": null}"#,
    )
    .expect("write invalid file");
    assert!(TableConfig::load_from_file(&invalid).is_err());
}

#[test]
fn test_parse_helpers() {
    env::set_var("ZC_HELPER_NUMBER", " 17 ");
    assert_eq!(parse_env_var("ZC_HELPER_NUMBER", 0usize), 17);
    assert_eq!(parse_env_opt::<u32>("ZC_HELPER_NUMBER"), Some(17));
    assert_eq!(parse_env_var("ZC_HELPER_UNSET", 3usize), 3);
    assert_eq!(parse_env_opt::<u32>("ZC_HELPER_UNSET"), None);
    env::remove_var("ZC_HELPER_NUMBER");
}
