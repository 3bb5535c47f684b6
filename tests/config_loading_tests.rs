//! Tests for loading collector configuration from YAML

use field_collector::config::DEFAULT_MAX_DEPTH;
use field_collector::prelude::*;
use std::io::Write;

#[test]
fn test_load_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    writeln!(file, "max_depth: 8").expect("should write config");

    let path = file.path().to_str().expect("utf-8 path");
    let config = CollectorConfig::from_yaml_file(path).expect("should load config");

    assert_eq!(config.max_depth, 8);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("missing.yaml");

    let result = CollectorConfig::from_yaml_file(path.to_str().expect("utf-8 path"));
    assert!(result.is_err());
}

#[test]
fn test_empty_mapping_uses_defaults() {
    let config = CollectorConfig::from_yaml_str("{}").expect("should parse");
    assert_eq!(config, CollectorConfig::default());
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
}

#[test]
fn test_loaded_config_drives_collection() {
    let config = CollectorConfig::from_yaml_str("max_depth: 0").expect("should parse");

    let doc = parse_document("{ a ...F } fragment F on Query { b }").expect("valid query");
    let ctx = RequestContext::new(&doc, HashMap::new()).with_config(config);
    let root = ctx.root_selections(None).expect("operation");

    assert_eq!(ctx.config().max_depth, 0);
    let err = ctx
        .collect_fields(root.selections, &["Query"])
        .expect_err("fragments are not allowed at depth 0");
    assert_eq!(err, CollectError::RecursionLimitExceeded { limit: 0 });
}
