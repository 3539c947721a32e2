// tests/unit_config.rs
use std::fs;
use snapgraph_core::config::{EngineConfig, RankingConfig, ThicknessConfig};
use snapgraph_core::GraphError;

#[test]
fn test_defaults() {
    let c = EngineConfig::default();
    assert_eq!(c.ranking.top_k, 25);
    assert_eq!(c.spotlight.min_count, 1);
    assert_eq!(c.spotlight.max_count, 10);
    assert!((c.thickness.min - 1.5).abs() < f64::EPSILON);
    assert!((c.thickness.max - 15.0).abs() < f64::EPSILON);
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let c = EngineConfig::parse_toml("[ranking]\ntop_k = 5").unwrap();
    assert_eq!(c.ranking.top_k, 5);
    assert_eq!(c.spotlight.max_count, 10);
}

#[test]
fn test_load_from_file() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("snapgraph.toml");
    fs::write(&path, "[thickness]\nmin = 2.0\nmax = 8.0\n").unwrap();
    let c = EngineConfig::load_from(&path).unwrap();
    assert!((c.thickness.min - 2.0).abs() < f64::EPSILON);
    assert!((c.thickness.max - 8.0).abs() < f64::EPSILON);
}

#[test]
fn test_missing_file_is_default() {
    let d = tempfile::tempdir().unwrap();
    let c = EngineConfig::load_from(&d.path().join("absent.toml")).unwrap();
    assert_eq!(c.ranking.top_k, RankingConfig::default().top_k);
}

#[test]
fn test_inverted_thickness_rejected() {
    let err = EngineConfig::parse_toml("[thickness]\nmin = 9.0\nmax = 1.0").unwrap_err();
    assert!(matches!(err, GraphError::Config(_)));
}

#[test]
fn test_inverted_spotlight_rejected() {
    let err = EngineConfig::parse_toml("[spotlight]\nmin_count = 4\nmax_count = 2").unwrap_err();
    assert!(matches!(err, GraphError::Config(_)));
}

#[test]
fn test_malformed_toml_rejected() {
    assert!(matches!(
        EngineConfig::parse_toml("[ranking\ntop_k = "),
        Err(GraphError::Config(_))
    ));
}

#[test]
fn test_save_then_load() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("out.toml");
    let mut c = EngineConfig::new();
    c.ranking.top_k = 7;
    c.thickness = ThicknessConfig { min: 1.0, max: 4.0 };
    c.save(&path).unwrap();

    let back = EngineConfig::load_from(&path).unwrap();
    assert_eq!(back.ranking.top_k, 7);
    assert!((back.thickness.max - 4.0).abs() < f64::EPSILON);
}
