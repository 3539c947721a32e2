// tests/cli_exit.rs - Exit code tests
use snapgraph_core::exit::SnapgraphExit;
use snapgraph_core::{CoreSet, GraphError, TimeBounds};

#[test]
fn test_exit_codes_distinct() {
    assert_eq!(SnapgraphExit::Success.code(), 0);
    assert_eq!(SnapgraphExit::Error.code(), 1);
    assert_eq!(SnapgraphExit::InvalidInput.code(), 2);
}

#[test]
fn test_empty_core_is_invalid_input() {
    let err = anyhow::Error::new(CoreSet::parse(",,").unwrap_err());
    assert_eq!(SnapgraphExit::for_error(&err), SnapgraphExit::InvalidInput);
}

#[test]
fn test_bad_fraction_is_invalid_input() {
    let bounds = TimeBounds { min: 0, max: 10 };
    let err = anyhow::Error::new(bounds.cutoff_for_fraction(140.0).unwrap_err());
    assert_eq!(SnapgraphExit::for_error(&err), SnapgraphExit::InvalidInput);
}

#[test]
fn test_context_keeps_invalid_input() {
    let err = anyhow::Error::new(GraphError::InvalidCoreSet).context("loading graph");
    assert_eq!(SnapgraphExit::for_error(&err), SnapgraphExit::InvalidInput);
}

#[test]
fn test_config_error_is_generic_error() {
    let err = anyhow::Error::new(GraphError::Config("bad".into()));
    assert_eq!(SnapgraphExit::for_error(&err), SnapgraphExit::Error);
}

#[test]
fn test_source_error_is_generic_error() {
    let err = anyhow::Error::new(GraphError::Source("blank endpoint".into()));
    assert_eq!(SnapgraphExit::for_error(&err), SnapgraphExit::Error);
}
