////////////////////////////////////////////////////////////////////////////////
// Scoria parser library
////////////////////////////////////////////////////////////////////////////////
// Copyright 2020 Skylor R. Schermer
// This code is dual licenced using the MIT or Apache 2 license.
// See licence-mit.md and licence-apache.md for details.
////////////////////////////////////////////////////////////////////////////////
//! Setup test suite.
////////////////////////////////////////////////////////////////////////////////

// Local imports.
use crate::setup::TraceConfig;

// External library imports.
use tracing_subscriber::filter::LevelFilter;


/// Tests the default `TraceConfig` values.
#[test]
fn trace_config_defaults() {
    let config = TraceConfig::default();
    assert_eq!(config.filters, vec!["scoria=WARN"]);
    assert!(!config.output_stdout);
    assert!(config.ansi_colors);
}

/// Tests the verbose parsing preset.
#[test]
fn trace_config_verbose_parsing() {
    let config = TraceConfig::verbose_parsing();
    assert!(config.output_stdout);
    assert_eq!(
        config.filters,
        vec!["scoria::parser=TRACE", "scoria::source=TRACE"]);
}

/// Tests that an output-less `TraceConfig` initializes without installing a
/// subscriber.
#[test]
fn trace_config_no_output() {
    let config = TraceConfig::default();
    config
        .init_global_default(LevelFilter::WARN)
        .expect("init tracing with no outputs");
}
