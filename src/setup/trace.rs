////////////////////////////////////////////////////////////////////////////////
// Scoria parser library
////////////////////////////////////////////////////////////////////////////////
// Copyright 2020 Skylor R. Schermer
// This code is dual licenced using the MIT or Apache 2 license.
// See licence-mit.md and licence-apache.md for details.
////////////////////////////////////////////////////////////////////////////////
//! Crate-wide tracing infrastructure.
////////////////////////////////////////////////////////////////////////////////

// External library imports.
use anyhow::Context;
use anyhow::Error;
use serde::Deserialize;
use serde::Serialize;
use tracing::subscriber::set_global_default;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;
use tracing_subscriber::fmt::Layer;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::filter::LevelFilter;

// Standard library imports.
use std::borrow::Cow;


////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////
/// Default value for the tracing environment variable.
const DEFAULT_TRACE_ENV_VAR: &'static str = "SCORIA_LOG";

/// Default value for ansi_colors.
const DEFAULT_ANSI_COLORS: bool = true;

/// Filter directive enabling parser invocation spans.
const PARSER_TRACE_DIRECTIVE: &'static str = "scoria::parser=TRACE";

/// Filter directive enabling checkpoint restore events.
const SOURCE_TRACE_DIRECTIVE: &'static str = "scoria::source=TRACE";


////////////////////////////////////////////////////////////////////////////////
// TraceConfig
////////////////////////////////////////////////////////////////////////////////
/// Tracing configuration parameters.
///
/// Every parser invocation opens a `TRACE`-level span carrying its label,
/// and every checkpoint restore emits a `TRACE` event, so a parse can be
/// watched step-by-step by enabling the `scoria::parser` and
/// `scoria::source` targets. Output goes to stdout; the library keeps no
/// on-disk state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Trace level filters.
    #[serde(default = "TraceConfig::default_filters")]
    pub filters: Vec<Cow<'static, str>>,

    /// Whether to write trace output to stdout.
    pub output_stdout: bool,

    /// Whether to use ANSI coloring in the output.
    #[serde(default = "TraceConfig::default_ansi_colors")]
    pub ansi_colors: bool,
}

impl TraceConfig {
    /// Returns a configuration which traces every parser invocation and
    /// checkpoint restore to stdout.
    pub fn verbose_parsing() -> Self {
        TraceConfig {
            filters: vec![
                PARSER_TRACE_DIRECTIVE.into(),
                SOURCE_TRACE_DIRECTIVE.into(),
            ],
            output_stdout: true,
            ansi_colors: DEFAULT_ANSI_COLORS,
        }
    }

    /// Initializes the global default tracing subscriber using this
    /// configuration. Does nothing unless stdout output is enabled.
    pub fn init_global_default<L>(&self, default_level_filter: L)
        -> Result<(), Error>
        where L: Into<LevelFilter>
    {
        if !self.output_stdout {
            return Ok(());
        }

        let mut env_filter = EnvFilter::from_env(DEFAULT_TRACE_ENV_VAR)
            .add_directive(default_level_filter.into().into());

        for filter in &self.filters[..] {
            let directive = filter
                .parse()
                .with_context(|| format!(
                    "failed to parse trace filter directive \"{:?}\"",
                    filter))?;
            env_filter = env_filter.add_directive(directive);
        }

        let subscriber = Registry::default()
            .with(env_filter)
            .with(Layer::new()
                .without_time()
                .with_ansi(self.ansi_colors));

        set_global_default(subscriber)
            .context("failed to set global tracing subscriber")?;
        Ok(())
    }

    /// Returns the default value for filters.
    #[inline(always)]
    fn default_filters() -> Vec<Cow<'static, str>> {
        vec![
            "scoria=WARN".into(),
        ]
    }

    /// Returns the default value for ansi_colors.
    #[inline(always)]
    fn default_ansi_colors() -> bool {
        DEFAULT_ANSI_COLORS
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            filters: TraceConfig::default_filters(),
            output_stdout: false,
            ansi_colors: TraceConfig::default_ansi_colors(),
        }
    }
}
