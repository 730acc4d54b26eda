//! Logging infrastructure for the connector pass
//!
//! Structured logging with the `tracing` crate. Native builds install a
//! `tracing-subscriber` registry; WASM builds log to the browser console.
//!
//! # Usage
//!
//! ```rust,no_run
//! use flowwire::core::logging::init_logging;
//!
//! init_logging(None, None).ok();
//! init_logging(Some("debug"), Some("pretty")).ok();
//! ```
//!
//! Levels are the usual `trace|debug|info|warn|error` (plus `off`); formats
//! are `compact`, `pretty` and `json`. `FLOWWIRE_LOG_LEVEL`, `RUST_LOG` and
//! `FLOWWIRE_LOG_FORMAT` apply when no explicit value is given.
//!
//! # WASM Compatibility
//!
//! On `wasm32` the `level` and `format` arguments are ignored and events go to
//! the browser console through `tracing-wasm`.
//!
//! # Tracing in the Connector Pass
//!
//! Each pass opens an `info` span carrying the node count and style. Stage
//! summaries (scope extraction, link resolution) are `debug` events, every
//! routed link is a `trace` event, and parent references that do not resolve
//! are reported as `warn` events without changing the drawn output:
//!
//! ```rust,ignore
//! let pass_span = span!(Level::INFO, "connector_pass", node_count = flowchart.nodes.len());
//! let _enter = pass_span.enter();
//! debug!(links = resolution.links.len(), "Resolved parent links");
//! warn!(node = %reference.node, parent = %reference.parent, "Parent reference does not resolve");
//! ```
//!
//! # Filtering Logs
//!
//! You can filter logs by component using the log level syntax:
//!
//! ```bash
//! # Show link resolution at trace level
//! RUST_LOG="flowwire::core::flowchart=trace" flowwire draw --input layout.json
//!
//! # Show all logs at info level, but routing at trace level
//! RUST_LOG="info,flowwire::connector=trace" flowwire draw --input layout.json
//! ```

use std::str::FromStr;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

#[cfg(target_arch = "wasm32")]
use tracing_wasm::WASMLayerConfig;

/// Output format for native log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One line per event, no source locations
    #[default]
    Compact,
    /// Multi-line, colored, with span enter/exit events
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let base = fmt::Layer::default().with_writer(std::io::stderr);
        match self {
            LogFormat::Compact => base
                .with_target(false)
                .with_span_events(FmtSpan::NONE)
                .compact()
                .boxed(),
            LogFormat::Pretty => base
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .pretty()
                .boxed(),
            LogFormat::Json => base
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .json()
                .boxed(),
        }
    }
}

/// Pick the first of an explicit value and the given environment variables
#[cfg(not(target_arch = "wasm32"))]
fn setting(explicit: Option<&str>, vars: &[&str]) -> Option<String> {
    explicit
        .map(str::to_string)
        .or_else(|| vars.iter().find_map(|var| std::env::var(var).ok()))
}

/// Build the event filter for a level string, falling back to `info`
#[cfg(not(target_arch = "wasm32"))]
fn level_filter(level: &str) -> EnvFilter {
    if level == "off" {
        return EnvFilter::new("off");
    }
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
///
/// `level` falls back to `FLOWWIRE_LOG_LEVEL`, then `RUST_LOG`, then `info`.
/// `format` falls back to `FLOWWIRE_LOG_FORMAT`, then `compact`. Events are
/// written to stderr so rendered output on stdout stays clean.
///
/// Fails on an unknown format or when a subscriber is already installed.
///
/// ```rust,no_run
/// use flowwire::core::logging::init_logging;
///
/// if let Err(e) = init_logging(Some("debug"), Some("pretty")) {
///     eprintln!("logging unavailable: {}", e);
/// }
/// ```
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_arch = "wasm32")]
    {
        // tracing-wasm 0.1 has no level filter in its config
        let _ = (level, format);
        tracing_wasm::set_as_global_default_with_config(WASMLayerConfig::default());
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = setting(level, &["FLOWWIRE_LOG_LEVEL", "RUST_LOG"])
            .unwrap_or_else(|| "info".to_string());
        let format = match setting(format, &["FLOWWIRE_LOG_FORMAT"]) {
            Some(name) => LogFormat::from_str(&name)
                .map_err(|e| format!("Invalid log format: {}", e))?,
            None => LogFormat::default(),
        };

        Registry::default()
            .with(format.layer())
            .with(level_filter(&level))
            .try_init()?;
        Ok(())
    }
}
