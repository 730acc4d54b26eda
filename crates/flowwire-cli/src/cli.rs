//! Command-line interface for the flowwire utility
//!
//! Reads a JSON layout snapshot and draws the flowchart connector overlay.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

use flowwire::core::logging::init_logging;
use flowwire::{ConnectorRenderer, ConnectorStyle, Document, RenderConfig, Selectors};

/// Flowwire - Draw connectors between laid-out flowchart nodes
#[derive(Parser)]
#[command(name = "flowwire")]
#[command(about = "Draw parent-to-child connector lines for an already laid-out flowchart")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Marker and presentation options shared by the rendering commands
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct RenderArgs {
    /// Connector style
    #[arg(long, value_enum, default_value_t = StyleChoice::StraightHorizontal)]
    pub style: StyleChoice,

    /// Class carried by flowchart nodes
    #[arg(long, default_value = "node")]
    pub node_class: String,

    /// Attribute holding a node's parent id
    #[arg(long, default_value = "data-parent")]
    pub parent_attr: String,

    /// Class carried by the drawing surface
    #[arg(long, default_value = "flowchart-lines")]
    pub surface_class: String,

    /// Stroke color for every connector
    #[arg(long, default_value = "black")]
    pub stroke: String,
}

impl RenderArgs {
    fn to_config(&self) -> RenderConfig {
        RenderConfig::new(self.style.into())
            .with_selectors(Selectors {
                node_class: self.node_class.clone(),
                parent_attribute: self.parent_attr.clone(),
                surface_class: self.surface_class.clone(),
            })
            .with_stroke_color(self.stroke.clone())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw the connector overlay for a layout snapshot
    Draw {
        /// Input JSON layout snapshot (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
        format: OutputFormat,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Check that every declared parent resolves and a surface exists
    Validate {
        /// Input JSON layout snapshot (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Show supported connector styles
    Styles {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Supported connector styles
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum StyleChoice {
    /// Parent's right edge to child's left edge
    #[default]
    StraightHorizontal,
    /// Parent's bottom edge to child's top edge
    StraightVertical,
    /// Right-angled path between right and left edges
    Orthogonal,
}

impl From<StyleChoice> for ConnectorStyle {
    fn from(value: StyleChoice) -> Self {
        match value {
            StyleChoice::StraightHorizontal => ConnectorStyle::StraightHorizontal,
            StyleChoice::StraightVertical => ConnectorStyle::StraightVertical,
            StyleChoice::Orthogonal => ConnectorStyle::Orthogonal,
        }
    }
}

/// Output formats for the draw command
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Standalone SVG overlay
    #[default]
    Svg,
    /// Connector coordinates and pass report as JSON
    Json,
}

/// Main CLI application
#[derive(Default)]
pub struct FlowwireApp;

impl FlowwireApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags
        let log_level_str = std::env::var("FLOWWIRE_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("FLOWWIRE_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Flowwire v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Draw {
                input,
                output,
                format,
                render,
            } => self.draw_command(input, output, format, &render, cli.verbose),
            Commands::Validate { input, render } => {
                self.validate_command(input, &render, cli.verbose)
            }
            Commands::Styles { json } => self.styles_command(json, cli.verbose),
        }
    }

    /// Handle the draw command
    fn draw_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        format: OutputFormat,
        render: &RenderArgs,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let rendered = self.draw(&content, format, render)?;
        self.write_output(output, &rendered)?;
        Ok(())
    }

    /// Render a snapshot to the requested output format
    pub fn draw(&self, content: &str, format: OutputFormat, render: &RenderArgs) -> Result<String> {
        let document = Document::from_json(content)?;
        let renderer = ConnectorRenderer::with_config(render.to_config());
        let (flowchart, report) = renderer.render_document(&document)?;
        debug!(drawn = report.drawn, format = ?format, "Rendered snapshot");

        match format {
            OutputFormat::Svg => Ok(renderer.to_svg(&flowchart)),
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "style": renderer.config().style.to_string(),
                    "surface": flowchart.surface.rect,
                    "connectors": flowchart.surface.summary(),
                    "report": report,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
        }
    }

    /// Handle the validate command
    fn validate_command(
        &self,
        input: Option<PathBuf>,
        render: &RenderArgs,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let summary = self.validate(&content, render)?;
        println!("✓ {}", summary);
        Ok(())
    }

    /// Run a pass and fail if the surface is missing or any parent is unresolved
    pub fn validate(&self, content: &str, render: &RenderArgs) -> Result<String> {
        let document = Document::from_json(content)?;
        let renderer = ConnectorRenderer::with_config(render.to_config());
        let (flowchart, report) = renderer.render_document(&document)?;

        if !report.is_clean() {
            return Err(anyhow!(
                "{} unresolved parent reference(s): {}",
                report.unresolved.len(),
                report.warnings().join("; ")
            ));
        }

        Ok(format!(
            "{} node(s), {} connector(s), {} root(s)",
            flowchart.nodes.len(),
            report.drawn,
            report.without_parent
        ))
    }

    /// Handle the styles command
    fn styles_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing connector styles");
        }
        println!("{}", self.styles(json)?);
        Ok(())
    }

    /// Describe the supported connector styles
    pub fn styles(&self, json: bool) -> Result<String> {
        let styles = ConnectorStyle::all();

        if json {
            let entries: Vec<_> = styles
                .iter()
                .map(|style| {
                    serde_json::json!({
                        "name": style.to_string(),
                        "description": style.description(),
                        "stroke_width": style.stroke_width(),
                    })
                })
                .collect();
            let value = serde_json::json!({
                "styles": entries,
                "total": styles.len(),
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let mut text = String::from("Connector styles:\n");
        for style in styles {
            text.push_str(&format!("  {:<20} - {}\n", style.to_string(), style.description()));
        }
        Ok(text.trim_end().to_string())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout();
                stdout.write_all(content.as_bytes())?;
                if !content.is_empty() && !content.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
