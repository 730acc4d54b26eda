//! Connector renderer
//!
//! Runs one pass over a flowchart scope: clears the surface, resolves every
//! declared parent and appends one connector per resolved link.

use serde::Serialize;
use tracing::{debug, info, span, trace, warn, Level};

use super::guard::SingleFlight;
use super::routing::route;
use crate::core::{
    svg, ConnectorStyle, Document, Flowchart, FlowwireError, Selectors, UnresolvedReference,
    DEFAULT_STROKE_COLOR,
};

/// Configuration for a connector pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub style: ConnectorStyle,
    pub selectors: Selectors,
    pub stroke_color: String,
}

impl RenderConfig {
    pub fn new(style: ConnectorStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn with_selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }

    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: ConnectorStyle::default(),
            selectors: Selectors::default(),
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
        }
    }
}

/// What a pass drew and what it skipped
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderReport {
    pub drawn: usize,
    pub without_parent: usize,
    pub unresolved: Vec<UnresolvedReference>,
}

impl RenderReport {
    /// Returns true if every declared parent resolved
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// One human-readable line per unresolved reference
    pub fn warnings(&self) -> Vec<String> {
        self.unresolved
            .iter()
            .map(|r| format!("node '{}' declares unknown parent '{}'", r.node, r.parent))
            .collect()
    }
}

/// Draws parent-to-child connectors onto a flowchart's surface
#[derive(Debug, Default)]
pub struct ConnectorRenderer {
    config: RenderConfig,
    flight: SingleFlight,
}

impl ConnectorRenderer {
    /// Create a renderer with the default straight-horizontal style
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    pub fn with_style(style: ConnectorStyle) -> Self {
        Self::with_config(RenderConfig::new(style))
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            flight: SingleFlight::new(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Returns true while a pass is running
    pub fn is_busy(&self) -> bool {
        self.flight.is_busy()
    }

    /// Run a pass over `flowchart`, replacing any connectors already drawn
    pub fn render(&self, flowchart: &mut Flowchart) -> Result<RenderReport, FlowwireError> {
        let _guard = self
            .flight
            .try_enter()
            .ok_or(FlowwireError::RenderInProgress)?;

        let pass_span = span!(
            Level::INFO,
            "connector_pass",
            node_count = flowchart.nodes.len(),
            style = %self.config.style
        );
        let _enter = pass_span.enter();

        flowchart.surface.clear();
        let resolution = flowchart.resolve_links();
        let origin = flowchart.surface.origin();

        for link in &resolution.links {
            let parent = &flowchart.nodes[link.parent];
            let child = &flowchart.nodes[link.child];
            let connector = route(
                &parent.rect,
                &child.rect,
                origin,
                self.config.style,
                &self.config.stroke_color,
            );
            trace!(
                parent = %parent.label(link.parent),
                child = %child.label(link.child),
                start = %connector.start(),
                end = %connector.end(),
                "Routed connector"
            );
            flowchart.surface.append(connector);
        }

        for reference in &resolution.unresolved {
            warn!(
                node = %reference.node,
                parent = %reference.parent,
                "Parent reference does not resolve, no connector drawn"
            );
        }

        let report = RenderReport {
            drawn: flowchart.surface.len(),
            without_parent: resolution.without_parent,
            unresolved: resolution.unresolved,
        };
        info!(
            drawn = report.drawn,
            unresolved = report.unresolved.len(),
            "Connector pass completed"
        );
        Ok(report)
    }

    /// Extract the flowchart scope from `document` and run a pass over it
    ///
    /// A missing or ambiguous surface fails before anything is drawn.
    pub fn render_document(
        &self,
        document: &Document,
    ) -> Result<(Flowchart, RenderReport), FlowwireError> {
        let mut flowchart = Flowchart::from_document(document, &self.config.selectors)?;
        debug!(node_count = flowchart.nodes.len(), "Scope ready for connector pass");
        let report = self.render(&mut flowchart)?;
        Ok((flowchart, report))
    }

    /// Serialize a rendered flowchart's surface as an SVG overlay
    pub fn to_svg(&self, flowchart: &Flowchart) -> String {
        svg::surface_to_svg(&flowchart.surface, &self.config.selectors.surface_class)
    }
}
