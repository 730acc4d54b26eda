//! Flowchart scope: the drawing surface plus the nodes found in a document
//!
//! Extraction is where the surface lookup happens, so a missing surface fails
//! before any connector is computed.

use std::collections::HashMap;

use tracing::{debug, span, trace, Level};

use super::{Document, DrawingSurface, FlowwireError, Rect};

/// Markers identifying nodes, parent references and the drawing surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    /// Class carried by every flowchart node
    pub node_class: String,
    /// Attribute holding the parent node's id
    pub parent_attribute: String,
    /// Class carried by the single drawing surface
    pub surface_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            node_class: "node".to_string(),
            parent_attribute: "data-parent".to_string(),
            surface_class: "flowchart-lines".to_string(),
        }
    }
}

/// A flowchart node: read-only view of a host element
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: Option<String>,
    pub rect: Rect,
    pub parent: Option<String>,
}

impl Node {
    pub fn new(id: Option<String>, rect: Rect, parent: Option<String>) -> Self {
        Self { id, rect, parent }
    }

    /// Node label for diagnostics
    pub fn label(&self, index: usize) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| format!("node[{}]", index))
    }
}

/// A resolved child-to-parent relation, by index into [`Flowchart::nodes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentLink {
    pub parent: usize,
    pub child: usize,
}

/// A declared parent id that names no node in scope
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UnresolvedReference {
    pub node: String,
    pub parent: String,
}

/// Outcome of resolving every node's declared parent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkResolution {
    pub links: Vec<ParentLink>,
    pub unresolved: Vec<UnresolvedReference>,
    pub without_parent: usize,
}

/// Explicit rendering scope: one surface and zero or more nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Flowchart {
    pub surface: DrawingSurface,
    pub nodes: Vec<Node>,
}

impl Flowchart {
    pub fn new(surface: DrawingSurface) -> Self {
        Self {
            surface,
            nodes: Vec::new(),
        }
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Collect the surface and nodes of `document`
    ///
    /// Fails with a configuration error unless exactly one element carries
    /// the surface class.
    pub fn from_document(document: &Document, selectors: &Selectors) -> Result<Self, FlowwireError> {
        let extract_span = span!(
            Level::DEBUG,
            "extract_flowchart",
            element_count = document.len(),
            surface_class = %selectors.surface_class
        );
        let _enter = extract_span.enter();

        let surfaces: Vec<_> = document
            .elements_with_class(&selectors.surface_class)
            .collect();
        let surface_rect = match surfaces.as_slice() {
            [] => return Err(FlowwireError::missing_surface(&selectors.surface_class)),
            [only] => only.rect,
            many => {
                return Err(FlowwireError::duplicate_surface(
                    &selectors.surface_class,
                    many.len(),
                ))
            }
        };

        let nodes: Vec<Node> = document
            .elements_with_class(&selectors.node_class)
            .map(|element| {
                let parent = element
                    .attribute(&selectors.parent_attribute)
                    .filter(|p| !p.trim().is_empty())
                    .map(str::to_string);
                Node::new(element.id.clone(), element.rect, parent)
            })
            .collect();

        debug!(node_count = nodes.len(), "Extracted flowchart scope");
        Ok(Self {
            surface: DrawingSurface::new(surface_rect),
            nodes,
        })
    }

    /// Index of the first node whose id is `id`
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id.as_deref() == Some(id))
    }

    /// Resolve every declared parent against the nodes in scope
    ///
    /// Links come back in node order. Unresolved ids are collected, never
    /// guessed.
    pub fn resolve_links(&self) -> LinkResolution {
        let mut index: HashMap<&str, usize> = HashMap::new();
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(id) = node.id.as_deref() {
                if index.contains_key(id) {
                    debug!(node_id = %id, "Duplicate node id, first occurrence wins");
                    continue;
                }
                index.insert(id, i);
            }
        }

        let mut resolution = LinkResolution::default();
        for (child, node) in self.nodes.iter().enumerate() {
            let Some(parent_id) = node.parent.as_deref() else {
                resolution.without_parent += 1;
                continue;
            };

            match index.get(parent_id) {
                Some(&parent) => {
                    trace!(child = %node.label(child), parent = %parent_id, "Resolved parent link");
                    resolution.links.push(ParentLink { parent, child });
                }
                None => {
                    trace!(child = %node.label(child), parent = %parent_id, "Parent reference does not resolve");
                    resolution.unresolved.push(UnresolvedReference {
                        node: node.label(child),
                        parent: parent_id.to_string(),
                    });
                }
            }
        }

        debug!(
            links = resolution.links.len(),
            unresolved = resolution.unresolved.len(),
            without_parent = resolution.without_parent,
            "Resolved parent links"
        );
        resolution
    }
}
