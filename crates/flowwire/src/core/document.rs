//! Host document snapshot
//!
//! A [`Document`] is the explicit scope handed to the connector pass: a flat
//! list of laid-out elements with their identifiers, classes, attributes and
//! final bounding boxes. It stands in for the rendered DOM, so nothing in this
//! crate queries global state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, span, trace, Level};

use super::{FlowwireError, Rect};

/// A laid-out element of the host document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub rect: Rect,
}

impl Element {
    /// Create an element with the given bounding box and nothing else
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Label used in diagnostics: the id if present, otherwise the position
    pub fn describe(&self, index: usize) -> String {
        match &self.id {
            Some(id) => format!("#{}", id),
            None => format!("element[{}]", index),
        }
    }
}

/// Ordered collection of laid-out elements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON layout snapshot
    ///
    /// ```rust
    /// use flowwire::Document;
    ///
    /// let doc = Document::from_json(r#"{"elements": [
    ///     {"id": "a", "class": "node", "rect": {"left": 0, "top": 0, "right": 10, "bottom": 10}}
    /// ]}"#).unwrap();
    /// assert_eq!(doc.len(), 1);
    /// ```
    pub fn from_json(input: &str) -> Result<Self, FlowwireError> {
        let parse_span = span!(Level::DEBUG, "parse_document", input_len = input.len());
        let _enter = parse_span.enter();

        let snapshot: DocumentSnapshot = serde_json::from_str(input)
            .map_err(|e| FlowwireError::document_error(format!("invalid layout snapshot: {}", e)))?;

        let mut document = Document::new();
        for (index, raw) in snapshot.elements.into_iter().enumerate() {
            let element = raw.into_element();
            if !element.rect.is_well_formed() {
                return Err(FlowwireError::invalid_geometry(
                    element.describe(index),
                    format!(
                        "bounding box ({}, {})-({}, {}) is inverted or not finite",
                        element.rect.left, element.rect.top, element.rect.right, element.rect.bottom
                    ),
                ));
            }
            trace!(index, id = ?element.id, classes = ?element.classes, "Parsed element");
            document.push(element);
        }

        debug!(element_count = document.len(), "Parsed layout snapshot");
        Ok(document)
    }

    /// Serialize back into the JSON snapshot format
    pub fn to_json(&self) -> Result<String, FlowwireError> {
        let snapshot = DocumentSnapshot {
            elements: self.elements.iter().map(ElementSnapshot::from).collect(),
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.push(element);
        self
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Elements carrying `class`, in document order
    pub fn elements_with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements.iter().filter(move |e| e.has_class(class))
    }

    /// First element in document order whose id is `id`
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id.as_deref() == Some(id))
    }

    /// Shift every bounding box by a constant offset
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for element in &mut self.elements {
            element.rect = element.rect.translate(dx, dy);
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct DocumentSnapshot {
    #[serde(default)]
    elements: Vec<ElementSnapshot>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ElementSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    /// Whitespace-separated class list, as in HTML
    #[serde(default, skip_serializing_if = "String::is_empty")]
    class: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
    rect: Rect,
}

impl ElementSnapshot {
    fn into_element(self) -> Element {
        let mut element = Element::new(self.rect);
        element.id = self.id.filter(|id| !id.is_empty());
        for class in self.class.split_whitespace() {
            element = element.with_class(class);
        }
        element.attributes = self.attributes;
        element
    }
}

impl From<&Element> for ElementSnapshot {
    fn from(element: &Element) -> Self {
        Self {
            id: element.id.clone(),
            class: element.classes.join(" "),
            attributes: element.attributes.clone(),
            rect: element.rect,
        }
    }
}
