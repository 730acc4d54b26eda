//! Core error types for connector rendering
//!
//! Configuration problems (no drawing surface, ambiguous surface) are fatal to
//! a pass. Unresolved parent references are not errors; they are reported in
//! [`RenderReport`](crate::connector::RenderReport) instead.

use thiserror::Error;

/// Problems with the rendered scope that make a connector pass impossible
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Configuration error: no drawing surface with class '{surface_class}' in scope")]
    MissingSurface { surface_class: String },

    #[error(
        "Configuration error: expected exactly one drawing surface with class '{surface_class}', found {count}"
    )]
    DuplicateSurface { surface_class: String, count: usize },
}

/// Top-level error type for the flowwire library
#[derive(Error, Debug)]
pub enum FlowwireError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Document error: {message}")]
    Document { message: String },

    #[error("Invalid geometry for element {element}: {message}")]
    InvalidGeometry { element: String, message: String },

    #[error("A connector pass is already in progress")]
    RenderInProgress,

    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl FlowwireError {
    /// Create a missing-surface configuration error
    pub fn missing_surface(surface_class: impl Into<String>) -> Self {
        ConfigurationError::MissingSurface {
            surface_class: surface_class.into(),
        }
        .into()
    }

    /// Create a duplicate-surface configuration error
    pub fn duplicate_surface(surface_class: impl Into<String>, count: usize) -> Self {
        ConfigurationError::DuplicateSurface {
            surface_class: surface_class.into(),
            count,
        }
        .into()
    }

    /// Create a new document error
    pub fn document_error(message: impl Into<String>) -> Self {
        Self::Document {
            message: message.into(),
        }
    }

    /// Create a new geometry error
    pub fn invalid_geometry(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            element: element.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error is a fatal scope configuration problem
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
