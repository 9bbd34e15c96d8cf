//! Registry of known renderer extensions.
//!
//! The external renderer loads extensions by module name. Instead of
//! routing free-form strings through the configuration, every extension
//! this tool can enable is statically known here, with a typed
//! [`Capability`] describing what it contributes to the build.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::site::config::SourceFormat;

/// A renderer extension known to this tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionId {
    /// Markdown source parsing.
    MarkdownParser,
    /// Panel and card layout directives.
    Panels,
    /// Diagram rendering via an external tool.
    Diagrams,
    /// Blog engine: post collection, archives, tag clouds.
    Blog,
}

impl ExtensionId {
    /// Every extension this tool knows, in stock enablement order.
    pub const ALL: [ExtensionId; 4] = [
        ExtensionId::MarkdownParser,
        ExtensionId::Panels,
        ExtensionId::Diagrams,
        ExtensionId::Blog,
    ];

    /// The module name the external renderer loads for this extension.
    pub fn module_name(&self) -> &'static str {
        match self {
            ExtensionId::MarkdownParser => "myst_parser",
            ExtensionId::Panels => "sphinx_panels",
            ExtensionId::Diagrams => "sphinxcontrib.plantuml",
            ExtensionId::Blog => "ablog",
        }
    }

    /// Resolves a renderer module name back to its extension id.
    ///
    /// Returns `None` for module names outside the registry.
    pub fn from_module_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ext| ext.module_name() == name)
    }

    /// What this extension contributes to the build.
    pub fn capability(&self) -> Capability {
        match self {
            ExtensionId::MarkdownParser => Capability::SourceParser {
                formats: &[SourceFormat::Markdown],
            },
            ExtensionId::Panels => Capability::Directives,
            ExtensionId::Diagrams => Capability::DiagramRenderer,
            ExtensionId::Blog => Capability::BlogEngine,
        }
    }
}

/// What an extension contributes to the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Parses additional source formats.
    SourceParser {
        /// Formats the parser understands.
        formats: &'static [SourceFormat],
    },
    /// Adds layout directives to page sources.
    Directives,
    /// Renders diagram descriptions into images.
    DiagramRenderer,
    /// Collects posts and generates listing pages.
    BlogEngine,
}
