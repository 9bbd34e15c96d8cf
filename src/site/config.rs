//! Site configuration types and structures.
//!
//! This module defines the configuration structures describing a
//! documentation site. Configuration is typically stored in `.site.toml`
//! files; every table has defaults reproducing the stock site layout, so
//! an absent file is a valid configuration.
//!
//! # Configuration File Format
//!
//! ```toml
//! extensions = ["markdown_parser", "panels", "diagrams", "blog"]
//! pygments_style = "friendly"
//!
//! [project]
//! title = "Field Notes"
//! author = "Docs Team"
//!
//! [html]
//! theme = "pydata_sphinx_theme"
//!
//! [[html.sidebars]]
//! pattern = "content/blog/**"
//! widgets = ["side_header.html", "postcard.html", "socials.html"]
//!
//! [blog]
//! base_url = "https://docs.example.org"
//!
//! [diagram.locator.SourceRelative]
//! jar_name = "plantuml.jar"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagram::{DiagramLocator, OutputFormat};
use crate::extensions::ExtensionId;
use crate::sidebar::{self, SidebarRule};

/// Root site configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Renderer extensions to enable, in load order.
    pub extensions: Vec<ExtensionId>,
    /// Template search directories, relative to the source directory.
    pub templates_path: Vec<String>,
    /// Source files and directories to skip, as glob patterns.
    pub exclude_patterns: Vec<String>,
    /// Syntax highlighting style name.
    pub pygments_style: String,
    /// Project metadata.
    pub project: Project,
    /// Source file suffix to format mapping.
    pub source_suffix: BTreeMap<String, SourceFormat>,
    /// HTML output options.
    pub html: Html,
    /// Blog engine options.
    pub blog: Blog,
    /// Diagram renderer options.
    pub diagram: Diagram,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            extensions: ExtensionId::ALL.to_vec(),
            templates_path: vec!["_templates".to_string()],
            exclude_patterns: Vec::new(),
            pygments_style: "friendly".to_string(),
            project: Project::default(),
            source_suffix: stock_source_suffix(),
            html: Html::default(),
            blog: Blog::default(),
            diagram: Diagram::default(),
        }
    }
}

impl SiteConfig {
    /// Loads a configuration file, keyed on its extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, fails to parse, or
    /// has an unsupported extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        Self::parse(&content, ext)
    }

    /// Parses configuration content in the format named by `ext`.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed content or an unsupported format.
    pub fn parse(content: &str, ext: &str) -> Result<Self, ConfigError> {
        match ext {
            "toml" => Ok(toml::from_str(content)?),
            "json" => Ok(serde_json::from_str(content)?),
            _ => Err(ConfigError::UnsupportedExtension(ext.to_string())),
        }
    }
}

/// Configuration loading failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("can not open config file: {path}")]
    Open {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The TOML content is malformed.
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    /// The JSON content is malformed.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    /// The file extension names no supported format.
    #[error("unsupported config file extension: {0}")]
    UnsupportedExtension(String),
}

/// Project metadata shown in page headers and the copyright line.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Project {
    /// Project title. May be empty.
    pub title: String,
    /// Author name, embedded in the generated copyright line.
    pub author: String,
    /// Overrides the generated `"<year>, <author>"` copyright line.
    pub copyright: Option<String>,
}

/// Format of a page source file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// ReStructuredText sources.
    Restructuredtext,
    /// Markdown sources.
    Markdown,
}

impl SourceFormat {
    /// The format name the external renderer expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Restructuredtext => "restructuredtext",
            SourceFormat::Markdown => "markdown",
        }
    }
}

fn stock_source_suffix() -> BTreeMap<String, SourceFormat> {
    BTreeMap::from([
        (".rst".to_string(), SourceFormat::Restructuredtext),
        (".txt".to_string(), SourceFormat::Markdown),
        (".md".to_string(), SourceFormat::Markdown),
    ])
}

/// HTML output options.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct Html {
    /// Theme identifier.
    pub theme: String,
    /// Theme filesystem path. Defaults to `_themes/<theme>` under the
    /// source directory when unset.
    pub theme_path: Option<String>,
    /// Whether pages link to their sources.
    pub show_sourcelink: bool,
    /// Static asset directories, relative to the source directory.
    pub static_path: Vec<String>,
    /// CSS files registered with the renderer at setup time.
    pub extra_css: Vec<String>,
    /// JS files registered with the renderer at setup time.
    pub extra_js: Vec<String>,
    /// Theme-specific options, passed through untyped.
    pub theme_options: BTreeMap<String, serde_json::Value>,
    /// Extra values exposed to page templates.
    pub context: BTreeMap<String, String>,
    /// Sidebar routing rules.
    pub sidebars: Vec<SidebarRule>,
}

impl Default for Html {
    fn default() -> Self {
        Self {
            theme: "pydata_sphinx_theme".to_string(),
            theme_path: None,
            show_sourcelink: false,
            static_path: vec!["_static".to_string()],
            extra_css: vec!["css/custom.css".to_string()],
            extra_js: Vec::new(),
            theme_options: BTreeMap::new(),
            context: BTreeMap::new(),
            sidebars: sidebar::stock_rules(),
        }
    }
}

/// Blog engine options.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Blog {
    /// Base URL of the published site.
    pub base_url: String,
    /// Blog title.
    pub title: String,
    /// Logical path of the generated blog listing.
    pub path: String,
    /// Glob patterns selecting post source files.
    pub post_patterns: Vec<String>,
    /// Seconds before post redirect pages refresh.
    pub post_redirect_refresh: u32,
    /// Number of images lifted from a post into its excerpt.
    pub post_auto_image: u32,
    /// Number of paragraphs lifted from a post into its excerpt.
    pub post_auto_excerpt: u32,
    /// Disqus account name for post comments.
    pub disqus_shortname: Option<String>,
    /// Whether the theme already ships Font Awesome.
    pub fontawesome_included: bool,
}

impl Default for Blog {
    fn default() -> Self {
        Self {
            base_url: "https://example.com".to_string(),
            title: "Blog".to_string(),
            path: "content/blog".to_string(),
            post_patterns: vec![
                "content/articles/*/*".to_string(),
                "content/articles/*/*/*".to_string(),
            ],
            post_redirect_refresh: 1,
            post_auto_image: 0,
            post_auto_excerpt: 1,
            disqus_shortname: None,
            fontawesome_included: true,
        }
    }
}

impl Blog {
    /// Whether a logical source path is collected as a blog post.
    pub fn is_post_source(&self, page: &str) -> bool {
        self.post_patterns.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|p| p.matches(page))
                .unwrap_or(false)
        })
    }
}

/// Diagram renderer options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Diagram {
    /// Image format the renderer produces.
    pub output_format: OutputFormat,
    /// Strategy locating the renderer jar.
    pub locator: DiagramLocator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_stock_config() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            extensions = ["markdown_parser", "blog"]

            [project]
            author = "Docs Team"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.extensions,
            vec![ExtensionId::MarkdownParser, ExtensionId::Blog]
        );
        assert_eq!(config.project.author, "Docs Team");
        assert_eq!(config.pygments_style, "friendly");
        assert_eq!(config.html.theme, "pydata_sphinx_theme");
        assert_eq!(config.blog.post_auto_excerpt, 1);
    }

    #[test]
    fn test_locator_variant_from_toml() {
        let config: SiteConfig = toml::from_str(
            r#"
            [diagram.locator.SourceRelative]
            jar_name = "plantuml.jar"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.diagram.locator,
            DiagramLocator::SourceRelative {
                jar_name: "plantuml.jar".to_string()
            }
        );
        assert_eq!(config.diagram.output_format, OutputFormat::Svg);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = SiteConfig::parse("", "yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedExtension(ext) if ext == "yaml"));
    }

    #[test]
    fn test_json_config() {
        let config = SiteConfig::parse(r#"{"pygments_style": "monokai"}"#, "json").unwrap();
        assert_eq!(config.pygments_style, "monokai");
    }

    #[test]
    fn test_stock_source_suffix() {
        let suffix = SiteConfig::default().source_suffix;
        assert_eq!(suffix.get(".rst"), Some(&SourceFormat::Restructuredtext));
        assert_eq!(suffix.get(".txt"), Some(&SourceFormat::Markdown));
        assert_eq!(suffix.get(".md"), Some(&SourceFormat::Markdown));
    }

    #[test]
    fn test_post_source_classification() {
        let blog = Blog::default();
        assert!(blog.is_post_source("content/articles/2020/post"));
        assert!(blog.is_post_source("content/articles/2020/03/post"));
        assert!(!blog.is_post_source("content/blog/entry"));
        assert!(!blog.is_post_source("index"));
    }
}
