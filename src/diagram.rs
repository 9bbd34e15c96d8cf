//! Diagram renderer location strategies.
//!
//! Diagrams in page sources are rendered by an external tool which the
//! renderer invokes through a shell command. This module computes that
//! command string. The path to the renderer jar comes from one of two
//! strategies, selected in the site configuration:
//!
//! ```toml
//! [diagram.locator.Installed]
//! jar = "/usr/local/bin/plantuml.jar"
//! includes = ["/usr/src/plantuml/*"]
//! ```
//!
//! or
//!
//! ```toml
//! [diagram.locator.SourceRelative]
//! jar_name = "plantuml.jar"
//! ```
//!
//! The locator never checks that the jar exists; a bad path surfaces when
//! the external renderer tries to start the process.

use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Strategy for locating the diagram renderer jar.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub enum DiagramLocator {
    /// System-wide installation at a fixed absolute path.
    Installed {
        /// Absolute path to the renderer jar. Quoted in the command.
        jar: PathBuf,
        /// Include search paths passed as `-I` arguments.
        #[serde(default)]
        includes: Vec<String>,
    },
    /// Jar checked out next to the documentation tree, one directory
    /// above the source directory.
    SourceRelative {
        /// File name of the jar.
        jar_name: String,
    },
}

impl Default for DiagramLocator {
    fn default() -> Self {
        DiagramLocator::Installed {
            jar: PathBuf::from("/usr/local/bin/plantuml.jar"),
            includes: vec!["/usr/src/plantuml/*".to_string()],
        }
    }
}

impl DiagramLocator {
    /// Builds the shell command invoking the diagram renderer.
    ///
    /// The `Installed` strategy ignores `source`; the `SourceRelative`
    /// strategy resolves the jar against it.
    pub fn command(&self, source: &Path) -> String {
        match self {
            DiagramLocator::Installed { jar, includes } => {
                let mut cmd = format!("java -jar \"{}\"", jar.display());
                for include in includes {
                    cmd.push_str(" -I");
                    cmd.push_str(include);
                }
                cmd
            }
            DiagramLocator::SourceRelative { jar_name } => {
                format!("java -jar {}/../{}", source.display(), jar_name)
            }
        }
    }

    /// The filesystem path the strategy expects the jar at.
    pub fn jar_path(&self, source: &Path) -> PathBuf {
        match self {
            DiagramLocator::Installed { jar, .. } => jar.clone(),
            DiagramLocator::SourceRelative { jar_name } => source.join("..").join(jar_name),
        }
    }
}

/// Image format the diagram renderer produces.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Scalable vector output.
    #[default]
    Svg,
    /// Raster output.
    Png,
}

impl OutputFormat {
    /// The format name the external renderer expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}
