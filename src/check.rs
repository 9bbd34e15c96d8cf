//! Configuration validations.
//!
//! Checks are declarative: they look at the configuration and the
//! filesystem, never at the external renderer. Missing external
//! collaborators (theme directory, diagram renderer jar) are warnings,
//! not errors; their real failure belongs to the external framework and
//! is neither caught nor translated here.

use std::path::{Path, PathBuf};

use crate::ctx::SiteContext;
use crate::extensions::Capability;
use crate::site::config::SiteConfig;

/// How bad a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration is usable but suspicious.
    Warning,
    /// The configuration will misbehave.
    Error,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Finding severity.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Runs every validation over the configuration.
pub fn run_checks(ctx: &SiteContext, config: &SiteConfig) -> Vec<Diagnostic> {
    let mut findings = Vec::new();

    for rule in &config.html.sidebars {
        if let Err(err) = rule.validate() {
            findings.push(Diagnostic::error(format!("html.sidebars: {err}")));
        }
    }

    for pattern in &config.blog.post_patterns {
        if let Err(err) = glob::Pattern::new(pattern) {
            findings.push(Diagnostic::error(format!(
                "blog.post_patterns: invalid glob {pattern:?}: {err}"
            )));
        }
    }

    let capability_enabled = |needle: Capability| {
        config
            .extensions
            .iter()
            .any(|ext| ext.capability() == needle)
    };

    if capability_enabled(Capability::BlogEngine) && config.blog.base_url.is_empty() {
        findings.push(Diagnostic::warning(
            "blog engine enabled but blog.base_url is empty",
        ));
    }

    if capability_enabled(Capability::DiagramRenderer) {
        let jar = config.diagram.locator.jar_path(&ctx.source);
        let jar = PathBuf::from(ctx.expand(&format!("{}", jar.display())));
        if !jar.exists() {
            findings.push(Diagnostic::warning(format!(
                "diagram renderer jar not found: {}",
                jar.display()
            )));
        }
    }

    if let Some(theme_path) = &config.html.theme_path {
        let expanded = ctx.expand(theme_path);
        if !Path::new(&expanded).exists() {
            findings.push(Diagnostic::warning(format!(
                "theme path does not exist: {expanded}"
            )));
        }
    }

    debug!("{} finding(s)", findings.len());
    findings
}
