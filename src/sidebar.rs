//! Sidebar routing rules and matching.
//!
//! Each page of the rendered site gets a vertical stack of sidebar
//! widgets. Which widgets, and in which order, is decided by a list of
//! [`SidebarRule`]s: the most specific rule matching the page's logical
//! path wins, and the bare `**` rule catches everything left over.
//!
//! Patterns use a restricted syntax. Exactly three forms exist:
//!
//! - a literal path, matching only that path
//! - `prefix/**`, matching any page strictly below `prefix`
//! - `**`, matching every page

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A sidebar routing rule.
///
/// `widgets` holds template file names the external renderer resolves;
/// their order determines the vertical stacking in the rendered page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SidebarRule {
    /// Page path pattern in the restricted syntax.
    pub pattern: String,
    /// Widget template names, top to bottom.
    pub widgets: Vec<String>,
}

impl SidebarRule {
    /// Creates a rule from a pattern and widget template names.
    pub fn new(pattern: impl Into<String>, widgets: &[&str]) -> Self {
        Self {
            pattern: pattern.into(),
            widgets: widgets.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Checks that the pattern uses the restricted syntax.
    ///
    /// # Errors
    ///
    /// Returns an error for empty patterns and for wildcard forms other
    /// than a trailing `/**` or the bare `**`.
    pub fn validate(&self) -> Result<(), PatternError> {
        validate_pattern(&self.pattern)
    }
}

/// Invalid sidebar pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern is empty.
    #[error("empty sidebar pattern")]
    Empty,
    /// The pattern uses a wildcard form outside the restricted syntax.
    #[error("unsupported wildcard in sidebar pattern: {0}")]
    UnsupportedWildcard(String),
}

/// Checks a pattern against the restricted syntax.
pub fn validate_pattern(pattern: &str) -> Result<(), PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    if pattern == "**" {
        return Ok(());
    }
    let literal = pattern.strip_suffix("/**").unwrap_or(pattern);
    if literal.chars().any(|c| matches!(c, '*' | '?' | '[')) {
        return Err(PatternError::UnsupportedWildcard(pattern.to_string()));
    }
    Ok(())
}

/// Returns the most specific rule matching `page`.
///
/// Literal rules outrank `prefix/**` rules, longer prefixes outrank
/// shorter ones, and `**` matches last. Among equally specific rules the
/// earliest in the list wins. Returns `None` only when no rule matches
/// (i.e. the list carries no `**` fallback).
pub fn resolve<'a>(rules: &'a [SidebarRule], page: &str) -> Option<&'a SidebarRule> {
    let mut best: Option<(usize, &SidebarRule)> = None;
    for rule in rules {
        if let Some(specificity) = match_specificity(&rule.pattern, page) {
            match best {
                Some((current, _)) if specificity <= current => {}
                _ => best = Some((specificity, rule)),
            }
        }
    }
    best.map(|(_, rule)| rule)
}

/// Matches one pattern against a page path.
///
/// Returns the match specificity, or `None` when the pattern does not
/// apply. A `prefix/**` pattern does not match the prefix itself.
fn match_specificity(pattern: &str, page: &str) -> Option<usize> {
    if pattern == "**" {
        return Some(0);
    }
    if let Some(prefix) = pattern.strip_suffix("/**") {
        let rest = page.strip_prefix(prefix)?;
        if rest.starts_with('/') {
            return Some(prefix.len() + 1);
        }
        return None;
    }
    if pattern == page {
        return Some(usize::MAX);
    }
    None
}

/// The stock sidebar layout.
///
/// The postcard widget appears on individual blog entries and not on the
/// top-level blog listing.
pub fn stock_rules() -> Vec<SidebarRule> {
    vec![
        SidebarRule::new(
            "**",
            &[
                "side_header.html",
                "custom_tagcloud.html",
                "custom_archives.html",
                "socials.html",
            ],
        ),
        SidebarRule::new(
            "content/blog",
            &[
                "side_header.html",
                "custom_tagcloud.html",
                "custom_archives.html",
                "socials.html",
            ],
        ),
        SidebarRule::new(
            "content/blog/**",
            &[
                "side_header.html",
                "postcard.html",
                "recentposts.html",
                "custom_archives.html",
                "socials.html",
            ],
        ),
    ]
}
