//! # sitetool
//!
//! A toolkit for managing the build configuration of static
//! documentation/blog sites.
//!
//! `sitetool` owns the settings consumed by an external documentation
//! renderer: project metadata, extension lists, theme selection, sidebar
//! routing, and the invocation command for an external diagram renderer.
//! It loads a `.site.toml` configuration, resolves it into the complete
//! settings mapping, and emits that mapping for the renderer to consume.
//!
//! ## Features
//!
//! - **Typed Configuration**: TOML/JSON site configuration with defaults
//!   and a generated JSON Schema
//! - **Settings Resolution**: assembles the flat settings mapping the
//!   external renderer reads, including the build-year copyright line
//! - **Sidebar Routing**: most-specific-match pattern rules selecting the
//!   widget stack rendered on each page
//! - **Diagram Tool Locator**: computes the shell command that invokes the
//!   external diagram renderer
//! - **Checks**: declarative validations with colored diagnostics
//!
//! ## Modules
//!
//! - [`ctx`] - Build context and configuration loading
//! - [`site`] - Configuration types and the settings resolver
//! - [`sidebar`] - Sidebar routing rules and matching
//! - [`diagram`] - Diagram renderer location strategies
//! - [`extensions`] - Registry of known renderer extensions
//! - [`check`] - Configuration validations
//! - [`utils`] - Placeholder expansion helpers

/// Build context and configuration loading.
pub mod ctx;

/// Configuration types and the settings resolver.
///
/// Contains the `.site.toml` configuration structures and the resolver
/// that turns them into the settings mapping handed to the external
/// renderer.
pub mod site;

/// Sidebar routing rules and matching.
pub mod sidebar;

/// Diagram renderer location strategies.
pub mod diagram;

/// Registry of known renderer extensions.
pub mod extensions;

/// Configuration validations.
pub mod check;

/// Placeholder expansion helpers.
pub mod utils;

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;
