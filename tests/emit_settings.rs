//! Integration tests for configuration loading and settings emission.

use std::fs;

use tempfile::TempDir;

use sitetool::ctx::SiteContext;
use sitetool::site::config::SiteConfig;

const SITE_TOML: &str = r#"
extensions = ["markdown_parser", "diagrams", "blog"]

[project]
title = "Field Notes"
author = "Docs Team"

[blog]
base_url = "https://docs.example.org"

[diagram.locator.SourceRelative]
jar_name = "plantuml.jar"
"#;

/// Every setting name the external renderer reads.
const RENDERER_KEYS: &[&str] = &[
    "project",
    "copyright",
    "author",
    "extensions",
    "templates_path",
    "exclude_patterns",
    "pygments_style",
    "source_suffix",
    "html_theme",
    "html_theme_path",
    "html_context",
    "html_sidebars",
    "html_show_sourcelink",
    "html_theme_options",
    "html_static_path",
    "html_css_files",
    "html_js_files",
    "blog_baseurl",
    "blog_title",
    "blog_path",
    "blog_post_pattern",
    "fontawesome_included",
    "post_redirect_refresh",
    "post_auto_image",
    "post_auto_excerpt",
    "disqus_shortname",
    "plantuml",
    "plantuml_output_format",
];

fn prepared_context(dir: &TempDir, year: i32) -> SiteContext {
    let mut ctx = SiteContext::new(dir.path(), year);
    ctx.prepare_site_config(None).expect("Failed to load config");
    ctx
}

#[test]
fn emits_every_renderer_setting() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join(".site.toml"), SITE_TOML).expect("Failed to write config");

    let ctx = prepared_context(&dir, 2026);
    let settings = ctx.resolve_settings().expect("Failed to resolve settings");

    assert_eq!(settings.project, "Field Notes");
    assert_eq!(settings.copyright, "2026, Docs Team");
    assert_eq!(
        settings.extensions,
        vec!["myst_parser", "sphinxcontrib.plantuml", "ablog"]
    );
    assert_eq!(settings.blog_baseurl, "https://docs.example.org");
    assert_eq!(
        settings.plantuml,
        format!("java -jar {}/../plantuml.jar", dir.path().display())
    );

    let value = serde_json::to_value(&settings).expect("Failed to serialize settings");
    let object = value.as_object().expect("settings must serialize to an object");
    for key in RENDERER_KEYS {
        assert!(object.contains_key(*key), "missing renderer setting: {key}");
    }
}

#[test]
fn copyright_tracks_the_build_year() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let this_year = prepared_context(&dir, 2026)
        .resolve_settings()
        .expect("Failed to resolve settings");
    let last_year = prepared_context(&dir, 2025)
        .resolve_settings()
        .expect("Failed to resolve settings");

    assert!(this_year.copyright.contains("2026"));
    assert_ne!(this_year.copyright, last_year.copyright);
}

#[test]
fn stock_config_round_trips_through_init_output() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(".site.toml");

    let content =
        toml::to_string_pretty(&SiteConfig::default()).expect("Failed to serialize config");
    fs::write(&path, content).expect("Failed to write config");

    let reloaded = SiteConfig::load(&path).expect("Failed to reload config");
    assert_eq!(reloaded, SiteConfig::default());
}
