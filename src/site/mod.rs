//! Configuration resolution for the external renderer.
//!
//! This module turns a [`SiteConfig`] plus a [`SiteContext`] into the
//! flat [`RendererSettings`] mapping the external documentation renderer
//! consumes, running the setup hook (static asset registration) along the
//! way.
//!
//! Resolution is a pure function of the context and the configuration:
//! the same source directory and build year always produce the same
//! settings.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ctx::SiteContext;
use crate::site::config::SiteConfig;

/// Site configuration types and structures.
pub mod config;

/// Collects static assets registered during setup.
///
/// Registration order is preserved; duplicate registrations are dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssetRegistry {
    css: Vec<String>,
    js: Vec<String>,
}

impl AssetRegistry {
    /// Registers a CSS file, relative to a static asset directory.
    pub fn add_css_file(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.css.contains(&path) {
            self.css.push(path);
        }
    }

    /// Registers a JS file, relative to a static asset directory.
    pub fn add_js_file(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.js.contains(&path) {
            self.js.push(path);
        }
    }

    /// Registered CSS files, in registration order.
    pub fn css_files(&self) -> &[String] {
        &self.css
    }

    /// Registered JS files, in registration order.
    pub fn js_files(&self) -> &[String] {
        &self.js
    }
}

/// The complete settings mapping handed to the external renderer.
///
/// Serializes to a JSON object whose keys are the renderer's setting
/// names. Constructed once per resolution run and read-only afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RendererSettings {
    /// Project title.
    pub project: String,
    /// Copyright line, embedding the build year unless overridden.
    pub copyright: String,
    /// Author name.
    pub author: String,
    /// Renderer module names of the enabled extensions, in load order.
    pub extensions: Vec<String>,
    /// Template search directories.
    pub templates_path: Vec<String>,
    /// Source paths to skip.
    pub exclude_patterns: Vec<String>,
    /// Syntax highlighting style.
    pub pygments_style: String,
    /// Source suffix to format-name mapping.
    pub source_suffix: BTreeMap<String, String>,
    /// Theme identifier.
    pub html_theme: String,
    /// Theme search paths.
    pub html_theme_path: Vec<String>,
    /// Extra values exposed to page templates.
    pub html_context: BTreeMap<String, String>,
    /// Sidebar pattern to widget-list mapping.
    pub html_sidebars: BTreeMap<String, Vec<String>>,
    /// Whether pages link to their sources.
    pub html_show_sourcelink: bool,
    /// Theme-specific options.
    pub html_theme_options: BTreeMap<String, serde_json::Value>,
    /// Static asset directories.
    pub html_static_path: Vec<String>,
    /// CSS files registered during setup.
    pub html_css_files: Vec<String>,
    /// JS files registered during setup.
    pub html_js_files: Vec<String>,
    /// Base URL of the published site.
    pub blog_baseurl: String,
    /// Blog title.
    pub blog_title: String,
    /// Logical path of the generated blog listing.
    pub blog_path: String,
    /// Glob patterns selecting post source files.
    pub blog_post_pattern: Vec<String>,
    /// Whether the theme already ships Font Awesome.
    pub fontawesome_included: bool,
    /// Seconds before post redirect pages refresh.
    pub post_redirect_refresh: u32,
    /// Number of images lifted into post excerpts.
    pub post_auto_image: u32,
    /// Number of paragraphs lifted into post excerpts.
    pub post_auto_excerpt: u32,
    /// Disqus account name, if comments are enabled.
    pub disqus_shortname: Option<String>,
    /// Shell command invoking the diagram renderer.
    pub plantuml: String,
    /// Image format the diagram renderer produces.
    pub plantuml_output_format: String,
}

/// Runs the setup hook: registers the configured static assets.
pub fn setup(config: &SiteConfig, assets: &mut AssetRegistry) {
    for css in &config.html.extra_css {
        assets.add_css_file(css.clone());
    }
    for js in &config.html.extra_js {
        assets.add_js_file(js.clone());
    }
}

/// Resolves the complete renderer settings.
///
/// The build year and source directory come from `ctx`; nothing here
/// reads ambient process state. Placeholders (`${sourceFolder}`,
/// `${env:VAR}`) in the theme path and the diagram command are expanded.
pub fn resolve(ctx: &SiteContext, config: &SiteConfig) -> RendererSettings {
    let mut assets = AssetRegistry::default();
    setup(config, &mut assets);

    let copyright = match &config.project.copyright {
        Some(text) => text.clone(),
        None => format!("{}, {}", ctx.build_year, config.project.author),
    };

    let theme_path = match &config.html.theme_path {
        Some(path) => ctx.expand(path),
        None => {
            let fallback = ctx.source.join("_themes").join(&config.html.theme);
            format!("{}", fallback.display())
        }
    };

    let plantuml = ctx.expand(&config.diagram.locator.command(&ctx.source));
    debug!("diagram renderer command: {plantuml}");

    RendererSettings {
        project: config.project.title.clone(),
        copyright,
        author: config.project.author.clone(),
        extensions: config
            .extensions
            .iter()
            .map(|ext| ext.module_name().to_string())
            .collect(),
        templates_path: config.templates_path.clone(),
        exclude_patterns: config.exclude_patterns.clone(),
        pygments_style: config.pygments_style.clone(),
        source_suffix: config
            .source_suffix
            .iter()
            .map(|(suffix, format)| (suffix.clone(), format.as_str().to_string()))
            .collect(),
        html_theme: config.html.theme.clone(),
        html_theme_path: vec![theme_path],
        html_context: config.html.context.clone(),
        html_sidebars: config
            .html
            .sidebars
            .iter()
            .map(|rule| (rule.pattern.clone(), rule.widgets.clone()))
            .collect(),
        html_show_sourcelink: config.html.show_sourcelink,
        html_theme_options: config.html.theme_options.clone(),
        html_static_path: config.html.static_path.clone(),
        html_css_files: assets.css_files().to_vec(),
        html_js_files: assets.js_files().to_vec(),
        blog_baseurl: config.blog.base_url.clone(),
        blog_title: config.blog.title.clone(),
        blog_path: config.blog.path.clone(),
        blog_post_pattern: config.blog.post_patterns.clone(),
        fontawesome_included: config.blog.fontawesome_included,
        post_redirect_refresh: config.blog.post_redirect_refresh,
        post_auto_image: config.blog.post_auto_image,
        post_auto_excerpt: config.blog.post_auto_excerpt,
        disqus_shortname: config.blog.disqus_shortname.clone(),
        plantuml,
        plantuml_output_format: config.diagram.output_format.as_str().to_string(),
    }
}

impl SiteContext {
    /// Resolves the renderer settings from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Fails when no site configuration has been loaded.
    pub fn resolve_settings(&self) -> anyhow::Result<RendererSettings> {
        let config = self
            .site_config
            .as_ref()
            .ok_or_else(|| anyhow!("no site configuration loaded"))?;
        Ok(resolve(self, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::DiagramLocator;

    fn ctx(year: i32) -> SiteContext {
        SiteContext::new("/home/user/site/source", year)
    }

    #[test]
    fn test_copyright_embeds_build_year() {
        let mut config = SiteConfig::default();
        config.project.author = "Docs Team".to_string();

        let settings = resolve(&ctx(2026), &config);
        assert_eq!(settings.copyright, "2026, Docs Team");

        // Two builds in different years disagree on the copyright line.
        let earlier = resolve(&ctx(2025), &config);
        assert_ne!(settings.copyright, earlier.copyright);
    }

    #[test]
    fn test_explicit_copyright_wins() {
        let mut config = SiteConfig::default();
        config.project.copyright = Some("2019, Someone Else".to_string());
        let settings = resolve(&ctx(2026), &config);
        assert_eq!(settings.copyright, "2019, Someone Else");
    }

    #[test]
    fn test_extension_module_names_in_order() {
        let settings = resolve(&ctx(2026), &SiteConfig::default());
        assert_eq!(
            settings.extensions,
            vec!["myst_parser", "sphinx_panels", "sphinxcontrib.plantuml", "ablog"]
        );
    }

    #[test]
    fn test_stock_diagram_command() {
        let settings = resolve(&ctx(2026), &SiteConfig::default());
        assert_eq!(
            settings.plantuml,
            r#"java -jar "/usr/local/bin/plantuml.jar" -I/usr/src/plantuml/*"#
        );
        assert_eq!(settings.plantuml_output_format, "svg");
    }

    #[test]
    fn test_source_relative_diagram_command() {
        let mut config = SiteConfig::default();
        config.diagram.locator = DiagramLocator::SourceRelative {
            jar_name: "plantuml.jar".to_string(),
        };
        let settings = resolve(&ctx(2026), &config);
        assert_eq!(
            settings.plantuml,
            "java -jar /home/user/site/source/../plantuml.jar"
        );
    }

    #[test]
    fn test_theme_path_fallback() {
        let settings = resolve(&ctx(2026), &SiteConfig::default());
        assert_eq!(
            settings.html_theme_path,
            vec!["/home/user/site/source/_themes/pydata_sphinx_theme"]
        );
    }

    #[test]
    fn test_setup_registers_assets_once() {
        let mut config = SiteConfig::default();
        config.html.extra_css = vec![
            "css/custom.css".to_string(),
            "css/print.css".to_string(),
            "css/custom.css".to_string(),
        ];

        let mut assets = AssetRegistry::default();
        setup(&config, &mut assets);
        assert_eq!(assets.css_files(), ["css/custom.css", "css/print.css"]);
        assert!(assets.js_files().is_empty());
    }

    #[test]
    fn test_sidebars_mapping() {
        let settings = resolve(&ctx(2026), &SiteConfig::default());
        assert_eq!(settings.html_sidebars.len(), 3);
        assert!(settings.html_sidebars.contains_key("**"));
        assert_eq!(
            settings.html_sidebars["content/blog/**"][1],
            "postcard.html"
        );
    }
}
