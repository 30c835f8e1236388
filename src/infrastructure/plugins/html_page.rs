use crate::core::models::{
    BuildMode, HtmlMinifyOptions, InjectTarget, OutputFile, PluginSpec, TemplatePage,
};
use crate::core::plugin::{Plugin, PluginContext};
use crate::utils::{KumuError, Logger, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

static HTML_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static INTER_TAG_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r">\s+<").unwrap());

/// Generates one HTML page from a template: injects the bundle tags and,
/// in production, strips comments and collapses inter-tag whitespace.
/// Template logic itself is compiled by the external template loader; the
/// page source is taken as markup here.
pub struct HtmlPagePlugin {
    template_root: PathBuf,
    page: TemplatePage,
    inject: InjectTarget,
    minify: Option<HtmlMinifyOptions>,
    script_href: String,
    style_href: String,
}

impl HtmlPagePlugin {
    pub fn new(
        template_root: PathBuf,
        page: TemplatePage,
        inject: InjectTarget,
        mode: BuildMode,
    ) -> Self {
        Self {
            template_root,
            page,
            inject,
            minify: mode.html_minify(),
            script_href: mode.script_bundle_filename(),
            style_href: mode.style_bundle_filename(),
        }
    }

    /// Bundle hrefs are output-root-relative; pages in subdirectories need
    /// a matching number of parent hops
    fn asset_prefix(&self) -> String {
        let depth = self.page.filename.matches('/').count();
        "../".repeat(depth)
    }

    fn render(&self, template: &str) -> String {
        let prefix = self.asset_prefix();
        let link = format!(
            "<link rel=\"stylesheet\" href=\"{}{}\">",
            prefix, self.style_href
        );
        let script = format!("<script src=\"{}{}\"></script>", prefix, self.script_href);

        let mut html = inject_before(template, "</head>", &link);
        html = match self.inject {
            InjectTarget::Head => inject_before(&html, "</head>", &script),
            InjectTarget::Body => inject_before(&html, "</body>", &script),
        };

        if let Some(options) = self.minify {
            html = minify_html(&html, options);
        }

        html
    }
}

impl Plugin for HtmlPagePlugin {
    fn name(&self) -> &str {
        "html-page"
    }

    fn spec(&self) -> PluginSpec {
        PluginSpec::HtmlPage {
            template: self.page.template.clone(),
            filename: self.page.filename.clone(),
            inject: self.inject,
            minify: self.minify,
        }
    }

    fn emit(&self, context: &PluginContext) -> Result<Vec<OutputFile>> {
        let template_path = self.template_root.join(&self.page.template);
        let source = std::fs::read_to_string(&template_path).map_err(|e| {
            KumuError::template_at(format!("failed to read template: {}", e), template_path)
        })?;

        let html = self.render(&source);
        Logger::debug(&format!(
            "📄 Generated {} from {}",
            self.page.filename,
            self.page.template.display()
        ));

        Ok(vec![OutputFile {
            path: context.output_root().join(&self.page.filename),
            size: html.len(),
            content: html,
        }])
    }
}

/// Insert `tag` immediately before the first occurrence of `closing`,
/// appending at the end when the template lacks the closing tag
fn inject_before(html: &str, closing: &str, tag: &str) -> String {
    match html.find(closing) {
        Some(idx) => format!("{}{}\n{}", &html[..idx], tag, &html[idx..]),
        None => format!("{}\n{}\n", html.trim_end(), tag),
    }
}

fn minify_html(html: &str, options: HtmlMinifyOptions) -> String {
    let mut out = html.to_string();

    if options.remove_comments {
        out = HTML_COMMENT.replace_all(&out, "").into_owned();
    }
    if options.collapse_whitespace {
        out = INTER_TAG_WHITESPACE.replace_all(&out, "><").into_owned();
        out = out.trim().to_string();
    }

    out
}
