use crate::utils::KumuError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Output subpath for the script bundle
pub const SCRIPT_BUNDLE_DIR: &str = "assets/javascript";
/// Output subpath for the stylesheet bundle
pub const STYLE_BUNDLE_DIR: &str = "assets/stylesheet";
/// Output subpath for copied static images
pub const IMAGE_BUNDLE_DIR: &str = "assets/images";

/// Placeholder the downstream bundler substitutes with a digest of the
/// artifact contents
pub const CONTENT_HASH_TOKEN: &str = "[contenthash]";

/// Template files with this name prefix are shared partials, not pages
pub const PARTIAL_PREFIX: char = '_';

/// Build mode selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }

    /// Script bundle output name. Hash-qualified in production for
    /// long-term caching, fixed in development.
    pub fn script_bundle_filename(self) -> String {
        match self {
            BuildMode::Development => format!("{}/bundle.js", SCRIPT_BUNDLE_DIR),
            BuildMode::Production => {
                format!("{}/bundle.{}.js", SCRIPT_BUNDLE_DIR, CONTENT_HASH_TOKEN)
            }
        }
    }

    /// Stylesheet bundle output name, same naming policy as scripts
    pub fn style_bundle_filename(self) -> String {
        match self {
            BuildMode::Development => format!("{}/bundle.css", STYLE_BUNDLE_DIR),
            BuildMode::Production => {
                format!("{}/bundle.{}.css", STYLE_BUNDLE_DIR, CONTENT_HASH_TOKEN)
            }
        }
    }

    pub fn source_maps(self) -> SourceMapPolicy {
        match self {
            BuildMode::Development => SourceMapPolicy::Full,
            BuildMode::Production => SourceMapPolicy::Off,
        }
    }

    /// Production adds the es5 legacy fallback profile
    pub fn compile_targets(self) -> Vec<CompileTarget> {
        match self {
            BuildMode::Development => vec![CompileTarget::Web],
            BuildMode::Production => vec![CompileTarget::Web, CompileTarget::Es5],
        }
    }

    pub fn optimization(self) -> OptimizationSpec {
        match self {
            BuildMode::Development => OptimizationSpec {
                minimize: false,
                ecma_target: None,
            },
            BuildMode::Production => OptimizationSpec {
                minimize: true,
                ecma_target: Some(2020),
            },
        }
    }

    pub fn html_minify(self) -> Option<HtmlMinifyOptions> {
        match self {
            BuildMode::Development => None,
            BuildMode::Production => Some(HtmlMinifyOptions {
                collapse_whitespace: true,
                remove_comments: true,
            }),
        }
    }
}

impl std::str::FromStr for BuildMode {
    type Err = KumuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            other => Err(KumuError::InvalidMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filesystem layout of the project being configured
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    /// Project root directory
    pub root: PathBuf,
    /// Template directory, relative to root
    pub template_dir: PathBuf,
    /// Template file extension (without the dot)
    pub template_ext: String,
    /// Script entry point handed to the bundler
    pub entry: String,
    /// Static image directory, relative to root
    pub image_dir: PathBuf,
    /// Output directory, relative to root
    pub outdir: PathBuf,
    /// Dev server port
    pub port: u16,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            template_dir: PathBuf::from("src/ejs"),
            template_ext: "ejs".to_string(),
            entry: "./src/js/main".to_string(),
            image_dir: PathBuf::from("src/images"),
            outdir: PathBuf::from("public"),
            port: 8080,
        }
    }
}

impl ProjectPaths {
    pub fn template_root(&self) -> PathBuf {
        self.root.join(&self.template_dir)
    }

    pub fn image_root(&self) -> PathBuf {
        self.root.join(&self.image_dir)
    }

    pub fn output_root(&self) -> PathBuf {
        self.root.join(&self.outdir)
    }
}

/// One discovered page template and its destination filename
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplatePage {
    /// Template path relative to the template root
    pub template: PathBuf,
    /// Destination filename relative to the output root
    pub filename: String,
}

impl TemplatePage {
    /// Destination filename is the template path with its extension
    /// swapped for "html"; subdirectories are preserved, so filenames stay
    /// unique as long as template paths are.
    pub fn from_template(relative: &Path) -> Self {
        let filename = relative
            .with_extension("html")
            .to_string_lossy()
            .replace('\\', "/");
        Self {
            template: relative.to_path_buf(),
            filename,
        }
    }

    /// Whether a template file is a shared partial rather than a page
    pub fn is_partial(relative: &Path) -> bool {
        relative
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with(PARTIAL_PREFIX))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapPolicy {
    Full,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompileTarget {
    Web,
    Es5,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationSpec {
    pub minimize: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecma_target: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSpec {
    /// Absolute output directory
    pub path: PathBuf,
    /// Script bundle filename relative to the output directory
    pub script_filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevServerSpec {
    pub port: u16,
    /// Directory served as static content
    pub static_root: PathBuf,
}

/// A single loader in a module rule pipeline. Loaders are directives for
/// the downstream bundler; kumu does not run them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "loader", rename_all = "kebab-case")]
pub enum LoaderSpec {
    TemplateCompiler,
    StyleExtract,
    Css { url: bool, source_map: bool },
    PostcssAutoprefix { grid: bool },
    Sass,
    Transpile {
        presets: Vec<String>,
        plugins: Vec<String>,
    },
    Lint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRule {
    /// File extension this rule applies to
    pub test: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    /// Run before the normal loaders for the same files
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub enforce_pre: bool,
    /// Applied right-to-left by the bundler, declared here in rule order
    pub pipeline: Vec<LoaderSpec>,
}

impl ModuleRule {
    pub fn new(test: &str, pipeline: Vec<LoaderSpec>) -> Self {
        Self {
            test: test.to_string(),
            exclude: Vec::new(),
            enforce_pre: false,
            pipeline,
        }
    }

    pub fn excluding(mut self, pattern: &str) -> Self {
        self.exclude.push(pattern.to_string());
        self
    }

    pub fn pre(mut self) -> Self {
        self.enforce_pre = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HtmlMinifyOptions {
    pub collapse_whitespace: bool,
    pub remove_comments: bool,
}

/// Where generated bundle tags are injected into a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectTarget {
    Head,
    Body,
}

/// Declarative description of one assembled plugin, in registration order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginSpec {
    /// Remove stale bundle subtrees before the build
    CleanOutput { patterns: Vec<String> },
    /// Extract compiled styles into a standalone bundle
    CssExtract { filename: String },
    /// Force generated pages onto disk even while serving from memory
    HtmlDiskWrite,
    /// Copy static images into the output tree
    CopyAssets { from: PathBuf, to: String },
    /// Generate one HTML page from a template
    HtmlPage {
        template: PathBuf,
        filename: String,
        inject: InjectTarget,
        #[serde(skip_serializing_if = "Option::is_none")]
        minify: Option<HtmlMinifyOptions>,
    },
}

/// Complete configuration handed to the downstream bundler
#[derive(Debug, Clone, Serialize)]
pub struct BundlerConfig {
    pub mode: BuildMode,
    pub entry: String,
    pub output: OutputSpec,
    pub devtool: SourceMapPolicy,
    pub resolve_extensions: Vec<String>,
    pub watch_ignore: Vec<String>,
    pub optimization: OptimizationSpec,
    pub module_rules: Vec<ModuleRule>,
    pub targets: Vec<CompileTarget>,
    pub dev_server: DevServerSpec,
    pub plugins: Vec<PluginSpec>,
}

impl BundlerConfig {
    /// HTML page directives, in assembly order
    pub fn html_pages(&self) -> impl Iterator<Item = &PluginSpec> {
        self.plugins
            .iter()
            .filter(|p| matches!(p, PluginSpec::HtmlPage { .. }))
    }
}

/// Result of executing the glue plugins for one build
#[derive(Debug, Default)]
pub struct BuildResult {
    pub pages_emitted: usize,
    pub output_files: Vec<OutputFile>,
    pub build_time: std::time::Duration,
    pub success: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct OutputFile {
    pub path: PathBuf,
    pub content: String,
    pub size: usize,
}
