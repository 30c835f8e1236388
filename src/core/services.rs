use crate::core::{
    interfaces::*,
    models::*,
    plugin::{PluginContext, PluginManager},
};
use crate::infrastructure::plugins::{
    CleanOutputPlugin, CopyAssetsPlugin, CssExtractPlugin, HtmlDiskWritePlugin, HtmlPagePlugin,
};
use crate::utils::{CompletionStats, KumuUI, Logger, OutputFileInfo, Result, Timer};
use std::sync::Arc;

/// Main configuration assembly implementation
pub struct KumuAssemblyService {
    fs_service: Arc<dyn FileSystemService>,
    paths: ProjectPaths,
}

impl KumuAssemblyService {
    pub fn new(fs_service: Arc<dyn FileSystemService>, paths: ProjectPaths) -> Self {
        Self { fs_service, paths }
    }

    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    /// Scan the template root and map every non-partial template to a page
    /// target. A missing or empty template root produces no targets.
    async fn discover_pages(&self) -> Result<Vec<TemplatePage>> {
        let template_root = self.paths.template_root();
        Logger::scanning_templates(&template_root.display().to_string());

        let templates = self
            .fs_service
            .scan_templates(&template_root, &self.paths.template_ext)
            .await?;

        let total = templates.len();
        let pages: Vec<TemplatePage> = templates
            .iter()
            .filter(|t| !TemplatePage::is_partial(t))
            .map(|t| TemplatePage::from_template(t))
            .collect();

        Logger::found_templates(pages.len(), total - pages.len());
        Ok(pages)
    }

    /// Shared plugins first, then one page plugin per template
    fn assemble_plugins(&self, mode: BuildMode, pages: &[TemplatePage]) -> PluginManager {
        let mut manager = PluginManager::new();

        manager.register(Arc::new(CleanOutputPlugin::new(vec![
            STYLE_BUNDLE_DIR.to_string(),
            SCRIPT_BUNDLE_DIR.to_string(),
        ])));
        manager.register(Arc::new(CssExtractPlugin::new(mode.style_bundle_filename())));
        manager.register(Arc::new(HtmlDiskWritePlugin::new()));
        manager.register(Arc::new(CopyAssetsPlugin::new(
            self.paths.image_root(),
            IMAGE_BUNDLE_DIR.to_string(),
        )));

        for page in pages {
            manager.register(Arc::new(HtmlPagePlugin::new(
                self.paths.template_root(),
                page.clone(),
                InjectTarget::Body,
                mode,
            )));
        }

        manager
    }

    /// Loader pipeline declarations for the downstream bundler
    fn module_rules() -> Vec<ModuleRule> {
        vec![
            ModuleRule::new("ejs", vec![LoaderSpec::TemplateCompiler]),
            ModuleRule::new(
                "scss",
                vec![
                    LoaderSpec::StyleExtract,
                    LoaderSpec::Css {
                        url: false,
                        source_map: true,
                    },
                    LoaderSpec::PostcssAutoprefix { grid: true },
                    LoaderSpec::Sass,
                ],
            ),
            ModuleRule::new(
                "js",
                vec![LoaderSpec::Transpile {
                    presets: vec!["env".to_string(), "react".to_string()],
                    plugins: vec!["transform-runtime".to_string()],
                }],
            )
            .excluding("node_modules"),
            ModuleRule::new("js", vec![LoaderSpec::Lint])
                .excluding("node_modules")
                .pre(),
        ]
    }

    fn config_with(&self, mode: BuildMode, plugins: Vec<PluginSpec>) -> BundlerConfig {
        BundlerConfig {
            mode,
            entry: self.paths.entry.clone(),
            output: OutputSpec {
                path: self.paths.output_root(),
                script_filename: mode.script_bundle_filename(),
            },
            devtool: mode.source_maps(),
            resolve_extensions: vec![".js".to_string(), ".ts".to_string()],
            watch_ignore: vec!["node_modules".to_string()],
            optimization: mode.optimization(),
            module_rules: Self::module_rules(),
            targets: mode.compile_targets(),
            dev_server: DevServerSpec {
                port: self.paths.port,
                static_root: self.paths.output_root(),
            },
            plugins,
        }
    }
}

#[async_trait::async_trait]
impl AssemblyService for KumuAssemblyService {
    async fn assemble(&self, mode: BuildMode) -> Result<BundlerConfig> {
        let _timer = Timer::start("configuration assembly");
        Logger::assembling(mode.as_str());

        let pages = self.discover_pages().await?;
        let manager = self.assemble_plugins(mode, &pages);

        Ok(self.config_with(mode, manager.specs()))
    }

    async fn build(&self, mode: BuildMode) -> Result<BuildResult> {
        let ui = KumuUI::new();
        ui.show_banner();

        let build_start = std::time::Instant::now();

        let pages = self.discover_pages().await?;
        let manager = self.assemble_plugins(mode, &pages);
        let config = self.config_with(mode, manager.specs());

        self.fs_service.create_directory(&config.output.path).await?;

        let outdir = self.paths.outdir.display().to_string();
        let context = PluginContext::new(self.paths.root.clone(), config);

        manager.on_build_start(&context)?;
        let output_files = manager.emit(&context)?;

        let mut result = BuildResult {
            pages_emitted: output_files.len(),
            output_files,
            build_time: std::time::Duration::default(),
            success: true,
            errors: Vec::new(),
        };

        manager.on_build_end(&context, &result)?;
        result.build_time = build_start.elapsed();

        ui.show_completion(CompletionStats {
            outdir: outdir.clone(),
            output_files: result
                .output_files
                .iter()
                .map(|f| OutputFileInfo {
                    name: f
                        .path
                        .strip_prefix(context.output_root())
                        .unwrap_or(&f.path)
                        .to_string_lossy()
                        .to_string(),
                    size: f.size,
                })
                .collect(),
        });

        Logger::build_complete(result.pages_emitted, result.build_time, &outdir);

        Ok(result)
    }
}
