// Plugin host for the assembled configuration
// Each plugin declares itself (spec) and owns the glue half of its work

use crate::core::models::{BuildResult, BundlerConfig, OutputFile, PluginSpec};
use crate::utils::{Logger, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// Context provided to plugins during execution
#[derive(Debug, Clone)]
pub struct PluginContext {
    /// Project root directory
    pub root: PathBuf,
    /// The assembled configuration
    pub config: BundlerConfig,
}

impl PluginContext {
    pub fn new(root: PathBuf, config: BundlerConfig) -> Self {
        Self { root, config }
    }

    /// Absolute output directory
    pub fn output_root(&self) -> &PathBuf {
        &self.config.output.path
    }
}

/// A plugin assembled into the configuration.
///
/// Every plugin contributes a declarative spec; plugins whose work is
/// plain filesystem glue also implement the hooks:
/// - `on_build_start`: before anything is generated (cleaning)
/// - `emit`: contribute generated output files (page generation)
/// - `on_build_end`: after emission (disk write, asset copy)
pub trait Plugin: Send + Sync {
    /// Unique name for this plugin
    fn name(&self) -> &str;

    /// Declarative description embedded in the bundler configuration
    fn spec(&self) -> PluginSpec;

    fn on_build_start(&self, _context: &PluginContext) -> Result<()> {
        Ok(())
    }

    fn emit(&self, _context: &PluginContext) -> Result<Vec<OutputFile>> {
        Ok(Vec::new())
    }

    fn on_build_end(&self, _context: &PluginContext, _result: &BuildResult) -> Result<()> {
        Ok(())
    }
}

/// Manages plugin registration and execution
pub struct PluginManager {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    pub fn register(&mut self, plugin: Arc<dyn Plugin>) {
        self.plugins.push(plugin);
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Declarative specs of all registered plugins, in registration order
    pub fn specs(&self) -> Vec<PluginSpec> {
        self.plugins.iter().map(|p| p.spec()).collect()
    }

    pub fn on_build_start(&self, context: &PluginContext) -> Result<()> {
        for plugin in &self.plugins {
            plugin.on_build_start(context)?;
            Logger::plugin_applied(plugin.name());
        }
        Ok(())
    }

    /// Collect the output files contributed by all plugins,
    /// in registration order
    pub fn emit(&self, context: &PluginContext) -> Result<Vec<OutputFile>> {
        let mut output_files = Vec::new();
        for plugin in &self.plugins {
            output_files.extend(plugin.emit(context)?);
        }
        Ok(output_files)
    }

    pub fn on_build_end(&self, context: &PluginContext, result: &BuildResult) -> Result<()> {
        for plugin in &self.plugins {
            plugin.on_build_end(context, result)?;
        }
        Ok(())
    }
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::*;
    use std::path::Path;

    struct TestPlugin {
        name: String,
    }

    impl TestPlugin {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
            }
        }
    }

    impl Plugin for TestPlugin {
        fn name(&self) -> &str {
            &self.name
        }

        fn spec(&self) -> PluginSpec {
            PluginSpec::HtmlDiskWrite
        }

        fn emit(&self, context: &PluginContext) -> Result<Vec<OutputFile>> {
            Ok(vec![OutputFile {
                path: context.output_root().join(format!("{}.html", self.name)),
                content: self.name.clone(),
                size: self.name.len(),
            }])
        }
    }

    fn test_config() -> BundlerConfig {
        let mode = BuildMode::Development;
        BundlerConfig {
            mode,
            entry: "./src/js/main".to_string(),
            output: OutputSpec {
                path: PathBuf::from("/tmp/public"),
                script_filename: mode.script_bundle_filename(),
            },
            devtool: mode.source_maps(),
            resolve_extensions: vec![".js".to_string(), ".ts".to_string()],
            watch_ignore: vec!["node_modules".to_string()],
            optimization: mode.optimization(),
            module_rules: Vec::new(),
            targets: mode.compile_targets(),
            dev_server: DevServerSpec {
                port: 8080,
                static_root: PathBuf::from("/tmp/public"),
            },
            plugins: Vec::new(),
        }
    }

    #[test]
    fn test_plugin_manager_registration() {
        let mut manager = PluginManager::new();
        assert_eq!(manager.plugin_count(), 0);

        manager.register(Arc::new(TestPlugin::new("test1")));
        assert_eq!(manager.plugin_count(), 1);

        manager.register(Arc::new(TestPlugin::new("test2")));
        assert_eq!(manager.plugin_count(), 2);
    }

    #[test]
    fn test_emit_preserves_registration_order() {
        let mut manager = PluginManager::new();
        manager.register(Arc::new(TestPlugin::new("first")));
        manager.register(Arc::new(TestPlugin::new("second")));

        let context = PluginContext::new(PathBuf::from("/tmp"), test_config());
        let files = manager.emit(&context).unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, Path::new("/tmp/public/first.html"));
        assert_eq!(files[1].path, Path::new("/tmp/public/second.html"));
    }

    #[test]
    fn test_specs_in_registration_order() {
        let mut manager = PluginManager::new();
        manager.register(Arc::new(TestPlugin::new("a")));
        let specs = manager.specs();
        assert_eq!(specs, vec![PluginSpec::HtmlDiskWrite]);
    }
}
