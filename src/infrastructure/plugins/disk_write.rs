use crate::core::models::{BuildResult, PluginSpec};
use crate::core::plugin::{Plugin, PluginContext};
use crate::utils::{KumuError, Logger, Result};

/// Flushes every generated page to disk unconditionally, so pages are
/// inspectable between builds even while the dev server serves them.
pub struct HtmlDiskWritePlugin;

impl HtmlDiskWritePlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlDiskWritePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for HtmlDiskWritePlugin {
    fn name(&self) -> &str {
        "html-disk-write"
    }

    fn spec(&self) -> PluginSpec {
        PluginSpec::HtmlDiskWrite
    }

    fn on_build_end(&self, _context: &PluginContext, result: &BuildResult) -> Result<()> {
        for file in &result.output_files {
            if let Some(parent) = file.path.parent() {
                std::fs::create_dir_all(parent).map_err(KumuError::Io)?;
            }
            std::fs::write(&file.path, &file.content).map_err(KumuError::Io)?;
        }

        Logger::debug(&format!(
            "💾 Wrote {} generated pages to disk",
            result.output_files.len()
        ));
        Ok(())
    }
}
