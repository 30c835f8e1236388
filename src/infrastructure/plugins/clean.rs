use crate::core::models::PluginSpec;
use crate::core::plugin::{Plugin, PluginContext};
use crate::utils::{KumuError, Logger, Result};

/// Removes stale bundle subtrees from the output directory before the
/// build. Only the configured patterns are touched, so generated pages and
/// copied assets from older builds survive until overwritten.
pub struct CleanOutputPlugin {
    patterns: Vec<String>,
}

impl CleanOutputPlugin {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }
}

impl Plugin for CleanOutputPlugin {
    fn name(&self) -> &str {
        "clean-output"
    }

    fn spec(&self) -> PluginSpec {
        PluginSpec::CleanOutput {
            patterns: self.patterns.clone(),
        }
    }

    fn on_build_start(&self, context: &PluginContext) -> Result<()> {
        for pattern in &self.patterns {
            let target = context.output_root().join(pattern);
            if target.is_dir() {
                std::fs::remove_dir_all(&target).map_err(KumuError::Io)?;
                Logger::debug(&format!("🧹 Removed {}", target.display()));
            }
        }
        Ok(())
    }
}
