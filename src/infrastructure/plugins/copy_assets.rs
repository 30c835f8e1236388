use crate::core::models::{BuildResult, PluginSpec};
use crate::core::plugin::{Plugin, PluginContext};
use crate::utils::{KumuError, Logger, Result};
use std::path::{Path, PathBuf};

/// Mirrors the static image directory into the output tree. Image
/// contents are opaque; files are copied byte-for-byte.
pub struct CopyAssetsPlugin {
    from: PathBuf,
    to: String,
}

impl CopyAssetsPlugin {
    /// `from` is an absolute source directory, `to` is relative to the
    /// output root
    pub fn new(from: PathBuf, to: String) -> Self {
        Self { from, to }
    }
}

impl Plugin for CopyAssetsPlugin {
    fn name(&self) -> &str {
        "copy-assets"
    }

    fn spec(&self) -> PluginSpec {
        PluginSpec::CopyAssets {
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }

    fn on_build_end(&self, context: &PluginContext, _result: &BuildResult) -> Result<()> {
        if !self.from.is_dir() {
            Logger::debug(&format!(
                "No static asset directory at {}, copy skipped",
                self.from.display()
            ));
            return Ok(());
        }

        let dest = context.output_root().join(&self.to);
        let copied = copy_tree(&self.from, &dest).map_err(KumuError::Io)?;
        Logger::info(&format!("🖼  Copied {} static assets to {}", copied, self.to));
        Ok(())
    }
}

fn copy_tree(src: &Path, dest: &Path) -> std::io::Result<usize> {
    std::fs::create_dir_all(dest)?;

    let mut copied = 0;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let source = entry.path();
        let target = dest.join(entry.file_name());

        if source.is_dir() {
            copied += copy_tree(&source, &target)?;
        } else {
            std::fs::copy(&source, &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}
