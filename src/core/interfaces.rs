use crate::core::models::*;
use crate::utils::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// File system operations interface
#[async_trait]
pub trait FileSystemService: Send + Sync {
    /// Recursively collect template files under `root` with the given
    /// extension, as paths relative to `root`, sorted. A missing or
    /// unreadable root yields an empty list, not an error.
    async fn scan_templates(&self, root: &Path, ext: &str) -> Result<Vec<PathBuf>>;
    async fn read_file(&self, path: &Path) -> Result<String>;
    async fn write_file(&self, path: &Path, content: &str) -> Result<()>;
    async fn create_directory(&self, path: &Path) -> Result<()>;
    fn file_exists(&self, path: &Path) -> bool;
}

/// Configuration assembly interface
#[async_trait]
pub trait AssemblyService: Send + Sync {
    /// Produce the complete bundler configuration for a mode
    async fn assemble(&self, mode: BuildMode) -> Result<BundlerConfig>;
    /// Assemble, then execute the glue plugins (clean, page emission,
    /// disk write, asset copy) against the filesystem
    async fn build(&self, mode: BuildMode) -> Result<BuildResult>;
}
