use crate::core::interfaces::FileSystemService;
use crate::utils::{KumuError, Logger, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct TokioFileSystemService;

#[async_trait::async_trait]
impl FileSystemService for TokioFileSystemService {
    async fn scan_templates(&self, root: &Path, ext: &str) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();

        if !root.is_dir() {
            Logger::template_root_missing(&root.display().to_string());
            return Ok(found);
        }

        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            let mut entries = match fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) => {
                    Logger::debug(&format!("Skipping unreadable directory {}: {}", dir.display(), e));
                    continue;
                }
            };

            while let Some(entry) = entries.next_entry().await.map_err(KumuError::Io)? {
                let path = entry.path();

                if path.is_dir() {
                    pending.push(path);
                    continue;
                }

                let matches = path
                    .extension()
                    .and_then(|s| s.to_str())
                    .map(|e| e.eq_ignore_ascii_case(ext))
                    .unwrap_or(false);

                if matches {
                    if let Ok(relative) = path.strip_prefix(root) {
                        found.push(relative.to_path_buf());
                    }
                }
            }
        }

        found.sort();
        Ok(found)
    }

    async fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).await.map_err(KumuError::Io)
    }

    async fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            self.create_directory(parent).await?;
        }

        fs::write(path, content).await.map_err(KumuError::Io)
    }

    async fn create_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).await.map_err(KumuError::Io)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
