use crate::core::interfaces::AssemblyService;
use crate::core::models::BuildMode;
use crate::core::services::KumuAssemblyService;
use crate::utils::{KumuError, Logger, Result};
use axum::Router;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Static dev server over the output directory, with a watcher that
/// re-runs the development build when sources change. Pages are always on
/// disk (disk-write plugin), so serving straight from the output tree is
/// enough.
pub struct DevServer {
    service: Arc<KumuAssemblyService>,
    watch_root: PathBuf,
    static_root: PathBuf,
    port: u16,
}

impl DevServer {
    pub fn new(service: Arc<KumuAssemblyService>) -> Self {
        let paths = service.paths().clone();
        Self {
            watch_root: paths.root.join("src"),
            static_root: paths.output_root(),
            port: paths.port,
            service,
        }
    }

    pub async fn run(self) -> Result<()> {
        // Initial build so the served tree exists
        self.service.build(BuildMode::Development).await?;

        let rebuild_task = self.spawn_rebuild_loop()?;

        let app = Router::new().fallback_service(ServeDir::new(self.static_root.clone()));
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", self.port))
            .await
            .map_err(|e| KumuError::server(format!("failed to bind port {}: {}", self.port, e)))?;

        tracing::info!("🌐 Local: http://127.0.0.1:{}", self.port);
        tracing::info!("📁 Serving {}", self.static_root.display());
        tracing::info!("👀 Watching {}", self.watch_root.display());
        tracing::info!("Press Ctrl+C to stop the server");

        tokio::select! {
            result = axum::serve(listener, app) => {
                result.map_err(|e| KumuError::server(e.to_string()))?;
            }
            _ = rebuild_task => {
                Logger::warn("File watcher stopped");
            }
        }

        Ok(())
    }

    fn spawn_rebuild_loop(&self) -> Result<tokio::task::JoinHandle<()>> {
        if !self.watch_root.is_dir() {
            Logger::warn(&format!(
                "Watch root {} does not exist, rebuild-on-change disabled",
                self.watch_root.display()
            ));
            return Ok(tokio::spawn(std::future::pending()));
        }

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<PathBuf>();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                if matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                ) {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            }
        })
        .map_err(|e| KumuError::server(format!("failed to initialize watcher: {}", e)))?;

        watcher
            .watch(&self.watch_root, RecursiveMode::Recursive)
            .map_err(|e| {
                KumuError::server(format!(
                    "cannot watch {}: {}",
                    self.watch_root.display(),
                    e
                ))
            })?;

        let service = self.service.clone();
        Ok(tokio::spawn(async move {
            // The watcher must stay alive as long as the loop runs
            let _watcher = watcher;

            while let Some(path) = rx.recv().await {
                // Editors write several events per save; absorb the burst
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
                while rx.try_recv().is_ok() {}

                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("source")
                    .to_string();
                Logger::rebuilding(&name);

                if let Err(e) = service.build(BuildMode::Development).await {
                    Logger::error(&format!("Rebuild failed: {}", e));
                }
            }
        }))
    }
}
