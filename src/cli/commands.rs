use crate::core::{interfaces::AssemblyService, models::*, services::KumuAssemblyService};
use crate::infrastructure::{DevServer, TokioFileSystemService};
use crate::utils::{ConfigLoader, Logger, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "kumu")]
#[command(about = "Kumu - bundler configuration for template-driven static sites")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate pages and copy assets for the selected mode
    Build {
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        root: String,
        /// Build mode: development or production
        #[arg(short, long, default_value = "development")]
        mode: String,
    },
    /// Start the development server
    Dev {
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        root: String,
        /// Port to serve on (overrides kumu.config.json)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the assembled bundler configuration as JSON
    Config {
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        root: String,
        /// Build mode: development or production
        #[arg(short, long, default_value = "development")]
        mode: String,
    },
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self) -> Result<()> {
        // Initialize logging
        Logger::init();

        let cli = Cli::parse();

        match cli.command {
            Commands::Build { root, mode } => self.handle_build_command(&root, &mode).await,
            Commands::Dev { root, port } => self.handle_dev_command(&root, port).await,
            Commands::Config { root, mode } => self.handle_config_command(&root, &mode).await,
        }
    }

    fn create_service(&self, root: &str, port: Option<u16>) -> Result<KumuAssemblyService> {
        let root = PathBuf::from(root);
        let file_config = ConfigLoader::load_from_file(&root)?;
        let paths = ConfigLoader::merge_with_cli(file_config, root, port);

        Ok(KumuAssemblyService::new(
            Arc::new(TokioFileSystemService),
            paths,
        ))
    }

    async fn handle_build_command(&self, root: &str, mode: &str) -> Result<()> {
        let mode: BuildMode = mode.parse()?;
        let service = self.create_service(root, None)?;

        let result = service.build(mode).await?;

        if !result.success {
            for error in &result.errors {
                Logger::error(error);
            }
        }

        Ok(())
    }

    async fn handle_dev_command(&self, root: &str, port: Option<u16>) -> Result<()> {
        let service = Arc::new(self.create_service(root, port)?);

        tracing::info!("🚀 Kumu - Development Server");
        tracing::info!("═══════════════════════════════════════");
        tracing::info!("📁 Root: {}", root);
        tracing::info!("🌐 Port: {}", service.paths().port);
        tracing::info!("");

        DevServer::new(service).run().await
    }

    async fn handle_config_command(&self, root: &str, mode: &str) -> Result<()> {
        let mode: BuildMode = mode.parse()?;
        let service = self.create_service(root, None)?;

        let config = service.assemble(mode).await?;
        let json = serde_json::to_string_pretty(&config)
            .map_err(|e| crate::utils::KumuError::config(format!("serialization failed: {}", e)))?;

        println!("{}", json);
        Ok(())
    }
}

impl Default for CliHandler {
    fn default() -> Self {
        Self::new()
    }
}
