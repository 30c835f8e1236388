use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KumuError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {message}")]
    Template {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Plugin '{plugin}' failed: {message}")]
    Plugin { plugin: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown build mode: {0} (expected 'development' or 'production')")]
    InvalidMode(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("{0}")]
    Other(String),
}

impl KumuError {
    /// Create a template error without a path
    pub fn template(message: String) -> Self {
        Self::Template {
            message,
            path: None,
        }
    }

    /// Create a template error tied to a file
    pub fn template_at(message: String, path: PathBuf) -> Self {
        Self::Template {
            message,
            path: Some(path),
        }
    }

    /// Create a plugin error
    pub fn plugin(plugin: &str, message: String) -> Self {
        Self::Plugin {
            plugin: plugin.to_string(),
            message,
        }
    }

    /// Create a configuration error
    pub fn config(message: String) -> Self {
        Self::Config(message)
    }

    /// Create a server error
    pub fn server(message: String) -> Self {
        Self::Server(message)
    }

    /// Format error with file context when available
    pub fn format_detailed(&self) -> String {
        match self {
            KumuError::Template {
                message,
                path: Some(path),
            } => {
                format!("❌ Template Error: {}\n📁 File: {}", message, path.display())
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KumuError>;

impl From<anyhow::Error> for KumuError {
    fn from(err: anyhow::Error) -> Self {
        KumuError::Other(err.to_string())
    }
}
