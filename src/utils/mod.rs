// Shared utilities module
pub mod config_loader;
pub mod errors;
pub mod kumu_ui;
pub mod logging;

pub use config_loader::*;
pub use errors::*;
pub use kumu_ui::*;
pub use logging::*;
