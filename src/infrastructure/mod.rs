// Infrastructure layer
pub mod file_system;
pub mod plugins;
pub mod server;

pub use file_system::*;
pub use plugins::*;
pub use server::*;
