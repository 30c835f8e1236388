// Kumu - bundler configuration front-end for template-driven static sites
// Library surface with clean separation of concerns

pub mod cli;
pub mod core;
pub mod infrastructure;
pub mod utils;
