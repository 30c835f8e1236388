// Glue plugins executed by the plugin host
pub mod clean;
pub mod copy_assets;
pub mod css_extract;
pub mod disk_write;
pub mod html_page;

pub use clean::*;
pub use copy_assets::*;
pub use css_extract::*;
pub use disk_write::*;
pub use html_page::*;
