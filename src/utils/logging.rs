use std::time::Instant;
use tracing::{debug, error, info, warn};

pub struct Logger;

impl Logger {
    pub fn init() {
        tracing_subscriber::fmt()
            .with_env_filter("kumu=info")
            .with_target(false)
            .init();
    }

    pub fn scanning_templates(root: &str) {
        info!("📁 Scanning templates in {}", root);
    }

    pub fn found_templates(pages: usize, partials: usize) {
        info!("📄 Found {} page templates ({} partials skipped)", pages, partials);
    }

    pub fn template_root_missing(root: &str) {
        debug!("Template root {} is missing or unreadable, no pages generated", root);
    }

    pub fn assembling(mode: &str) {
        info!("🔧 Assembling bundler configuration ({} mode)", mode);
    }

    pub fn plugin_applied(name: &str) {
        debug!("🔌 Plugin applied: {}", name);
    }

    pub fn build_complete(pages: usize, build_time: std::time::Duration, outdir: &str) {
        info!("");
        info!("📊 Build Statistics:");
        info!("  • HTML pages emitted: {}", pages);
        info!("  • Build time: {:.2?}", build_time);
        info!("  • Output directory: {}", outdir);
        info!("");
        info!("✅ Build completed successfully!");
    }

    pub fn rebuilding(reason: &str) {
        info!("🔄 Change detected ({}), rebuilding...", reason);
    }

    pub fn info(msg: &str) {
        info!("{}", msg);
    }

    pub fn debug(msg: &str) {
        debug!("{}", msg);
    }

    pub fn error(msg: &str) {
        error!("❌ {}", msg);
    }

    pub fn warn(msg: &str) {
        warn!("⚠️  {}", msg);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: &str) -> Self {
        debug!("⏱️  Starting: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("⏱️  Completed: {} in {:.2?}", self.name, self.elapsed());
    }
}
