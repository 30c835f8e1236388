use colored::*;
use std::time::Instant;

pub struct KumuUI {
    start_time: Instant,
}

impl KumuUI {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn show_banner(&self) {
        println!("\n  {} {}", "KUMU".bright_cyan().bold(), env!("CARGO_PKG_VERSION").bright_white());
        println!();
    }

    pub fn show_completion(&self, stats: CompletionStats) {
        let build_time = self.start_time.elapsed();

        println!();
        for file in &stats.output_files {
            let size_kb = file.size as f64 / 1024.0;
            let size_str = if size_kb < 1.0 {
                format!("{:.2} B", file.size)
            } else {
                format!("{:.2} kB", size_kb)
            };

            println!(
                "  {} {} {}",
                format!("{}/", stats.outdir).bright_black(),
                file.name.bright_cyan(),
                format!("({})", size_str).bright_black()
            );
        }

        println!();
        println!(
            "  {} built in {}",
            "✓".bright_green(),
            format!("{:.0}ms", build_time.as_secs_f64() * 1000.0)
                .bright_white()
                .bold()
        );
    }
}

#[derive(Clone)]
pub struct CompletionStats {
    pub outdir: String,
    pub output_files: Vec<OutputFileInfo>,
}

#[derive(Clone)]
pub struct OutputFileInfo {
    pub name: String,
    pub size: usize,
}

impl Default for KumuUI {
    fn default() -> Self {
        Self::new()
    }
}
