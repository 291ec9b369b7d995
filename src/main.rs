use anyhow::{Context, Result};
use cli::Cli;
use config::Configuration;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use sinks::RenderStats;
use std::path::Path;
use std::process::ExitCode;

mod cli;
mod config;
mod sinks {
    mod pdf;
    pub use pdf::{RenderStats, PDF};
}
mod source;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let _ = Cli::parse();

    let config = Configuration::default();
    if log::log_enabled!(log::Level::Debug) {
        let contents =
            toml::to_string(&config).with_context(|| "Failed to serialize configuration")?;
        debug!("Configuration:\n{contents}");
    }

    let root = config::scan_root()?;
    export(&root, &config)?;
    Ok(())
}

/// Scan `root` and write everything found into the configured PDF.
///
/// When nothing is found, no document is created and `None` is returned.
fn export(root: &Path, config: &Configuration) -> Result<Option<RenderStats>> {
    let excluded_files = config.file_filter()?;
    let excluded_dirs = config.dir_filter()?;

    println!("Scanning project files in {}...", root.display());
    let files = source::collect(root, &excluded_files, &excluded_dirs)
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    if files.is_empty() {
        println!("{}", style("No files found to process!").yellow());
        return Ok(None);
    }
    println!("Found {} files to include in PDF", files.len());

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .with_context(|| "Failed to parse progress style")?
            .progress_chars("#>-"),
    );
    progress.set_message("Rendering PDF...");

    let stats = config
        .pdf
        .render(&files, &progress)
        .with_context(|| "Failed to render PDF")?;
    progress.finish_and_clear();

    let size = byte_unit::Byte::from_u64(stats.bytes_written as u64)
        .get_appropriate_unit(byte_unit::UnitType::Binary);
    println!(
        "{} {} ({} pages, {size:.1})",
        style("PDF successfully created:").green(),
        config.pdf.outfile.display(),
        stats.page_count,
    );
    println!("Total files processed: {}", stats.file_count);

    Ok(Some(stats))
}
