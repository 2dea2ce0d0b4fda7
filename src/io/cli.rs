//! Command-line interface for batch expansion of stimulus configuration files

use crate::io::configuration::{CONFIG_EXTENSION, DEFAULT_SEED, OUTPUT_SUFFIX, StimulusConfig};
use crate::io::error::{PatternError, Result, invalid_parameter};
use crate::io::export::StimulusDocument;
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "stimgrid")]
#[command(
    author,
    version,
    about = "Expand seed sequences into grid stimuli and measure their complexity"
)]
/// Command-line arguments for the stimulus expansion tool
pub struct Cli {
    /// Stimulus configuration (.json) or directory of configurations
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Override the number of uniform position swaps
    #[arg(long)]
    pub swaps: Option<usize>,

    /// Only report warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Default log filter for this invocation
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }
}

/// Orchestrates batch expansion of configuration files
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Process files according to CLI arguments
    ///
    /// Returns the paths of the documents written.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&self) -> Result<Vec<PathBuf>> {
        let files = self.collect_files()?;
        info!("Processing {} configuration(s)", files.len());

        files.iter().map(|file| self.process_file(file)).collect()
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_config(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("file must be a .{CONFIG_EXTENSION} stimulus configuration"),
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|source| PatternError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_config(&path) && !is_output(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a configuration file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        let mut config = StimulusConfig::load(input_path)?;
        if let Some(swaps) = self.cli.swaps {
            config.swaps = swaps;
        }

        let document = StimulusDocument::generate(&config, self.cli.seed)?;
        document.write_json(&output_path)?;

        let metrics = document.display.metrics;
        info!(
            "Wrote {} in {:.2?} (elements {}, LOC {}, LOCI {}, LOCE {})",
            output_path.display(),
            start_time.elapsed(),
            metrics.element_count,
            metrics.loc,
            metrics.loci,
            metrics.loce
        );

        Ok(output_path)
    }

    /// Output path for a configuration file: `<stem>_stimulus.json`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            CONFIG_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_config(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(CONFIG_EXTENSION)
}

fn is_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
