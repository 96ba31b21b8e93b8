//! CLI route: mode selection and run context. Dispatches to config, render and presentation.

use crate::cli::parse::Cli;
use crate::cli::presentation::format_generation_summary;
use crate::config::{default_cluster_config, ClusterOverrides, ConfigLoader};
use crate::error::GeneratorError;
use crate::render::{count_documents, render_manifest};
use std::path::{Path, PathBuf};
use tracing::info;

/// Notice printed when no config file is given
pub const DEFAULT_CONFIG_NOTICE: &str =
    "Using default configuration. Use --create-config to customize.";

/// What a single invocation does, in precedence order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Write the built-in defaults to a file; nothing is rendered
    CreateConfig(PathBuf),
    /// Load (or default), override, render and write the manifest
    Render {
        config: Option<PathBuf>,
        output: PathBuf,
        overrides: ClusterOverrides,
    },
}

impl Mode {
    pub fn from_cli(cli: &Cli) -> Self {
        match cli.create_config {
            Some(ref path) => Mode::CreateConfig(path.clone()),
            None => Mode::Render {
                config: cli.config.clone(),
                output: cli.output.clone(),
                overrides: cli.overrides(),
            },
        }
    }
}

/// Runtime context for CLI execution. Relative paths are resolved against `working_dir`.
#[derive(Debug, Clone)]
pub struct RunContext {
    working_dir: PathBuf,
}

impl RunContext {
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Execute the invocation described by `cli`; returns the text to print on success.
    pub fn execute(&self, cli: &Cli) -> Result<String, GeneratorError> {
        self.execute_mode(Mode::from_cli(cli))
    }

    pub fn execute_mode(&self, mode: Mode) -> Result<String, GeneratorError> {
        match mode {
            Mode::CreateConfig(path) => {
                ConfigLoader::save_default(&self.resolve(&path))
                    .map_err(|e| e.with_path(&path))?;
                Ok(format!("Default configuration saved to '{}'", path.display()))
            }
            Mode::Render {
                config,
                output,
                overrides,
            } => self.render(config.as_deref(), &output, &overrides),
        }
    }

    fn render(
        &self,
        config_path: Option<&Path>,
        output: &Path,
        overrides: &ClusterOverrides,
    ) -> Result<String, GeneratorError> {
        let mut lines = Vec::new();

        let mut config = match config_path {
            Some(path) => {
                let config = ConfigLoader::load_from_file(&self.resolve(path))
                    .map_err(|e| e.with_path(path))?;
                info!(config_path = %path.display(), "Loaded cluster configuration");
                config
            }
            None => {
                lines.push(DEFAULT_CONFIG_NOTICE.to_string());
                default_cluster_config()
            }
        };

        overrides.apply(&mut config)?;

        // Render completely before touching the output path
        let manifest = render_manifest(&config)?;
        let output_path = self.resolve(output);
        std::fs::write(&output_path, &manifest).map_err(|e| GeneratorError::io(output, e))?;
        info!(
            output = %output_path.display(),
            documents = count_documents(&manifest),
            workers = config.workers_enabled(),
            "Cluster manifest written"
        );

        lines.push(format_generation_summary(&config, output));
        Ok(lines.join("\n"))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.working_dir.join(path)
    }
}
