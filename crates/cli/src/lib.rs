//! # Formsmith CLI
//!
//! Command-line interface for Formsmith.
//!
//! Works on field-list JSON documents so the builder's projections can be
//! used from scripts without a graphical host.
//!
//! ## Commands
//!
//! - `new` - Create a field list from type tags
//! - `generate` - Generate the React component for a field list
//! - `preview` - Render the preview outline and optionally submit values
//! - `info` - Display information about a field list
//! - `types` - List the field-type palette
//!

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

// Re-export dependencies for use in main.rs
pub use formsmith_codegen;
pub use formsmith_core;
pub use formsmith_ir;
pub use formsmith_preview;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Parser)]
#[command(name = "formsmith")]
#[command(version)]
#[command(about = "Form builder core: field lists in, JSON, previews and React components out")]
#[command(long_about = None)]
pub struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a field list from type tags and print it as JSON
    New {
        /// Field types in order, e.g. `text email checkbox`
        #[arg(required = true, num_args = 1..)]
        types: Vec<String>,
    },

    /// Generate a React component from a field list
    Generate {
        /// Field-list JSON document
        fields: PathBuf,

        /// Write the component here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Generator config (TOML)
        #[arg(short, long, env = "FORMSMITH_CONFIG")]
        config: Option<PathBuf>,

        /// Component name (overrides the config file)
        #[arg(long)]
        component: Option<String>,
    },

    /// Render the preview outline; with --values, submit them
    Preview {
        /// Field-list JSON document
        fields: PathBuf,

        /// JSON object of values keyed by field name
        #[arg(long)]
        values: Option<PathBuf>,
    },

    /// Show field counts, names and validation warnings
    Info {
        /// Field-list JSON document
        fields: PathBuf,
    },

    /// List the field-type palette
    Types,
}

impl Cli {
    /// Parse process arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Run a parsed command
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    tracing::debug!(?cli.command, "running command");

    match cli.command {
        Commands::New { types } => {
            println!("{}", commands::new_fields(&types)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Generate {
            fields,
            output,
            config,
            component,
        } => {
            commands::generate(&fields, output.as_deref(), config.as_deref(), component)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Preview { fields, values } => {
            if commands::preview(&fields, values.as_deref())? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Info { fields } => {
            let list = commands::load(&fields)?;
            print!("{}", output::info_report(&list));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Types => {
            print!("{}", output::types_table());
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "formsmith",
            "-v",
            "generate",
            "fields.json",
            "--component",
            "Signup",
            "-o",
            "out/form.tsx",
        ])
        .unwrap();

        assert_eq!(cli.log_filter(), "debug");
        match cli.command {
            Commands::Generate {
                fields,
                output,
                component,
                ..
            } => {
                assert_eq!(fields, PathBuf::from("fields.json"));
                assert_eq!(output, Some(PathBuf::from("out/form.tsx")));
                assert_eq!(component.as_deref(), Some("Signup"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_new_requires_types() {
        assert!(Cli::try_parse_from(["formsmith", "new"]).is_err());
    }
}
