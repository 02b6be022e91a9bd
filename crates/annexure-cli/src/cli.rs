//! CLI definition using clap

use std::path::PathBuf;

use annexure_types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "annexure-c")]
#[command(version)]
#[command(about = "Generate printable Annexure-C customs examination receipts")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for summaries (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Exporter/CHA name for this run (overrides config)
    #[arg(long, global = true)]
    pub exporter: Option<String>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a form and write the Annexure-C document
    Render {
        /// Form file (.toml or .json)
        form: PathBuf,

        /// CSV with container particulars (replaces containers in the form)
        #[arg(long, short = 'c')]
        containers: Option<PathBuf>,

        /// Output HTML path. Defaults to annexure-c-<bill no>.html in the output dir.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Print the document to stdout instead of writing a file
        #[arg(long, conflicts_with_all = ["output", "open"])]
        stdout: bool,

        /// Open the written document in the default browser
        #[arg(long)]
        open: bool,

        /// Insert values without HTML escaping
        #[arg(long)]
        verbatim: bool,
    },

    /// Run the weight check on a form without rendering
    Check {
        /// Form file (.toml or .json)
        form: PathBuf,

        /// CSV with container particulars (replaces containers in the form)
        #[arg(long, short = 'c')]
        containers: Option<PathBuf>,
    },

    /// Write a sample form file
    Template {
        /// Output path (stdout if not specified)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Check Indian vehicle registration numbers (e.g. MH12AB1234)
    Vehicle {
        /// Numbers to check
        #[arg(required = true)]
        numbers: Vec<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set exporter/CHA name
        #[arg(long)]
        set_exporter: Option<String>,

        /// Enable/disable HTML escaping of entered values
        #[arg(long)]
        set_escape: Option<bool>,

        /// Set output directory for documents
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Open documents in the browser after rendering
        #[arg(long)]
        set_open: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "annexure-c", "render", "form.toml", "-c", "rows.csv", "-o", "out.html", "--open",
        ])
        .unwrap();
        match cli.command {
            Commands::Render { form, containers, output, stdout, open, verbatim } => {
                assert_eq!(form, PathBuf::from("form.toml"));
                assert_eq!(containers, Some(PathBuf::from("rows.csv")));
                assert_eq!(output, Some(PathBuf::from("out.html")));
                assert!(!stdout);
                assert!(open);
                assert!(!verbatim);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        let parsed = Cli::try_parse_from([
            "annexure-c", "render", "form.toml", "--stdout", "-o", "out.html",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "annexure-c", "vehicle", "MH12AB1234", "-f", "json", "--exporter", "ACME",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.exporter.as_deref(), Some("ACME"));
    }

    #[test]
    fn test_vehicle_requires_number() {
        assert!(Cli::try_parse_from(["annexure-c", "vehicle"]).is_err());
    }
}
