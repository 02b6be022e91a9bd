//! Command handlers

use std::path::{Path, PathBuf};

use annexure_app::config::Config;
use annexure_app::intake::is_valid_indian_vehicle_number;
use annexure_app::{default_file_name, generate, Escaping, FormSession, Renderer};
use annexure_domain::service::check_weights;
use annexure_infra::{load_containers_csv, load_form_file, FormInput};
use annexure_types::{Error, OutputFormat, Result};
use chrono::Local;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::output::{output_vehicle_checks, output_weight_check};

/// Execute CLI command, returning the process exit code
pub fn execute(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Render {
            form,
            containers,
            output,
            stdout,
            open,
            verbatim,
        } => {
            let config = effective_config(&cli)?;
            cmd_render(
                &config,
                form,
                containers.as_deref(),
                output.clone(),
                *stdout,
                *open,
                *verbatim,
            )
        }

        Commands::Check { form, containers } => {
            let config = effective_config(&cli)?;
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_check(form, containers.as_deref(), output_format)
        }

        Commands::Template { output } => cmd_template(output.as_deref()),

        Commands::Vehicle { numbers } => {
            let config = effective_config(&cli)?;
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_vehicle(numbers, output_format)
        }

        // Edits the stored config, so the one-run overrides are not applied
        Commands::Config {
            show,
            set_exporter,
            set_escape,
            set_output_dir,
            set_format,
            set_open,
            reset,
        } => cmd_config(
            *show,
            set_exporter.clone(),
            *set_escape,
            set_output_dir.clone(),
            *set_format,
            *set_open,
            *reset,
        ),
    }
}

/// Stored config with overrides from CLI args applied
fn effective_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(ref exporter) = cli.exporter {
        config.exporter_name = exporter.clone();
    }
    Ok(config)
}

/// Build the intake session from a form file and optional container CSV
fn load_session(form: &Path, containers: Option<&Path>) -> Result<FormSession> {
    let today = Local::now().date_naive();
    let mut session = FormSession::from_input(load_form_file(form)?, today);
    if let Some(csv_path) = containers {
        let rows = load_containers_csv(csv_path, today)?;
        debug!(rows = rows.len(), "replacing containers from CSV");
        session.replace_containers(rows);
    }
    Ok(session)
}

fn cmd_render(
    config: &Config,
    form_path: &Path,
    containers: Option<&Path>,
    output: Option<PathBuf>,
    stdout: bool,
    open_after: bool,
    verbatim: bool,
) -> Result<i32> {
    let session = load_session(form_path, containers)?;
    let form = session.read_form();

    let escaping = if verbatim {
        Escaping::Verbatim
    } else {
        config.escaping()
    };
    let renderer = Renderer::new(config.exporter_name.clone(), escaping)?;
    let document = generate(&form, &renderer)?;

    if stdout {
        print!("{}", document);
        return Ok(0);
    }

    let path = output.unwrap_or_else(|| config.output_dir().join(default_file_name(&form)));
    document.save(&path)?;
    eprintln!(
        "Annexure-C written to {} ({} container(s))",
        path.display(),
        form.container_count()
    );

    if open_after || config.open_after_render {
        open::that(&path).map_err(|e| Error::Open(format!("{}: {}", path.display(), e)))?;
    }

    Ok(0)
}

fn cmd_check(form_path: &Path, containers: Option<&Path>, output_format: OutputFormat) -> Result<i32> {
    let session = load_session(form_path, containers)?;
    let result = check_weights(&session.read_form());
    output_weight_check(output_format, &result)?;
    Ok(if result.is_valid { 0 } else { 1 })
}

fn cmd_template(output: Option<&Path>) -> Result<i32> {
    let content = FormInput::template().to_toml_string()?;
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            eprintln!("Sample form written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(0)
}

fn cmd_vehicle(numbers: &[String], output_format: OutputFormat) -> Result<i32> {
    let checks: Vec<(String, bool)> = numbers
        .iter()
        .map(|n| (n.clone(), is_valid_indian_vehicle_number(n)))
        .collect();
    output_vehicle_checks(output_format, &checks)?;
    Ok(if checks.iter().all(|(_, valid)| *valid) { 0 } else { 1 })
}

fn cmd_config(
    show: bool,
    set_exporter: Option<String>,
    set_escape: Option<bool>,
    set_output_dir: Option<PathBuf>,
    set_format: Option<OutputFormat>,
    set_open: Option<bool>,
    reset: bool,
) -> Result<i32> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(0);
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(exporter) = set_exporter {
        config.exporter_name = exporter;
        modified = true;
    }
    if let Some(escape) = set_escape {
        config.escape_html = escape;
        modified = true;
    }
    if let Some(dir) = set_output_dir {
        config.output_dir = Some(dir);
        modified = true;
    }
    if let Some(format) = set_format {
        config.output_format = format;
        modified = true;
    }
    if let Some(open) = set_open {
        config.open_after_render = open;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(0)
}
