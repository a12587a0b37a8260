use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use glossort_lib::Config;
use glossort_lib::exit_codes;
use glossort_lib::output::{OutputFormat, OutputWriter};
use glossort_lib::sort_file;

mod cli_types;

use cli_types::Cli;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<i32> {
    let explicit_config = cli.config.as_deref().map(Path::new);
    let (config, config_path) =
        Config::load(explicit_config, !cli.no_config).context("Failed to load configuration")?;
    if let Some(path) = &config_path {
        log::debug!("[glossort] Using config file: {}", path.display());
    }

    let filename = cli
        .filename
        .clone()
        .unwrap_or_else(|| config.global.default_file.clone());
    let path = PathBuf::from(&filename);

    let format_name = cli
        .output_format
        .as_deref()
        .or(config.global.output_format.as_deref())
        .unwrap_or("text");
    let output_format = OutputFormat::from_str(format_name).map_err(anyhow::Error::msg)?;

    let mode = cli.sort_mode();
    log::debug!("[glossort] Processing {} in {:?} mode", path.display(), mode);
    let report = sort_file(&path, &config, mode).with_context(|| format!("Failed to process {filename}"))?;

    let formatter = output_format.create_formatter(cli.quiet);
    OutputWriter::new()
        .write(&formatter.format_report(&report, &filename))
        .context("Failed to write output")?;

    Ok(exit_codes::for_report(&report))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            process::exit(exit_codes::TOOL_ERROR);
        }
    }
}
