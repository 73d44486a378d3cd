// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod error;
mod logger;

use std::{fs::read_dir, path::{Path, PathBuf}, process::ExitCode};

use anyhow::Context;
use colored::Colorize;
use rockstar::{ConfigRoot, Interpreter, RockstarError, SourceCode, StdConsole};

use self::{error::ErrorPrinter, logger::Logger};

const CONFIG_FILE_NAME: &str = "Rockstar.toml";

/// Stack of the thread programs run on. Every nested Rockstar call takes a
/// few Rust frames, so the default thread stack runs out before the call
/// depth limit is reached.
const INTERPRETER_STACK_SIZE: usize = 256 * 1024 * 1024;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Programs to run. Without any, every matching file in the current
    /// directory is run.
    files: Vec<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    /// Don't run the remaining files after one fails.
    #[arg(long)]
    stop_on_error: bool,

    /// Configuration file to use instead of `Rockstar.toml`.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

fn main() -> ExitCode {
    let args = Args::parse_args();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            return ExitCode::FAILURE;
        }
    };

    Logger::initialize(args.verbose || config.log.debug);

    if !config.run.color {
        colored::control::set_override(false);
    }

    match run_all(args, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("{}: {e:#}", "error".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Reads the given configuration file, or `Rockstar.toml` when it exists.
fn load_config(path: Option<&Path>) -> anyhow::Result<ConfigRoot> {
    let path = match path {
        Some(path) => path,
        None if Path::new(CONFIG_FILE_NAME).is_file() => Path::new(CONFIG_FILE_NAME),
        None => return Ok(ConfigRoot::default()),
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Invalid config file {}", path.display()))
}

/// Whether every file ran without errors.
fn run_all(args: Args, config: &ConfigRoot) -> anyhow::Result<bool> {
    let stop_on_error = args.stop_on_error || config.run.stop_on_error;

    let files = if args.files.is_empty() {
        discover_files(Path::new("."), &config.run.extension)?
    } else {
        args.files
    };

    if files.is_empty() {
        log::warn!("No `.{}` files found", config.run.extension);
    }

    let mut failures = 0;
    for path in &files {
        println!("{}", path.display().to_string().green());

        if !run_file(path, config)? {
            failures += 1;

            if stop_on_error {
                break;
            }
        }
    }

    if failures != 0 {
        log::error!("{failures} of {} file(s) failed", files.len());
    }

    Ok(failures == 0)
}

fn discover_files(directory: &Path, extension: &str) -> anyhow::Result<Vec<PathBuf>> {
    let entries = read_dir(directory)
        .with_context(|| format!("Failed to list directory {}", directory.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list directory {}", directory.display()))?
            .path();

        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn run_file(path: &Path, config: &ConfigRoot) -> anyhow::Result<bool> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let source_code = SourceCode::new(path, contents);

    log::info!("Running {}", path.display());

    let program = match rockstar::parse(&source_code) {
        Ok(program) => program,
        Err(e) => {
            report(&source_code, &e);
            return Ok(false);
        }
    };

    let call_depth_limit = config.run.call_depth_limit;
    let result = std::thread::scope(|scope| {
        let handle = std::thread::Builder::new()
            .name("interpreter".to_string())
            .stack_size(INTERPRETER_STACK_SIZE)
            .spawn_scoped(scope, || {
                let mut interpreter = Interpreter::new(StdConsole::new())
                    .with_call_depth_limit(call_depth_limit);
                interpreter.execute_program(&program)
            })
            .context("Failed to start the interpreter thread")?;

        handle.join()
            .map_err(|_| anyhow::anyhow!("Interpreter panicked while running {}", path.display()))
    })?;

    match result {
        Ok(()) => {
            log::info!("Finished {}", path.display());
            Ok(true)
        }
        Err(e) => {
            report(&source_code, &RockstarError::from(e));
            Ok(false)
        }
    }
}

fn report(source_code: &SourceCode, error: &RockstarError) {
    log::error!("{} failed with {}", source_code.path().display(), error.name());
    ErrorPrinter::for_error(source_code, error).print();
}
