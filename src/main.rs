//! lineedit - a readline-style line prompt for the terminal.
//!
//! # Usage
//!
//! ```bash
//! lineedit --prompt '> '
//! lineedit --text 'foo bar' --keys 'ctrl w' --keys 'ctrl a'
//! lineedit --word-chars 'abcdefghijklmnopqrstuvwxyz-' --save
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;

use lineedit::app::{App, run_script};
use lineedit::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};

/// A readline-style line prompt for the terminal
#[derive(Parser, Debug)]
#[command(name = "lineedit", version, about, long_about = None)]
struct Cli {
    /// Initial line content
    #[arg(short, long, default_value = "")]
    text: String,

    /// Characters treated as word characters by word motions and kills
    #[arg(long, value_name = "CHARS")]
    word_chars: Option<String>,

    /// Prompt painted before the line
    #[arg(short, long)]
    prompt: Option<String>,

    /// Apply these keys (e.g. "ctrl w", "meta b", "x") instead of running
    /// interactively, then print the line
    #[arg(short, long, value_name = "KEY")]
    keys: Vec<String>,

    /// Write logs to a file (the terminal is busy while the prompt runs)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        word_chars: cli.word_chars.clone(),
        prompt: cli.prompt.clone(),
        log_file: cli.log_file.clone(),
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_ref())?;

    let app = App::new()
        .with_initial_text(cli.text)
        .with_word_chars(effective.word_chars)
        .with_prompt(effective.prompt.unwrap_or_default());

    if !cli.keys.is_empty() {
        let mut editor = app.build_editor();
        let unhandled = run_script(&mut editor, &cli.keys)?;
        for name in &unhandled {
            eprintln!("[warn] key not handled: {name}");
        }
        println!("{}", editor.text());
        return Ok(ExitCode::SUCCESS);
    }

    match app.run().context("Application error")? {
        Some(line) => {
            println!("{line}");
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}
