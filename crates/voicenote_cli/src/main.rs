//! Command-line entry point for batch entry processing.
//!
//! # Responsibility
//! - Read a JSON entry batch from a file or stdin.
//! - Print the processing report as pretty JSON on stdout.
//!
//! # Invariants
//! - Processing failures go to stderr with exit status 1; stdout only
//!   carries reports.
//! - File logging is opt-in through `--log-dir` / `VOICENOTE_LOG_DIR`.

use clap::Parser;
use log::info;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "voicenote_cli", version)]
#[command(about = "Tally tags, detect tasks and rank keywords across voice-journal entries.")]
struct Cli {
    /// JSON array of entries; stdin when absent or `-`.
    #[arg(value_name = "PATH")]
    input: Option<PathBuf>,

    /// Absolute directory for rotating log files.
    #[arg(long, value_name = "DIR", env = "VOICENOTE_LOG_DIR")]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, value_name = "LEVEL", env = "VOICENOTE_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("voicenote_cli: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level: &str = cli
            .log_level
            .as_deref()
            .unwrap_or_else(|| voicenote_core::default_log_level());
        voicenote_core::init_logging(level, log_dir)?;
    }

    let input = read_input(cli.input_path())?;
    let entries = voicenote_core::parse_entries(&input).map_err(|err| err.to_string())?;
    let result = voicenote_core::process_entries(&entries);
    info!(
        "event=cli_process module=cli status=ok entries={} tasks={}",
        entries.len(),
        result.tasks.len()
    );

    result
        .to_json_pretty()
        .map_err(|err| format!("failed to encode report: {err}"))
}

fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            Ok(buffer)
        }
    }
}
