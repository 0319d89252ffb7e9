mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use img2ascii::{AsciiConfig, convert_file};

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(&cli) {
        Ok(path) => {
            println!("✅ ASCII image saved to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Written directly so RUST_LOG cannot silence it
            eprintln!("{}", fatal_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli) -> Result<PathBuf> {
    let config = AsciiConfig::default();
    convert_file(&cli.image, &config)
        .with_context(|| format!("Failed to convert {}", cli.image.display()))
}

/// One-line report of the full error chain
fn fatal_message(err: &anyhow::Error) -> String {
    format!("Error: {err:#}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_message_names_each_cause_once() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli::Cli {
            image: dir.path().join("nope.png"),
        };

        let err = run(&cli).unwrap_err();
        let message = fatal_message(&err);

        assert!(message.starts_with("Error: Failed to convert "));
        assert!(message.contains("I/O error on "));
        let os_detail = err.root_cause().to_string();
        assert_eq!(message.matches(os_detail.as_str()).count(), 1, "{message}");
    }
}
