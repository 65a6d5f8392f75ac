//! stylesync - print the styled ranges a rules file produces for a text

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::error;

use stylesync::config::RulesConfig;
use stylesync::{ContentState, EditorState, Error, Result, RuleSet, StyleSyncPlugin};

#[derive(Parser, Debug)]
#[command(name = "stylesync", version, about = "Apply pattern style rules to a text")]
struct Cli {
    /// Rules file (defaults to ~/.stylesync.toml)
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Exit with status 1 if a second pass would still change styling
    #[arg(long)]
    check: bool,

    /// Text file to style (reads stdin when omitted)
    file: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

/// Style the input and print its runs; returns false if `--check` failed
fn run(cli: &Cli) -> Result<bool> {
    let rules_path = match &cli.rules {
        Some(path) => path.clone(),
        None => RulesConfig::config_path()
            .ok_or_else(|| Error::Config("no rules file given and no home directory".to_string()))?,
    };
    let plugin = StyleSyncPlugin::new(RuleSet::load(&rules_path)?);

    let text = match &cli.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let state = EditorState::create(ContentState::from_text(text.trim_end_matches('\n')));
    let styled = plugin.on_change(state)?;

    for block in styled.current_content().blocks() {
        for styled_run in block.styled_runs() {
            println!(
                "{} [{}, {}) {}",
                block.key(),
                styled_run.start,
                styled_run.end,
                styled_run.styles
            );
        }
    }

    if cli.check {
        let again = plugin.on_change(styled.clone())?;
        if !again.same_content(&styled) {
            eprintln!("styling did not converge after one pass");
            return Ok(false);
        }
    }
    Ok(true)
}
