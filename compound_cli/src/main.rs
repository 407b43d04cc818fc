use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use compound_core::{MatchError, Matcher, SearchOutcome};
use compound_dict::{DictError, WordList};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod config;

use crate::args::Args;
use crate::config::CliConfig;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Dict(#[from] DictError),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match CliConfig::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&CliConfig::default().log_filter(args.verbose));
            error!(error = %e, "configuration rejected");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_filter(args.verbose));

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "compound search failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(args: &Args, config: &CliConfig) -> Result<(), AppError> {
    // phase 1: 读词表
    let started = Instant::now();
    let words_path = args.words.clone().unwrap_or_else(default_words_path);
    let list = WordList::from_path(&words_path)?;
    info!(
        path = %words_path.display(),
        words = list.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "phase 1: word list read"
    );

    // phase 2: 构造匹配器
    let started = Instant::now();
    let matcher = Matcher::from_lexicon(&list)?
        .max_states(config.search.max_states)
        .dedup_states(config.search.dedup_states);
    info!(
        max_states = config.search.max_states,
        dedup_states = config.search.dedup_states,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "phase 2: matcher built"
    );

    // phase 3: 搜索
    let started = Instant::now();
    let outcome: SearchOutcome = matcher.search()?;
    info!(
        states_created = outcome.states_created,
        states_expanded = outcome.states_expanded,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "phase 3: search finished"
    );

    let mut out = io::stdout().lock();
    print_outcome(&mut out, &outcome, args)?;
    out.flush()?;
    Ok(())
}

fn print_outcome(out: &mut impl Write, outcome: &SearchOutcome, args: &Args) -> io::Result<()> {
    match &outcome.compound {
        Some(compound) => {
            writeln!(out, "longest compound: {}", compound.word)?;
            if args.segments {
                writeln!(out, "segments: {}", compound.segments.join(" + "))?;
            }
        }
        None => writeln!(out, "longest compound: (none)")?,
    }
    if args.stats {
        writeln!(
            out,
            "states: {} created, {} expanded",
            outcome.states_created, outcome.states_expanded
        )?;
    }
    Ok(())
}

/// 当前目录有 words.txt 就用它，否则用内置示例词表。
fn default_words_path() -> PathBuf {
    let local = Path::new("words.txt");
    if local.is_file() {
        return local.to_path_buf();
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("asset").join("words.txt")
}
