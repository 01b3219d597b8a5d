//! Practice exercises from the command line.
//!
//! `kata run` evaluates any catalog exercise on textual arguments;
//! `kata isbn` validates ISBN-10 candidates and reports rejections through its
//! exit code.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use kata::catalog::{Exercise, Topic};
use kata::config::{CONFIG_FILE, KataConfig, OutputFormat, load_config, write_config};
use kata::core::isbn::Isbn10;
use kata::exit_codes;

#[derive(Parser)]
#[command(name = "kata", version, about = "Practice exercises as pure functions")]
struct Cli {
    /// Path to the config file.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default `kata.toml` if missing.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// List exercises with their topic and summary.
    List {
        #[arg(long, value_enum)]
        topic: Option<Topic>,
    },
    /// Evaluate one exercise and print the result.
    Run {
        #[arg(value_enum)]
        exercise: Exercise,
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        args: Vec<String>,
    },
    /// Validate ISBN-10 candidates; exits 2 if any is invalid.
    Isbn {
        /// Print the reason next to every rejected candidate.
        #[arg(long)]
        explain: bool,
        #[arg(required = true, allow_hyphen_values = true)]
        candidates: Vec<String>,
    },
}

fn main() {
    kata::logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print().context("print usage")?;
            return Ok(usage_exit_code(&err));
        }
    };
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::List { topic } => cmd_list(topic),
        Command::Run { exercise, args } => {
            let cfg = load_config(&cli.config).context("load config")?;
            cmd_run(&cfg, exercise, &args)
        }
        Command::Isbn {
            explain,
            candidates,
        } => {
            let cfg = load_config(&cli.config).context("load config")?;
            cmd_isbn(&cfg, explain, &candidates)
        }
    }
}

/// `--help` and `--version` succeed; every other usage error is `INVALID`.
fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        exit_codes::INVALID
    } else {
        exit_codes::OK
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if !force && path.exists() {
        info!(path = %path.display(), "config exists, leaving it untouched");
        return Ok(exit_codes::OK);
    }
    write_config(path, &KataConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    println!("init: wrote {}", path.display());
    Ok(exit_codes::OK)
}

fn cmd_list(topic: Option<Topic>) -> Result<i32> {
    for exercise in Exercise::all() {
        if topic.is_some_and(|topic| topic != exercise.topic()) {
            continue;
        }
        println!(
            "{:<24} {:<13} {}",
            exercise.name(),
            exercise.topic(),
            exercise.summary()
        );
    }
    Ok(exit_codes::OK)
}

#[derive(Serialize)]
struct RunRecord<'a> {
    exercise: &'a str,
    args: &'a [String],
    output: &'a str,
}

fn cmd_run(cfg: &KataConfig, exercise: Exercise, args: &[String]) -> Result<i32> {
    debug!(exercise = %exercise, args = ?args, "evaluating");
    let output = exercise
        .evaluate(args)
        .with_context(|| format!("run {exercise}"))?;
    match cfg.format {
        OutputFormat::Plain => println!("{output}"),
        OutputFormat::Json => {
            let record = RunRecord {
                exercise: exercise.name(),
                args,
                output: &output,
            };
            println!("{}", serde_json::to_string(&record).context("serialize result")?);
        }
    }
    Ok(exit_codes::OK)
}

#[derive(Serialize)]
struct IsbnRecord<'a> {
    candidate: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

fn cmd_isbn(cfg: &KataConfig, explain: bool, candidates: &[String]) -> Result<i32> {
    let explain = explain || cfg.isbn.explain;
    let mut rejected = 0usize;
    for candidate in candidates {
        let verdict = Isbn10::parse(candidate);
        let reason = verdict.as_ref().err().map(ToString::to_string);
        if let Some(reason) = &reason {
            rejected += 1;
            debug!(candidate = %candidate, reason = %reason, "rejected");
        }
        let reason = reason.filter(|_| explain);
        match cfg.format {
            OutputFormat::Plain => {
                let status = if verdict.is_ok() { "valid" } else { "invalid" };
                match reason {
                    Some(reason) => println!("{candidate}\t{status}\t{reason}"),
                    None => println!("{candidate}\t{status}"),
                }
            }
            OutputFormat::Json => {
                let record = IsbnRecord {
                    candidate,
                    valid: verdict.is_ok(),
                    reason,
                };
                println!("{}", serde_json::to_string(&record).context("serialize verdict")?);
            }
        }
    }
    info!(total = candidates.len(), rejected, "isbn validation finished");
    if rejected > 0 {
        Ok(exit_codes::REJECTED)
    } else {
        Ok(exit_codes::OK)
    }
}
