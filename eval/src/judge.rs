//! Check execution and outcome recording.
//!
//! Evaluates every check of a case against the kata catalog and records the
//! actual output or error next to the expectation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use kata::catalog::Exercise;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::case::Check;

/// Collected check outcomes for a run.
#[derive(Debug, Serialize, Deserialize)]
pub struct Judgment {
    pub checks: Vec<CheckOutcome>,
}

impl Judgment {
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|check| check.passed()).count()
    }
}

/// Result of running a single check.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckOutcome {
    Returns {
        args: Vec<String>,
        expected: String,
        actual: Option<String>,
        error: Option<String>,
        passed: bool,
    },
    Rejects {
        args: Vec<String>,
        actual: Option<String>,
        error: Option<String>,
        passed: bool,
    },
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        match self {
            CheckOutcome::Returns { passed, .. } | CheckOutcome::Rejects { passed, .. } => *passed,
        }
    }

    /// Stable label used to aggregate pass rates across runs.
    pub fn label(&self) -> String {
        match self {
            CheckOutcome::Returns { args, .. } => format!("returns({})", args.join(", ")),
            CheckOutcome::Rejects { args, .. } => format!("rejects({})", args.join(", ")),
        }
    }
}

/// Run all checks against `exercise` and collect outcomes.
#[instrument(skip_all, fields(exercise = %exercise, check_count = checks.len()))]
pub fn run_checks(exercise: Exercise, checks: &[Check]) -> Judgment {
    let mut outcomes = Vec::with_capacity(checks.len());
    for check in checks {
        let result = exercise.evaluate(check.args());
        let (actual, error) = match result {
            Ok(output) => (Some(output), None),
            Err(err) => (None, Some(err.to_string())),
        };
        let outcome = match check {
            Check::Returns { args, expected } => {
                let passed = actual.as_deref() == Some(expected.as_str());
                debug!(check = "returns", args = ?args, passed, "check result");
                CheckOutcome::Returns {
                    args: args.clone(),
                    expected: expected.clone(),
                    actual,
                    error,
                    passed,
                }
            }
            Check::Rejects { args } => {
                let passed = error.is_some();
                debug!(check = "rejects", args = ?args, passed, "check result");
                CheckOutcome::Rejects {
                    args: args.clone(),
                    actual,
                    error,
                    passed,
                }
            }
        };
        outcomes.push(outcome);
    }
    Judgment { checks: outcomes }
}

pub fn write_judgment(path: &Path, judgment: &Judgment) -> Result<()> {
    let contents = serde_json::to_string_pretty(judgment).context("serialize checks")?;
    fs::write(path, format!("{contents}\n"))
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
