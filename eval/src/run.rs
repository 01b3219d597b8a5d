//! Case execution orchestration.
//!
//! Evaluates the checks of a case and captures the results.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::{Rng, distributions::Alphanumeric};
use tracing::{debug, info, instrument};

use crate::case::CaseFile;
use crate::judge::run_checks;
use crate::outcome::{Outcome, classify_outcome};
use crate::results::{CaptureInput, capture_results};

/// Result of running a single case.
#[derive(Debug)]
pub struct RunOutcome {
    /// Unique identifier for this eval run.
    pub eval_run_id: String,
    /// Path to the results directory.
    pub results_dir: PathBuf,
    /// Classified outcome.
    pub outcome: Outcome,
    pub checks_passed: usize,
    pub checks_total: usize,
}

/// Run a case end-to-end: evaluate checks, classify, capture results.
#[instrument(skip_all, fields(case_id = %case.case.id))]
pub fn run_case(results_base: &Path, case: &CaseFile) -> Result<RunOutcome> {
    info!("case run started");

    let started_at = Utc::now();
    let eval_run_id = eval_run_id(started_at);

    debug!("running checks");
    let judgment = run_checks(case.case.exercise, &case.checks);
    let finished_at = Utc::now();

    let outcome = classify_outcome(&judgment);
    let capture_input = CaptureInput {
        case_id: &case.case.id,
        case_path: &case.path,
        eval_run_id: &eval_run_id,
        outcome,
        started_at,
        finished_at,
    };
    let results_dir =
        capture_results(results_base, &capture_input, &judgment).context("capture results")?;

    info!(outcome = ?outcome, results_dir = %results_dir.display(), "case run complete");

    Ok(RunOutcome {
        eval_run_id,
        results_dir,
        outcome,
        checks_passed: judgment.passed_count(),
        checks_total: judgment.checks.len(),
    })
}

/// `eval-<timestamp>-<suffix>`; the random suffix keeps runs started within
/// the same second apart.
fn eval_run_id(started_at: DateTime<Utc>) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(4)
        .map(char::from)
        .collect();
    format!(
        "eval-{}-{}",
        started_at.format("%Y%m%d_%H%M%S"),
        suffix.to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::discover_cases;
    use crate::paths::EvalPaths;

    #[test]
    fn eval_run_id_format() {
        let id = eval_run_id(Utc::now());
        assert!(id.starts_with("eval-"));
        assert_eq!(id.len(), "eval-".len() + "YYYYmmdd_HHMMSS".len() + "-".len() + 4);
    }

    #[test]
    fn shipped_cases_all_pass() {
        let repo_root = Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .expect("workspace root");
        let paths = EvalPaths::new(repo_root);
        let cases = discover_cases(&paths.cases_dir).expect("discover shipped cases");
        assert!(!cases.is_empty());

        let temp = tempfile::tempdir().expect("tempdir");
        for case in &cases {
            let outcome = run_case(temp.path(), case).expect("run case");
            assert_eq!(
                outcome.outcome,
                Outcome::Success,
                "case {} failed, see {}",
                case.case.id,
                outcome.results_dir.join("checks.json").display()
            );
        }
    }
}
