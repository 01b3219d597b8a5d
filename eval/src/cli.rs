//! CLI command implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::case::{CaseFile, discover_cases, validate_case_id};
use crate::outcome::Outcome;
use crate::paths::EvalPaths;
use crate::report::aggregate;
use crate::run::run_case;

/// List all available cases.
pub fn list_cases(repo_root: &Path) -> Result<()> {
    let paths = EvalPaths::new(repo_root);
    let cases = discover_cases(&paths.cases_dir)?;
    for case in cases {
        println!(
            "{} exercise={} checks={}",
            case.case.id,
            case.case.exercise,
            case.checks.len()
        );
    }
    Ok(())
}

/// Run one case by id, or every case when `case_id` is `None`.
///
/// Fails if any case has a failing check.
pub fn run_cases(repo_root: &Path, case_id: Option<&str>) -> Result<()> {
    let paths = EvalPaths::new(repo_root);
    let cases = match case_id {
        Some(case_id) => {
            validate_case_id(case_id)?;
            let case_path = paths.case_path(case_id);
            if !case_path.exists() {
                bail!("case {} not found at {}", case_id, case_path.display());
            }
            vec![CaseFile::load(&case_path).context("load case")?]
        }
        None => discover_cases(&paths.cases_dir)?,
    };
    debug!(count = cases.len(), "cases loaded");

    let mut failed = Vec::new();
    for case in &cases {
        let outcome = run_case(&paths.results_dir, case).context("run case")?;
        println!(
            "run: case={} eval_run_id={} outcome={:?} checks={}/{} results={}",
            case.case.id,
            outcome.eval_run_id,
            outcome.outcome,
            outcome.checks_passed,
            outcome.checks_total,
            outcome.results_dir.display()
        );
        if outcome.outcome != Outcome::Success {
            failed.push(case.case.id.clone());
        }
    }

    info!(total = cases.len(), failed = failed.len(), "runs finished");
    if !failed.is_empty() {
        bail!("{} case(s) failed: {}", failed.len(), failed.join(", "));
    }
    Ok(())
}

/// Show aggregated results for a case.
pub fn report_case(repo_root: &Path, case_id: &str) -> Result<()> {
    validate_case_id(case_id)?;
    let paths = EvalPaths::new(repo_root);
    let (summary, warnings) = aggregate(&paths.case_results(case_id))?;
    println!("report: case={} runs={}", case_id, summary.runs);
    println!(
        "report: success={} fail={} incomplete={}",
        summary.success, summary.fail, summary.incomplete
    );
    if let Some(avg) = summary.avg_duration_secs {
        println!("report: avg_duration_secs={:.6}", avg);
    }
    for (label, (passed, total)) in summary.check_pass_rates {
        println!("report: check {} {}/{}", label, passed, total);
    }
    for warning in warnings {
        eprintln!("warning: {}", warning);
    }
    Ok(())
}

/// Remove captured results for a case.
pub fn clean_case(repo_root: &Path, case_id: &str) -> Result<()> {
    validate_case_id(case_id)?;
    let paths = EvalPaths::new(repo_root);
    let case_results = paths.case_results(case_id);
    if case_results.exists() {
        std::fs::remove_dir_all(&case_results)
            .with_context(|| format!("remove {}", case_results.display()))?;
    }

    println!("clean: case={} results={}", case_id, case_results.display());
    Ok(())
}
