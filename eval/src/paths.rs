//! Eval directory layout under the repository root.

use std::path::{Path, PathBuf};

/// Locations of case files and captured results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalPaths {
    pub cases_dir: PathBuf,
    pub results_dir: PathBuf,
}

impl EvalPaths {
    pub fn new(repo_root: &Path) -> Self {
        let eval_dir = repo_root.join("eval");
        Self {
            cases_dir: eval_dir.join("cases"),
            results_dir: eval_dir.join("results"),
        }
    }

    pub fn case_path(&self, case_id: &str) -> PathBuf {
        self.cases_dir.join(format!("{case_id}.toml"))
    }

    pub fn case_results(&self, case_id: &str) -> PathBuf {
        self.results_dir.join(case_id)
    }
}
