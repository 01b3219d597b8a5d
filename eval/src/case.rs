//! Case file parsing and validation.
//!
//! Cases are TOML files naming one exercise and the checks to run against it.
//! See `eval/cases/` for examples.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use kata::catalog::Exercise;
use serde::Deserialize;

/// A parsed case file containing the exercise under test and its checks.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaseFile {
    /// File the case was loaded from; empty for cases parsed from a string.
    #[serde(skip)]
    pub path: PathBuf,
    pub case: CaseMeta,
    #[serde(default)]
    pub checks: Vec<Check>,
}

/// Case metadata: identifier and exercise.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaseMeta {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: String,
    pub exercise: Exercise,
    #[serde(default)]
    pub description: String,
}

/// A single expectation about the exercise.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Check {
    /// Evaluation succeeds and renders exactly `expected`.
    Returns { args: Vec<String>, expected: String },
    /// Evaluation fails with an exercise error.
    Rejects { args: Vec<String> },
}

impl Check {
    pub fn args(&self) -> &[String] {
        match self {
            Check::Returns { args, .. } | Check::Rejects { args } => args,
        }
    }
}

impl CaseFile {
    /// Load and validate a case file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read case {}", path.display()))?;
        let mut case: CaseFile =
            toml::from_str(&contents).with_context(|| format!("parse case {}", path.display()))?;
        case.path = path.to_path_buf();
        case.validate()
            .with_context(|| format!("validate case {}", path.display()))?;
        Ok(case)
    }

    #[cfg(test)]
    pub fn parse_str(contents: &str) -> Result<Self> {
        let case: CaseFile = toml::from_str(contents).context("parse case")?;
        case.validate()?;
        Ok(case)
    }

    fn validate(&self) -> Result<()> {
        validate_case_id(&self.case.id)?;
        if self.checks.is_empty() {
            bail!("checks must be a non-empty array");
        }
        let arity = self.case.exercise.arity();
        for (index, check) in self.checks.iter().enumerate() {
            let count = check.args().len();
            if !arity.accepts(count) {
                bail!(
                    "checks[{}] passes {} argument(s) but {} expects {}",
                    index,
                    count,
                    self.case.exercise,
                    arity
                );
            }
        }
        Ok(())
    }
}

/// Discover and load all case files from a directory.
///
/// Returns cases sorted by id. Errors if duplicate ids are found.
pub fn discover_cases(dir: &Path) -> Result<Vec<CaseFile>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut cases = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read cases dir {}", dir.display()))? {
        let entry = entry.context("read case entry")?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            continue;
        }
        cases.push(CaseFile::load(&path)?);
    }
    cases.sort_by(|left, right| left.case.id.cmp(&right.case.id));
    for pair in cases.windows(2) {
        if pair[0].case.id == pair[1].case.id {
            return Err(anyhow!("duplicate case.id {}", pair[0].case.id));
        }
    }
    Ok(cases)
}

pub(crate) fn validate_case_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("case.id must be non-empty");
    }
    if id.contains('/') || id.contains('\\') {
        bail!("case.id must not contain path separators");
    }
    if id.contains("..") {
        bail!("case.id must not contain '..'");
    }
    if !id
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        bail!("case.id must use [a-z0-9_-] only");
    }
    Ok(())
}
