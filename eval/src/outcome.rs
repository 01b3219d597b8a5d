use serde::{Deserialize, Serialize};

use crate::judge::Judgment;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Fail,
}

pub fn classify_outcome(judgment: &Judgment) -> Outcome {
    if judgment.checks.iter().all(|check| check.passed()) {
        Outcome::Success
    } else {
        Outcome::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::CheckOutcome;

    fn judgment(passes: &[bool]) -> Judgment {
        Judgment {
            checks: passes
                .iter()
                .map(|passed| CheckOutcome::Rejects {
                    args: Vec::new(),
                    actual: None,
                    error: None,
                    passed: *passed,
                })
                .collect(),
        }
    }

    #[test]
    fn success_when_all_checks_pass() {
        assert_eq!(classify_outcome(&judgment(&[true, true])), Outcome::Success);
    }

    #[test]
    fn fail_when_any_check_fails() {
        assert_eq!(classify_outcome(&judgment(&[true, false])), Outcome::Fail);
    }
}
