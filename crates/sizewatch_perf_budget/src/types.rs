/// Whether a measured value is raw bytes on disk or the gzipped transfer
/// size. Bundle budgets are gzipped-size limits; only the total build size is
/// checked raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    Raw,
    Gzipped,
}

impl SizeKind {
    pub fn label(&self) -> &'static str {
        match self {
            SizeKind::Raw => "raw",
            SizeKind::Gzipped => "gzipped",
        }
    }
}

/// The result of comparing one measured value against one budget.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub label: String,
    pub actual: u64,
    pub budget: u64,
    /// Percent of budget used; 0 when the budget itself is 0.
    pub percent_used: f64,
    pub passed: bool,
    pub kind: SizeKind,
}

/// How a budget category fared in one run.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryOutcome {
    /// Every matching artifact was measured and evaluated.
    Checked(Vec<Verdict>),
    /// No file matched the category. Reported as skipped with a warning and
    /// excluded from the overall pass/fail aggregate.
    Missing,
    /// Measurement failed for a file that exists. Always counts as a budget
    /// failure so a broken build cannot pass as a suspiciously small bundle.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    pub name: &'static str,
    pub outcome: CategoryOutcome,
}

impl CategoryReport {
    /// Pass/fail for this category, or `None` when it was skipped.
    pub fn passed(&self) -> Option<bool> {
        match &self.outcome {
            CategoryOutcome::Checked(verdicts) => Some(verdicts.iter().all(|v| v.passed)),
            CategoryOutcome::Missing => None,
            CategoryOutcome::Failed(_) => Some(false),
        }
    }
}

/// The aggregate of all category reports for one invocation, in the fixed
/// evaluation order: vendor, main, components, icons, css, total.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRun {
    pub categories: Vec<CategoryReport>,
    pub files_measured: usize,
}

impl CheckRun {
    /// Logical AND over every category that was actually evaluated; skipped
    /// categories do not participate.
    pub fn overall_pass(&self) -> bool {
        self.categories.iter().filter_map(|c| c.passed()).all(|passed| passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(passed: bool) -> Verdict {
        Verdict {
            label: "chunk".to_string(),
            actual: if passed { 10 } else { 20 },
            budget: 15,
            percent_used: 0.0,
            passed,
            kind: SizeKind::Gzipped,
        }
    }

    #[test]
    fn test_overall_pass_all_checked_passing() {
        let run = CheckRun {
            categories: vec![
                CategoryReport { name: "a", outcome: CategoryOutcome::Checked(vec![verdict(true)]) },
                CategoryReport { name: "b", outcome: CategoryOutcome::Checked(vec![verdict(true)]) },
            ],
            files_measured: 2,
        };
        assert!(run.overall_pass());
    }

    #[test]
    fn test_overall_pass_excludes_missing_categories() {
        let run = CheckRun {
            categories: vec![
                CategoryReport { name: "a", outcome: CategoryOutcome::Checked(vec![verdict(true)]) },
                CategoryReport { name: "b", outcome: CategoryOutcome::Missing },
            ],
            files_measured: 1,
        };
        assert!(run.overall_pass());
    }

    #[test]
    fn test_overall_pass_fails_on_any_failing_verdict() {
        let run = CheckRun {
            categories: vec![
                CategoryReport { name: "a", outcome: CategoryOutcome::Checked(vec![verdict(true)]) },
                CategoryReport {
                    name: "b",
                    outcome: CategoryOutcome::Checked(vec![verdict(true), verdict(false)]),
                },
            ],
            files_measured: 3,
        };
        assert!(!run.overall_pass());
    }

    #[test]
    fn test_overall_pass_fails_on_measurement_failure() {
        let run = CheckRun {
            categories: vec![CategoryReport {
                name: "a",
                outcome: CategoryOutcome::Failed("could not read file".to_string()),
            }],
            files_measured: 0,
        };
        assert!(!run.overall_pass());
    }
}
