use std::io::{self, Write};

use colored::Colorize;
use log::debug;
use sizewatch_core::{PerformanceBudgets, format_bytes};

use crate::types::{CategoryOutcome, CategoryReport, CheckRun, Verdict};

/// Static advice printed when any budget fails. Not data-driven.
const OPTIMIZATION_HINTS: &[&str] = &[
    "Check for new dependencies that might increase bundle size",
    "Ensure tree-shaking is working correctly",
    "Consider code splitting for large features",
    "Review lazy loading implementation",
    "Inspect the build composition with the bundle analyzer report",
];

fn print_verdict<W: Write>(writer: &mut W, verdict: &Verdict) -> io::Result<()> {
    let marker = if verdict.passed { "✓".green().bold() } else { "✗".red().bold() };
    let actual = format_bytes(verdict.actual);
    let percent = format!("{:.1}%", verdict.percent_used);

    writeln!(
        writer,
        "  {} {}: {} ({}) / {} budget, {} used",
        marker,
        verdict.label,
        if verdict.passed { actual.green() } else { actual.red() },
        verdict.kind.label(),
        format_bytes(verdict.budget),
        if verdict.passed { percent.green() } else { percent.red() },
    )
}

fn print_category<W: Write>(writer: &mut W, category: &CategoryReport) -> io::Result<()> {
    writeln!(writer, "\n{}", format!("{}:", category.name).blue().bold())?;
    match &category.outcome {
        CategoryOutcome::Checked(verdicts) => {
            for verdict in verdicts {
                print_verdict(writer, verdict)?;
            }
        }
        CategoryOutcome::Missing => {
            writeln!(writer, "  {} no matching file found, skipped", "⚠".yellow().bold())?;
        }
        CategoryOutcome::Failed(reason) => {
            writeln!(writer, "  {} {}", "✗".red().bold(), reason.red())?;
        }
    }
    Ok(())
}

/// Print the full check report: one section per category in evaluation
/// order, then a summary with optimization hints when anything failed.
pub fn print_report<W: Write>(writer: &mut W, run: &CheckRun) -> io::Result<()> {
    debug!("Printing report for {} categories", run.categories.len());

    writeln!(writer, "\n{}", "Performance Budget Check".bold())?;
    writeln!(writer, "{}", "─".repeat(60).dimmed())?;

    for category in &run.categories {
        print_category(writer, category)?;
    }

    writeln!(writer, "\n{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;

    if run.overall_pass() {
        writeln!(writer, "  {} All performance budgets passed.", "✓".green().bold())?;
        writeln!(writer, "  Your build is optimized and ready for production.")?;
    } else {
        writeln!(writer, "  {} Some performance budgets failed.", "✗".red().bold())?;
        writeln!(writer, "  Please optimize your build before committing.\n")?;
        writeln!(writer, "  Optimization tips:")?;
        for hint in OPTIMIZATION_HINTS {
            writeln!(writer, "  - {}", hint)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// The bundle budget table as shown in `--help` output.
pub fn budget_summary(budgets: &PerformanceBudgets) -> String {
    let sizes = &budgets.bundle_sizes;
    let lines = [
        "Performance budgets:".to_string(),
        format!("  Vendor bundle:    {} (gzipped)", format_bytes(sizes.vendor_chunk)),
        format!("  Main app:         {} (gzipped)", format_bytes(sizes.main_app)),
        format!("  Component chunks: {} each (gzipped)", format_bytes(sizes.component_chunk)),
        format!("  Icons chunk:      {} (gzipped)", format_bytes(sizes.icon_chunk)),
        format!("  CSS bundle:       {} (gzipped)", format_bytes(sizes.css_bundle)),
        format!("  Total build:      {}", format_bytes(sizes.total_build)),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;
    use crate::types::SizeKind;

    fn render(run: &CheckRun) -> String {
        let mut out = Vec::new();
        print_report(&mut out, run).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_shows_percentages_and_budgets() {
        let run = CheckRun {
            categories: vec![CategoryReport {
                name: "Vendor bundle",
                outcome: CategoryOutcome::Checked(vec![evaluate(
                    "Vendor chunk",
                    140_000,
                    153_600,
                    SizeKind::Gzipped,
                )]),
            }],
            files_measured: 1,
        };

        let output = render(&run);
        assert!(output.contains("Vendor bundle:"));
        assert!(output.contains("136.7 KB"));
        assert!(output.contains("150 KB"));
        assert!(output.contains("91.1%"));
        assert!(output.contains("gzipped"));
        assert!(output.contains("All performance budgets passed."));
    }

    #[test]
    fn test_report_failure_prints_optimization_hints() {
        let run = CheckRun {
            categories: vec![CategoryReport {
                name: "Vendor bundle",
                outcome: CategoryOutcome::Checked(vec![evaluate(
                    "Vendor chunk",
                    160_000,
                    153_600,
                    SizeKind::Gzipped,
                )]),
            }],
            files_measured: 1,
        };

        let output = render(&run);
        assert!(output.contains("104.2%"));
        assert!(output.contains("Some performance budgets failed."));
        for hint in OPTIMIZATION_HINTS {
            assert!(output.contains(hint));
        }
    }

    #[test]
    fn test_report_marks_missing_category_as_skipped() {
        let run = CheckRun {
            categories: vec![CategoryReport {
                name: "Icons chunk",
                outcome: CategoryOutcome::Missing,
            }],
            files_measured: 0,
        };

        let output = render(&run);
        assert!(output.contains("no matching file found, skipped"));
        assert!(output.contains("All performance budgets passed."));
    }

    #[test]
    fn test_report_prints_measurement_failure_reason() {
        let run = CheckRun {
            categories: vec![CategoryReport {
                name: "CSS bundle",
                outcome: CategoryOutcome::Failed("could not read dist/assets/a.css".to_string()),
            }],
            files_measured: 0,
        };

        let output = render(&run);
        assert!(output.contains("could not read dist/assets/a.css"));
        assert!(output.contains("Some performance budgets failed."));
    }

    #[test]
    fn test_budget_summary_lists_all_six_budgets() {
        let summary = budget_summary(&PerformanceBudgets::default());
        assert!(summary.contains("150 KB"));
        assert!(summary.contains("15 KB"));
        assert!(summary.contains("12 KB each"));
        assert!(summary.contains("8 KB"));
        assert!(summary.contains("25 KB"));
        assert!(summary.contains("250 KB"));
    }
}
