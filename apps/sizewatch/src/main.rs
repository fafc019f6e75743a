use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use colored::Colorize;
use log::{debug, info};
use sizewatch_core::PerformanceBudgets;
use sizewatch_perf_budget::{Config, budget_summary, print_report, run_perf_budget_check};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "sizewatch")]
#[command(about = "Check front-end build output against performance budgets", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    /// Run in quiet mode (reserved)
    #[arg(short, long)]
    quiet: bool,

    /// Run in verbose mode (reserved)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    // --help shows the active budget table below the usage text
    let summary = budget_summary(&PerformanceBudgets::default());
    let matches = Cli::command().after_help(summary).get_matches();
    let cli = Cli::from_arg_matches(&matches)?;
    debug!("Parsed CLI arguments: {:?}", cli);

    // Reserved flags; RUST_LOG controls log volume for now
    debug!("quiet={}, verbose={}", cli.quiet, cli.verbose);

    let start = Instant::now();

    let run = match run_perf_budget_check(cli.config) {
        Ok(run) => run,
        Err(err) => {
            writeln!(stdout, "\n{} {:#}", "✗".red().bold(), err)?;
            stdout.flush()?;
            // Failed precondition or unexpected measurement error fails CI
            std::process::exit(1);
        }
    };

    print_report(&mut stdout, &run)?;

    let elapsed_ms = start.elapsed().as_millis();
    writeln!(
        stdout,
        "\n{} Finished in {}ms on {} files.",
        "●".bright_blue(),
        elapsed_ms.to_string().cyan(),
        run.files_measured.to_string().cyan()
    )?;
    stdout.flush()?;

    if !run.overall_pass() {
        info!("Budget violations detected");
        // Non-zero exit to fail CI
        std::process::exit(1);
    }

    Ok(())
}
