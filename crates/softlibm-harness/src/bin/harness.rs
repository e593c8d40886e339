//! CLI entrypoint for the softlibm conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use softlibm_harness::capture::{self, FAMILIES};
use softlibm_harness::fixtures::FixtureSet;
use softlibm_harness::report::ConformanceReport;
use softlibm_harness::runner::TestRunner;
use softlibm_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use softlibm_harness::verify::VerificationSummary;

/// Conformance tooling for softlibm.
#[derive(Debug, Parser)]
#[command(name = "softlibm-harness")]
#[command(about = "Conformance testing harness for softlibm")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Capture host reference behavior as fixture files.
    Capture {
        /// Output directory for fixture JSON files.
        #[arg(long)]
        output: PathBuf,
        /// Function family to capture ("sqrt", "trig", "float", "pow",
        /// or "all").
        #[arg(long, default_value = "all")]
        family: String,
        /// Optional fixed timestamp string for deterministic output.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Verify the implementation against a captured fixture file.
    Verify {
        /// Fixture JSON file to run.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown). JSON is written alongside with
        /// a .json extension.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic reports.
        #[arg(long)]
        timestamp: Option<String>,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(all_passed) => {
            if all_passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("harness error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    match cli.command {
        Command::Capture {
            output,
            family,
            timestamp,
        } => {
            let stamp = timestamp.unwrap_or_else(default_timestamp);
            std::fs::create_dir_all(&output)?;
            let families: Vec<&str> = if family == "all" {
                FAMILIES.to_vec()
            } else {
                vec![family.as_str()]
            };
            for fam in families {
                let set = capture::capture_family(fam, &stamp)?;
                let path = output.join(format!("{fam}.json"));
                set.to_file(&path)?;
                println!("captured {} case(s) -> {}", set.cases.len(), path.display());
            }
            Ok(true)
        }
        Command::Verify {
            fixture,
            report,
            log,
            timestamp,
        } => {
            let fixture_json = std::fs::read_to_string(&fixture)?;
            let set = FixtureSet::from_json(&fixture_json)?;
            let stamp = timestamp.unwrap_or_else(default_timestamp);

            let runner = TestRunner::new(format!("conformance/{}", set.family));
            let results = runner.run(&set);

            if let Some(log_path) = log {
                let mut emitter = LogEmitter::to_file(&log_path, &set.family)?;
                for r in &results {
                    let outcome = if r.passed { Outcome::Pass } else { Outcome::Fail };
                    let level = if r.passed { LogLevel::Info } else { LogLevel::Error };
                    emitter.emit_entry(
                        LogEntry::new("", level, "case_verified")
                            .with_symbol(&r.function)
                            .with_outcome(outcome)
                            .with_errno(r.actual_errno),
                    )?;
                }
                emitter.flush()?;
            }

            let summary = VerificationSummary::from_results(results);
            let conformance = ConformanceReport::new(
                format!("softlibm conformance: {}", set.family),
                runner.campaign.clone(),
                stamp,
                &fixture_json,
                summary,
            );

            let all_passed = conformance.summary.all_passed();
            println!(
                "{}: {}/{} passed",
                set.family, conformance.summary.passed, conformance.summary.total
            );
            if let Some(md_path) = report {
                std::fs::write(&md_path, conformance.to_markdown())?;
                let json_path = md_path.with_extension("json");
                std::fs::write(&json_path, conformance.to_json())?;
                println!("report -> {}", md_path.display());
            } else {
                print!("{}", conformance.to_markdown());
            }
            Ok(all_passed)
        }
    }
}

fn default_timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("unix:{secs}")
}
