//! Command-line entry point: serve the check API, or check one submission
//! and write the report sheets to disk.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use saitaku::check;
use saitaku::config;
use saitaku::dataset::Table;
use saitaku::reference::ReferenceData;
use saitaku::report;

#[derive(Parser)]
#[command(name = "saitaku", version, about = "教科書選定理由書チェッカー")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the check API.
    Serve {
        /// Listen address.
        #[arg(long, default_value = config::DEFAULT_LISTEN_ADDR)]
        addr: SocketAddr,
    },
    /// Check one submission CSV and write the report sheets.
    Check {
        /// Submission CSV (the 別紙様式２ export).
        submission: PathBuf,
        /// Output directory for the report sheets.
        #[arg(long, default_value = "saitaku-report")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    saitaku::init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { addr } => match saitaku::run(addr).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
        Command::Check { submission, out } => check_once(&submission, &out),
    }
}

/// One-shot check. Configuration errors and input-shape errors both end
/// the run here; only the former means the installation is broken.
fn check_once(submission: &Path, out: &Path) -> ExitCode {
    let reference = match ReferenceData::load(&config::catalog_path(), &config::guidelines_path())
    {
        Ok(reference) => reference,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let result = Table::from_path(submission)
        .map_err(check::SubmissionError::from)
        .and_then(|table| check::parse_submission(&table));
    let rows = match result {
        Ok(rows) => rows,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let report_data = check::run_checks(&reference, &rows);
    let summary = report::summarize(&report_data);

    if let Err(err) = report::write_csv_dir(&report_data, out) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    println!(
        "行数: {} / 総合要確認: {} / 違反候補: {} / 誤字脱字候補: {}",
        summary.row_count, summary.needs_review, summary.violation_count, summary.unknown_word_count
    );
    println!("レポートを書き出しました: {}", out.display());

    ExitCode::SUCCESS
}
