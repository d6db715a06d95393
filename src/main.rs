use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use profit_share::application::reports::ReportBook;
use profit_share::application::worksheet::Worksheet;
use profit_share::domain::format::{format_currency, format_percent, format_rate};
use profit_share::domain::job::Job;
use profit_share::domain::ports::KeyValueStoreBox;
use profit_share::infrastructure::json_file::JsonFileStore;
#[cfg(feature = "storage-rocksdb")]
use profit_share::infrastructure::rocksdb::RocksDBStore;
use profit_share::interfaces::csv::job_reader::JobReader;
use profit_share::interfaces::csv::payout_writer::PayoutWriter;
use profit_share::logging::init_logging;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding saved reports
    #[arg(
        long,
        global = true,
        env = "PROFIT_SHARE_STORE",
        default_value = "profit-share-reports.json"
    )]
    store: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, global = true, env = "PROFIT_SHARE_DB_PATH")]
    db_path: Option<PathBuf>,

    /// Log filter, e.g. "info" or "profit_share=debug". Defaults to RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the payout table for a jobs CSV file
    Calc {
        /// Input jobs CSV file
        input: PathBuf,
    },
    /// Print tiers and formatted totals for a jobs CSV file
    Summary {
        /// Input jobs CSV file
        input: PathBuf,
    },
    /// Save the jobs in a CSV file as a named report
    Save {
        /// Input jobs CSV file
        input: PathBuf,
        /// Report name
        #[arg(long)]
        name: String,
    },
    /// List saved reports
    List,
    /// Print the payout table for a saved report
    Show {
        /// Report key, e.g. report:1700000000000
        key: String,
    },
    /// Delete a saved report
    Delete {
        /// Report key, e.g. report:1700000000000
        key: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let stdout = io::stdout();
    match &cli.command {
        Command::Calc { input } => {
            let sheet = read_worksheet(input)?;
            PayoutWriter::new(stdout.lock())
                .write_jobs(sheet.jobs())
                .into_diagnostic()?;
        }
        Command::Summary { input } => {
            let sheet = read_worksheet(input)?;
            write_summary(&mut stdout.lock(), &sheet).into_diagnostic()?;
        }
        Command::Save { input, name } => {
            let sheet = read_worksheet(input)?;
            let book = ReportBook::new(open_store(&cli)?);
            let key = book.save(name, sheet.jobs()).await.into_diagnostic()?;
            println!("{}", key);
        }
        Command::List => {
            let reports = match open_store(&cli) {
                Ok(store) => ReportBook::new(store).load_all_or_empty().await,
                Err(e) => {
                    warn!(error = %e, "could not open report store");
                    Vec::new()
                }
            };

            let mut writer = csv::Writer::from_writer(stdout.lock());
            writer
                .write_record(["key", "name", "date", "jobs"])
                .into_diagnostic()?;
            for saved in reports {
                writer
                    .write_record([
                        saved.key,
                        saved.report.name,
                        saved.report.date.to_rfc3339(),
                        saved.report.calculators.len().to_string(),
                    ])
                    .into_diagnostic()?;
            }
            writer.flush().into_diagnostic()?;
        }
        Command::Show { key } => {
            let book = ReportBook::new(open_store(&cli)?);
            let report = book.load(key).await.into_diagnostic()?;

            let mut sheet = Worksheet::from_jobs(Vec::new());
            sheet.load_report(&report);
            PayoutWriter::new(stdout.lock())
                .write_jobs(sheet.jobs())
                .into_diagnostic()?;
        }
        Command::Delete { key } => {
            let book = ReportBook::new(open_store(&cli)?);
            book.delete(key).await.into_diagnostic()?;
            println!("Deleted {}", key);
        }
    }

    Ok(())
}

fn open_store(cli: &Cli) -> Result<KeyValueStoreBox> {
    if let Some(db_path) = &cli.db_path {
        #[cfg(feature = "storage-rocksdb")]
        {
            let store = RocksDBStore::open(db_path).into_diagnostic()?;
            return Ok(Box::new(store));
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        warn!(
            db_path = %db_path.display(),
            "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to JSON file storage."
        );
    }

    let store = JsonFileStore::open(&cli.store).into_diagnostic()?;
    Ok(Box::new(store))
}

/// Reads a jobs CSV, skipping rows that cannot be read.
fn read_worksheet(path: &Path) -> Result<Worksheet> {
    let file = File::open(path).into_diagnostic()?;
    let mut jobs: Vec<Job> = Vec::new();
    for job in JobReader::new(file).jobs().into_diagnostic()? {
        match job {
            Ok(job) => jobs.push(job),
            Err(e) => warn!(error = %e, "Error reading job row"),
        }
    }
    Ok(Worksheet::from_jobs(jobs))
}

fn write_summary<W: Write>(out: &mut W, sheet: &Worksheet) -> io::Result<()> {
    for (job, payout) in sheet.jobs().iter().zip(sheet.payouts()) {
        writeln!(
            out,
            "Job {} ({} / {}): after fees {}, margin {}, vet rate {}, rep rate {}, combined {}, profit {}",
            job.id,
            label(&job.customer_name),
            label(&job.job_number),
            format_currency(payout.total_after_fees),
            format_percent(payout.percent_of_contract),
            format_rate(payout.tier.vet_rate),
            format_rate(payout.tier.rep_rate),
            format_currency(payout.combined_payout),
            format_currency(payout.profit),
        )?;
        writeln!(
            out,
            "    house fee {}, dealer fee {}, credit card fee {}, ride along per person {}",
            format_currency(payout.house_fee_amount),
            format_currency(payout.dealer_fee_amount),
            format_currency(payout.credit_card_fee_amount),
            format_currency(payout.per_person_ride_along),
        )?;
    }

    let totals = sheet.totals();
    writeln!(out, "TOTAL VET PAYOUT: {}", format_currency(totals.total_vet_payout))?;
    writeln!(out, "TOTAL REP PAYOUT: {}", format_currency(totals.total_rep_payout))?;
    writeln!(out, "COMBINED PAYOUT: {}", format_currency(totals.total_combined_payout()))?;
    writeln!(out, "RIDE ALONG PAYOUT: {}", format_currency(totals.total_ride_along_payout))?;
    writeln!(out, "TOTAL PROFIT: {}", format_currency(totals.total_profit()))?;
    Ok(())
}

fn label(value: &str) -> &str {
    if value.trim().is_empty() { "N/A" } else { value }
}
