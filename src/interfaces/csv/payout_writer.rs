use crate::domain::format::format_currency;
use crate::domain::job::Job;
use crate::domain::payout::{Payout, Totals, calculate};
use crate::error::Result;
use rust_decimal::Decimal;
use std::io::Write;

const HEADER: [&str; 14] = [
    "#",
    "customer",
    "job_number",
    "vets",
    "per_vet",
    "total_vets",
    "reps",
    "per_rep",
    "total_reps",
    "ride_alongs",
    "per_ride_along",
    "total_ride_along",
    "combined",
    "profit",
];

/// Writes the payout table as CSV: one row per job, then a `TOTAL` row.
///
/// Per-head columns are left blank for jobs without anyone in that role.
pub struct PayoutWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PayoutWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Computes and writes every job, followed by the totals.
    pub fn write_jobs(&mut self, jobs: &[Job]) -> Result<Totals> {
        self.writer.write_record(HEADER)?;

        let mut totals = Totals::default();
        for (index, job) in jobs.iter().enumerate() {
            let payout = calculate(job);
            self.write_job(index + 1, job, &payout)?;
            totals = totals + Totals::from(&payout);
        }

        self.writer.write_record([
            "TOTAL".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format_currency(totals.total_vet_payout),
            String::new(),
            String::new(),
            format_currency(totals.total_rep_payout),
            String::new(),
            String::new(),
            format_currency(totals.total_ride_along_payout),
            format_currency(totals.total_combined_payout()),
            format_currency(totals.total_profit()),
        ])?;
        self.writer.flush()?;
        Ok(totals)
    }

    fn write_job(&mut self, position: usize, job: &Job, payout: &Payout) -> Result<()> {
        let (vets, per_vet, total_vets) = role_cells(
            payout.num_vets,
            payout.final_per_vet_payout,
            payout.final_total_vets_payout,
        );
        let (reps, per_rep, total_reps) = role_cells(
            payout.num_reps,
            payout.final_per_rep_payout,
            payout.final_total_reps_payout,
        );
        let (ride_alongs, per_ride_along, total_ride_along) = role_cells(
            payout.num_ride_alongs,
            payout.per_ride_along_payout,
            payout.total_ride_along_payout,
        );

        self.writer.write_record([
            position.to_string(),
            or_na(&job.customer_name),
            or_na(&job.job_number),
            vets,
            per_vet,
            total_vets,
            reps,
            per_rep,
            total_reps,
            ride_alongs,
            per_ride_along,
            total_ride_along,
            format_currency(payout.combined_payout),
            format_currency(payout.profit),
        ])?;
        Ok(())
    }
}

fn or_na(value: &str) -> String {
    if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

fn role_cells(count: Decimal, each: Decimal, total: Decimal) -> (String, String, String) {
    if count > Decimal::ZERO {
        (
            count.normalize().to_string(),
            format_currency(each),
            format_currency(total),
        )
    } else {
        (String::new(), String::new(), String::new())
    }
}
