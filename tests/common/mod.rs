#![allow(dead_code)]

use profit_share::domain::job::{Job, JobField};
use rand::Rng;
use std::io::Error;
use std::path::Path;

pub fn write_jobs_csv(path: &Path, jobs: &[Job]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;

    let mut header = vec!["id"];
    header.extend(JobField::ALL.iter().map(|field| field.name()));
    wtr.write_record(&header)?;

    for job in jobs {
        let mut record = vec![job.id.to_string()];
        record.extend(JobField::ALL.iter().map(|field| job.get(*field).to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// A job with plausible random figures; counts may be zero.
pub fn random_job<R: Rng>(rng: &mut R, id: u32) -> Job {
    let mut job = Job::new(id);
    let cash = rng.gen_range(0..20_000);
    let finance = rng.gen_range(0..15_000);
    let card = rng.gen_range(0..5_000);

    job.set(JobField::CustomerName, format!("Customer {}", id));
    job.set(JobField::ContractAmount, (cash + finance + card).to_string());
    job.set(JobField::CashCheck, format!("${}", cash));
    job.set(JobField::FinanceAmount, finance.to_string());
    job.set(JobField::DealerFee, format!("{}%", rng.gen_range(0..12)));
    job.set(JobField::CreditCard, card.to_string());
    job.set(JobField::CreditCardFee, format!("{}.5%", rng.gen_range(0..4)));
    job.set(JobField::HouseFeePercent, rng.gen_range(0..15).to_string());
    job.set(JobField::LaborMaterial, rng.gen_range(0..25_000).to_string());
    job.set(JobField::RideAlong, rng.gen_range(0..500).to_string());
    job.set(JobField::RideAlongBonus, rng.gen_range(0..200).to_string());
    job.set(JobField::NumRideAlongs, rng.gen_range(0..3).to_string());
    job.set(JobField::NumVets, rng.gen_range(0..3).to_string());
    job.set(JobField::NumReps, rng.gen_range(0..4).to_string());
    job
}

pub fn random_jobs(count: u32) -> Vec<Job> {
    let mut rng = rand::thread_rng();
    (1..=count).map(|id| random_job(&mut rng, id)).collect()
}
