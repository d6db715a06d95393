use crate::domain::job::{Job, JobField, Report};
use crate::domain::payout::{Payout, Totals, aggregate, calculate};
use crate::error::{CommissionError, Result};

/// The live list of jobs being edited.
///
/// Figures are never cached: every call to [`Worksheet::payouts`] or
/// [`Worksheet::totals`] recomputes from the raw fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    jobs: Vec<Job>,
}

impl Default for Worksheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Worksheet {
    /// Starts with a single empty job.
    pub fn new() -> Self {
        Self {
            jobs: vec![Job::new(1)],
        }
    }

    /// Wraps an existing list, e.g. one read from CSV.
    pub fn from_jobs(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn into_jobs(self) -> Vec<Job> {
        self.jobs
    }

    /// Appends an empty job and returns its id, one past the largest in use.
    ///
    /// If the largest id is `u32::MAX`, the smallest unused id is taken instead.
    pub fn add_job(&mut self) -> u32 {
        let largest = self.jobs.iter().map(|job| job.id).max().unwrap_or(0);
        let id = largest.checked_add(1).unwrap_or_else(|| {
            (1..=u32::MAX)
                .find(|id| self.jobs.iter().all(|job| job.id != *id))
                .unwrap_or(0)
        });
        self.jobs.push(Job::new(id));
        id
    }

    /// Removes the job with `id`. Returns whether anything was removed.
    pub fn remove_job(&mut self, id: u32) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|job| job.id != id);
        self.jobs.len() != before
    }

    /// Replaces one field of the job at `index`.
    pub fn update(&mut self, index: usize, field: JobField, value: impl Into<String>) -> Result<()> {
        let job = self.jobs.get_mut(index).ok_or_else(|| {
            CommissionError::Validation(format!("No job at position {}", index + 1))
        })?;
        job.set(field, value);
        Ok(())
    }

    /// Replaces the whole list with a copy of a saved report's jobs.
    pub fn load_report(&mut self, report: &Report) {
        self.jobs = report.calculators.clone();
    }

    pub fn payouts(&self) -> Vec<Payout> {
        self.jobs.iter().map(calculate).collect()
    }

    pub fn totals(&self) -> Totals {
        aggregate(&self.jobs)
    }
}
