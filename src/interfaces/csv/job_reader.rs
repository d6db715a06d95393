use crate::domain::job::{Job, JobField};
use crate::error::{CommissionError, Result};
use csv::StringRecord;
use std::io::Read;

/// Column a header maps to.
#[derive(Debug, Clone, Copy)]
enum Column {
    Id,
    Field(JobField),
    Ignored,
}

/// Reads jobs from a CSV source.
///
/// Headers may use the report names (`contractAmount`) or snake_case
/// (`contract_amount`); unknown columns are ignored and missing ones stay empty.
/// Cells are kept as raw text, exactly like typed input. A row without a usable
/// `id` gets its 1-based row number.
pub struct JobReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> JobReader<R> {
    /// Creates a new `JobReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads jobs, one per record.
    pub fn jobs(mut self) -> Result<impl Iterator<Item = Result<Job>>> {
        let columns: Vec<Column> = self.reader.headers()?.iter().map(column_for).collect();
        if !columns.iter().any(|c| matches!(c, Column::Field(_))) {
            return Err(CommissionError::Validation(
                "CSV header names no job fields".to_string(),
            ));
        }

        Ok(self
            .reader
            .into_records()
            .enumerate()
            .map(move |(row, record)| {
                record
                    .map_err(CommissionError::from)
                    .map(|record| job_from_record(&columns, &record, row))
            }))
    }
}

fn column_for(header: &str) -> Column {
    if header.eq_ignore_ascii_case("id") {
        return Column::Id;
    }
    header
        .parse::<JobField>()
        .map(Column::Field)
        .unwrap_or(Column::Ignored)
}

fn job_from_record(columns: &[Column], record: &StringRecord, row: usize) -> Job {
    let mut job = Job::default();
    for (column, cell) in columns.iter().zip(record.iter()) {
        match column {
            Column::Id => job.id = cell.parse().unwrap_or(0),
            Column::Field(field) => job.set(*field, cell),
            Column::Ignored => {}
        }
    }
    if job.id == 0 {
        job.id = u32::try_from(row + 1).unwrap_or(u32::MAX);
    }
    job
}
