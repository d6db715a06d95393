pub mod job_reader;
pub mod payout_writer;
