//! Application layer orchestrating the domain.
//!
//! `Worksheet` owns the live, unsaved list of jobs the user is editing.
//! `ReportBook` persists snapshots of that list through an injected
//! [`KeyValueStore`](crate::domain::ports::KeyValueStore).

pub mod reports;
pub mod worksheet;
