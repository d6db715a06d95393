use crate::domain::job::{Job, Report, SavedReport};
use crate::domain::ports::KeyValueStoreBox;
use crate::error::{CommissionError, Result};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::{debug, info, warn};

/// Key prefix shared by every persisted report.
pub const REPORT_PREFIX: &str = "report:";

/// Saves, lists, loads and deletes reports in a key/value store.
///
/// Reports are stored as JSON under `report:<unix millis>`. Keys handed out by
/// one `ReportBook` are strictly increasing, even when two saves land in the
/// same millisecond.
pub struct ReportBook {
    store: KeyValueStoreBox,
    last_stamp: AtomicI64,
}

impl ReportBook {
    pub fn new(store: KeyValueStoreBox) -> Self {
        Self {
            store,
            last_stamp: AtomicI64::new(i64::MIN),
        }
    }

    /// Snapshots `jobs` under `name` and returns the new storage key.
    pub async fn save(&self, name: &str, jobs: &[Job]) -> Result<String> {
        self.save_at(name, jobs, Utc::now()).await
    }

    /// Like [`ReportBook::save`] with an explicit timestamp.
    pub async fn save_at(&self, name: &str, jobs: &[Job], date: DateTime<Utc>) -> Result<String> {
        if name.trim().is_empty() {
            return Err(CommissionError::Validation(
                "Report name must not be empty".to_string(),
            ));
        }

        let report = Report::snapshot(name, date, jobs);
        let key = self.next_key(date);
        let value = serde_json::to_string(&report)?;
        self.store.set(&key, value).await?;

        info!(%key, report = name, jobs = jobs.len(), "saved report");
        Ok(key)
    }

    /// Loads every stored report, oldest first.
    ///
    /// Entries that vanish between listing and reading, or that do not parse,
    /// are skipped with a warning.
    pub async fn load_all(&self) -> Result<Vec<SavedReport>> {
        let keys = self.store.list(REPORT_PREFIX).await?;
        let mut reports = Vec::with_capacity(keys.len());

        for key in keys {
            match self.store.get(&key).await {
                Ok(Some(value)) => match serde_json::from_str::<Report>(&value) {
                    Ok(report) => reports.push(SavedReport { key, report }),
                    Err(e) => warn!(%key, error = %e, "skipping malformed report"),
                },
                Ok(None) => debug!(%key, "report disappeared while listing"),
                Err(e) => warn!(%key, error = %e, "skipping unreadable report"),
            }
        }

        Ok(reports)
    }

    /// [`ReportBook::load_all`], degrading to an empty list if the store fails.
    pub async fn load_all_or_empty(&self) -> Vec<SavedReport> {
        match self.load_all().await {
            Ok(reports) => reports,
            Err(e) => {
                warn!(error = %e, "could not list saved reports");
                Vec::new()
            }
        }
    }

    /// Loads a single report by key.
    pub async fn load(&self, key: &str) -> Result<Report> {
        let value = self
            .store
            .get(key)
            .await?
            .ok_or_else(|| CommissionError::ReportNotFound(key.to_string()))?;
        Ok(serde_json::from_str(&value)?)
    }

    /// Deletes a report. Fails with `ReportNotFound` if `key` holds no report.
    pub async fn delete(&self, key: &str) -> Result<()> {
        if !key.starts_with(REPORT_PREFIX) || self.store.get(key).await?.is_none() {
            return Err(CommissionError::ReportNotFound(key.to_string()));
        }
        self.store.delete(key).await?;
        info!(%key, "deleted report");
        Ok(())
    }

    fn next_key(&self, date: DateTime<Utc>) -> String {
        let now = date.timestamp_millis();
        let previous = self
            .last_stamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        let stamp = now.max(previous.saturating_add(1));
        format!("{}{}", REPORT_PREFIX, stamp)
    }
}
