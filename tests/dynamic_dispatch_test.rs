use async_trait::async_trait;
use profit_share::application::reports::ReportBook;
use profit_share::domain::job::{Job, JobField};
use profit_share::domain::ports::{KeyValueStore, KeyValueStoreBox};
use profit_share::error::{CommissionError, Result};
use profit_share::infrastructure::in_memory::InMemoryStore;
use profit_share::infrastructure::json_file::JsonFileStore;

/// A store whose every call fails, standing in for unavailable storage.
struct UnavailableStore;

#[async_trait]
impl KeyValueStore for UnavailableStore {
    async fn list(&self, _prefix: &str) -> Result<Vec<String>> {
        Err(CommissionError::InternalError("storage offline".into()))
    }
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(CommissionError::InternalError("storage offline".into()))
    }
    async fn set(&self, _key: &str, _value: String) -> Result<()> {
        Err(CommissionError::InternalError("storage offline".into()))
    }
    async fn delete(&self, _key: &str) -> Result<()> {
        Err(CommissionError::InternalError("storage offline".into()))
    }
}

#[tokio::test]
async fn test_stores_as_trait_objects() {
    let dir = tempfile::tempdir().unwrap();
    let stores: Vec<KeyValueStoreBox> = vec![
        Box::new(InMemoryStore::new()),
        Box::new(JsonFileStore::open(dir.path().join("reports.json")).unwrap()),
    ];

    // Verify Send + Sync by spawning tasks
    let handles: Vec<_> = stores
        .into_iter()
        .map(|store| {
            tokio::spawn(async move {
                store.set("report:1", "value".to_string()).await.unwrap();
                store.get("report:1").await.unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().as_deref(), Some("value"));
    }
}

#[tokio::test]
async fn test_report_book_round_trip_through_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports.json");

    let mut job = Job::new(1);
    job.set(JobField::CustomerName, "Nguyen");
    job.set(JobField::CreditCard, "1,500.");
    job.set(JobField::CreditCardFee, "2.9%");
    let jobs = vec![job, Job::new(2)];

    let key = {
        let book = ReportBook::new(Box::new(JsonFileStore::open(&path).unwrap()));
        book.save("Persisted", &jobs).await.unwrap()
    };

    let book = ReportBook::new(Box::new(JsonFileStore::open(&path).unwrap()));
    let saved = book.load_all().await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].key, key);
    assert_eq!(saved[0].report.calculators, jobs);
}

#[tokio::test]
async fn test_unavailable_store_degrades_to_empty_list() {
    let book = ReportBook::new(Box::new(UnavailableStore));

    assert!(book.load_all().await.is_err());
    assert!(book.load_all_or_empty().await.is_empty());
    assert!(matches!(
        book.save("Any", &[Job::new(1)]).await,
        Err(CommissionError::InternalError(_))
    ));
}
