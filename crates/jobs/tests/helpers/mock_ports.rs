#![allow(dead_code)]

use async_trait::async_trait;
use merge_dns_application::ports::{RecordDestination, RecordSource};
use merge_dns_domain::{DomainError, InfoValue, RecordPair, RecordSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock RecordSource
// ============================================================================

pub struct MockRecordSource {
    location: String,
    records: Arc<RwLock<RecordSet>>,
    fail_with_status: Arc<RwLock<Option<u16>>>,
    fail_fatally: Arc<AtomicBool>,
    call_count: Arc<AtomicU64>,
}

impl MockRecordSource {
    pub fn new(location: &str, records: RecordSet) -> Self {
        Self {
            location: location.to_string(),
            records: Arc::new(RwLock::new(records)),
            fail_with_status: Arc::new(RwLock::new(None)),
            fail_fatally: Arc::new(AtomicBool::new(false)),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set_records(&self, records: RecordSet) {
        *self.records.write().await = records;
    }

    pub async fn fail_with_status(&self, status: Option<u16>) {
        *self.fail_with_status.write().await = status;
    }

    /// Makes every read fail with an error that cannot be recovered from.
    pub fn set_fail_fatally(&self, fail: bool) {
        self.fail_fatally.store(fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn read(&self) -> Result<RecordSet, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_fatally.load(Ordering::SeqCst) {
            return Err(DomainError::Config(format!(
                "source `{}` is misconfigured",
                self.location
            )));
        }
        if let Some(status) = *self.fail_with_status.read().await {
            return Err(DomainError::HttpStatus {
                status,
                url: self.location.clone(),
            });
        }
        Ok(self.records.read().await.clone())
    }

    fn location(&self) -> &str {
        &self.location
    }
}

// ============================================================================
// Mock RecordDestination
// ============================================================================

pub struct MockDestination {
    stored: Arc<RwLock<Option<RecordSet>>>,
    write_count: Arc<AtomicU64>,
    fail_writes: Arc<RwLock<bool>>,
}

impl MockDestination {
    pub fn new() -> Self {
        Self {
            stored: Arc::new(RwLock::new(None)),
            write_count: Arc::new(AtomicU64::new(0)),
            fail_writes: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_version(version: u64) -> Self {
        let mut destination = Self::new();
        destination.stored = Arc::new(RwLock::new(Some(RecordSet {
            version,
            ..Default::default()
        })));
        destination
    }

    pub async fn stored(&self) -> Option<RecordSet> {
        self.stored.read().await.clone()
    }

    pub async fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.write().await = fail;
    }

    pub fn write_count(&self) -> u64 {
        self.write_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordDestination for MockDestination {
    async fn current_version(&self) -> Result<u64, DomainError> {
        Ok(self
            .stored
            .read()
            .await
            .as_ref()
            .map(|r| r.version)
            .unwrap_or(0))
    }

    async fn write(&self, records: &RecordSet) -> Result<(), DomainError> {
        if *self.fail_writes.read().await {
            return Err(DomainError::Io {
                path: "mock-destination".to_string(),
                reason: "disk full".to_string(),
            });
        }
        self.write_count.fetch_add(1, Ordering::SeqCst);
        *self.stored.write().await = Some(records.clone());
        Ok(())
    }

    fn location(&self) -> &str {
        "mock-destination"
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn make_records(entries: &[(&str, &str, &str)], version: u64) -> RecordSet {
    RecordSet {
        keys: vec!["deployment".to_string()],
        infos: entries
            .iter()
            .map(|(deployment, _, _)| vec![InfoValue::from(*deployment)])
            .collect(),
        records: entries
            .iter()
            .map(|(_, ip, domain)| RecordPair::new(*ip, *domain))
            .collect(),
        version,
        ..Default::default()
    }
}
