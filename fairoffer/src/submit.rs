//! The submission pipeline: freeze the answers, derive the offer, persist.
//!
//! Persistence goes through the [`SubmissionStore`] collaborator so the
//! engine stays ignorant of the storage medium. [`MemoryStore`] is provided
//! for tests and demos.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{AnswerRecord, estimate};

/// A finalized submission: the frozen answers plus the derived offer.
///
/// Built once at the end of the pipeline and treated as immutable; a later
/// submission under the same key simply replaces the stored result.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    /// Snapshot of the answers at submit time.
    pub record: AnswerRecord,

    /// The provisional cash offer, in whole dollars.
    pub estimated_offer: u64,
}

/// Error produced by a submission attempt.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// A previous submission on this pipeline has not finished yet.
    /// Retry once it resolves.
    #[error("a submission is already in flight")]
    InFlight,

    /// The store failed or rejected the write. The in-memory answers are
    /// untouched, so the same submission can be retried as-is.
    #[error("submission store failed: {0}")]
    Store(#[from] anyhow::Error),
}

/// Collaborator that persists finalized submissions.
///
/// Implementations must make each `put` atomic: a failed write leaves no
/// partial record behind. Key format and storage medium are entirely the
/// implementation's business.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist a result under a key, replacing any previous result there.
    async fn put(&self, key: &str, result: &SubmissionResult) -> anyhow::Result<()>;
}

/// An in-memory [`SubmissionStore`] for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, SubmissionResult>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored result by key.
    pub async fn get(&self, key: &str) -> Option<SubmissionResult> {
        self.entries.lock().await.get(key).cloned()
    }

    /// Number of stored results.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Check whether nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn put(&self, key: &str, result: &SubmissionResult) -> anyhow::Result<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), result.clone());
        Ok(())
    }
}

/// Runs the finalize-estimate-persist sequence for a session.
///
/// The pipeline admits at most one in-flight submission: a second attempt
/// while one is pending fails fast with [`SubmitError::InFlight`] instead
/// of racing two writes to the store. Backward navigation and data entry
/// are unaffected — they live on the session, which the pipeline only
/// reads.
#[derive(Debug, Default)]
pub struct SubmissionPipeline {
    gate: Mutex<()>,
}

impl SubmissionPipeline {
    /// Create a pipeline with no submission in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a record: snapshot it, derive the offer, persist the result.
    ///
    /// On success the stored [`SubmissionResult`] is returned. On store
    /// failure the error is recoverable — the caller's record is untouched
    /// and the same call may be retried.
    pub async fn submit<S>(
        &self,
        key: &str,
        record: &AnswerRecord,
        store: &S,
    ) -> Result<SubmissionResult, SubmitError>
    where
        S: SubmissionStore + ?Sized,
    {
        let _guard = self.gate.try_lock().map_err(|_| SubmitError::InFlight)?;

        // Frozen snapshot: later edits to the session are invisible here.
        let record = record.clone();
        let estimated_offer = estimate(&record);
        let result = SubmissionResult {
            record,
            estimated_offer,
        };

        tracing::debug!(key, estimated_offer, "persisting submission");
        if let Err(error) = store.put(key, &result).await {
            tracing::warn!(key, %error, "submission store failed");
            return Err(SubmitError::Store(error));
        }

        tracing::info!(key, estimated_offer, "submission stored");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Condition;

    struct FailingStore;

    #[async_trait]
    impl SubmissionStore for FailingStore {
        async fn put(&self, _key: &str, _result: &SubmissionResult) -> anyhow::Result<()> {
            anyhow::bail!("disk on fire")
        }
    }

    fn filled_record() -> AnswerRecord {
        AnswerRecord {
            current_value: "$250,000 - $500,000".to_string(),
            condition: Some(Condition::Good),
            first_name: "Sarah".to_string(),
            ..AnswerRecord::default()
        }
    }

    #[tokio::test]
    async fn submit_stores_the_result_with_the_offer() {
        let store = MemoryStore::new();
        let pipeline = SubmissionPipeline::new();
        let record = filled_record();

        let result = pipeline.submit("session-1", &record, &store).await.unwrap();
        assert_eq!(result.estimated_offer, 337_500);
        assert_eq!(result.record, record);
        assert_eq!(store.get("session-1").await, Some(result));
    }

    #[tokio::test]
    async fn store_failure_is_recoverable() {
        let pipeline = SubmissionPipeline::new();
        let record = filled_record();

        let error = pipeline
            .submit("session-1", &record, &FailingStore)
            .await
            .unwrap_err();
        assert!(matches!(error, SubmitError::Store(_)));

        // The record is untouched; a retry against a healthy store succeeds.
        let store = MemoryStore::new();
        let result = pipeline.submit("session-1", &record, &store).await.unwrap();
        assert_eq!(result.estimated_offer, 337_500);
    }

    #[tokio::test]
    async fn second_submit_while_pending_is_rejected() {
        let pipeline = SubmissionPipeline::new();
        let guard = pipeline.gate.try_lock().unwrap();

        let error = pipeline
            .submit("session-1", &filled_record(), &MemoryStore::new())
            .await
            .unwrap_err();
        assert!(matches!(error, SubmitError::InFlight));

        drop(guard);
        assert!(
            pipeline
                .submit("session-1", &filled_record(), &MemoryStore::new())
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn resubmission_overwrites_the_stored_result() {
        let store = MemoryStore::new();
        let pipeline = SubmissionPipeline::new();

        let mut record = filled_record();
        pipeline.submit("session-1", &record, &store).await.unwrap();

        record.condition = Some(Condition::Poor);
        pipeline.submit("session-1", &record, &store).await.unwrap();

        assert_eq!(store.len().await, 1);
        let stored = store.get("session-1").await.unwrap();
        assert_eq!(stored.estimated_offer, 281_250);
    }

    #[tokio::test]
    async fn snapshot_is_frozen_at_submit_time() {
        let store = MemoryStore::new();
        let pipeline = SubmissionPipeline::new();

        let mut record = filled_record();
        let result = pipeline.submit("session-1", &record, &store).await.unwrap();

        record.first_name = "Someone Else".to_string();
        assert_eq!(result.record.first_name, "Sarah");
    }
}
