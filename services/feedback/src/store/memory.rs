//! In-memory implementation of the feedback store.
//!
//! # Purpose
//! Keeps every feedback record in process memory for the lifetime of the
//! service. It is the only backend: workshop feedback does not need to survive
//! a restart.
//!
//! # Durability and consistency
//! - **Not durable**: all records are lost on process restart.
//! - The id counter and the record list live behind one `tokio::sync::RwLock`.
//!   `create` holds the write lock across "read counter, increment, insert",
//!   so concurrent submissions on the multi-threaded runtime never share an id.
//! - Reads take the read lock and clone the records they return.
//!
//! # Metrics
//! `feedback_records_total` tracks the number of stored records.
use super::{FeedbackStore, StoreError, StoreResult};
use crate::model::{Feedback, FeedbackSummary, NewFeedback, SessionNumber};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Insertion-ordered record list plus the next id to hand out.
///
/// Ids are assigned in insertion order, so `records` is always sorted by id.
#[derive(Debug)]
struct FeedbackLog {
    next_id: u64,
    records: Vec<Feedback>,
}

impl FeedbackLog {
    fn new() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }

    fn append(&mut self, feedback: NewFeedback) -> Feedback {
        let id = self.next_id;
        self.next_id += 1;
        let record = feedback.into_feedback(id, Utc::now());
        self.records.push(record.clone());
        record
    }

    fn find(&self, id: u64) -> Option<&Feedback> {
        self.records
            .binary_search_by_key(&id, |record| record.id)
            .ok()
            .map(|index| &self.records[index])
    }
}

/// Process-lifetime feedback store.
///
/// Cloning shares the same underlying records.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    log: Arc<RwLock<FeedbackLog>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            log: Arc::new(RwLock::new(FeedbackLog::new())),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedbackStore for InMemoryStore {
    async fn create(&self, feedback: NewFeedback) -> StoreResult<Feedback> {
        let mut log = self.log.write().await;
        let record = log.append(feedback);
        metrics::gauge!("feedback_records_total").set(log.records.len() as f64);
        Ok(record)
    }

    async fn get_by_id(&self, id: u64) -> StoreResult<Feedback> {
        self.log
            .read()
            .await
            .find(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("feedback {id}")))
    }

    async fn get_all(&self) -> StoreResult<Vec<Feedback>> {
        Ok(self.log.read().await.records.clone())
    }

    async fn get_by_session(&self, session: SessionNumber) -> StoreResult<Vec<Feedback>> {
        Ok(self
            .log
            .read()
            .await
            .records
            .iter()
            .filter(|record| record.session_number == session)
            .cloned()
            .collect())
    }

    async fn summary(&self, session: Option<SessionNumber>) -> StoreResult<FeedbackSummary> {
        let log = self.log.read().await;
        Ok(FeedbackSummary::from_records(session, &log.records))
    }

    async fn health_check(&self) -> StoreResult<()> {
        // Nothing external to probe; only check the lock can be taken.
        let _log = self.log.read().await;
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn submission(name: &str, session: i64, rating: u8) -> NewFeedback {
        NewFeedback {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            session_number: SessionNumber::new(session).expect("session"),
            rating,
            comments: None,
            suggestions: None,
        }
    }

    #[tokio::test]
    async fn ids_start_at_one_and_increase() {
        let store = InMemoryStore::new();
        let first = store.create(submission("Jo", 3, 5)).await.expect("create");
        let second = store.create(submission("Sam", 1, 4)).await.expect("create");
        let third = store.create(submission("Ana", 3, 2)).await.expect("create");
        assert_eq!(
            [first.id, second.id, third.id],
            [1, 2, 3],
            "ids are assigned in order"
        );
        assert!(first.created_at <= second.created_at);
    }

    #[tokio::test]
    async fn get_by_id_returns_created_record() {
        let store = InMemoryStore::new();
        let created = store.create(submission("Jo", 3, 5)).await.expect("create");
        let fetched = store.get_by_id(created.id).await.expect("get");
        assert_eq!(fetched, created);

        let err = store.get_by_id(42).await.expect_err("missing");
        assert!(matches!(err, StoreError::NotFound(_)));
        let err = store.get_by_id(0).await.expect_err("missing");
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_by_session_is_ordered_subset_of_get_all() {
        let store = InMemoryStore::new();
        for (name, session) in [("A", 2), ("B", 5), ("C", 2), ("D", 7), ("E", 2)] {
            store
                .create(submission(name, session, 4))
                .await
                .expect("create");
        }
        let all = store.get_all().await.expect("all");
        assert_eq!(all.len(), 5);
        for session in SessionNumber::all() {
            let subset = store.get_by_session(session).await.expect("session");
            let expected: Vec<_> = all
                .iter()
                .filter(|record| record.session_number == session)
                .cloned()
                .collect();
            assert_eq!(subset, expected);
        }
        let session_two = store
            .get_by_session(SessionNumber::new(2).expect("session"))
            .await
            .expect("session");
        let names: Vec<_> = session_two.iter().map(|record| record.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "E"]);
    }

    #[tokio::test]
    async fn summary_covers_store_contents() {
        let store = InMemoryStore::new();
        store.create(submission("A", 1, 5)).await.expect("create");
        store.create(submission("B", 1, 2)).await.expect("create");
        store.create(submission("C", 4, 4)).await.expect("create");

        let overall = store.summary(None).await.expect("summary");
        assert_eq!(overall.count, 3);
        assert_eq!(overall.average_rating, Some(11.0 / 3.0));

        let session_one = store
            .summary(Some(SessionNumber::new(1).expect("session")))
            .await
            .expect("summary");
        assert_eq!(session_one.count, 2);
        assert_eq!(session_one.average_rating, Some(3.5));

        let empty = store
            .summary(Some(SessionNumber::new(6).expect("session")))
            .await
            .expect("summary");
        assert_eq!(empty.count, 0);
        assert_eq!(empty.average_rating, None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_assign_unique_ids() {
        let store = InMemoryStore::new();
        let mut tasks = Vec::new();
        for index in 0..200u64 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                let session = (index % 7 + 1) as i64;
                let rating = (index % 5 + 1) as u8;
                store
                    .create(submission(&format!("P{index}"), session, rating))
                    .await
                    .expect("create")
                    .id
            }));
        }
        let mut ids = HashSet::new();
        for task in tasks {
            assert!(ids.insert(task.await.expect("join")), "duplicate id");
        }
        assert_eq!(ids, (1..=200).collect::<HashSet<u64>>());

        let all = store.get_all().await.expect("all");
        let ordered: Vec<_> = all.iter().map(|record| record.id).collect();
        assert_eq!(ordered, (1..=200).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn backend_health_and_identity() {
        let store = InMemoryStore::default();
        store.health_check().await.expect("health");
        assert!(!store.is_durable());
        assert_eq!(store.backend_name(), "memory");
    }
}
