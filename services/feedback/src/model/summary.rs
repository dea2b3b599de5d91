//! Aggregate view over a set of feedback records.
use super::{Feedback, RATING_MAX, RATING_MIN, SessionNumber};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingCount {
    pub stars: u8,
    pub count: usize,
}

/// Count, mean rating and per-star distribution for all feedback or for a
/// single session.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummary {
    pub session_number: Option<SessionNumber>,
    pub count: usize,
    /// `None` when there is no feedback to average.
    pub average_rating: Option<f64>,
    pub distribution: Vec<RatingCount>,
}

impl FeedbackSummary {
    pub fn from_records<'a>(
        session_number: Option<SessionNumber>,
        records: impl IntoIterator<Item = &'a Feedback>,
    ) -> Self {
        let mut distribution: Vec<RatingCount> = (RATING_MIN..=RATING_MAX)
            .map(|stars| RatingCount { stars, count: 0 })
            .collect();
        let mut count = 0usize;
        let mut total = 0u64;
        for record in records {
            if session_number.is_some_and(|session| session != record.session_number) {
                continue;
            }
            count += 1;
            total += u64::from(record.rating);
            if let Some(bucket) = distribution
                .iter_mut()
                .find(|bucket| bucket.stars == record.rating)
            {
                bucket.count += 1;
            }
        }
        let average_rating = (count > 0).then(|| total as f64 / count as f64);
        Self {
            session_number,
            count,
            average_rating,
            distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewFeedback;
    use chrono::Utc;

    fn record(id: u64, session: i64, rating: u8) -> Feedback {
        NewFeedback {
            name: format!("Participant {id}"),
            email: format!("p{id}@example.com"),
            session_number: SessionNumber::new(session).expect("session"),
            rating,
            comments: None,
            suggestions: None,
        }
        .into_feedback(id, Utc::now())
    }

    #[test]
    fn empty_set_has_no_average() {
        let summary = FeedbackSummary::from_records(None, &Vec::<Feedback>::new());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average_rating, None);
        assert_eq!(summary.distribution.len(), 5);
        assert!(summary.distribution.iter().all(|bucket| bucket.count == 0));
    }

    #[test]
    fn averages_all_sessions() {
        let records = vec![record(1, 1, 5), record(2, 2, 4), record(3, 1, 3)];
        let summary = FeedbackSummary::from_records(None, &records);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.average_rating, Some(4.0));
        assert_eq!(summary.distribution[2], RatingCount { stars: 3, count: 1 });
        assert_eq!(summary.distribution[4], RatingCount { stars: 5, count: 1 });
    }

    #[test]
    fn filters_to_one_session() {
        let records = vec![record(1, 1, 5), record(2, 2, 4), record(3, 1, 4)];
        let session = SessionNumber::new(1).expect("session");
        let summary = FeedbackSummary::from_records(Some(session), &records);
        assert_eq!(summary.session_number, Some(session));
        assert_eq!(summary.count, 2);
        assert_eq!(summary.average_rating, Some(4.5));
    }
}
