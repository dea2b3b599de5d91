//! Workshop session numbers and the fixed session catalog.
//!
//! # Purpose
//! The workshop runs seven numbered sessions. `SessionNumber` can only hold a
//! value in `1..=7`, so anything holding one never needs to range-check again.
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

const SESSION_TITLES: [&str; 7] = [
    "Pre Assessment and Intro",
    "Product Knowledge",
    "Competitor Analysis & Industry Knowledge",
    "Negotiation",
    "Leadership",
    "CRM",
    "Time Management and Health",
];

/// Number of a workshop session, always in `1..=7`.
#[derive(Debug, Serialize, ToSchema, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionNumber(u8);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("session number must be between {min} and {max}, got {value}", min = SessionNumber::MIN, max = SessionNumber::MAX)]
pub struct InvalidSessionNumber {
    pub value: i64,
}

impl SessionNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = SESSION_TITLES.len() as u8;

    pub fn new(value: i64) -> Result<Self, InvalidSessionNumber> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidSessionNumber { value })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn title(self) -> &'static str {
        SESSION_TITLES[usize::from(self.0 - 1)]
    }

    pub fn all() -> impl Iterator<Item = SessionNumber> {
        (Self::MIN..=Self::MAX).map(SessionNumber)
    }
}

impl TryFrom<i64> for SessionNumber {
    type Error = InvalidSessionNumber;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for SessionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for SessionNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        SessionNumber::new(value).map_err(serde::de::Error::custom)
    }
}

/// Catalog entry describing one workshop session.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct WorkshopSession {
    pub number: SessionNumber,
    pub title: String,
}

/// All seven sessions in order.
pub fn catalog() -> Vec<WorkshopSession> {
    SessionNumber::all()
        .map(|number| WorkshopSession {
            number,
            title: number.title().to_string(),
        })
        .collect()
}
