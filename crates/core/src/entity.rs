//! Screening input records: the subject under review and watchlist candidates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The person or organization being screened.
///
/// Constructed by the caller per screening request and treated as
/// read-only by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
}

impl Subject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date_of_birth: None,
            nationality: None,
            customer_id: None,
        }
    }

    pub fn with_date_of_birth(mut self, dob: NaiveDate) -> Self {
        self.date_of_birth = Some(dob);
        self
    }

    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }
}

/// One watchlist entry the subject is compared against.
///
/// Supplied by an external watchlist provider (sanctions list, PEP list,
/// ...); the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistCandidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub nationality: Option<String>,
    pub source_list: String,
}

impl WatchlistCandidate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        source_list: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            aliases: Vec::new(),
            date_of_birth: None,
            nationality: None,
            source_list: source_list.into(),
        }
    }

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_date_of_birth(mut self, dob: NaiveDate) -> Self {
        self.date_of_birth = Some(dob);
        self
    }

    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }
}
