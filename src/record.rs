//! Size records and the newline-delimited JSON batch format consumed by the
//! data pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mobile platform a binary was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Android,
    #[serde(rename = "iOS")]
    Ios,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Android => write!(f, "Android"),
            Platform::Ios => write!(f, "iOS"),
        }
    }
}

/// One measured artifact. Field order matters: the pipeline expects lines
/// shaped exactly like
/// `{"sdk":"maps","platform":"Android","arch":"arm64","size":1024,"created_at":"2024-3-7"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRecord {
    pub sdk: String,
    pub platform: Platform,
    pub arch: String,
    pub size: u64,
    #[serde(with = "unpadded_date")]
    pub created_at: NaiveDate,
}

/// `created_at` is `YYYY-M-D` with no zero-padding on month or day.
mod unpadded_date {
    use chrono::{Datelike, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&format!("{}-{}-{}", date.year(), date.month(), date.day()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(de)?;
        NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(serde::de::Error::custom)
    }
}

/// Ordered batch of records produced by one measurement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsBatch {
    records: Vec<SizeRecord>,
}

impl MetricsBatch {
    pub fn new(records: Vec<SizeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SizeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One JSON object per line, joined by `\n`, no trailing newline and no
    /// enclosing array.
    pub fn to_ndjson(&self) -> Result<String, serde_json::Error> {
        let lines = self
            .records
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }
}
