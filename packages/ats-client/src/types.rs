//! Provider tags and the normalized job shape shared by every adapter.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AtsError;

/// The supported ATS providers.
///
/// Adding a provider means adding a variant here plus an adapter module;
/// every dispatch site is an exhaustive match, so the compiler finds the
/// places that need updating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AtsProvider {
    Greenhouse,
    Lever,
    Ashby,
    Pinpoint,
    CareerPuck,
    Workday,
}

impl AtsProvider {
    /// The lowercase tag used in stored company configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            AtsProvider::Greenhouse => "greenhouse",
            AtsProvider::Lever => "lever",
            AtsProvider::Ashby => "ashby",
            AtsProvider::Pinpoint => "pinpoint",
            AtsProvider::CareerPuck => "careerpuck",
            AtsProvider::Workday => "workday",
        }
    }
}

impl std::fmt::Display for AtsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AtsProvider {
    type Err = AtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greenhouse" => Ok(AtsProvider::Greenhouse),
            "lever" => Ok(AtsProvider::Lever),
            "ashby" => Ok(AtsProvider::Ashby),
            "pinpoint" => Ok(AtsProvider::Pinpoint),
            "careerpuck" => Ok(AtsProvider::CareerPuck),
            "workday" => Ok(AtsProvider::Workday),
            _ => Err(AtsError::UnknownProvider(s.to_string())),
        }
    }
}

/// A job posting in the one shape every adapter produces, regardless of the
/// provider's native schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedJob {
    /// Provider-native identifier, unique within one company's board.
    pub external_id: String,
    pub title: String,
    pub location: Option<String>,
    /// Full job description as HTML, entity-decoded.
    pub description: Option<String>,
    /// Application URL on the provider's hosted board.
    pub url: String,
    pub department: Option<String>,
    pub employment_type: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Parse the timestamp strings the providers actually send.
///
/// Greenhouse uses RFC 3339 with an offset, Ashby and CareerPuck send UTC
/// ISO strings, Workday detail records send either a full datetime or a bare
/// date. Anything unparseable degrades to None since `published_at` is
/// nullable everywhere downstream.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

/// Lever reports `createdAt` as epoch milliseconds.
pub(crate) fn parse_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
}
