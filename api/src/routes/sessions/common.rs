use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::error::ApiError;

pub const DEFAULT_UPCOMING_DAYS: u32 = 7;
pub const MAX_UPCOMING_DAYS: u32 = 365;

#[derive(Debug, Default, Deserialize)]
pub struct SessionFilter {
    pub date: Option<String>,
}

impl SessionFilter {
    /// The requested calendar day, if any. Blank counts as absent.
    pub fn day(&self) -> Result<Option<NaiveDate>, ApiError> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| ApiError::BadRequest("Invalid date".into())),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpcomingQuery {
    pub days: Option<String>,
}

impl UpcomingQuery {
    pub fn days(&self) -> Result<u32, ApiError> {
        let Some(raw) = self.days.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(DEFAULT_UPCOMING_DAYS);
        };
        raw.parse::<u32>()
            .ok()
            .filter(|d| (1..=MAX_UPCOMING_DAYS).contains(d))
            .ok_or_else(|| {
                ApiError::BadRequest(format!(
                    "Invalid days: must be between 1 and {MAX_UPCOMING_DAYS}"
                ))
            })
    }
}

/// Session times are wall-clock strings, so "now" is the server's local time.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn local_today() -> NaiveDate {
    local_now().date()
}
