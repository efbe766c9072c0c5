use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use strum::{Display, EnumString};

use crate::store::{Record, RecordKind};

/// A scheduled therapy appointment.
///
/// `date_time` is kept exactly as the client sent it. Calendar-day matching
/// uses its `YYYY-MM-DD` prefix, ordering uses [`Session::starts_at`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub therapist_id: String,
    pub patient_id: String,
    pub date_time: String,
    pub duration: u32,
    pub session_type: String,
    #[serde(default)]
    pub notes: String,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Session {
    const KIND: RecordKind = RecordKind::Session;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Session {
    /// Wall-clock start of the session, if `date_time` is in a recognised format.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        parse_date_time(&self.date_time)
    }

    /// True when the session falls on `day` (ISO date prefix match).
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date_time
            .starts_with(&day.format("%Y-%m-%d").to_string())
    }
}

/// Session lifecycle. Progresses `Scheduled -> Checked-In -> Completed`, never backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SessionStatus {
    #[strum(to_string = "Scheduled")]
    Scheduled,

    #[strum(
        to_string = "Checked-In",
        serialize = "checked_in",
        serialize = "checkedin",
        serialize = "checked in"
    )]
    CheckedIn,

    #[strum(to_string = "Completed")]
    Completed,
}

impl SessionStatus {
    /// Whether moving from `self` to `next` keeps the progression forward.
    /// Staying in place is allowed.
    pub fn permits(self, next: SessionStatus) -> bool {
        next >= self
    }

    /// The single next step, `None` once completed.
    pub fn next_step(self) -> Option<SessionStatus> {
        match self {
            SessionStatus::Scheduled => Some(SessionStatus::CheckedIn),
            SessionStatus::CheckedIn => Some(SessionStatus::Completed),
            SessionStatus::Completed => None,
        }
    }

    pub fn is_attended(self) -> bool {
        self != SessionStatus::Scheduled
    }
}

impl Serialize for SessionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SessionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        SessionStatus::from_str(&raw)
            .map_err(|_| serde::de::Error::custom(format!("unknown session status `{raw}`")))
    }
}

/// Parses the date/time formats clients send for sessions.
///
/// Offsets in RFC 3339 input are dropped; the written wall-clock time is kept.
pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}
