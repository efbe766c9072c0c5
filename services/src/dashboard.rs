use chrono::{NaiveDate, NaiveDateTime};
use db::models::{Session, SessionStatus};
use db::Store;
use serde::{Deserialize, Serialize};

use crate::query::is_upcoming;

/// Look-ahead used for the dashboard's upcoming count.
pub const UPCOMING_WINDOW_DAYS: u32 = 7;

/// Front-page counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_therapists: usize,
    pub total_patients: usize,
    pub total_sessions: usize,
    pub today_sessions: usize,
    /// Today's sessions currently in `Checked-In`.
    pub checked_in: usize,
    /// Percentage of today's sessions that were attended, rounded.
    pub attendance_rate: u32,
    pub upcoming_sessions: usize,
}

impl DashboardStats {
    /// Aggregates over any set of sessions. Shared by the server and by
    /// clients working from their local cache.
    pub fn compute<'a>(
        total_therapists: usize,
        total_patients: usize,
        sessions: impl IntoIterator<Item = &'a Session>,
        today: NaiveDate,
        now: NaiveDateTime,
    ) -> Self {
        let mut stats = DashboardStats {
            total_therapists,
            total_patients,
            ..Default::default()
        };

        let mut attended_today = 0;
        for session in sessions {
            stats.total_sessions += 1;
            if is_upcoming(session, now, UPCOMING_WINDOW_DAYS) {
                stats.upcoming_sessions += 1;
            }
            if !session.is_on(today) {
                continue;
            }
            stats.today_sessions += 1;
            if session.status == SessionStatus::CheckedIn {
                stats.checked_in += 1;
            }
            if session.status.is_attended() {
                attended_today += 1;
            }
        }

        stats.attendance_rate = attendance_rate(attended_today, stats.today_sessions);
        stats
    }

    pub fn from_store(store: &Store, today: NaiveDate, now: NaiveDateTime) -> Self {
        Self::compute(
            store.therapists().len(),
            store.patients().len(),
            store.sessions().list(),
            today,
            now,
        )
    }
}

/// `attended / total` as a whole percentage, 0 when there is nothing to count.
pub fn attendance_rate(attended: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((attended as f64 / total as f64) * 100.0).round() as u32
}
