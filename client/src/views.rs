//! Pure view models for the clinic screens.
//!
//! Nothing here talks to a backend. Each builder takes cached collections
//! (usually from a [`crate::Snapshot`]) and returns rows ready to render.

use chrono::NaiveDate;
use db::models::SessionStatus;
use serde::Serialize;
use services::{AttendanceView, DashboardStats, SessionView, query::chronological};
use std::collections::HashSet;

/// Human label for a status badge.
pub fn status_label(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Scheduled => "Scheduled",
        SessionStatus::CheckedIn => "Checked in",
        SessionStatus::Completed => "Completed",
    }
}

/// One line of a session table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRow {
    pub session_id: String,
    /// `YYYY-MM-DD`, or the raw value when it cannot be parsed.
    pub date: String,
    /// `HH:MM`, empty when the value cannot be parsed.
    pub time: String,
    pub patient_name: String,
    pub therapist_name: String,
    pub session_type: String,
    pub duration: u32,
    pub status: SessionStatus,
    pub status_label: &'static str,
}

impl From<&SessionView> for SessionRow {
    fn from(view: &SessionView) -> Self {
        let session = &view.session;
        let (date, time) = match session.starts_at() {
            Some(start) => (
                start.format("%Y-%m-%d").to_string(),
                start.format("%H:%M").to_string(),
            ),
            None => (session.date_time.clone(), String::new()),
        };

        SessionRow {
            session_id: session.id.clone(),
            date,
            time,
            patient_name: view.patient_name.clone(),
            therapist_name: view.therapist_name.clone(),
            session_type: session.session_type.clone(),
            duration: session.duration,
            status: session.status,
            status_label: status_label(session.status),
        }
    }
}

pub fn session_rows(sessions: &[SessionView]) -> Vec<SessionRow> {
    sorted(sessions.iter()).into_iter().map(SessionRow::from).collect()
}

/// The day's sessions in start order.
pub fn schedule_for(sessions: &[SessionView], day: NaiveDate) -> Vec<SessionRow> {
    sorted(sessions.iter().filter(|v| v.session.is_on(day)))
        .into_iter()
        .map(SessionRow::from)
        .collect()
}

/// What staff can do next with a session on the attendance panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NextAction {
    CheckIn,
    Complete,
}

impl NextAction {
    pub fn for_status(status: SessionStatus) -> Option<Self> {
        match status {
            SessionStatus::Scheduled => Some(NextAction::CheckIn),
            SessionStatus::CheckedIn => Some(NextAction::Complete),
            SessionStatus::Completed => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NextAction::CheckIn => "Check In",
            NextAction::Complete => "Complete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceItem {
    #[serde(flatten)]
    pub row: SessionRow,
    /// An absence has been recorded; the session takes no further steps.
    pub absent: bool,
    pub next_action: Option<NextAction>,
}

/// Attendance panel for one day. With `today` it drives check-in and
/// completion; with a past date it is the attendance history.
pub fn attendance_panel(
    sessions: &[SessionView],
    attendance: &[AttendanceView],
    day: NaiveDate,
) -> Vec<AttendanceItem> {
    let absent = absent_sessions(attendance);
    schedule_for(sessions, day)
        .into_iter()
        .map(|row| {
            let is_absent = absent.contains(row.session_id.as_str());
            AttendanceItem {
                next_action: if is_absent { None } else { NextAction::for_status(row.status) },
                absent: is_absent,
                row,
            }
        })
        .collect()
}

/// A tile on the self check-in kiosk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KioskTile {
    pub session_id: String,
    pub patient_name: String,
    pub time: String,
    pub session_type: String,
}

/// Today's sessions still waiting for the patient to arrive. Sessions
/// already marked absent are left off.
pub fn kiosk_tiles(
    sessions: &[SessionView],
    attendance: &[AttendanceView],
    today: NaiveDate,
) -> Vec<KioskTile> {
    let absent = absent_sessions(attendance);
    schedule_for(sessions, today)
        .into_iter()
        .filter(|row| row.status == SessionStatus::Scheduled)
        .filter(|row| !absent.contains(row.session_id.as_str()))
        .map(|row| KioskTile {
            session_id: row.session_id,
            patient_name: row.patient_name,
            time: row.time,
            session_type: row.session_type,
        })
        .collect()
}

/// Sessions that have no attendance record yet, for the record-attendance form.
pub fn unrecorded_sessions<'a>(
    sessions: &'a [SessionView],
    attendance: &[AttendanceView],
) -> Vec<&'a SessionView> {
    let recorded: HashSet<&str> = attendance
        .iter()
        .map(|a| a.record.session_id.as_str())
        .collect();
    sorted(
        sessions
            .iter()
            .filter(|v| !recorded.contains(v.session.id.as_str())),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardCard {
    pub title: &'static str,
    pub value: String,
}

pub fn dashboard_cards(stats: &DashboardStats) -> Vec<DashboardCard> {
    let card = |title, value: String| DashboardCard { title, value };
    vec![
        card("Total Therapists", stats.total_therapists.to_string()),
        card("Total Patients", stats.total_patients.to_string()),
        card("Total Sessions", stats.total_sessions.to_string()),
        card("Today's Sessions", stats.today_sessions.to_string()),
        card("Checked In", stats.checked_in.to_string()),
        card("Attendance Rate", format!("{}%", stats.attendance_rate)),
        card("Upcoming Sessions", stats.upcoming_sessions.to_string()),
    ]
}

fn absent_sessions(attendance: &[AttendanceView]) -> HashSet<&str> {
    attendance
        .iter()
        .filter(|a| !a.record.attended)
        .map(|a| a.record.session_id.as_str())
        .collect()
}

fn sorted<'a>(views: impl Iterator<Item = &'a SessionView>) -> Vec<&'a SessionView> {
    let mut views: Vec<&SessionView> = views.collect();
    views.sort_by(|a, b| chronological(&a.session, &b.session));
    views
}
