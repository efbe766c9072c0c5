use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Record, RecordKind};

/// Outcome recorded for a session. At most one exists per `session_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub session_id: String,
    pub attended: bool,
    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default)]
    pub check_out_time: Option<String>,
    #[serde(default)]
    pub notes: String,
    pub recorded_at: DateTime<Utc>,
}

impl Record for AttendanceRecord {
    const KIND: RecordKind = RecordKind::AttendanceRecord;

    fn id(&self) -> &str {
        &self.id
    }
}
