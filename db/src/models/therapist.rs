use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Record, RecordKind};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Therapist {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Therapist {
    const KIND: RecordKind = RecordKind::Therapist;

    fn id(&self) -> &str {
        &self.id
    }
}
