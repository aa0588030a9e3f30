use chrono::{DateTime, Utc};

use crate::domain::{PointRecord, clamp_points};

/// Raw participants row; points may be negative if written by an outside updater
#[derive(Debug, Clone)]
pub struct ParticipantRow {
    pub participant_id: String,
    pub name: String,
    pub points: i64,
    pub updated_at: DateTime<Utc>,
}

impl From<ParticipantRow> for PointRecord {
    fn from(row: ParticipantRow) -> Self {
        PointRecord {
            participant_id: row.participant_id,
            name: row.name,
            points: clamp_points(row.points),
            last_updated_at: row.updated_at,
        }
    }
}
