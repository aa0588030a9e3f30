use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ParticipantId, Points};
use crate::leveling::LevelStatus;
use crate::ranking::RankStatus;

/// Everything the rendering layer needs for one participant's status widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub participant_id: ParticipantId,
    pub name: String,
    pub points: Points,
    pub last_updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub level: LevelStatus,
    #[serde(flatten)]
    pub rank: RankStatus,
    /// Position within the current tier, in [0, 1]
    pub fraction: f64,
    pub last_sync: String,
}

impl StatusReport {
    pub fn is_max_level(&self) -> bool {
        self.level.max_points.is_none()
    }
}
