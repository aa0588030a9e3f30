use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type ParticipantId = String;
pub type Points = u64;

/// One participant's raw point state, as supplied by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRecord {
    pub participant_id: ParticipantId,
    #[serde(default)]
    pub name: String,
    #[serde(deserialize_with = "deserialize_clamped_points")]
    pub points: Points,
    pub last_updated_at: DateTime<Utc>,
}

impl PointRecord {
    pub fn new(
        participant_id: impl Into<ParticipantId>,
        name: impl Into<String>,
        points: Points,
        last_updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            participant_id: participant_id.into(),
            name: name.into(),
            points,
            last_updated_at,
        }
    }
}

/// Points coming from outside (store rows, CLI input) may be negative; they are presentation data, so clamp
pub fn clamp_points(raw: i64) -> Points {
    raw.max(0) as Points
}

fn deserialize_clamped_points<'de, D>(deserializer: D) -> Result<Points, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_points)
}
