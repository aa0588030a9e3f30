use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::PointRecord;

/// How participants with equal points are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Participant id ascending
    #[default]
    ParticipantId,
    /// Population order, first seen wins
    InputOrder,
    /// Competition ranking: equal points share a rank ("1, 1, 3")
    Shared,
}

impl TieBreak {
    pub fn as_str(&self) -> &str {
        match self {
            TieBreak::ParticipantId => "participant-id",
            TieBreak::InputOrder => "input-order",
            TieBreak::Shared => "shared",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankStatus {
    /// 1-based
    pub rank: usize,
    pub total_participants: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub record: PointRecord,
}
