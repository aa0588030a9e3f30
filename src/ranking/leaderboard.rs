use std::cmp::Ordering;
use std::collections::HashMap;

use super::types::{RankStatus, RankedEntry, TieBreak};
use crate::domain::{ParticipantId, PointRecord};
use crate::errors::StatusError;

/// Population snapshot sorted by points descending, with ranks assigned.
///
/// Building costs O(n log n); the result can be held by a cache and queried
/// repeatedly until the underlying points change.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    entries: Vec<RankedEntry>,
    positions: HashMap<ParticipantId, usize>,
}

impl Leaderboard {
    pub fn build(population: &[PointRecord], tie_break: TieBreak) -> Self {
        let sorted = sort_population(population, tie_break);
        let entries = assign_ranks(sorted, tie_break);
        let positions = index_positions(&entries);

        Self { entries, positions }
    }

    pub fn rank_of(&self, participant_id: &str) -> Result<RankStatus, StatusError> {
        let entry = self
            .entry(participant_id)
            .ok_or_else(|| StatusError::NotFound {
                participant_id: participant_id.to_string(),
            })?;

        Ok(RankStatus {
            rank: entry.rank,
            total_participants: self.len(),
        })
    }

    pub fn find(&self, participant_id: &str) -> Option<&PointRecord> {
        self.entry(participant_id).map(|e| &e.record)
    }

    pub fn top(&self, limit: usize) -> &[RankedEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, participant_id: &str) -> Option<&RankedEntry> {
        self.positions
            .get(participant_id)
            .map(|&idx| &self.entries[idx])
    }
}

/// Ranks one participant against a population snapshot.
pub fn rank(
    participant_id: &str,
    population: &[PointRecord],
    tie_break: TieBreak,
) -> Result<RankStatus, StatusError> {
    Leaderboard::build(population, tie_break).rank_of(participant_id)
}

fn sort_population(population: &[PointRecord], tie_break: TieBreak) -> Vec<&PointRecord> {
    let mut sorted: Vec<&PointRecord> = population.iter().collect();
    // sort_by is stable, so InputOrder and Shared keep population order among equals
    sorted.sort_by(|a, b| compare(a, b, tie_break));
    sorted
}

fn compare(a: &PointRecord, b: &PointRecord, tie_break: TieBreak) -> Ordering {
    let by_points = b.points.cmp(&a.points);
    match tie_break {
        TieBreak::ParticipantId => by_points.then_with(|| a.participant_id.cmp(&b.participant_id)),
        TieBreak::InputOrder | TieBreak::Shared => by_points,
    }
}

fn assign_ranks(sorted: Vec<&PointRecord>, tie_break: TieBreak) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = Vec::with_capacity(sorted.len());

    for (position, record) in sorted.into_iter().enumerate() {
        let rank = match entries.last() {
            Some(prev) if tie_break == TieBreak::Shared && prev.record.points == record.points => {
                prev.rank
            }
            _ => position + 1,
        };
        entries.push(RankedEntry {
            rank,
            record: record.clone(),
        });
    }

    entries
}

fn index_positions(entries: &[RankedEntry]) -> HashMap<ParticipantId, usize> {
    let mut positions = HashMap::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        // duplicate ids: the best-ranked occurrence wins
        positions
            .entry(entry.record.participant_id.clone())
            .or_insert(idx);
    }
    positions
}
