use log::warn;

use super::types::{LevelStatus, LevelTable, LevelTier};
use crate::domain::Points;

/// Resolves the tier holding `points` and the distance to the next one.
///
/// Past the final tier the next level is virtual (`level + 1`) and the
/// remainder is zero; callers treat a zero remainder as "max level reached".
pub fn resolve_level(points: Points, table: &LevelTable) -> LevelStatus {
    let tiers = table.tiers();
    let idx = find_tier_index(points, tiers).unwrap_or_else(|| {
        warn!("No tier contains {} points, falling back to first tier", points);
        0
    });

    let tier = &tiers[idx];
    let (next_level, remaining_points) = next_tier_distance(points, tier, tiers.get(idx + 1));

    LevelStatus {
        level: tier.level,
        min_points: tier.min_points,
        max_points: tier.max_points,
        next_level,
        remaining_points,
    }
}

fn find_tier_index(points: Points, tiers: &[LevelTier]) -> Option<usize> {
    // tiers are sorted by min_points, so the candidate is the last one starting at or below `points`
    let upper = tiers.partition_point(|t| t.min_points <= points);
    let idx = upper.checked_sub(1)?;
    tiers[idx].contains(points).then_some(idx)
}

fn next_tier_distance(points: Points, tier: &LevelTier, next: Option<&LevelTier>) -> (u32, Points) {
    match next {
        Some(next) => (next.level, next.min_points.saturating_sub(points)),
        None => (tier.level.saturating_add(1), 0),
    }
}
