use serde::{Deserialize, Serialize};

use crate::domain::Points;
use crate::errors::ConfigError;

/// A contiguous, closed range of points mapped to one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelTier {
    pub level: u32,
    pub min_points: Points,
    /// `None` means unbounded; only the final tier may be unbounded
    #[serde(default)]
    pub max_points: Option<Points>,
}

impl LevelTier {
    pub fn bounded(level: u32, min_points: Points, max_points: Points) -> Self {
        Self {
            level,
            min_points,
            max_points: Some(max_points),
        }
    }

    pub fn unbounded(level: u32, min_points: Points) -> Self {
        Self {
            level,
            min_points,
            max_points: None,
        }
    }

    pub fn contains(&self, points: Points) -> bool {
        points >= self.min_points && self.max_points.is_none_or(|max| points <= max)
    }
}

/// Validated, immutable tier table. Every non-negative point value falls into exactly one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LevelTier>", into = "Vec<LevelTier>")]
pub struct LevelTable {
    tiers: Vec<LevelTier>,
}

impl LevelTable {
    pub fn new(tiers: Vec<LevelTier>) -> Result<Self, ConfigError> {
        validate_tiers(&tiers)?;
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[LevelTier] {
        &self.tiers
    }

    pub fn max_level(&self) -> u32 {
        // non-empty by construction
        self.tiers.last().map(|t| t.level).unwrap_or_default()
    }
}

impl TryFrom<Vec<LevelTier>> for LevelTable {
    type Error = ConfigError;

    fn try_from(tiers: Vec<LevelTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<LevelTable> for Vec<LevelTier> {
    fn from(table: LevelTable) -> Self {
        table.tiers
    }
}

fn validate_tiers(tiers: &[LevelTier]) -> Result<(), ConfigError> {
    let first = tiers.first().ok_or(ConfigError::EmptyTable)?;
    if first.min_points != 0 {
        return Err(ConfigError::FirstTierNotZero {
            min_points: first.min_points,
        });
    }

    for tier in tiers {
        validate_range(tier)?;
    }

    for pair in tiers.windows(2) {
        validate_adjacent(&pair[0], &pair[1])?;
    }

    match tiers.last() {
        Some(last) if last.max_points.is_some() => Err(ConfigError::MissingUnboundedTier {
            level: last.level,
        }),
        _ => Ok(()),
    }
}

fn validate_range(tier: &LevelTier) -> Result<(), ConfigError> {
    match tier.max_points {
        Some(max) if tier.min_points > max => Err(ConfigError::InvertedRange {
            level: tier.level,
            min_points: tier.min_points,
            max_points: max,
        }),
        _ => Ok(()),
    }
}

fn validate_adjacent(prev: &LevelTier, next: &LevelTier) -> Result<(), ConfigError> {
    if next.level <= prev.level {
        return Err(ConfigError::LevelsNotIncreasing {
            previous: prev.level,
            next: next.level,
        });
    }

    let max = prev
        .max_points
        .ok_or(ConfigError::UnboundedNotLast { level: prev.level })?;
    let expected = max.saturating_add(1);
    if next.min_points != expected {
        return Err(ConfigError::NonContiguous {
            level: next.level,
            expected,
            actual: next.min_points,
        });
    }
    Ok(())
}

/// Level data derived for one points value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelStatus {
    pub level: u32,
    pub min_points: Points,
    pub max_points: Option<Points>,
    pub next_level: u32,
    /// Zero once the final tier is reached
    pub remaining_points: Points,
}
