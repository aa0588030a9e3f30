use thiserror::Error;

use crate::domain::Points;

/// Errors surfaced by the status engine to its immediate caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("participant not found: {participant_id}")]
    NotFound { participant_id: String },
}

/// Tier table misconfiguration, fatal at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("level table is empty")]
    EmptyTable,
    #[error("first tier must start at 0 points, got {min_points}")]
    FirstTierNotZero { min_points: Points },
    #[error("tier for level {level} has min {min_points} greater than max {max_points}")]
    InvertedRange {
        level: u32,
        min_points: Points,
        max_points: Points,
    },
    #[error("levels must be strictly increasing: {previous} followed by {next}")]
    LevelsNotIncreasing { previous: u32, next: u32 },
    #[error("tier for level {level} must start at {expected}, got {actual}")]
    NonContiguous {
        level: u32,
        expected: Points,
        actual: Points,
    },
    #[error("only the last tier may be unbounded (level {level} is not last)")]
    UnboundedNotLast { level: u32 },
    #[error("last tier (level {level}) must be unbounded")]
    MissingUnboundedTier { level: u32 },
}

/// Add context to store errors
pub fn store_context(operation: &str, participant_id: &str) -> String {
    format!("Failed to {} participant: {}", operation, participant_id)
}

/// Add context to file loading errors
pub fn load_context(data_type: &str, path: &std::path::Path) -> String {
    format!("Failed to load {} from: {}", data_type, path.display())
}
