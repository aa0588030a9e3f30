use chrono::{DateTime, Utc};

use super::report::StatusReport;
use crate::domain::{PointRecord, Points};
use crate::errors::StatusError;
use crate::leveling::{LevelStatus, LevelTable, resolve_level};
use crate::locale::Locale;
use crate::ranking::{Leaderboard, TieBreak};
use crate::timefmt::format_since_in;

/// Builds the status report for `record` against a population snapshot.
///
/// The record must belong to `population`; otherwise `StatusError::NotFound`.
pub fn assemble(
    record: &PointRecord,
    population: &[PointRecord],
    tiers: &LevelTable,
    now: DateTime<Utc>,
    tie_break: TieBreak,
) -> Result<StatusReport, StatusError> {
    let leaderboard = Leaderboard::build(population, tie_break);
    assemble_with(record, &leaderboard, tiers, now, Locale::English)
}

/// Same as [`assemble`], ranking against an already built (possibly cached) leaderboard.
pub fn assemble_with(
    record: &PointRecord,
    leaderboard: &Leaderboard,
    tiers: &LevelTable,
    now: DateTime<Utc>,
    locale: Locale,
) -> Result<StatusReport, StatusError> {
    let rank = leaderboard.rank_of(&record.participant_id)?;
    let level = resolve_level(record.points, tiers);

    Ok(StatusReport {
        participant_id: record.participant_id.clone(),
        name: record.name.clone(),
        points: record.points,
        last_updated_at: record.last_updated_at,
        level,
        rank,
        fraction: progress_fraction(record.points, &level),
        last_sync: format_since_in(record.last_updated_at, now, locale),
    })
}

/// Normalized position inside the current tier. Zero-width and unbounded tiers are full.
pub fn progress_fraction(points: Points, level: &LevelStatus) -> f64 {
    match level.max_points {
        Some(max) if max > level.min_points => {
            let span = (max - level.min_points) as f64;
            let progressed = points.saturating_sub(level.min_points) as f64;
            (progressed / span).clamp(0.0, 1.0)
        }
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::levels::default_level_table;
    use crate::leveling::LevelTier;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 30, 12, 0, 0).unwrap()
    }

    fn record(id: &str, points: Points) -> PointRecord {
        PointRecord::new(id, id, points, now() - Duration::minutes(90))
    }

    fn population() -> Vec<PointRecord> {
        vec![record("a", 120), record("b", 805), record("c", 2640)]
    }

    #[test]
    fn test_assemble_first_tier() {
        let pop = population();
        let report = assemble(&pop[0], &pop, &default_level_table(), now(), TieBreak::default()).unwrap();
        assert_eq!(report.level.level, 0);
        assert_eq!(report.level.next_level, 1);
        assert_eq!(report.level.remaining_points, 880);
        assert!((report.fraction - 0.12).abs() < 0.001);
        assert_eq!(report.rank.rank, 3);
        assert_eq!(report.rank.total_participants, 3);
        assert_eq!(report.last_sync, "1 hours ago");
    }

    #[test]
    fn test_assemble_middle_tier() {
        let pop = population();
        let report = assemble(&pop[2], &pop, &default_level_table(), now(), TieBreak::default()).unwrap();
        assert_eq!(report.level.level, 3);
        assert_eq!(report.level.remaining_points, 2360);
        assert!((report.fraction - 0.056).abs() < 0.001);
        assert_eq!(report.rank.rank, 1);
    }

    #[test]
    fn test_assemble_terminal_tier() {
        let top = record("z", 10000);
        let pop = vec![top.clone()];
        let report = assemble(&top, &pop, &default_level_table(), now(), TieBreak::default()).unwrap();
        assert_eq!(report.level.level, 5);
        assert_eq!(report.level.next_level, 6);
        assert_eq!(report.level.remaining_points, 0);
        assert_eq!(report.fraction, 1.0);
        assert!(report.is_max_level());
    }

    #[test]
    fn test_assemble_propagates_not_found() {
        let stranger = record("x", 50);
        let err = assemble(&stranger, &population(), &default_level_table(), now(), TieBreak::default())
            .unwrap_err();
        assert!(matches!(err, StatusError::NotFound { .. }));
    }

    #[test]
    fn test_assemble_leaves_inputs_untouched() {
        let pop = population();
        let before = pop.clone();
        let _ = assemble(&pop[1], &pop, &default_level_table(), now(), TieBreak::Shared).unwrap();
        assert_eq!(pop, before);
    }

    #[test]
    fn test_fraction_single_point_tier() {
        let table = LevelTable::new(vec![
            LevelTier::bounded(0, 0, 0),
            LevelTier::bounded(1, 1, 10),
            LevelTier::unbounded(2, 11),
        ])
        .unwrap();
        let level = resolve_level(0, &table);
        assert_eq!(progress_fraction(0, &level), 1.0);
        let level = resolve_level(10, &table);
        assert_eq!(progress_fraction(10, &level), 1.0);
        let level = resolve_level(1, &table);
        assert_eq!(progress_fraction(1, &level), 0.0);
    }

    #[test]
    fn test_fraction_bounds() {
        let table = default_level_table();
        for points in (0..15_000).step_by(13) {
            let level = resolve_level(points, &table);
            let fraction = progress_fraction(points, &level);
            assert!((0.0..=1.0).contains(&fraction), "{} -> {}", points, fraction);
        }
    }

    #[test]
    fn test_japanese_last_sync() {
        let pop = population();
        let board = Leaderboard::build(&pop, TieBreak::default());
        let report = assemble_with(&pop[1], &board, &default_level_table(), now(), Locale::Japanese).unwrap();
        assert_eq!(report.last_sync, "1時間前");
        assert_eq!(report.rank.rank, 2);
    }
}
