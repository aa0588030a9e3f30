use chrono::{DateTime, Duration, TimeZone, Utc};

use hato_points::config::levels::default_level_table;
use hato_points::domain::PointRecord;
use hato_points::errors::StatusError;
use hato_points::leveling::resolve_level;
use hato_points::ranking::{TieBreak, rank};
use hato_points::status::assemble;
use hato_points::timefmt::format_since;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 30, 12, 0, 0).unwrap()
}

fn population() -> Vec<PointRecord> {
    vec![
        PointRecord::new("A", "A", 120, now()),
        PointRecord::new("B", "B", 805, now()),
        PointRecord::new("C", "C", 2640, now()),
    ]
}

#[test]
fn low_points_sit_in_first_tier() {
    let table = default_level_table();
    let pop = population();
    let report = assemble(&pop[0], &pop, &table, now(), TieBreak::default()).unwrap();

    assert_eq!(report.level.level, 0);
    assert_eq!(report.level.next_level, 1);
    assert_eq!(report.level.remaining_points, 880);
    assert!((report.fraction - 0.12).abs() < 0.001);
}

#[test]
fn mid_points_progress_within_tier() {
    let status = resolve_level(2640, &default_level_table());
    assert_eq!(status.level, 3);
    assert_eq!(status.next_level, 4);
    assert_eq!(status.remaining_points, 2360);
    assert_eq!((status.min_points, status.max_points), (2500, Some(4999)));

    let pop = population();
    let report = assemble(&pop[2], &pop, &default_level_table(), now(), TieBreak::default()).unwrap();
    assert!((report.fraction - 0.056).abs() < 0.001);
}

#[test]
fn terminal_tier_reports_zero_remainder_and_full_arc() {
    let top = PointRecord::new("Z", "Z", 10000, now());
    let pop = vec![top.clone()];
    let report = assemble(&top, &pop, &default_level_table(), now(), TieBreak::default()).unwrap();

    assert_eq!(report.level.level, 5);
    assert_eq!(report.level.next_level, 6);
    assert_eq!(report.level.remaining_points, 0);
    assert_eq!(report.fraction, 1.0);
}

#[test]
fn ranks_follow_points_descending() {
    let pop = population();
    let c = rank("C", &pop, TieBreak::default()).unwrap();
    assert_eq!((c.rank, c.total_participants), (1, 3));
    assert_eq!(rank("A", &pop, TieBreak::default()).unwrap().rank, 3);
}

#[test]
fn unknown_participant_is_not_found() {
    let pop = population();
    let stranger = PointRecord::new("X", "X", 1, now());
    let err = assemble(&stranger, &pop, &default_level_table(), now(), TieBreak::default()).unwrap_err();
    assert_eq!(
        err,
        StatusError::NotFound {
            participant_id: "X".to_string()
        }
    );
}

#[test]
fn relative_time_captions() {
    assert_eq!(format_since(now() - Duration::seconds(30), now()), "just now");
    assert_eq!(format_since(now() - Duration::minutes(90), now()), "1 hours ago");
}

#[test]
fn report_serializes_flat_for_renderers() {
    let pop = population();
    let report = assemble(&pop[2], &pop, &default_level_table(), now(), TieBreak::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["participantId"], "C");
    assert_eq!(json["level"], 3);
    assert_eq!(json["nextLevel"], 4);
    assert_eq!(json["remainingPoints"], 2360);
    assert_eq!(json["rank"], 1);
    assert_eq!(json["totalParticipants"], 3);
    assert_eq!(json["lastSync"], "just now");
}
