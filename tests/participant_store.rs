use std::io::Write;

use chrono::{Duration, Utc};

use hato_points::config::settings::AppConfig;
use hato_points::domain::PointRecord;
use hato_points::locale::Locale;
use hato_points::presentation::{StatusLabels, render_card};
use hato_points::services::StatusService;

fn demo_records() -> Vec<PointRecord> {
    let json = include_str!("../demos/participants.json");
    serde_json::from_str(json).unwrap()
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("points.db");
    let config = AppConfig::new().with_database_path(db_path.to_string_lossy().to_string());

    {
        let mut service = StatusService::new(config.clone()).unwrap();
        let summary = service.import(&demo_records()).unwrap();
        assert_eq!(summary.inserted, 4);
    }

    let mut service = StatusService::new(config).unwrap();
    let entries = service.leaderboard(10).unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e.record.participant_id.as_str()).collect();
    assert_eq!(ids, vec!["u3", "aaa", "u2", "u1"]);
}

#[test]
fn status_card_for_demo_population() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("points.db");
    let config = AppConfig::new()
        .with_database_path(db_path.to_string_lossy().to_string())
        .with_locale(Locale::Japanese);
    let mut service = StatusService::new(config).unwrap();
    service.import(&demo_records()).unwrap();

    let now = Utc::now();
    service.set_points("u2", 1200, now - Duration::minutes(3)).unwrap();
    let report = service.status("u2", now).unwrap().unwrap();

    assert_eq!(report.level.level, 1);
    assert_eq!(report.rank.rank, 2);
    assert_eq!(report.last_sync, "3分前");

    let labels = StatusLabels::from_report(&report, Locale::Japanese);
    assert_eq!(labels.level_badge, "Lv.01");
    assert_eq!(labels.next_level, "Lv.02まであと300pt");
    assert_eq!(labels.rank_badge, "0002th | 参加者 4人中");

    let card = render_card(&report, Locale::Japanese, 20);
    assert!(card.contains("1200pt"));
    assert!(card.contains("最終同期 3分前"));
}

#[test]
fn custom_level_table_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"level":1,"minPoints":0,"maxPoints":49}},{{"level":2,"minPoints":50}}]"#
    )
    .unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.levels.tiers().len(), 2);
    assert_eq!(config.levels.max_level(), 2);
}

#[test]
fn malformed_level_table_is_rejected_at_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[]").unwrap();
    assert!(AppConfig::load(Some(file.path())).is_err());
}
