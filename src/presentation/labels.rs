use serde::Serialize;

use crate::locale::Locale;
use crate::status::StatusReport;

/// Caption strings for one status widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusLabels {
    pub points: String,
    pub level_badge: String,
    pub next_level: String,
    pub rank_badge: String,
    pub last_sync: String,
    pub min_points: String,
    pub max_points: String,
}

impl StatusLabels {
    pub fn from_report(report: &StatusReport, locale: Locale) -> Self {
        Self {
            points: points_label(report.points),
            level_badge: level_badge(report.level.level),
            next_level: next_level_caption(report, locale),
            rank_badge: rank_badge(report, locale),
            last_sync: last_sync_caption(&report.last_sync, locale),
            min_points: points_label(report.level.min_points),
            max_points: report
                .level
                .max_points
                .map(points_label)
                .unwrap_or_else(|| "∞".to_string()),
        }
    }
}

fn points_label(points: u64) -> String {
    format!("{}pt", points)
}

fn level_badge(level: u32) -> String {
    format!("Lv.{:02}", level)
}

fn next_level_caption(report: &StatusReport, locale: Locale) -> String {
    let next = report.level.next_level;
    let remaining = report.level.remaining_points;
    match locale {
        Locale::English => format!("{} pt to Lv.{:02}", remaining, next),
        Locale::Japanese => format!("Lv.{:02}まであと{}pt", next, remaining),
    }
}

fn rank_badge(report: &StatusReport, locale: Locale) -> String {
    let rank = report.rank.rank;
    let total = report.rank.total_participants;
    match locale {
        Locale::English => format!("{:04}th of {}", rank, total),
        Locale::Japanese => format!("{:04}th | 参加者 {}人中", rank, total),
    }
}

fn last_sync_caption(last_sync: &str, locale: Locale) -> String {
    match locale {
        Locale::English => format!("Last sync {}", last_sync),
        Locale::Japanese => format!("最終同期 {}", last_sync),
    }
}
