use colored::Colorize;

use super::labels::StatusLabels;
use crate::leveling::{LevelTable, resolve_level};
use crate::locale::Locale;
use crate::ranking::RankedEntry;
use crate::status::StatusReport;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Text stand-in for the progress arc
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    let filled = ((fraction * width as f64).round() as usize).min(width);

    let mut bar = String::with_capacity(width * FILLED.len_utf8());
    bar.extend(std::iter::repeat_n(FILLED, filled));
    bar.extend(std::iter::repeat_n(EMPTY, width - filled));
    bar
}

pub fn render_card(report: &StatusReport, locale: Locale, bar_width: usize) -> String {
    let labels = StatusLabels::from_report(report, locale);
    let bar = progress_bar(report.fraction, bar_width);

    let mut lines = Vec::new();
    lines.push(format!(
        "{} ({})   {}",
        report.name.bold(),
        report.participant_id,
        labels.last_sync.dimmed()
    ));
    lines.push(format!("  {}", labels.points.bold().yellow()));
    lines.push(format!(
        "  {}   {}",
        labels.level_badge.bold().magenta(),
        labels.next_level
    ));
    lines.push(format!(
        "  {} {} {}  {:>3.0}%",
        labels.min_points,
        bar.blue(),
        labels.max_points,
        report.fraction * 100.0
    ));
    lines.push(format!("  {}", labels.rank_badge.cyan()));
    lines.join("\n")
}

pub fn render_leaderboard(entries: &[RankedEntry], table: &LevelTable) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!(
        "{:>5}  {:<12} {:<20} {:>8}  {}",
        "RANK", "ID", "NAME", "POINTS", "LEVEL"
    ));

    for entry in entries {
        let level = resolve_level(entry.record.points, table);
        lines.push(format!(
            "{:>5}  {:<12} {:<20} {:>8}  Lv.{:02}",
            entry.rank, entry.record.participant_id, entry.record.name, entry.record.points, level.level
        ));
    }
    lines.join("\n")
}

pub fn render_levels(table: &LevelTable) -> String {
    table
        .tiers()
        .iter()
        .map(|tier| match tier.max_points {
            Some(max) => format!("Lv.{:02}  {:>8} - {}", tier.level, tier.min_points, max),
            None => format!("Lv.{:02}  {:>8} +", tier.level, tier.min_points),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
