use std::path::{Path, PathBuf};

use anyhow::Result;

use super::levels::{default_level_table, load_level_table};
use crate::leveling::LevelTable;
use crate::locale::Locale;
use crate::ranking::TieBreak;

pub const DEFAULT_DATABASE_PATH: &str = "hato_points.db";

#[derive(Debug, Clone, Default)]
pub struct RankingSettings {
    pub tie_break: TieBreak,
}

#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub locale: Locale,
    /// Width of the terminal progress bar, in cells
    pub bar_width: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl DisplaySettings {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            bar_width: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
        }
    }
}

/// Process-wide configuration, built once at startup and passed explicitly
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub levels: LevelTable,
    pub ranking: RankingSettings,
    pub display: DisplaySettings,
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            levels: default_level_table(),
            ranking: RankingSettings::default(),
            display: DisplaySettings::default(),
            database: DatabaseSettings::default(),
        }
    }

    /// Uses the level table at `levels_path`, falling back to `HATO_LEVELS_PATH`, then the built-in table.
    /// An invalid table is a startup error.
    pub fn load(levels_path: Option<&Path>) -> Result<Self> {
        let levels = match resolve_levels_path(levels_path) {
            Some(path) => load_level_table(&path)?,
            None => default_level_table(),
        };

        Ok(Self {
            levels,
            ..Self::new()
        })
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.ranking.tie_break = tie_break;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.display.locale = locale;
        self
    }

    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database.path = path.into();
        self
    }
}

fn resolve_levels_path(levels_path: Option<&Path>) -> Option<PathBuf> {
    levels_path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("HATO_LEVELS_PATH").map(PathBuf::from))
}
