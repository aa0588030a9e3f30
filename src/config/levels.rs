use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::errors::load_context;
use crate::leveling::{LevelTable, LevelTier};

/// Built-in level table:
/// Lv.0 [0, 999], Lv.1 [1000, 1499], Lv.2 [1500, 2499],
/// Lv.3 [2500, 4999], Lv.4 [5000, 9999], Lv.5 [10000, ∞)
pub fn default_tiers() -> Vec<LevelTier> {
    vec![
        LevelTier::bounded(0, 0, 999),
        LevelTier::bounded(1, 1000, 1499),
        LevelTier::bounded(2, 1500, 2499),
        LevelTier::bounded(3, 2500, 4999),
        LevelTier::bounded(4, 5000, 9999),
        LevelTier::unbounded(5, 10000),
    ]
}

pub fn default_level_table() -> LevelTable {
    LevelTable::new(default_tiers()).expect("built-in level table is contiguous")
}

/// Load a level table from a JSON array of tiers, validating it
pub fn load_level_table(path: &Path) -> Result<LevelTable> {
    let json = fs::read_to_string(path).with_context(|| load_context("level table", path))?;

    let table: LevelTable = serde_json::from_str(&json)
        .with_context(|| format!("Invalid level table in {}", path.display()))?;

    info!(
        "Loaded {} level tiers from {}",
        table.tiers().len(),
        path.display()
    );
    Ok(table)
}
