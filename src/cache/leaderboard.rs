use std::sync::Arc;

use anyhow::Result;
use log::debug;

use crate::domain::PointRecord;
use crate::ranking::{Leaderboard, TieBreak};

/// In-memory cache of the sorted population, sitting in front of the pure ranker.
/// Must be invalidated whenever any participant's points change.
pub struct LeaderboardCache {
    tie_break: TieBreak,
    cached: Option<Arc<Leaderboard>>,
}

impl LeaderboardCache {
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            tie_break,
            cached: None,
        }
    }

    /// Return the cached leaderboard, or build one from the population `loader` returns
    pub fn get_or_build<F>(&mut self, loader: F) -> Result<Arc<Leaderboard>>
    where
        F: FnOnce() -> Result<Vec<PointRecord>>,
    {
        if let Some(board) = &self.cached {
            debug!("Leaderboard cache hit ({} participants)", board.len());
            return Ok(Arc::clone(board));
        }

        let population = loader()?;
        debug!(
            "Leaderboard cache miss, ranking {} participants",
            population.len()
        );
        let board = Arc::new(Leaderboard::build(&population, self.tie_break));
        self.cached = Some(Arc::clone(&board));
        Ok(board)
    }

    pub fn invalidate(&mut self) {
        if self.cached.take().is_some() {
            debug!("Leaderboard cache invalidated");
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::cell::Cell;

    fn population() -> Vec<PointRecord> {
        let now = Utc::now();
        vec![
            PointRecord::new("a", "A", 120, now),
            PointRecord::new("b", "B", 805, now),
        ]
    }

    #[test]
    fn test_builds_once_until_invalidated() {
        let loads = Cell::new(0);
        let loader = || -> Result<Vec<PointRecord>> {
            loads.set(loads.get() + 1);
            Ok(population())
        };

        let mut cache = LeaderboardCache::new(TieBreak::default());

        let first = cache.get_or_build(loader).unwrap();
        let second = cache.get_or_build(loader).unwrap();
        assert_eq!(loads.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.rank_of("b").unwrap().rank, 1);

        cache.invalidate();
        cache.get_or_build(loader).unwrap();
        assert_eq!(loads.get(), 2);
    }

    #[test]
    fn test_loader_error_leaves_cache_cold() {
        let mut cache = LeaderboardCache::new(TieBreak::Shared);
        let result = cache.get_or_build(|| Err(anyhow::anyhow!("store unavailable")));
        assert!(result.is_err());

        let board = cache.get_or_build(|| Ok(population())).unwrap();
        assert_eq!(board.len(), 2);
    }
}
