use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::cache::LeaderboardCache;
use crate::config::settings::AppConfig;
use crate::database::{self, DbConn, DbPool};
use crate::domain::{PointRecord, clamp_points};
use crate::errors::StatusError;
use crate::ranking::{Leaderboard, RankedEntry};
use crate::status::{StatusReport, assemble_with};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub skipped: usize,
}

/// Wires the participant store, the leaderboard cache and the status assembler
pub struct StatusService {
    config: AppConfig,
    pool: DbPool,
    cache: LeaderboardCache,
}

impl StatusService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.database.path)?;
        info!(
            "Using database: {} (ties ranked by {})",
            config.database.path,
            config.ranking.tie_break.as_str()
        );
        Self::with_pool(config, pool)
    }

    pub fn with_pool(config: AppConfig, pool: DbPool) -> Result<Self> {
        let mut conn = database::get_connection(&pool)?;
        database::setup::ensure_schema(&mut conn)?;
        drop(conn);

        let cache = LeaderboardCache::new(config.ranking.tie_break);
        Ok(Self {
            config,
            pool,
            cache,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn reset(&mut self) -> Result<()> {
        let mut conn = self.connection()?;
        database::setup::reset_database(&mut conn)?;
        self.cache.invalidate();
        Ok(())
    }

    pub fn participant_count(&self) -> Result<usize> {
        let mut conn = self.connection()?;
        database::participants::count(&mut conn)
    }

    pub fn register(&mut self, record: &PointRecord) -> Result<bool> {
        let mut conn = self.connection()?;
        let inserted = database::participants::insert_participant(&mut conn, record)?;
        if inserted {
            info!(
                "Registered participant {} with {} points",
                record.participant_id, record.points
            );
            self.cache.invalidate();
        }
        Ok(inserted)
    }

    /// External points update; negative input clamps to zero
    pub fn set_points(&mut self, participant_id: &str, raw_points: i64, now: DateTime<Utc>) -> Result<bool> {
        let points = clamp_points(raw_points);
        let mut conn = self.connection()?;
        let updated = database::participants::set_points(&mut conn, participant_id, points, now)?;
        if updated {
            info!("Set points for {} to {}", participant_id, points);
            self.cache.invalidate();
        }
        Ok(updated)
    }

    pub fn import(&mut self, records: &[PointRecord]) -> Result<ImportSummary> {
        let mut conn = self.connection()?;
        let mut summary = ImportSummary::default();

        for record in records {
            if database::participants::insert_participant(&mut conn, record)? {
                summary.inserted += 1;
            } else {
                debug!("Skipping already registered participant {}", record.participant_id);
                summary.skipped += 1;
            }
        }

        if summary.inserted > 0 {
            self.cache.invalidate();
        }
        info!(
            "Imported {} participants ({} already registered)",
            summary.inserted, summary.skipped
        );
        Ok(summary)
    }

    /// Status for one participant, or `None` when they are not registered
    pub fn status(&mut self, participant_id: &str, now: DateTime<Utc>) -> Result<Option<StatusReport>> {
        let leaderboard = self.leaderboard_snapshot()?;

        let Some(record) = leaderboard.find(participant_id) else {
            debug!("No status available for unregistered participant {}", participant_id);
            return Ok(None);
        };

        match assemble_with(
            record,
            &leaderboard,
            &self.config.levels,
            now,
            self.config.display.locale,
        ) {
            Ok(report) => Ok(Some(report)),
            Err(StatusError::NotFound { .. }) => Ok(None),
        }
    }

    pub fn leaderboard(&mut self, limit: usize) -> Result<Vec<RankedEntry>> {
        let leaderboard = self.leaderboard_snapshot()?;
        Ok(leaderboard.top(limit).to_vec())
    }

    fn leaderboard_snapshot(&mut self) -> Result<Arc<Leaderboard>> {
        let pool = &self.pool;
        self.cache.get_or_build(|| {
            let mut conn = database::get_connection(pool)?;
            database::participants::list_all(&mut conn).context("Failed to load population snapshot")
        })
    }

    fn connection(&self) -> Result<DbConn> {
        database::get_connection(&self.pool)
    }
}
