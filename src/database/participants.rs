use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, params};

use super::connection::DbConn;
use super::models::ParticipantRow;
use crate::domain::{PointRecord, Points};
use crate::errors::store_context;

const SELECT_COLUMNS: &str = "SELECT participant_id, name, points, updated_at FROM participants";

/// Register a participant. Returns `false` if the id is already taken.
pub fn insert_participant(conn: &mut DbConn, record: &PointRecord) -> Result<bool> {
    if find_row(conn, &record.participant_id)?.is_some() {
        return Ok(false);
    }

    let points = to_sql_points(record.points, &record.participant_id)?;
    let sql = "INSERT INTO participants (participant_id, name, points, updated_at) VALUES (?1, ?2, ?3, ?4)";
    conn.execute(
        sql,
        params![record.participant_id, record.name, points, record.last_updated_at],
    )
    .with_context(|| store_context("insert", &record.participant_id))?;

    Ok(true)
}

pub fn find_by_id(conn: &mut DbConn, participant_id: &str) -> Result<Option<PointRecord>> {
    Ok(find_row(conn, participant_id)?.map(PointRecord::from))
}

/// Full population snapshot in registration order
pub fn list_all(conn: &mut DbConn) -> Result<Vec<PointRecord>> {
    let sql = format!("{} ORDER BY seq", SELECT_COLUMNS);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_participant_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list participants")?;

    Ok(rows.into_iter().map(PointRecord::from).collect())
}

/// Overwrite a participant's points. Returns `false` if the id is unknown.
pub fn set_points(
    conn: &mut DbConn,
    participant_id: &str,
    points: Points,
    updated_at: DateTime<Utc>,
) -> Result<bool> {
    let points = to_sql_points(points, participant_id)?;
    let sql = "UPDATE participants SET points = ?1, updated_at = ?2 WHERE participant_id = ?3";
    let changed = conn
        .execute(sql, params![points, updated_at, participant_id])
        .with_context(|| store_context("update", participant_id))?;

    Ok(changed > 0)
}

pub fn count(conn: &mut DbConn) -> Result<usize> {
    let total: i64 = conn
        .query_row("SELECT COUNT(*) FROM participants", [], |r| r.get(0))
        .context("Failed to count participants")?;
    Ok(total.max(0) as usize)
}

fn find_row(conn: &mut DbConn, participant_id: &str) -> Result<Option<ParticipantRow>> {
    let sql = format!("{} WHERE participant_id = ?1", SELECT_COLUMNS);

    conn.query_row(&sql, params![participant_id], parse_participant_row)
        .optional()
        .with_context(|| store_context("query", participant_id))
}

fn parse_participant_row(row: &rusqlite::Row) -> rusqlite::Result<ParticipantRow> {
    Ok(ParticipantRow {
        participant_id: row.get(0)?,
        name: row.get(1)?,
        points: row.get(2)?,
        updated_at: row.get(3)?,
    })
}

fn to_sql_points(points: Points, participant_id: &str) -> Result<i64> {
    i64::try_from(points)
        .with_context(|| format!("Points {} for participant {} exceed storable range", points, participant_id))
}
