use anyhow::{Context, Result};

use super::connection::DbConn;

/// Create the schema if missing, keeping existing rows
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }
    Ok(())
}

/// Drop all participants and recreate the schema
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    execute_sql(conn, "DROP TABLE IF EXISTS participants")?;
    ensure_schema(conn)?;

    log::info!("Database schema reset successfully");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
