use refinery::embed_migrations;

embed_migrations!("src/storage/migrations");

/// Creates the record tables if they are missing
///
/// Applied migrations are tracked in `refinery_schema_history`, so running
/// this against an already provisioned database is a no-op.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), refinery::Error> {
    migrations::runner().run(conn).map(|_| ())
}

/// Check if the record tables exist in database
pub(crate) fn has_record_schema(conn: &rusqlite::Connection) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='qualification_question'",
    )?;
    stmt.exists([])
}
