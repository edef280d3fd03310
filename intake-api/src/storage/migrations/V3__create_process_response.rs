/// Create the process_response table
///
/// `session_id` is an opaque grouping key, not a reference to another table.
pub fn migration() -> String {
    r#"
CREATE TABLE process_response (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id TEXT NOT NULL,
    question TEXT NOT NULL,
    answer TEXT NOT NULL
);

CREATE INDEX idx_process_response_session
    ON process_response(session_id);
"#
    .to_string()
}
