/// Create the qualification_question table
pub fn migration() -> String {
    r#"
CREATE TABLE qualification_question (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question_text TEXT NOT NULL,
    phase_id INTEGER NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT 1
);

CREATE INDEX idx_qualification_question_phase
    ON qualification_question(phase_id);
"#
    .to_string()
}
