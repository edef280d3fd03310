/// Create the client_info table for company intake details
pub fn migration() -> String {
    r#"
CREATE TABLE client_info (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    company_name TEXT NOT NULL,
    website_url TEXT NOT NULL,
    industry TEXT NOT NULL,
    contact_first_name TEXT NOT NULL,
    contact_last_name TEXT NOT NULL,
    contact_email TEXT NOT NULL,
    number_employees INTEGER NOT NULL,
    number_clients INTEGER NOT NULL,
    sells_product BOOLEAN NOT NULL,
    sells_service BOOLEAN NOT NULL,
    description TEXT NOT NULL
);
"#
    .to_string()
}
