//! Generic single-row persistence for the three record kinds.
//!
//! A [`RecordManager`] borrows the connection guard of the current request,
//! so it can never outlive that request. Every operation is one statement
//! (or one read-modify-write transaction for updates) and commits
//! immediately.

use crate::error::{AppError, AppResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::marker::PhantomData;
use tracing::debug;

/// A table-backed entity with a store-assigned integer `id`
pub trait Record: Sized {
    /// Payload accepted by [`RecordManager::create`]
    type Create;
    /// Partial patch accepted by [`RecordManager::update`]
    type Update;

    const TABLE: &'static str;
    /// Every column except `id`, in the order used by the value methods
    const COLUMNS: &'static [&'static str];
    /// Human-readable name used in not-found and delete messages
    const LABEL: &'static str;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    fn create_values(payload: Self::Create) -> Vec<Value>;

    fn values(&self) -> Vec<Value>;

    fn merge(&mut self, patch: Self::Update);

    fn not_found() -> AppError {
        AppError::NotFound(format!("{} not found", Self::LABEL))
    }

    fn deleted_message() -> String {
        format!("{} deleted successfully", Self::LABEL)
    }
}

/// Equality filter on a single column
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    column: &'static str,
    value: Value,
}

impl Filter {
    pub fn equals(column: &'static str, value: impl Into<Value>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}

pub struct RecordManager<'c, R> {
    conn: &'c Connection,
    _record: PhantomData<R>,
}

impl<'c, R: Record> RecordManager<'c, R> {
    pub fn new(conn: &'c Connection) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }

    fn select_clause() -> String {
        format!("SELECT id, {} FROM {}", R::COLUMNS.join(", "), R::TABLE)
    }

    /// Fetch by primary key; `None` when no row matches
    pub fn get_one(&self, id: i64) -> AppResult<Option<R>> {
        let sql = format!("{} WHERE id = ?1", Self::select_clause());

        let record = self
            .conn
            .query_row(&sql, params![id], |row| R::from_row(row))
            .optional()?;

        Ok(record)
    }

    /// Up to `limit` rows after skipping `skip`, ordered by id ascending
    pub fn get_many(&self, filter: Option<&Filter>, skip: u32, limit: u32) -> AppResult<Vec<R>> {
        let mut sql = Self::select_clause();
        let mut values = Vec::with_capacity(3);

        if let Some(filter) = filter {
            if !R::COLUMNS.contains(&filter.column) {
                return Err(AppError::Internal(format!(
                    "Unknown column '{}' for table {}",
                    filter.column,
                    R::TABLE
                )));
            }
            sql.push_str(&format!(" WHERE {} = ?", filter.column));
            values.push(filter.value.clone());
        }

        sql.push_str(" ORDER BY id ASC LIMIT ? OFFSET ?");
        values.push(Value::Integer(i64::from(limit)));
        values.push(Value::Integer(i64::from(skip)));

        let mut stmt = self.conn.prepare(&sql)?;
        let records = stmt
            .query_map(params_from_iter(values), |row| R::from_row(row))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    pub fn create(&self, payload: R::Create) -> AppResult<R> {
        let placeholders = (1..=R::COLUMNS.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            R::TABLE,
            R::COLUMNS.join(", "),
            placeholders
        );

        self.conn
            .execute(&sql, params_from_iter(R::create_values(payload)))?;
        let id = self.conn.last_insert_rowid();
        debug!(table = R::TABLE, id, "Inserted record");

        self.get_one(id)?
            .ok_or_else(|| AppError::Internal(format!("Inserted row {id} missing from {}", R::TABLE)))
    }

    /// Applies `patch` on top of the stored row; fields absent from the patch
    /// keep their stored values.
    pub fn update(&self, id: i64, patch: R::Update) -> AppResult<R> {
        let tx = self.conn.unchecked_transaction()?;

        let mut record = self.get_one(id)?.ok_or_else(R::not_found)?;
        record.merge(patch);

        let assignments = R::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ?{}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            R::TABLE,
            assignments,
            R::COLUMNS.len() + 1
        );

        let mut values = record.values();
        values.push(Value::Integer(id));
        self.conn.execute(&sql, params_from_iter(values))?;

        let updated = self.get_one(id)?.ok_or_else(R::not_found)?;
        tx.commit()?;
        debug!(table = R::TABLE, id, "Updated record");

        Ok(updated)
    }

    pub fn delete(&self, id: i64) -> AppResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", R::TABLE);
        let affected = self.conn.execute(&sql, params![id])?;

        if affected == 0 {
            return Err(R::not_found());
        }

        debug!(table = R::TABLE, id, "Deleted record");
        Ok(())
    }
}
