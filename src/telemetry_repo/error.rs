// Store error taxonomy: missing relation vs. anything else

use thiserror::Error;

/// SQLSTATE for "undefined table" on server databases.
const UNDEFINED_TABLE_SQLSTATE: &str = "42P01";
/// SQLite reports a missing relation only through the message text.
const SQLITE_NO_SUCH_TABLE: &str = "no such table";

#[derive(Debug, Error)]
pub enum StoreError {
    /// The telemetry table has not been created yet. Recoverable: the page
    /// shows the waiting placeholder.
    #[error("table {table} not found")]
    Uninitialized { table: String },

    /// A row did not match the column contract.
    #[error("bad row: {0}")]
    Decode(#[source] sqlx::Error),

    #[error(transparent)]
    Access(#[from] sqlx::Error),
}

impl StoreError {
    /// Sorts a query error into the taxonomy above.
    pub fn classify(err: sqlx::Error, table: &str) -> Self {
        if is_undefined_table(&err) {
            return StoreError::Uninitialized {
                table: table.to_string(),
            };
        }
        match err {
            e @ (sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_)) => StoreError::Decode(e),
            e => StoreError::Access(e),
        }
    }

    pub fn is_uninitialized(&self) -> bool {
        matches!(self, StoreError::Uninitialized { .. })
    }
}

pub fn is_undefined_table(err: &sqlx::Error) -> bool {
    let sqlx::Error::Database(db) = err else {
        return false;
    };
    db.code().as_deref() == Some(UNDEFINED_TABLE_SQLSTATE)
        || db.message().starts_with(SQLITE_NO_SUCH_TABLE)
}
