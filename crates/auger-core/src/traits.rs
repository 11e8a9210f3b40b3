//! The driver capability surface.
//!
//! Both sides of the shim speak these traits: the real engine driver
//! implements them over its wire protocol, and each shim wrapper
//! implements them over a held delegate. Every object-returning
//! operation hands back an `Arc<dyn Trait>` so a wrapper can substitute
//! itself for the delegate without the caller noticing.
//!
//! All traits are object-safe, take `&self`, and are `Send + Sync`;
//! implementations own whatever interior mutability they need. The
//! surface itself adds no locking and no thread-safety guarantee beyond
//! what the implementation provides.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::types::{Concurrency, CursorKind, SqlType};
use crate::value::SqlValue;

/// Entry handle for an engine driver.
pub trait Driver: Send + Sync {
    /// Opens a connection to the engine at the given URL.
    fn connect(&self, url: &str) -> Result<Arc<dyn Connection>>;

    /// Returns whether this driver understands the given URL.
    fn accepts_url(&self, url: &str) -> Result<bool>;

    /// Returns the driver's (major, minor) version.
    fn version(&self) -> (u32, u32);
}

/// An open session against the engine.
pub trait Connection: Send + Sync {
    /// Creates a plain forward-only statement.
    fn create_statement(&self) -> Result<Arc<dyn Statement>>;

    /// Creates a statement with the requested cursor and concurrency
    /// hints.
    fn create_statement_with(
        &self,
        cursor: CursorKind,
        concurrency: Concurrency,
    ) -> Result<Arc<dyn Statement>>;

    /// Prepares a parameterized statement.
    fn prepare_statement(&self, sql: &str) -> Result<Arc<dyn PreparedStatement>>;

    /// Returns engine-level metadata for this connection.
    fn metadata(&self) -> Result<Arc<dyn DatabaseMetadata>>;

    /// Returns whether the connection is in read-only mode.
    fn is_read_only(&self) -> Result<bool>;

    /// Puts the connection in read-only mode.
    fn set_read_only(&self, read_only: bool) -> Result<()>;

    /// Returns the auto-commit mode.
    fn auto_commit(&self) -> Result<bool>;

    /// Sets the auto-commit mode.
    fn set_auto_commit(&self, auto_commit: bool) -> Result<()>;

    /// Commits the current transaction.
    fn commit(&self) -> Result<()>;

    /// Rolls back the current transaction.
    fn rollback(&self) -> Result<()>;

    /// Returns the current schema, if one is selected.
    fn schema(&self) -> Result<Option<String>>;

    /// Selects the current schema.
    fn set_schema(&self, schema: &str) -> Result<()>;

    /// Closes the connection.
    fn close(&self) -> Result<()>;

    /// Returns whether the connection has been closed.
    fn is_closed(&self) -> Result<bool>;
}

impl fmt::Debug for dyn Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn Connection")
    }
}

/// A statement handle for issuing queries.
pub trait Statement: Send + Sync {
    /// Executes a query and returns its result cursor.
    fn execute_query(&self, sql: &str) -> Result<Arc<dyn ResultSet>>;

    /// Executes a DML statement and returns the affected-row count.
    fn execute_update(&self, sql: &str) -> Result<u64>;

    /// Returns the currently open result cursor, if any.
    fn result_set(&self) -> Result<Option<Arc<dyn ResultSet>>>;

    /// Returns row metadata describing the statement's result shape,
    /// if the engine can report it before or after execution.
    fn metadata(&self) -> Result<Option<Arc<dyn RowMetadata>>>;

    /// Closes the statement.
    fn close(&self) -> Result<()>;

    /// Returns whether the statement has been closed.
    fn is_closed(&self) -> Result<bool>;
}

impl fmt::Debug for dyn Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn Statement")
    }
}

/// A pre-parsed statement with positional parameters.
///
/// Parameter indexes are 1-based, matching column indexes on
/// [`RowMetadata`].
pub trait PreparedStatement: Statement {
    /// Executes the prepared query with the currently bound parameters.
    fn execute(&self) -> Result<Arc<dyn ResultSet>>;

    /// Binds a value of any supported kind at the given position.
    fn set_object(&self, index: u32, value: SqlValue) -> Result<()>;

    /// Binds NULL of the given declared type at the given position.
    fn set_null(&self, index: u32, sql_type: SqlType) -> Result<()>;

    /// Binds a string at the given position.
    fn set_string(&self, index: u32, value: &str) -> Result<()>;

    /// Binds a 16-bit integer at the given position.
    fn set_smallint(&self, index: u32, value: i16) -> Result<()>;

    /// Binds a 32-bit integer at the given position.
    fn set_int(&self, index: u32, value: i32) -> Result<()>;

    /// Binds a 64-bit integer at the given position.
    fn set_bigint(&self, index: u32, value: i64) -> Result<()>;

    /// Binds a single-precision float at the given position.
    fn set_float(&self, index: u32, value: f32) -> Result<()>;

    /// Binds a double-precision float at the given position.
    fn set_double(&self, index: u32, value: f64) -> Result<()>;

    /// Binds a boolean at the given position.
    fn set_bool(&self, index: u32, value: bool) -> Result<()>;

    /// Binds a single byte at the given position.
    fn set_byte(&self, index: u32, value: i8) -> Result<()>;
}

/// Engine-level metadata for an open connection.
pub trait DatabaseMetadata: Send + Sync {
    /// Returns the connection that produced this metadata handle.
    fn connection(&self) -> Result<Arc<dyn Connection>>;

    /// Returns the string used to quote identifiers in SQL text.
    fn identifier_quote(&self) -> Result<String>;

    /// Returns a cursor over the tables visible in the given schema,
    /// or in all schemas when `None`.
    fn tables(&self, schema: Option<&str>) -> Result<Arc<dyn ResultSet>>;

    /// Returns a cursor over the visible schemas.
    fn schemas(&self) -> Result<Arc<dyn ResultSet>>;

    /// Returns a cursor over the visible catalogs.
    fn catalogs(&self) -> Result<Arc<dyn ResultSet>>;

    /// Returns the engine product name.
    fn product_name(&self) -> Result<String>;

    /// Returns the engine product version.
    fn product_version(&self) -> Result<String>;
}

/// A cursor over query results. Column indexes are 1-based.
pub trait ResultSet: Send + Sync {
    /// Advances to the next row; returns `false` past the last row.
    fn next(&self) -> Result<bool>;

    /// Returns the current row's value in the named column as text,
    /// or `None` for NULL.
    fn get_string(&self, column: &str) -> Result<Option<String>>;

    /// Returns the current row's value at the given position as text,
    /// or `None` for NULL.
    fn get_string_at(&self, index: u32) -> Result<Option<String>>;

    /// Returns the current row's value at the given position.
    fn get_value_at(&self, index: u32) -> Result<SqlValue>;

    /// Returns metadata describing this cursor's columns.
    fn metadata(&self) -> Result<Arc<dyn RowMetadata>>;

    /// Returns the cursor's traversal capability.
    fn cursor_kind(&self) -> Result<CursorKind>;

    /// Returns the statement that produced this cursor, if it can be
    /// reported.
    fn statement(&self) -> Result<Option<Arc<dyn Statement>>>;

    /// Closes the cursor.
    fn close(&self) -> Result<()>;
}

/// Per-column metadata for a result cursor. Column indexes are 1-based.
pub trait RowMetadata: Send + Sync {
    /// Returns the number of columns.
    fn column_count(&self) -> Result<u32>;

    /// Returns the name of the column at the given position.
    fn column_name(&self, index: u32) -> Result<String>;

    /// Returns the display label of the column at the given position.
    fn column_label(&self, index: u32) -> Result<String>;

    /// Returns the declared type of the column at the given position.
    fn column_type(&self, index: u32) -> Result<SqlType>;

    /// Returns the engine's name for the column's declared type.
    fn column_type_name(&self, index: u32) -> Result<String>;

    /// Returns whether the column admits NULL.
    fn is_nullable(&self, index: u32) -> Result<bool>;

    /// Returns whether values in the column are signed.
    fn is_signed(&self, index: u32) -> Result<bool>;
}
