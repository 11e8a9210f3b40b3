//! Result-cursor interception.

use std::sync::Arc;

use auger_core::{CursorKind, Result, ResultSet, RowMetadata, SqlValue, Statement};
use tracing::debug;

use crate::row_metadata::ShimRowMetadata;
use crate::statement::ShimStatement;

/// Wraps a result cursor.
///
/// Corrects name-based column lookup (unreliable for some reporting
/// views), reports the cursor as forward-only (scrollability is not
/// really supported), answers `statement()` from a back-reference
/// captured at wrap time, and swallows the known benign lock-state
/// failure on close.
pub struct ShimResultSet {
    inner: Arc<dyn ResultSet>,
    /// The delegate statement that produced this cursor. Backfilled by
    /// the producing statement wrapper; `None` for cursors produced by
    /// metadata calls.
    statement: Option<Arc<dyn Statement>>,
}

impl ShimResultSet {
    /// Wraps a cursor that has no owning statement, such as one
    /// returned from a metadata call.
    #[must_use]
    pub fn new(inner: Arc<dyn ResultSet>) -> Self {
        Self {
            inner,
            statement: None,
        }
    }

    /// Wraps a cursor, recording the delegate statement that produced
    /// it so `statement()` can be answered when the delegate cannot.
    #[must_use]
    pub fn with_statement(inner: Arc<dyn ResultSet>, statement: Arc<dyn Statement>) -> Self {
        Self {
            inner,
            statement: Some(statement),
        }
    }
}

impl ResultSet for ShimResultSet {
    fn next(&self) -> Result<bool> {
        self.inner.next()
    }

    fn get_string(&self, column: &str) -> Result<Option<String>> {
        if let Ok(Some(value)) = self.inner.get_string(column) {
            return Ok(Some(value));
        }
        // The native lookup raised or came back empty; scan the column
        // metadata for the name and retry by position.
        let metadata = self.inner.metadata()?;
        let count = metadata.column_count()?;
        for index in 1..=count {
            if metadata.column_name(index)? == column {
                return self.inner.get_string_at(index);
            }
        }
        Ok(None)
    }

    fn get_string_at(&self, index: u32) -> Result<Option<String>> {
        self.inner.get_string_at(index)
    }

    fn get_value_at(&self, index: u32) -> Result<SqlValue> {
        self.inner.get_value_at(index)
    }

    fn metadata(&self) -> Result<Arc<dyn RowMetadata>> {
        let metadata = self.inner.metadata()?;
        Ok(Arc::new(ShimRowMetadata::new(metadata)))
    }

    fn cursor_kind(&self) -> Result<CursorKind> {
        Ok(CursorKind::ForwardOnly)
    }

    fn statement(&self) -> Result<Option<Arc<dyn Statement>>> {
        match self.inner.statement() {
            Ok(statement) => {
                Ok(statement.map(|s| Arc::new(ShimStatement::new(s)) as Arc<dyn Statement>))
            }
            Err(err) if err.is_unsupported() => Ok(self
                .statement
                .clone()
                .map(|s| Arc::new(ShimStatement::new(s)) as Arc<dyn Statement>)),
            Err(err) => Err(err),
        }
    }

    fn close(&self) -> Result<()> {
        match self.inner.close() {
            Ok(()) => Ok(()),
            Err(err) if err.is_lock_state() => {
                // By this point the engine's close already did its job
                // and failed unlocking a lock it never held.
                debug!("Ignoring lock-state failure on cursor close: {}", err);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
