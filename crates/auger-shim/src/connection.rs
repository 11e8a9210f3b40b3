//! Connection interception.

use std::sync::Arc;

use auger_core::{
    Concurrency, Connection, CursorKind, DatabaseMetadata, DriverError, PreparedStatement, Result,
    Statement,
};
use tracing::debug;

use crate::metadata::ShimMetadata;
use crate::statement::{ShimPreparedStatement, ShimStatement};

/// Wraps a connection handle.
///
/// Corrects statement creation with cursor hints the engine never
/// implemented, reports sensible answers for the read-only and
/// auto-commit settings the engine has no concept of, and upgrades
/// every statement, prepared statement, and metadata handle it returns
/// to a wrapped version.
pub struct ShimConnection {
    inner: Arc<dyn Connection>,
}

impl ShimConnection {
    /// Wraps the given delegate.
    #[must_use]
    pub fn new(inner: Arc<dyn Connection>) -> Self {
        Self { inner }
    }

    /// Retries statement creation through the plain zero-argument path,
    /// after confirming the connection is still open.
    fn plain_statement(&self) -> Result<Arc<dyn Statement>> {
        if self.inner.is_closed()? {
            return Err(DriverError::ConnectionClosed);
        }
        self.inner.create_statement()
    }
}

impl Connection for ShimConnection {
    fn create_statement(&self) -> Result<Arc<dyn Statement>> {
        let statement = match self.inner.create_statement() {
            Ok(statement) => statement,
            Err(err) if err.is_unsupported() => self.plain_statement()?,
            Err(err) => return Err(err),
        };
        Ok(Arc::new(ShimStatement::new(statement)))
    }

    fn create_statement_with(
        &self,
        cursor: CursorKind,
        concurrency: Concurrency,
    ) -> Result<Arc<dyn Statement>> {
        let statement = match self.inner.create_statement_with(cursor, concurrency) {
            Ok(statement) => statement,
            Err(err) if err.is_unsupported() => {
                // The engine does not support scroll or concurrency
                // hints; drop them and retry plain.
                debug!("Dropping {:?}/{:?} hints on statement creation", cursor, concurrency);
                self.plain_statement()?
            }
            Err(err) => return Err(err),
        };
        Ok(Arc::new(ShimStatement::new(statement)))
    }

    fn prepare_statement(&self, sql: &str) -> Result<Arc<dyn PreparedStatement>> {
        let statement = self.inner.prepare_statement(sql)?;
        Ok(Arc::new(ShimPreparedStatement::new(statement)))
    }

    fn metadata(&self) -> Result<Arc<dyn DatabaseMetadata>> {
        let metadata = self.inner.metadata()?;
        Ok(Arc::new(ShimMetadata::new(metadata, self.inner.clone())))
    }

    fn is_read_only(&self) -> Result<bool> {
        match self.inner.is_read_only() {
            Ok(read_only) => Ok(read_only),
            Err(err) if err.is_unsupported() => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn set_read_only(&self, read_only: bool) -> Result<()> {
        match self.inner.set_read_only(read_only) {
            Ok(()) => Ok(()),
            Err(err) if err.is_unsupported() => {
                debug!("Ignoring set_read_only({})", read_only);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn auto_commit(&self) -> Result<bool> {
        self.inner.auto_commit()
    }

    fn set_auto_commit(&self, auto_commit: bool) -> Result<()> {
        match self.inner.set_auto_commit(auto_commit) {
            Ok(()) => Ok(()),
            Err(err) if err.is_unsupported() => {
                debug!("Ignoring set_auto_commit({})", auto_commit);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn commit(&self) -> Result<()> {
        self.inner.commit()
    }

    fn rollback(&self) -> Result<()> {
        self.inner.rollback()
    }

    fn schema(&self) -> Result<Option<String>> {
        self.inner.schema()
    }

    fn set_schema(&self, schema: &str) -> Result<()> {
        self.inner.set_schema(schema)
    }

    fn close(&self) -> Result<()> {
        self.inner.close()
    }

    fn is_closed(&self) -> Result<bool> {
        self.inner.is_closed()
    }
}
