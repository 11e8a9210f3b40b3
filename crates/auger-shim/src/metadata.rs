//! Engine-metadata interception.

use std::sync::Arc;

use auger_core::{Connection, DatabaseMetadata, Result, ResultSet};

use crate::connection::ShimConnection;
use crate::result_set::ShimResultSet;

/// Wraps an engine-metadata handle.
///
/// Answers `connection()` from the back-reference captured at wrap
/// time, and overrides the identifier quote string unconditionally: the
/// drivers that need this shim report a literal quote where the answer
/// should be empty, so the delegate's answer is wrong rather than
/// absent.
pub struct ShimMetadata {
    inner: Arc<dyn DatabaseMetadata>,
    /// The delegate connection that produced this handle.
    connection: Arc<dyn Connection>,
}

impl ShimMetadata {
    /// Wraps the given delegate, recording the connection that
    /// produced it.
    #[must_use]
    pub fn new(inner: Arc<dyn DatabaseMetadata>, connection: Arc<dyn Connection>) -> Self {
        Self { inner, connection }
    }

    fn wrap(result_set: Arc<dyn ResultSet>) -> Arc<dyn ResultSet> {
        // Metadata cursors have no owning statement to backfill.
        Arc::new(ShimResultSet::new(result_set))
    }
}

impl DatabaseMetadata for ShimMetadata {
    fn connection(&self) -> Result<Arc<dyn Connection>> {
        Ok(Arc::new(ShimConnection::new(self.connection.clone())))
    }

    fn identifier_quote(&self) -> Result<String> {
        Ok(String::new())
    }

    fn tables(&self, schema: Option<&str>) -> Result<Arc<dyn ResultSet>> {
        let tables = self.inner.tables(schema)?;
        Ok(Self::wrap(tables))
    }

    fn schemas(&self) -> Result<Arc<dyn ResultSet>> {
        let schemas = self.inner.schemas()?;
        Ok(Self::wrap(schemas))
    }

    fn catalogs(&self) -> Result<Arc<dyn ResultSet>> {
        let catalogs = self.inner.catalogs()?;
        Ok(Self::wrap(catalogs))
    }

    fn product_name(&self) -> Result<String> {
        self.inner.product_name()
    }

    fn product_version(&self) -> Result<String> {
        self.inner.product_version()
    }
}
