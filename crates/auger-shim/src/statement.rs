//! Statement and prepared-statement interception.

use std::sync::Arc;

use auger_core::{
    DriverError, PreparedStatement, Result, ResultSet, RowMetadata, SqlType, SqlValue, Statement,
};
use tracing::debug;

use crate::result_set::ShimResultSet;
use crate::row_metadata::ShimRowMetadata;

/// Wraps a statement handle.
///
/// Corrects unsupported `metadata()` by deriving it from the currently
/// open result cursor, and backfills the owning-statement
/// back-reference on every cursor it hands out.
pub struct ShimStatement {
    inner: Arc<dyn Statement>,
}

impl ShimStatement {
    /// Wraps the given delegate.
    #[must_use]
    pub fn new(inner: Arc<dyn Statement>) -> Self {
        Self { inner }
    }
}

/// Derives row metadata from the statement's currently open result
/// cursor. Returns `None` when no cursor exists or any step of the
/// derivation fails; this path never raises.
fn derive_metadata(inner: &dyn Statement) -> Option<Arc<dyn RowMetadata>> {
    let result_set = inner.result_set().ok().flatten()?;
    let metadata = result_set.metadata().ok()?;
    Some(Arc::new(ShimRowMetadata::new(metadata)) as Arc<dyn RowMetadata>)
}

impl Statement for ShimStatement {
    fn execute_query(&self, sql: &str) -> Result<Arc<dyn ResultSet>> {
        let result_set = self.inner.execute_query(sql)?;
        Ok(Arc::new(ShimResultSet::with_statement(
            result_set,
            self.inner.clone(),
        )))
    }

    fn execute_update(&self, sql: &str) -> Result<u64> {
        self.inner.execute_update(sql)
    }

    fn result_set(&self) -> Result<Option<Arc<dyn ResultSet>>> {
        let result_set = self.inner.result_set()?;
        Ok(result_set.map(|rs| {
            Arc::new(ShimResultSet::with_statement(rs, self.inner.clone()))
                as Arc<dyn ResultSet>
        }))
    }

    fn metadata(&self) -> Result<Option<Arc<dyn RowMetadata>>> {
        match self.inner.metadata() {
            Ok(metadata) => Ok(metadata.map(|md| {
                Arc::new(ShimRowMetadata::new(md)) as Arc<dyn RowMetadata>
            })),
            Err(err) if err.is_unsupported() => Ok(derive_metadata(self.inner.as_ref())),
            Err(err) => Err(err),
        }
    }

    fn close(&self) -> Result<()> {
        self.inner.close()
    }

    fn is_closed(&self) -> Result<bool> {
        self.inner.is_closed()
    }
}

/// Wraps a prepared-statement handle.
///
/// Adds typed-binding fallbacks for engines whose generic `set_object`
/// and `set_null` paths never got implemented, on top of everything
/// [`ShimStatement`] corrects.
pub struct ShimPreparedStatement {
    inner: Arc<dyn PreparedStatement>,
}

impl ShimPreparedStatement {
    /// Wraps the given delegate.
    #[must_use]
    pub fn new(inner: Arc<dyn PreparedStatement>) -> Self {
        Self { inner }
    }

    /// Rebinds `value` through the typed setter matching its kind.
    /// `cause` is the delegate failure that forced this path; it is
    /// preserved as the source of the rejection when no typed setter
    /// fits.
    fn bind_by_kind(&self, index: u32, value: SqlValue, cause: DriverError) -> Result<()> {
        debug!("Rebinding {} parameter {} by kind", value.type_name(), index);
        match value {
            // Routed through the wrapper so the set_null correction
            // chains if the delegate cannot bind nulls either.
            SqlValue::Null => self.set_null(index, SqlType::Null),
            SqlValue::Text(v) => self.inner.set_string(index, &v),
            SqlValue::SmallInt(v) => self.inner.set_smallint(index, v),
            SqlValue::Int(v) => self.inner.set_int(index, v),
            SqlValue::BigInt(v) => self.inner.set_bigint(index, v),
            SqlValue::Float(v) => self.inner.set_float(index, v),
            SqlValue::Double(v) => self.inner.set_double(index, v),
            SqlValue::Bool(v) => self.inner.set_bool(index, v),
            SqlValue::Byte(v) => self.inner.set_byte(index, v),
            SqlValue::Char(v) => self.inner.set_string(index, &v.to_string()),
            other @ (SqlValue::Blob(_) | SqlValue::Timestamp(_)) => {
                // No typed setter can carry these kinds.
                Err(DriverError::UnsupportedType {
                    type_name: other.type_name(),
                    source: Box::new(cause),
                })
            }
        }
    }

    fn statement(&self) -> Arc<dyn Statement> {
        self.inner.clone()
    }
}

impl Statement for ShimPreparedStatement {
    fn execute_query(&self, sql: &str) -> Result<Arc<dyn ResultSet>> {
        let result_set = self.inner.execute_query(sql)?;
        Ok(Arc::new(ShimResultSet::with_statement(
            result_set,
            self.statement(),
        )))
    }

    fn execute_update(&self, sql: &str) -> Result<u64> {
        self.inner.execute_update(sql)
    }

    fn result_set(&self) -> Result<Option<Arc<dyn ResultSet>>> {
        let result_set = self.inner.result_set()?;
        Ok(result_set.map(|rs| {
            Arc::new(ShimResultSet::with_statement(rs, self.statement()))
                as Arc<dyn ResultSet>
        }))
    }

    fn metadata(&self) -> Result<Option<Arc<dyn RowMetadata>>> {
        match self.inner.metadata() {
            Ok(metadata) => Ok(metadata.map(|md| {
                Arc::new(ShimRowMetadata::new(md)) as Arc<dyn RowMetadata>
            })),
            Err(err) if err.is_unsupported() => Ok(derive_metadata(self.statement().as_ref())),
            Err(err) => Err(err),
        }
    }

    fn close(&self) -> Result<()> {
        self.inner.close()
    }

    fn is_closed(&self) -> Result<bool> {
        self.inner.is_closed()
    }
}

impl PreparedStatement for ShimPreparedStatement {
    fn execute(&self) -> Result<Arc<dyn ResultSet>> {
        let result_set = self.inner.execute()?;
        Ok(Arc::new(ShimResultSet::with_statement(
            result_set,
            self.statement(),
        )))
    }

    fn set_object(&self, index: u32, value: SqlValue) -> Result<()> {
        match self.inner.set_object(index, value.clone()) {
            Ok(()) => Ok(()),
            Err(err) if err.is_unsupported() => self.bind_by_kind(index, value, err),
            Err(err) => Err(err),
        }
    }

    fn set_null(&self, index: u32, sql_type: SqlType) -> Result<()> {
        match self.inner.set_null(index, sql_type) {
            Ok(()) => Ok(()),
            Err(err) if err.is_unsupported() => {
                // Not ideal, but keeps simplistic consumers from
                // crashing on a missing binding.
                debug!("Binding empty string in place of NULL at parameter {}", index);
                self.inner.set_string(index, "")
            }
            Err(err) => Err(err),
        }
    }

    fn set_string(&self, index: u32, value: &str) -> Result<()> {
        self.inner.set_string(index, value)
    }

    fn set_smallint(&self, index: u32, value: i16) -> Result<()> {
        self.inner.set_smallint(index, value)
    }

    fn set_int(&self, index: u32, value: i32) -> Result<()> {
        self.inner.set_int(index, value)
    }

    fn set_bigint(&self, index: u32, value: i64) -> Result<()> {
        self.inner.set_bigint(index, value)
    }

    fn set_float(&self, index: u32, value: f32) -> Result<()> {
        self.inner.set_float(index, value)
    }

    fn set_double(&self, index: u32, value: f64) -> Result<()> {
        self.inner.set_double(index, value)
    }

    fn set_bool(&self, index: u32, value: bool) -> Result<()> {
        self.inner.set_bool(index, value)
    }

    fn set_byte(&self, index: u32, value: i8) -> Result<()> {
        self.inner.set_byte(index, value)
    }
}
