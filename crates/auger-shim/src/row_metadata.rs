//! Row-metadata interception.
//!
//! Drill reports fully qualified column names (`table.column`) through
//! some reporting views, and older drivers cannot answer `is_signed` at
//! all. Both get corrected here.

use std::sync::Arc;

use auger_core::{DriverError, Result, RowMetadata, SqlType};
use tracing::debug;

/// Wraps a row-descriptor handle, normalizing column names and
/// inferring signedness the delegate cannot report.
pub struct ShimRowMetadata {
    inner: Arc<dyn RowMetadata>,
}

impl ShimRowMetadata {
    /// Wraps the given delegate.
    #[must_use]
    pub fn new(inner: Arc<dyn RowMetadata>) -> Self {
        Self { inner }
    }

    fn infer_signedness(&self, index: u32) -> Result<bool> {
        let count = self.inner.column_count()?;
        if index < 1 || index > count {
            return Err(DriverError::InvalidColumn { index });
        }
        let sql_type = self.inner.column_type(index)?;
        debug!("Inferring signedness for column {} from {:?}", index, sql_type);
        Ok(signed_type(sql_type))
    }
}

/// Strips any dotted qualifier prefix, keeping the trailing simple name.
fn simple_name(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(dot) => &qualified[dot + 1..],
        None => qualified,
    }
}

/// Fixed signedness table over declared SQL types: numeric kinds are
/// signed, everything else is not.
fn signed_type(sql_type: SqlType) -> bool {
    matches!(
        sql_type,
        SqlType::Double
            | SqlType::Decimal
            | SqlType::Float
            | SqlType::Integer
            | SqlType::Real
            | SqlType::SmallInt
            | SqlType::TinyInt
            | SqlType::BigInt
    )
}

impl RowMetadata for ShimRowMetadata {
    fn column_count(&self) -> Result<u32> {
        self.inner.column_count()
    }

    fn column_name(&self, index: u32) -> Result<String> {
        let name = self.inner.column_name(index)?;
        Ok(simple_name(&name).to_string())
    }

    fn column_label(&self, index: u32) -> Result<String> {
        let label = self.inner.column_label(index)?;
        Ok(simple_name(&label).to_string())
    }

    fn column_type(&self, index: u32) -> Result<SqlType> {
        self.inner.column_type(index)
    }

    fn column_type_name(&self, index: u32) -> Result<String> {
        self.inner.column_type_name(index)
    }

    fn is_nullable(&self, index: u32) -> Result<bool> {
        self.inner.is_nullable(index)
    }

    fn is_signed(&self, index: u32) -> Result<bool> {
        match self.inner.is_signed(index) {
            Ok(signed) => Ok(signed),
            Err(err) if err.is_unsupported() => self.infer_signedness(index),
            Err(err) => Err(err),
        }
    }
}
