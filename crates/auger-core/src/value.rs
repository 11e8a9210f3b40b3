//! The value model flowing through parameter binding.

use chrono::{DateTime, Utc};

/// A value bound to a prepared-statement parameter.
///
/// The variants mirror the typed setters on
/// [`PreparedStatement`](crate::PreparedStatement): every variant the
/// shim can rebind through a typed setter has a matching `set_*`
/// operation, while [`Blob`](Self::Blob) and
/// [`Timestamp`](Self::Timestamp) have no safe textual fallback and are
/// rejected when generic binding is unavailable.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Text value.
    Text(String),
    /// 16-bit integer value.
    SmallInt(i16),
    /// 32-bit integer value.
    Int(i32),
    /// 64-bit integer value.
    BigInt(i64),
    /// Single-precision float value.
    Float(f32),
    /// Double-precision float value.
    Double(f64),
    /// Boolean value.
    Bool(bool),
    /// Single byte value.
    Byte(i8),
    /// Single character value.
    Char(char),
    /// Binary blob value.
    Blob(Vec<u8>),
    /// Timestamp value.
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    /// Returns the name of this value's kind, as used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Text(_) => "TEXT",
            Self::SmallInt(_) => "SMALLINT",
            Self::Int(_) => "INTEGER",
            Self::BigInt(_) => "BIGINT",
            Self::Float(_) => "FLOAT",
            Self::Double(_) => "DOUBLE",
            Self::Bool(_) => "BOOLEAN",
            Self::Byte(_) => "BYTE",
            Self::Char(_) => "CHAR",
            Self::Blob(_) => "BLOB",
            Self::Timestamp(_) => "TIMESTAMP",
        }
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i16> for SqlValue {
    fn from(value: i16) -> Self {
        Self::SmallInt(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::BigInt(value)
    }
}

impl From<f32> for SqlValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for SqlValue {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}
