//! Types consumed by the host configuration system.

use serde::{Deserialize, Serialize};

/// Registration metadata identifying a dialect to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectPlugin {
    /// Stable engine identifier.
    pub id: String,
    /// Human-readable engine name.
    pub display_name: String,
}

/// How the host may reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Direct connection through the engine driver.
    Native,
    /// Connection resolved through a directory service.
    Directory,
}

/// Semantic kind of a column, as the generic descriptor carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    /// Calendar date or point in time.
    Date,
    /// Boolean.
    Boolean,
    /// Floating-point number.
    Number,
    /// Integer.
    Integer,
    /// Arbitrary-precision number.
    BigNumber,
    /// Character data.
    String,
    /// Binary data.
    Binary,
}

/// A generic column descriptor handed to the dialect by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,
    /// Semantic kind of the column.
    pub semantic_type: SemanticType,
    /// Declared length, when one was given.
    pub length: Option<u32>,
    /// Declared precision (decimal places), when one was given.
    pub precision: Option<u32>,
}

impl ColumnDescriptor {
    /// Creates a descriptor with no length or precision.
    pub fn new(name: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            semantic_type,
            length: None,
            precision: None,
        }
    }

    /// Sets the declared length.
    #[must_use]
    pub const fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the declared precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }
}
