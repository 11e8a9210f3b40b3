//! Type codes reported across the driver surface.

/// Declared SQL type of a column or parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    /// Generic NULL type, used for untyped null bindings.
    Null,
    /// Fixed-width character type.
    Char,
    /// Bounded variable-width character type.
    VarChar,
    /// Unbounded character type.
    Text,
    /// 8-bit integer type.
    TinyInt,
    /// 16-bit integer type.
    SmallInt,
    /// 32-bit integer type.
    Integer,
    /// 64-bit integer type.
    BigInt,
    /// Single-precision floating-point type.
    Real,
    /// Floating-point type.
    Float,
    /// Double-precision floating-point type.
    Double,
    /// Exact fixed-scale numeric type.
    Decimal,
    /// Exact numeric type with declared precision and scale.
    Numeric,
    /// Boolean type.
    Boolean,
    /// Calendar date type.
    Date,
    /// Time-of-day type.
    Time,
    /// Point-in-time type.
    Timestamp,
    /// Binary type.
    Binary,
    /// Any engine-specific type without a generic code.
    Other,
}

/// Cursor traversal capability of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    /// The cursor only moves forward.
    ForwardOnly,
    /// The cursor is scrollable and blind to concurrent changes.
    ScrollInsensitive,
    /// The cursor is scrollable and observes concurrent changes.
    ScrollSensitive,
}

/// Concurrency mode of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concurrency {
    /// The result set cannot be updated in place.
    ReadOnly,
    /// The result set supports in-place updates.
    Updatable,
}
