//! Error types shared by the driver surface and the shim.

/// The exact message text an engine driver reports for an operation its
/// wire implementation never grew. Recognition of this sentinel is what
/// separates "fall back to a local correction" from "genuine failure".
pub const METHOD_NOT_SUPPORTED: &str = "Method not supported";

/// Errors reported through the driver capability surface.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// The underlying engine never implemented the operation.
    #[error("Method not supported")]
    Unsupported,

    /// Opaque failure reported by the engine, passed through unchanged.
    ///
    /// Some engine builds report the unimplemented-operation defect as
    /// plain message text rather than a dedicated code, so this variant
    /// participates in sentinel recognition when the message matches
    /// [`METHOD_NOT_SUPPORTED`] exactly.
    #[error("{message}")]
    Engine {
        /// Message text as received from the engine.
        message: String,
    },

    /// Lock-state violation raised while tearing down a cursor.
    #[error("Lock state violation: {message}")]
    LockState {
        /// Message text as received from the engine.
        message: String,
    },

    /// Statement creation was attempted on a closed connection.
    #[error("Can't create Statement, connection is closed")]
    ConnectionClosed,

    /// A column index outside `1..=column_count` was used.
    #[error("Invalid column value: {index}")]
    InvalidColumn {
        /// The out-of-range 1-based index.
        index: u32,
    },

    /// No typed binding path exists for the supplied value kind.
    #[error("Type {type_name} is not yet supported")]
    UnsupportedType {
        /// Name of the value kind that could not be bound.
        type_name: &'static str,
        /// The delegate failure that forced the typed-binding fallback.
        #[source]
        source: Box<DriverError>,
    },

    /// Transport-level failure surfaced by a delegate implementation.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriverError {
    /// Returns whether this failure is the recognized "operation not
    /// implemented" signal that triggers a local correction.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        match self {
            Self::Unsupported => true,
            Self::Engine { message } => message == METHOD_NOT_SUPPORTED,
            _ => false,
        }
    }

    /// Returns whether this failure is a close-time lock-state signal.
    #[must_use]
    pub fn is_lock_state(&self) -> bool {
        matches!(self, Self::LockState { .. })
    }
}

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, DriverError>;
