//! # auger-core
//!
//! The driver capability surface shared by the Auger shim and the
//! engine drivers it wraps.
//!
//! This crate defines:
//! - Object-safe traits for every driver-level handle kind: [`Driver`],
//!   [`Connection`], [`Statement`], [`PreparedStatement`],
//!   [`DatabaseMetadata`], [`ResultSet`], [`RowMetadata`]
//! - The value model for parameter binding ([`SqlValue`])
//! - Type codes ([`SqlType`], [`CursorKind`], [`Concurrency`])
//! - The shared error type ([`DriverError`]) and its sentinel
//!   recognition helpers
//!
//! A generic SQL client invokes these traits against whatever handle it
//! is given; whether that handle is a raw engine driver or an Auger
//! wrapper around one is invisible at the type level.

pub mod error;
pub mod traits;
pub mod types;
pub mod value;

pub use error::{DriverError, Result, METHOD_NOT_SUPPORTED};
pub use traits::{
    Connection, DatabaseMetadata, Driver, PreparedStatement, ResultSet, RowMetadata, Statement,
};
pub use types::{Concurrency, CursorKind, SqlType};
pub use value::SqlValue;
