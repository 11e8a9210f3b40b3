//! # auger-shim
//!
//! A corrective interception layer for Apache Drill drivers whose
//! wire-level implementation is incomplete or inconsistent across
//! versions.
//!
//! Many operations on these drivers either raise a flat
//! `"Method not supported"` failure or quietly return wrong answers
//! (qualified column names, a bogus identifier quote string, a spurious
//! lock-state failure on cursor close). The shim wraps each driver
//! handle in an adapter implementing the same [`auger_core`] surface:
//! every call is first attempted against the real delegate, and only
//! when it fails with the recognized unimplemented-operation signal
//! does a local correction take over. Genuine failures re-raise
//! unchanged.
//!
//! The wrapping chains: the handles a driver cannot hand out at
//! connect time (statements, cursors, metadata) are upgraded lazily, at
//! the interception point that first observes them. Callers should
//! treat the wrapper as the only access path to the delegate, since a
//! call made against a retained raw handle bypasses every correction.
//!
//! ```
//! use std::sync::Arc;
//! use auger_core::Connection;
//! # use auger_core::Result;
//! # fn open_drill_connection() -> Result<Arc<dyn Connection>> { unimplemented!() }
//!
//! # fn demo() -> Result<()> {
//! let raw: Arc<dyn Connection> = open_drill_connection()?;
//! let connection = auger_shim::shim_connection(raw);
//! let statement = connection.create_statement()?;
//! # Ok(())
//! # }
//! ```

mod connection;
mod driver;
mod metadata;
mod result_set;
mod row_metadata;
mod statement;

use std::sync::Arc;

use auger_core::{Connection, Driver};

pub use connection::ShimConnection;
pub use driver::ShimDriver;
pub use metadata::ShimMetadata;
pub use result_set::ShimResultSet;
pub use row_metadata::ShimRowMetadata;
pub use statement::{ShimPreparedStatement, ShimStatement};

/// Wraps an engine driver. Connections it opens, and every child
/// handle reachable from them, come back wrapped.
#[must_use]
pub fn shim_driver(driver: Arc<dyn Driver>) -> Arc<dyn Driver> {
    Arc::new(ShimDriver::new(driver))
}

/// Wraps an already-open connection, for callers that obtained one
/// without going through the driver.
#[must_use]
pub fn shim_connection(connection: Arc<dyn Connection>) -> Arc<dyn Connection> {
    Arc::new(ShimConnection::new(connection))
}
