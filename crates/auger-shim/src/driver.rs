//! Driver interception.

use std::sync::Arc;

use auger_core::{Connection, Driver, Result};

use crate::connection::ShimConnection;

/// Wraps a driver handle, upgrading every connection it opens to a
/// wrapped version. Everything else passes through untouched.
pub struct ShimDriver {
    inner: Arc<dyn Driver>,
}

impl ShimDriver {
    /// Wraps the given delegate.
    #[must_use]
    pub fn new(inner: Arc<dyn Driver>) -> Self {
        Self { inner }
    }
}

impl Driver for ShimDriver {
    fn connect(&self, url: &str) -> Result<Arc<dyn Connection>> {
        let connection = self.inner.connect(url)?;
        Ok(Arc::new(ShimConnection::new(connection)))
    }

    fn accepts_url(&self, url: &str) -> Result<bool> {
        self.inner.accepts_url(url)
    }

    fn version(&self) -> (u32, u32) {
        self.inner.version()
    }
}
