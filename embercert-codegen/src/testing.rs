//! Fake certificate sources for tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests. No fake performs real I/O.

use std::cell::Cell;
use std::fmt;

use crate::error::{Error, Result};
use crate::fetch::CertSource;

/// A small but structurally real PEM body for tests.
pub const SAMPLE_PEM: &str = "-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----";

/// A source that returns a fixed body.
pub struct StaticSource {
    body: String,
}

impl StaticSource {
    /// Create a source returning `body` on every fetch.
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl CertSource for StaticSource {
    fn fetch(&self) -> Result<String> {
        Ok(self.body.clone())
    }

    fn origin(&self) -> &str {
        "static test source"
    }
}

/// A source that fails every fetch, simulating a non-success HTTP status.
pub struct FailingSource {
    status: u16,
}

impl FailingSource {
    /// Create a source that fails with the given HTTP status code.
    pub fn with_status(status: u16) -> Self {
        Self { status }
    }
}

#[derive(Debug)]
struct HttpStatus(u16);

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "server returned status {}", self.0)
    }
}

impl std::error::Error for HttpStatus {}

impl CertSource for FailingSource {
    fn fetch(&self) -> Result<String> {
        Err(Error::network(self.origin(), HttpStatus(self.status)))
    }

    fn origin(&self) -> &str {
        "failing test source"
    }
}

/// Wraps another source and counts how often it is fetched.
pub struct CountingSource<S> {
    inner: S,
    calls: Cell<usize>,
}

impl<S: CertSource> CountingSource<S> {
    /// Wrap `inner`, starting the counter at zero.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Number of fetches performed so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<S: CertSource> CertSource for CountingSource<S> {
    fn fetch(&self) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        self.inner.fetch()
    }

    fn origin(&self) -> &str {
        self.inner.origin()
    }
}
