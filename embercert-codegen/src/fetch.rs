//! Fetching the certificate body.
//!
//! [`CertSource`] is the seam between the generate operation and the
//! network; tests substitute the fakes in the `testing` module so no test
//! ever performs real I/O against the certificate authority.

use crate::error::{Error, Result};

/// A source of PEM certificate text.
pub trait CertSource {
    /// Fetch the certificate body as text.
    ///
    /// The body is returned as received; whitespace normalization happens in
    /// the generate operation, not here.
    fn fetch(&self) -> Result<String>;

    /// The URL (or description) this source reads from, for progress output.
    fn origin(&self) -> &str;
}

/// Production source: one blocking HTTP GET against the configured URL.
///
/// No retry, no custom timeout, no redirect-limit override; the transport
/// defaults apply. A non-success status is an error.
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    /// Create a source for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl CertSource for HttpSource {
    fn fetch(&self) -> Result<String> {
        let response = ureq::get(&self.url)
            .call()
            .map_err(|e| Error::network(&self.url, e))?;

        // into_string caps the body at 10 MiB, far above any PEM certificate.
        response
            .into_string()
            .map_err(|e| Error::network(&self.url, e))
    }

    fn origin(&self) -> &str {
        &self.url
    }
}
