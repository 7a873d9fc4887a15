//! Certificate header generation for EmberIot firmware builds.
//!
//! This crate fetches a root CA certificate in PEM form and renders it into
//! a C header suitable for inclusion in an ESP8266 firmware build. The flow
//! is linear: check whether the output header already exists, fetch the
//! certificate, normalize it, render the template, write the file.
//!
//! # Module Organization
//!
//! - [`config`] - Generation configuration and built-in defaults
//! - [`error`] - Error types (network, filesystem, configuration)
//! - [`fetch`] - The [`CertSource`] seam and the HTTP implementation
//! - [`header`] - The C header template
//! - [`generate`] - The generate operation
//! - [`testing`] - Fake certificate sources (feature-gated)

pub mod config;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod header;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::CertConfig;
pub use error::{Error, Result};
pub use fetch::{CertSource, HttpSource};
pub use generate::{GenerateOptions, Outcome, generate};
pub use header::CertHeader;
