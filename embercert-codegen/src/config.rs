//! Generation configuration and built-in defaults.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// URL for the Google GTS Root R1 certificate in PEM format.
pub const DEFAULT_CERT_URL: &str = "https://i.pki.goog/r1.pem";

/// Path to the generated header, relative to the firmware project root.
pub const DEFAULT_OUTPUT_HEADER: &str = "cert/google_root_ca.h";

/// Variable name of the embedded certificate in the generated header.
pub const DEFAULT_VAR_NAME: &str = "google_root_ca";

/// Configuration for one header generation run.
///
/// The defaults reproduce the fixed constants the tool ships with; tests and
/// callers substitute their own URL, output path, and variable name.
///
/// # Example
///
/// ```
/// use embercert_codegen::CertConfig;
///
/// let config = CertConfig::default();
/// assert_eq!(config.var_name, "google_root_ca");
///
/// let custom = CertConfig::new("https://localhost:8443/ca.pem", "out/ca.h", "test_ca");
/// assert_eq!(custom.output.to_str(), Some("out/ca.h"));
/// ```
#[derive(Debug, Clone)]
pub struct CertConfig {
    /// URL the PEM certificate is fetched from.
    pub url: String,
    /// Path of the generated header file.
    pub output: PathBuf,
    /// C variable name for the embedded certificate.
    pub var_name: String,
}

impl CertConfig {
    /// Create a configuration with explicit values.
    pub fn new(url: impl Into<String>, output: impl Into<PathBuf>, var_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            output: output.into(),
            var_name: var_name.into(),
        }
    }

    /// Get the output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Validate that the configured variable name is a legal C identifier.
    ///
    /// The name ends up verbatim in a `const char <name>[]` declaration, so
    /// anything else would produce a header that fails to compile.
    pub fn validate(&self) -> Result<()> {
        if is_c_identifier(&self.var_name) {
            Ok(())
        } else {
            Err(Error::InvalidVarName {
                name: self.var_name.clone(),
            })
        }
    }
}

impl Default for CertConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CERT_URL, DEFAULT_OUTPUT_HEADER, DEFAULT_VAR_NAME)
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
