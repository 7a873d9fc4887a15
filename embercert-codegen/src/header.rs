//! The C header template.
//!
//! The layout is fixed: an include guard, an `#ifdef ESP8266` conditional so
//! the declaration only compiles for the one supported target, and a PROGMEM
//! raw string literal so the certificate lives in flash instead of RAM.
//! Only the variable name and the certificate body vary.

/// Include guard symbol of the generated header.
pub const INCLUDE_GUARD: &str = "EMBER_GOOGLE_ROOT_CA_H";

/// Preprocessor symbol restricting the declaration to the ESP8266 target.
pub const PLATFORM_GUARD: &str = "ESP8266";

/// A renderable certificate header.
///
/// The certificate text is treated as opaque: no PEM structure is checked,
/// and internal whitespace is preserved verbatim.
#[derive(Debug, Clone)]
pub struct CertHeader {
    var_name: String,
    pem: String,
}

impl CertHeader {
    /// Create a header for the given variable name and certificate text.
    ///
    /// The caller is responsible for trimming outer whitespace from `pem`;
    /// the template supplies its own newlines around the body.
    pub fn new(var_name: impl Into<String>, pem: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
            pem: pem.into(),
        }
    }

    /// Render the full header file content.
    pub fn render(&self) -> String {
        format!(
            "#ifndef {guard}\n\
             #define {guard}\n\
             \n\
             #ifdef {platform}\n\
             \n\
             const char {var}[] PROGMEM = R\"CERT(\n\
             {pem}\n\
             )CERT\";\n\
             \n\
             #endif\n\
             #endif\n",
            guard = INCLUDE_GUARD,
            platform = PLATFORM_GUARD,
            var = self.var_name,
            pem = self.pem,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEM: &str = "-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----";

    #[test]
    fn test_render_full_layout() {
        let header = CertHeader::new("google_root_ca", PEM);
        insta::assert_snapshot!(header.render(), @r#"
#ifndef EMBER_GOOGLE_ROOT_CA_H
#define EMBER_GOOGLE_ROOT_CA_H

#ifdef ESP8266

const char google_root_ca[] PROGMEM = R"CERT(
-----BEGIN CERTIFICATE-----
AAAA
-----END CERTIFICATE-----
)CERT";

#endif
#endif
"#);
    }

    #[test]
    fn test_render_substitutes_var_name() {
        let header = CertHeader::new("test_ca", PEM);
        let rendered = header.render();
        assert!(rendered.contains("const char test_ca[] PROGMEM"));
        assert!(!rendered.contains("google_root_ca"));
    }

    #[test]
    fn test_render_embeds_body_between_raw_string_delimiters() {
        let header = CertHeader::new("ca", PEM);
        let rendered = header.render();
        let expected = format!("R\"CERT(\n{PEM}\n)CERT\";");
        assert!(rendered.contains(&expected));
    }

    #[test]
    fn test_render_preserves_internal_whitespace() {
        let body = "line one\n\n  indented line\nline two";
        let header = CertHeader::new("ca", body);
        assert!(header.render().contains(body));
    }

    #[test]
    fn test_render_ends_with_trailing_newline() {
        let header = CertHeader::new("ca", PEM);
        assert!(header.render().ends_with("#endif\n"));
    }
}
