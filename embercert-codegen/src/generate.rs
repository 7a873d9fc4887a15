//! The generate operation.
//!
//! A run is a linear sequence: existence check, fetch, normalize, template,
//! write. The existence check makes repeated invocations idempotent by
//! presence only; a changed remote certificate is never picked up while the
//! output file exists. `force` and the CLI's `clean` command are the manual
//! invalidation paths.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CertConfig;
use crate::error::{Error, Result};
use crate::fetch::CertSource;
use crate::header::CertHeader;

/// Options for the generate operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Regenerate even when the output file already exists.
    pub force: bool,
    /// Fetch and render, but return the content instead of writing it.
    pub dry_run: bool,
}

/// What a generation run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The header was rendered and written to the output path.
    Written,
    /// The output file already exists; nothing was fetched or written.
    Skipped,
    /// Dry run: the rendered content, nothing written.
    Previewed(String),
}

/// Generate the certificate header described by `config`.
///
/// If the output file exists the run is a no-op unless `force` is set; the
/// existence check short-circuits before any network I/O. A dry run always
/// fetches and renders, even over an existing file, but never touches the
/// filesystem.
pub fn generate(
    config: &CertConfig,
    source: &dyn CertSource,
    opts: GenerateOptions,
) -> Result<Outcome> {
    config.validate()?;

    if config.output.exists() && !opts.force && !opts.dry_run {
        return Ok(Outcome::Skipped);
    }

    let body = source.fetch()?;
    let header = CertHeader::new(&config.var_name, body.trim());
    let content = header.render();

    if opts.dry_run {
        return Ok(Outcome::Previewed(content));
    }

    write_header(&config.output, &content)?;
    Ok(Outcome::Written)
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// The content goes to a sibling temp file first and is renamed into place,
/// so a crash mid-write cannot leave a truncated header that would satisfy
/// the next run's existence check.
fn write_header(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::filesystem(parent, e))?;
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, content).map_err(|e| Error::filesystem(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| Error::filesystem(path, e))?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("header"));
    name.push(".tmp");
    path.with_file_name(name)
}
