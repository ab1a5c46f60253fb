use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while generating a package skeleton.
///
/// Only [`GenError::InvalidName`] is recoverable: the offending name is skipped
/// and the run moves on. Every other variant aborts the whole run.
#[derive(Error, Debug)]
pub enum GenError {
    /// The package name contains characters other than letters and underscores.
    #[error("the package name, {raw}, is not valid. It may only include alphabetic characters and underscores.")]
    InvalidName { raw: String },

    /// No license template is registered for the requested key.
    #[error("no license template found for '{key}'")]
    LicenseNotFound { key: String },

    /// A license template references a substitution slot that does not exist.
    #[error("license template '{license}' uses unknown slot {{{slot}}}")]
    UnknownSlot { license: String, slot: String },

    /// Creating a directory or writing a file failed.
    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    /// Whether the run may continue with the next package name.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GenError::InvalidName { .. })
    }
}
