use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GenError;

/// A normalized, import-safe package identifier.
///
/// Only [`crate::naming::normalize`] constructs one, so every value holds
/// `[a-z_]+` with at least one letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    pub(crate) fn new_unchecked(name: String) -> Self {
        PackageName(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseKey {
    Gplv3,
    Mit,
    Agplv3,
    Bsd,
    Apache2,
}

impl LicenseKey {
    pub const ALL: [LicenseKey; 5] = [
        LicenseKey::Gplv3,
        LicenseKey::Mit,
        LicenseKey::Agplv3,
        LicenseKey::Bsd,
        LicenseKey::Apache2,
    ];
}

impl std::fmt::Display for LicenseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseKey::Gplv3 => write!(f, "gplv3"),
            LicenseKey::Mit => write!(f, "mit"),
            LicenseKey::Agplv3 => write!(f, "agplv3"),
            LicenseKey::Bsd => write!(f, "bsd"),
            LicenseKey::Apache2 => write!(f, "apache2"),
        }
    }
}

impl FromStr for LicenseKey {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        LicenseKey::ALL
            .into_iter()
            .find(|k| k.to_string() == key)
            .ok_or(GenError::LicenseNotFound { key })
    }
}

/// Substitution inputs for a license template.
#[derive(Debug, Clone)]
pub struct LicenseParams {
    pub year: String,
    pub holder: String,
    /// Empty when no email was given; the email clause is then omitted.
    pub email: String,
    pub package: String,
}

/// Full license text and its short per-file notice, rendered together.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseArtifact {
    pub key: LicenseKey,
    pub text: String,
    pub notice: String,
}

/// Directories making up one generated package.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub top: PathBuf,
    pub module: PathBuf,
    pub tests: PathBuf,
    pub docs: Option<PathBuf>,
}

/// Resolved settings for one run, after merging CLI flags, config and environment.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub license: LicenseKey,
    pub user: String,
    pub email: String,
    pub year: String,
    pub description: String,
    pub docs: bool,
    pub max_name_len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Generated,
    Rejected,
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeStatus::Generated => write!(f, "generated"),
            OutcomeStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// What happened to one requested package name.
#[derive(Debug, Clone, Serialize)]
pub struct PackageOutcome {
    pub requested: String,
    pub package: Option<PackageName>,
    pub root: PathBuf,
    pub status: OutcomeStatus,
    pub files: Vec<PathBuf>,
}

/// The artifacts written for a package, reported as each one lands on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Readme,
    License,
    Tests,
    Init,
    Setup,
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Artifact::Readme => write!(f, "README.md"),
            Artifact::License => write!(f, "LICENSE"),
            Artifact::Tests => write!(f, "test templates"),
            Artifact::Init => write!(f, "__init__.py"),
            Artifact::Setup => write!(f, "setup.py"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_key_from_str() {
        assert_eq!("mit".parse::<LicenseKey>().unwrap(), LicenseKey::Mit);
        assert_eq!(" Apache2 ".parse::<LicenseKey>().unwrap(), LicenseKey::Apache2);
        for key in LicenseKey::ALL {
            assert_eq!(key.to_string().parse::<LicenseKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_unknown_license_key() {
        let err = "lgpl".parse::<LicenseKey>().unwrap_err();
        assert!(matches!(err, GenError::LicenseNotFound { ref key } if key == "lgpl"));
    }
}
