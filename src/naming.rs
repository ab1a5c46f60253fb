use std::path::{Path, PathBuf};

use crate::error::GenError;
use crate::models::PackageName;

/// Default maximum length of a normalized package name.
pub const DEFAULT_MAX_LEN: usize = 15;

/// Normalize a raw package name into a short, all-lowercase module identifier.
///
/// Lowercases, turns dashes into underscores and drops periods. The result may
/// only contain ASCII letters and underscores, with at least one letter; it is
/// then silently cut down to `max_len` characters.
pub fn normalize(raw: &str, max_len: usize) -> Result<PackageName, GenError> {
    let name: String = raw.to_lowercase().replace('-', "_").replace('.', "");

    let letters: Vec<char> = name.chars().filter(|c| *c != '_').collect();
    if letters.is_empty() || !letters.iter().all(|c| c.is_ascii_lowercase()) {
        return Err(GenError::InvalidName {
            raw: raw.to_string(),
        });
    }

    // Only ASCII remains, so byte and char lengths agree.
    let truncated = &name[..name.len().min(max_len)];
    Ok(PackageName::new_unchecked(truncated.to_string()))
}

/// Split a package argument into the root directory and the raw base name.
///
/// `some/dir/My-Pkg` yields `(<cwd>/some/dir, "My-Pkg")`; an argument without
/// a parent directory is rooted at `cwd`. A trailing slash is ignored, so
/// `my-pkg/` names the package `my-pkg`.
pub fn split_target(arg: &str, cwd: &Path) -> (PathBuf, String) {
    let path = Path::new(arg);
    let base = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let root = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && parent != Path::new(".") => {
            if parent.is_absolute() {
                parent.to_path_buf()
            } else {
                cwd.join(parent)
            }
        }
        _ => cwd.to_path_buf(),
    };

    (root, base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: &str) -> Result<String, GenError> {
        normalize(raw, DEFAULT_MAX_LEN).map(|n| n.to_string())
    }

    #[test]
    fn test_normalize_mixed_punctuation() {
        assert_eq!(norm("My-Package.Name").unwrap(), "my_packagename");
    }

    #[test]
    fn test_digits_rejected() {
        assert!(matches!(norm("123abc"), Err(GenError::InvalidName { .. })));
        assert!(matches!(norm("abc2"), Err(GenError::InvalidName { .. })));
    }

    #[test]
    fn test_truncation() {
        let name = norm("a_very_long_package_name_exceeding_limit").unwrap();
        assert_eq!(name, "a_very_long_pac");
        assert_eq!(name.len(), 15);
    }

    #[test]
    fn test_custom_max_len() {
        assert_eq!(normalize("abcdef", 3).unwrap().as_str(), "abc");
    }

    #[test]
    fn test_leading_and_trailing_underscores_accepted() {
        assert_eq!(norm("_pkg_").unwrap(), "_pkg_");
        assert_eq!(norm("-pkg-").unwrap(), "_pkg_");
    }

    #[test]
    fn test_empty_remainder_rejected() {
        for raw in ["", "___", "...", "-.-"] {
            assert!(
                matches!(norm(raw), Err(GenError::InvalidName { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_ascii_and_symbols_rejected() {
        assert!(norm("café").is_err());
        assert!(norm("my pkg").is_err());
        assert!(norm("pkg/sub").is_err());
    }

    #[test]
    fn test_output_alphabet() {
        for raw in ["Hello", "A.B-C", "x_Y_z", "Foo-Bar.Baz-Qux-Quux"] {
            let name = norm(raw).unwrap();
            assert!(name.len() <= DEFAULT_MAX_LEN);
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }

    #[test]
    fn test_split_target_bare_name() {
        let cwd = Path::new("/work");
        assert_eq!(
            split_target("Test-Pkg", cwd),
            (PathBuf::from("/work"), "Test-Pkg".to_string())
        );
        assert_eq!(
            split_target("./Test-Pkg", cwd),
            (PathBuf::from("/work"), "Test-Pkg".to_string())
        );
    }

    #[test]
    fn test_split_target_trailing_slash() {
        let cwd = Path::new("/work");
        assert_eq!(
            split_target("foo/", cwd),
            (PathBuf::from("/work"), "foo".to_string())
        );
        assert_eq!(
            split_target("a/foo/", cwd),
            (PathBuf::from("/work/a"), "foo".to_string())
        );
        assert_eq!(norm(&split_target("foo/", cwd).1).unwrap(), "foo");
    }

    #[test]
    fn test_split_target_nested() {
        let cwd = Path::new("/work");
        assert_eq!(
            split_target("a/b/My-Pkg", cwd),
            (PathBuf::from("/work/a/b"), "My-Pkg".to_string())
        );
        assert_eq!(
            split_target("/abs/dir/pkg", cwd),
            (PathBuf::from("/abs/dir"), "pkg".to_string())
        );
    }
}
