use std::path::Path;

use crate::error::GenError;
use crate::models::{PackageName, ProjectLayout};

impl ProjectLayout {
    /// Directory paths for package `name` under `root`; nothing is created.
    pub fn plan(root: &Path, name: &PackageName, docs: bool) -> Self {
        let top = root.join(name.as_str());
        ProjectLayout {
            root: root.to_path_buf(),
            module: top.join(name.as_str()),
            tests: top.join("tests"),
            docs: docs.then(|| top.join("docs")),
            top,
        }
    }

    /// Create every directory of the layout that does not exist yet.
    pub fn create(&self) -> Result<(), GenError> {
        let dirs = [Some(&self.top), Some(&self.module), Some(&self.tests), self.docs.as_ref()];
        for dir in dirs.into_iter().flatten() {
            if dir.is_dir() {
                continue;
            }
            std::fs::create_dir_all(dir).map_err(|source| GenError::Filesystem {
                path: dir.clone(),
                source,
            })?;
            tracing::debug!(dir = %dir.display(), "created directory");
        }
        Ok(())
    }
}
