//! Package generation: one requested name in, one directory tree out.
//!
//! For each argument the [`Generator`] splits off the root directory,
//! normalizes the name ([`crate::naming`]), resolves the license
//! ([`crate::license`]), creates the [`ProjectLayout`] and writes README,
//! LICENSE, tests, `__init__.py` and `setup.py` in that order. Names are
//! handled strictly one after another.

use std::path::{Path, PathBuf};

use crate::error::GenError;
use crate::license::resolver::LicenseResolver;
use crate::models::{
    Artifact, GenerateOptions, LicenseParams, OutcomeStatus, PackageName, PackageOutcome,
    ProjectLayout,
};
use crate::naming::{normalize, split_target};

pub mod files;
pub mod layout;

/// Receives progress as packages are generated.
pub trait Progress {
    fn started(&mut self, root: &Path, package: &PackageName);
    fn written(&mut self, package: &PackageName, artifact: Artifact);
    fn rejected(&mut self, raw: &str, error: &GenError);
}

pub struct Generator<'a> {
    resolver: &'a LicenseResolver,
    options: &'a GenerateOptions,
}

impl<'a> Generator<'a> {
    pub fn new(resolver: &'a LicenseResolver, options: &'a GenerateOptions) -> Self {
        Self { resolver, options }
    }

    /// Generate every requested package in order.
    ///
    /// Invalid names are reported and skipped. Any other error stops the run;
    /// packages written before it stay on disk.
    pub fn run(
        &self,
        args: &[String],
        cwd: &Path,
        progress: &mut dyn Progress,
    ) -> Result<Vec<PackageOutcome>, GenError> {
        let mut outcomes = Vec::with_capacity(args.len());
        for arg in args {
            outcomes.push(self.process(arg, cwd, progress)?);
        }
        Ok(outcomes)
    }

    /// Handle one package argument, turning an invalid name into a rejected outcome.
    pub fn process(
        &self,
        arg: &str,
        cwd: &Path,
        progress: &mut dyn Progress,
    ) -> Result<PackageOutcome, GenError> {
        let (root, raw) = split_target(arg, cwd);

        let package = match normalize(&raw, self.options.max_name_len) {
            Ok(package) => package,
            Err(err) if err.is_recoverable() => {
                tracing::debug!(raw = %raw, "rejected package name");
                progress.rejected(&raw, &err);
                return Ok(PackageOutcome {
                    requested: arg.to_string(),
                    package: None,
                    root,
                    status: OutcomeStatus::Rejected,
                    files: Vec::new(),
                });
            }
            Err(err) => return Err(err),
        };

        progress.started(&root, &package);
        let files = self.generate(&root, &package, progress)?;

        Ok(PackageOutcome {
            requested: arg.to_string(),
            package: Some(package),
            root,
            status: OutcomeStatus::Generated,
            files,
        })
    }

    /// Write the skeleton for an already normalized `package` under `root`.
    ///
    /// The license is resolved before anything touches the disk.
    pub fn generate(
        &self,
        root: &Path,
        package: &PackageName,
        progress: &mut dyn Progress,
    ) -> Result<Vec<PathBuf>, GenError> {
        let opts = self.options;
        let license = self.resolver.resolve(
            opts.license,
            &LicenseParams {
                year: opts.year.clone(),
                holder: opts.user.clone(),
                email: opts.email.clone(),
                package: package.to_string(),
            },
        )?;

        let layout = ProjectLayout::plan(root, package, opts.docs);
        layout.create()?;
        tracing::debug!(
            package = %package,
            license = %license.key,
            top = %layout.top.display(),
            "writing skeleton"
        );

        let mut written = Vec::new();

        let readme = files::readme(package, &opts.description, opts.docs);
        written.push(write_file(&layout.top.join("README.md"), &readme)?);
        progress.written(package, Artifact::Readme);

        written.push(write_file(&layout.top.join("LICENSE"), &license.text)?);
        progress.written(package, Artifact::License);

        written.push(write_file(
            &layout.tests.join("context.py"),
            &files::context(&license.notice, package),
        )?);
        written.push(write_file(
            &layout.tests.join("test_basic.py"),
            &files::test_basic(&license.notice, package),
        )?);
        progress.written(package, Artifact::Tests);

        written.push(write_file(
            &layout.module.join("__init__.py"),
            &files::init(&license.notice),
        )?);
        progress.written(package, Artifact::Init);

        written.push(write_file(
            &layout.top.join("setup.py"),
            &files::setup(package, &opts.user, &opts.email, &license.notice, &readme),
        )?);
        progress.written(package, Artifact::Setup);

        Ok(written)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<PathBuf, GenError> {
    std::fs::write(path, contents).map_err(|source| GenError::Filesystem {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(file = %path.display(), bytes = contents.len(), "wrote file");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::templates;
    use crate::models::LicenseKey;
    use tempfile::tempdir;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Progress for Recorder {
        fn started(&mut self, root: &Path, package: &PackageName) {
            self.events.push(format!("start {} {}", root.display(), package));
        }

        fn written(&mut self, package: &PackageName, artifact: Artifact) {
            self.events.push(format!("{package}: {artifact}"));
        }

        fn rejected(&mut self, raw: &str, _error: &GenError) {
            self.events.push(format!("reject {raw}"));
        }
    }

    fn options(license: LicenseKey) -> GenerateOptions {
        GenerateOptions {
            license,
            user: "Alice".to_string(),
            email: String::new(),
            year: "2024".to_string(),
            description: "A test package".to_string(),
            docs: false,
            max_name_len: 15,
        }
    }

    fn read(path: PathBuf) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_end_to_end_mit() {
        let dir = tempdir().unwrap();
        let resolver = LicenseResolver::builtin();
        let opts = options(LicenseKey::Mit);
        let mut rec = Recorder::default();

        let outcomes = Generator::new(&resolver, &opts)
            .run(&["Test-Pkg".to_string()], dir.path(), &mut rec)
            .unwrap();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status, OutcomeStatus::Generated);
        assert_eq!(outcomes[0].files.len(), 6);

        let top = dir.path().join("test_pkg");
        for file in [
            "README.md",
            "LICENSE",
            "setup.py",
            "test_pkg/__init__.py",
            "tests/context.py",
            "tests/test_basic.py",
        ] {
            assert!(top.join(file).is_file(), "missing {file}");
        }
        assert!(!top.join("docs").exists());

        let license = read(top.join("LICENSE"));
        assert!(license.starts_with("MIT License"));
        assert!(license.contains("Copyright (c) 2024 Alice\n"));

        let notice = resolver
            .resolve(
                LicenseKey::Mit,
                &LicenseParams {
                    year: "2024".into(),
                    holder: "Alice".into(),
                    email: String::new(),
                    package: "test_pkg".into(),
                },
            )
            .unwrap()
            .notice;
        assert!(read(top.join("test_pkg/__init__.py")).starts_with(&notice));
        assert!(read(top.join("tests/context.py")).starts_with(&notice));
        assert!(read(top.join("tests/test_basic.py")).ends_with("from .context import test_pkg\n"));

        let setup = read(top.join("setup.py"));
        assert!(setup.contains("name='test_pkg'"));
        assert!(!setup.contains("author_email"));

        assert_eq!(
            rec.events[1..],
            [
                "test_pkg: README.md",
                "test_pkg: LICENSE",
                "test_pkg: test templates",
                "test_pkg: __init__.py",
                "test_pkg: setup.py",
            ]
        );
    }

    #[test]
    fn test_running_twice_overwrites() {
        let dir = tempdir().unwrap();
        let resolver = LicenseResolver::builtin();
        let mut opts = options(LicenseKey::Bsd);
        let args = ["demo".to_string()];

        Generator::new(&resolver, &opts)
            .run(&args, dir.path(), &mut Recorder::default())
            .unwrap();
        opts.year = "2025".to_string();
        Generator::new(&resolver, &opts)
            .run(&args, dir.path(), &mut Recorder::default())
            .unwrap();

        let license = read(dir.path().join("demo/LICENSE"));
        assert!(license.contains("Copyright (c) 2025, Alice"));
        assert!(!license.contains("2024"));

        let entries = std::fs::read_dir(dir.path().join("demo")).unwrap().count();
        assert_eq!(entries, 5);
        assert!(!dir.path().join("demo/demo/demo").exists());
    }

    #[test]
    fn test_docs_directory_only_when_requested() {
        let dir = tempdir().unwrap();
        let resolver = LicenseResolver::builtin();
        let mut opts = options(LicenseKey::Apache2);
        opts.docs = true;

        Generator::new(&resolver, &opts)
            .run(&["withdocs".to_string()], dir.path(), &mut Recorder::default())
            .unwrap();

        let docs = dir.path().join("withdocs/docs");
        assert!(docs.is_dir());
        assert_eq!(std::fs::read_dir(docs).unwrap().count(), 0);
        assert!(read(dir.path().join("withdocs/README.md")).contains("┗━ docs"));
    }

    #[test]
    fn test_invalid_name_skipped_and_run_continues() {
        let dir = tempdir().unwrap();
        let resolver = LicenseResolver::builtin();
        let opts = options(LicenseKey::Gplv3);
        let mut rec = Recorder::default();

        let outcomes = Generator::new(&resolver, &opts)
            .run(
                &["123abc".to_string(), "good".to_string()],
                dir.path(),
                &mut rec,
            )
            .unwrap();

        assert_eq!(outcomes[0].status, OutcomeStatus::Rejected);
        assert!(outcomes[0].package.is_none());
        assert_eq!(outcomes[1].status, OutcomeStatus::Generated);
        assert_eq!(rec.events[0], "reject 123abc");
        assert!(!dir.path().join("123abc").exists());
        assert!(dir.path().join("good/LICENSE").is_file());
    }

    #[test]
    fn test_missing_license_aborts_run() {
        let dir = tempdir().unwrap();
        let resolver = LicenseResolver::with_templates(vec![templates::builtin(LicenseKey::Mit)]);
        let opts = options(LicenseKey::Gplv3);

        let err = Generator::new(&resolver, &opts)
            .run(
                &["first".to_string(), "second".to_string()],
                dir.path(),
                &mut Recorder::default(),
            )
            .unwrap_err();

        assert!(matches!(err, GenError::LicenseNotFound { .. }));
        assert!(!dir.path().join("first").exists());
        assert!(!dir.path().join("second").exists());
    }

    #[test]
    fn test_nested_target_uses_parent_as_root() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("work")).unwrap();
        let resolver = LicenseResolver::builtin();
        let opts = options(LicenseKey::Mit);

        let outcomes = Generator::new(&resolver, &opts)
            .run(&["work/My.Tool".to_string()], dir.path(), &mut Recorder::default())
            .unwrap();

        assert_eq!(outcomes[0].root, dir.path().join("work"));
        assert!(dir.path().join("work/mytool/mytool/__init__.py").is_file());
    }
}
