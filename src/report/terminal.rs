use std::io::{self, Stdout, Write};
use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::error::GenError;
use crate::models::{Artifact, OutcomeStatus, PackageName, PackageOutcome};
use crate::scaffold::Progress;

/// The header lines printed before a package is written.
pub fn started_lines(root: &Path, package: &PackageName) -> Vec<String> {
    vec![
        format!("* Root directory for the project: {}", root.display()),
        format!("* Package name: {}", package),
    ]
}

/// Confirmation printed once `artifact` is on disk.
pub fn written_line(artifact: Artifact) -> String {
    format!("* Created {}", artifact)
}

pub fn rejected_line(error: &GenError) -> String {
    capitalize(&error.to_string())
}

#[derive(Clone, Copy)]
enum LineKind {
    Started,
    Written,
    Rejected,
}

/// Writes one line per step as packages are generated.
///
/// `quiet` drops the header and confirmation lines; rejections are always shown.
pub struct TerminalProgress<W: Write> {
    out: W,
    quiet: bool,
    color: bool,
}

impl TerminalProgress<Stdout> {
    pub fn new(quiet: bool) -> Self {
        Self {
            out: io::stdout(),
            quiet,
            color: true,
        }
    }
}

impl<W: Write> TerminalProgress<W> {
    /// Plain, uncolored output into `out`.
    pub fn with_writer(out: W, quiet: bool) -> Self {
        Self {
            out,
            quiet,
            color: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, kind: LineKind, line: &str) {
        let line = match (self.color, kind) {
            (false, _) => line.to_string(),
            (true, LineKind::Started) => line.cyan().to_string(),
            (true, LineKind::Written) => line.green().to_string(),
            (true, LineKind::Rejected) => line.red().to_string(),
        };
        if let Err(err) = writeln!(self.out, "{}", line) {
            tracing::warn!(%err, "failed to write progress line");
        }
    }
}

impl<W: Write> Progress for TerminalProgress<W> {
    fn started(&mut self, root: &Path, package: &PackageName) {
        if self.quiet {
            return;
        }
        for line in started_lines(root, package) {
            self.emit(LineKind::Started, &line);
        }
    }

    fn written(&mut self, _package: &PackageName, artifact: Artifact) {
        if self.quiet {
            return;
        }
        self.emit(LineKind::Written, &written_line(artifact));
    }

    fn rejected(&mut self, _raw: &str, error: &GenError) {
        self.emit(LineKind::Rejected, &rejected_line(error));
    }
}

/// Keeps stdout clean for JSON output; rejections go to the log instead.
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn started(&mut self, _root: &Path, _package: &PackageName) {}

    fn written(&mut self, _package: &PackageName, _artifact: Artifact) {}

    fn rejected(&mut self, raw: &str, error: &GenError) {
        tracing::warn!(raw = %raw, "{}", error);
    }
}

/// `(generated, rejected)` counts.
pub fn summary_counts(outcomes: &[PackageOutcome]) -> (usize, usize) {
    let generated = outcomes
        .iter()
        .filter(|o| o.status == OutcomeStatus::Generated)
        .count();
    (generated, outcomes.len() - generated)
}

pub fn summary_table(outcomes: &[PackageOutcome]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Requested").add_attribute(Attribute::Bold),
            Cell::new("Package").add_attribute(Attribute::Bold),
            Cell::new("Location").add_attribute(Attribute::Bold),
            Cell::new("Files").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for outcome in outcomes {
        let (location, color) = match (&outcome.status, &outcome.package) {
            (OutcomeStatus::Generated, Some(package)) => (
                outcome.root.join(package.as_str()).display().to_string(),
                Color::Green,
            ),
            _ => (String::from("-"), Color::Red),
        };

        table.add_row(vec![
            Cell::new(&outcome.requested),
            Cell::new(
                outcome
                    .package
                    .as_ref()
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(location),
            Cell::new(outcome.files.len()),
            Cell::new(outcome.status.to_string()).fg(color),
        ]);
    }

    table
}

/// Render the end-of-run summary table.
pub fn render_summary(outcomes: &[PackageOutcome]) {
    if outcomes.is_empty() {
        println!("{}", "No package names given.".dimmed());
        return;
    }

    let (generated, rejected) = summary_counts(outcomes);

    println!();
    println!("{}", summary_table(outcomes));
    println!(
        " Generated: {}  Rejected: {}",
        generated.to_string().green(),
        rejected.to_string().red(),
    );
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
