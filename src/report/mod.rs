//! Console output for a generation run.
//!
//! - [`terminal`] — colored progress lines per package and a summary table;
//!   respects `--quiet`.

pub mod terminal;
