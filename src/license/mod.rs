//! Embedded license templates and their rendering.
//!
//! - [`templates`] — the full-text and short-notice pair for each
//!   [`LicenseKey`](crate::models::LicenseKey).
//! - [`resolver`] — renders a template pair against
//!   [`LicenseParams`](crate::models::LicenseParams) in one all-or-nothing call.

pub mod resolver;
pub mod templates;
