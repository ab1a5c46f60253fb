use crate::models::LicenseKey;

/// A full license text and the condensed notice placed at the top of source files.
///
/// Both are plain text with `{year}`, `{holder}`, `{contact}` and `{package}` slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LicenseTemplate {
    pub key: LicenseKey,
    pub text: &'static str,
    pub notice: &'static str,
}

/// The embedded template for `key`.
pub fn builtin(key: LicenseKey) -> LicenseTemplate {
    let (text, notice) = match key {
        LicenseKey::Gplv3 => (
            include_str!("templates/gplv3.txt"),
            include_str!("templates/gplv3_notice.txt"),
        ),
        LicenseKey::Mit => (
            include_str!("templates/mit.txt"),
            include_str!("templates/mit_notice.txt"),
        ),
        LicenseKey::Agplv3 => (
            include_str!("templates/agplv3.txt"),
            include_str!("templates/agplv3_notice.txt"),
        ),
        LicenseKey::Bsd => (
            include_str!("templates/bsd.txt"),
            include_str!("templates/bsd_notice.txt"),
        ),
        LicenseKey::Apache2 => (
            include_str!("templates/apache2.txt"),
            include_str!("templates/apache2_notice.txt"),
        ),
    };

    LicenseTemplate { key, text, notice }
}

/// Templates for every supported license, in [`LicenseKey::ALL`] order.
pub fn all() -> Vec<LicenseTemplate> {
    LicenseKey::ALL.into_iter().map(builtin).collect()
}
