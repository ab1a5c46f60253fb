use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::GenError;
use crate::license::templates::{self, LicenseTemplate};
use crate::models::{LicenseArtifact, LicenseKey, LicenseParams};

static SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("slot pattern is valid"));

/// Renders license templates into a [`LicenseArtifact`].
pub struct LicenseResolver {
    templates: Vec<LicenseTemplate>,
}

impl LicenseResolver {
    /// A resolver over the embedded templates for every [`LicenseKey`].
    pub fn builtin() -> Self {
        Self::with_templates(templates::all())
    }

    pub fn with_templates(templates: Vec<LicenseTemplate>) -> Self {
        Self { templates }
    }

    /// Render the full text and short notice for `key`.
    ///
    /// Both are produced from the same `params`; if either fails, no artifact
    /// is returned.
    pub fn resolve(&self, key: LicenseKey, params: &LicenseParams) -> Result<LicenseArtifact, GenError> {
        let template = self
            .templates
            .iter()
            .find(|t| t.key == key)
            .ok_or_else(|| GenError::LicenseNotFound {
                key: key.to_string(),
            })?;

        let text = render(key, template.text, params)?;
        let notice = render(key, template.notice, params)?;

        tracing::debug!(license = %key, package = %params.package, "resolved license");

        Ok(LicenseArtifact {
            key,
            text,
            notice: notice.trim_end().to_string(),
        })
    }
}

/// Substitute every slot in `template` in a single pass.
///
/// Substituted values are never re-scanned, so user text containing `{year}`
/// is written as-is.
fn render(key: LicenseKey, template: &str, params: &LicenseParams) -> Result<String, GenError> {
    if let Some(unknown) = SLOT
        .captures_iter(template)
        .map(|c| c[1].to_string())
        .find(|slot| slot_value(slot, params).is_none())
    {
        return Err(GenError::UnknownSlot {
            license: key.to_string(),
            slot: unknown,
        });
    }

    let rendered = SLOT.replace_all(template, |caps: &Captures| {
        slot_value(&caps[1], params).unwrap_or_default()
    });

    Ok(rendered.into_owned())
}

fn slot_value(slot: &str, params: &LicenseParams) -> Option<String> {
    match slot {
        "year" => Some(params.year.clone()),
        "holder" => Some(params.holder.clone()),
        "package" => Some(params.package.clone()),
        "contact" => Some(contact_clause(&params.email)),
        _ => None,
    }
}

/// ` <email>` when an email is set, otherwise nothing.
fn contact_clause(email: &str) -> String {
    let email = email.trim();
    if email.is_empty() {
        String::new()
    } else {
        format!(" <{}>", email)
    }
}
