// ABOUTME: Serializable form description handed to the rendering host
// ABOUTME: Widget metadata plus prefill values; no rendering logic here

use serde::Serialize;
use serde_json::Value;

use wallet_auth_storage::StorageError;

use crate::schema::{self, FieldKind};
use crate::types::WalletAuthSettings;

/// Supplies the display-only base-URL prefix shown before the redirect
/// path input. Not persisted and not validated.
pub trait BaseUrlProvider: Send + Sync {
    fn complete_base_url(&self) -> String;
}

/// Fixed base URL, for embedders and tests.
pub struct StaticBaseUrl(pub String);

impl BaseUrlProvider for StaticBaseUrl {
    fn complete_base_url(&self) -> String {
        self.0.clone()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub key: &'static str,
    pub widget: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FormOption>,
    /// Prefill value from the current record.
    pub value: Value,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<&'static str>,
    /// Display-only prefix (the site base URL on the redirect field).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// The whole settings form as the rendering host receives it. Whether a
/// field is currently visible (e.g. socials only when the social method
/// is checked) is the host's concern and is not described here.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsForm {
    pub fields: Vec<FormField>,
}

/// Describe the settings form prefilled from `record`.
pub fn build_settings_form(
    record: &WalletAuthSettings,
    base_url: &dyn BaseUrlProvider,
) -> Result<SettingsForm, StorageError> {
    let current = serde_json::to_value(record)?;

    let fields = schema::FIELDS
        .iter()
        .map(|spec| {
            let (min, max) = match spec.kind {
                FieldKind::Number { min, max } => (Some(min), Some(max)),
                _ => (None, None),
            };

            FormField {
                key: spec.key,
                widget: widget_name(spec.kind),
                label: spec.label,
                description: spec.description,
                options: spec
                    .options
                    .iter()
                    .map(|&(value, label)| FormOption { value, label })
                    .collect(),
                value: current.get(spec.key).cloned().unwrap_or(Value::Null),
                required: spec.required,
                min,
                max,
                suffix: spec.suffix,
                prefix: (spec.key == schema::REDIRECT_ON_SUCCESS)
                    .then(|| base_url.complete_base_url()),
            }
        })
        .collect();

    Ok(SettingsForm { fields })
}

fn widget_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Select => "select",
        FieldKind::Checkbox => "checkbox",
        FieldKind::Number { .. } => "number",
        FieldKind::Checkboxes => "checkboxes",
        FieldKind::TextField => "textfield",
    }
}
