// ABOUTME: Validation and normalization of raw settings submissions
// ABOUTME: Collects all field errors in one pass, never saves partially

use serde_json::{Map, Value};
use thiserror::Error;

use crate::schema::{self, FieldKind};
use crate::types::{AuthMethod, Network, SocialProvider, WalletAuthSettings};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationReason {
    #[error("Invalid value: {value}. Must be one of: {allowed}")]
    InvalidEnum { value: String, allowed: String },

    #[error("Value {value} must be an integer between {min} and {max}")]
    OutOfRange { value: String, min: i64, max: i64 },

    #[error("At least one option must be selected")]
    RequiredEmpty,

    #[error("Value cannot be empty")]
    EmptyString,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: ValidationReason,
}

/// Non-fatal note attached to an otherwise valid submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub field: &'static str,
    pub message: String,
}

/// Outcome of a successful validation: the normalized record plus any
/// warning-level notes for the form host to surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    pub record: WalletAuthSettings,
    pub warnings: Vec<ValidationWarning>,
}

/// Validate a raw key-value submission against the settings schema and
/// normalize it into a typed record.
///
/// Every field is checked; errors accumulate across fields so the host
/// can surface all problems at once. Any error fails the whole
/// submission. Unknown keys in the input are ignored.
pub fn validate_and_normalize(raw: &Map<String, Value>) -> Result<Validated, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let defaults = WalletAuthSettings::default();

    let network = match parse_enum::<Network>(raw, schema::NETWORK) {
        Ok(network) => network,
        Err(err) => {
            errors.push(err);
            defaults.network
        }
    };

    // Unchecked checkboxes arrive as falsy values; a field absent from the
    // submission entirely falls back to its declared default.
    let enable_auto_connect = match raw.get(schema::ENABLE_AUTO_CONNECT) {
        Some(value) => is_truthy(value),
        None => defaults.enable_auto_connect,
    };

    let nonce_lifetime = match parse_bounded_integer(raw, schema::NONCE_LIFETIME) {
        Ok(seconds) => seconds,
        Err(err) => {
            errors.push(err);
            defaults.nonce_lifetime
        }
    };

    let authentication_methods: Vec<AuthMethod> = AuthMethod::ALL
        .iter()
        .filter(|method| is_checked(raw.get(schema::AUTHENTICATION_METHODS), method.as_str()))
        .copied()
        .collect();
    if authentication_methods.is_empty() && is_required(schema::AUTHENTICATION_METHODS) {
        errors.push(ValidationError {
            field: schema::AUTHENTICATION_METHODS,
            reason: ValidationReason::RequiredEmpty,
        });
    }

    let allowed_socials: Vec<SocialProvider> = SocialProvider::ALL
        .iter()
        .filter(|provider| is_checked(raw.get(schema::ALLOWED_SOCIALS), provider.as_str()))
        .copied()
        .collect();
    if allowed_socials.is_empty() && is_required(schema::ALLOWED_SOCIALS) {
        errors.push(ValidationError {
            field: schema::ALLOWED_SOCIALS,
            reason: ValidationReason::RequiredEmpty,
        });
    }

    let redirect_on_success = raw
        .get(schema::REDIRECT_ON_SUCCESS)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("")
        .to_string();
    if redirect_on_success.is_empty() {
        errors.push(ValidationError {
            field: schema::REDIRECT_ON_SUCCESS,
            reason: ValidationReason::EmptyString,
        });
    } else if !redirect_on_success.starts_with('/') {
        // Non-rooted paths are accepted but worth flagging to the host.
        warnings.push(ValidationWarning {
            field: schema::REDIRECT_ON_SUCCESS,
            message: format!(
                "Redirect path \"{}\" does not start with /; it may not resolve as an internal path",
                redirect_on_success
            ),
        });
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Validated {
        record: WalletAuthSettings {
            network,
            enable_auto_connect,
            nonce_lifetime,
            authentication_methods,
            allowed_socials,
            redirect_on_success,
        },
        warnings,
    })
}

fn is_required(field: &str) -> bool {
    schema::field(field).is_some_and(|spec| spec.required)
}

fn parse_enum<T: std::str::FromStr>(
    raw: &Map<String, Value>,
    field: &'static str,
) -> Result<T, ValidationError> {
    let value = raw.get(field).and_then(Value::as_str).unwrap_or("");

    value.parse::<T>().map_err(|_| {
        let allowed = schema::field(field)
            .map(|spec| {
                spec.options
                    .iter()
                    .map(|(v, _)| *v)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        ValidationError {
            field,
            reason: ValidationReason::InvalidEnum {
                value: value.to_string(),
                allowed,
            },
        }
    })
}

fn parse_bounded_integer(
    raw: &Map<String, Value>,
    field: &'static str,
) -> Result<i64, ValidationError> {
    let (min, max) = match schema::field(field).map(|spec| spec.kind) {
        Some(FieldKind::Number { min, max }) => (min, max),
        _ => (i64::MIN, i64::MAX),
    };

    let value = raw.get(field);
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    // Bounds are inclusive and hard: out-of-range input is rejected, not
    // clamped. The form widget's min/max are advisory only.
    match parsed {
        Some(n) if n >= min && n <= max => Ok(n),
        _ => Err(ValidationError {
            field,
            reason: ValidationReason::OutOfRange {
                value: value.map(display_value).unwrap_or_default(),
                min,
                max,
            },
        }),
    }
}

/// True if `candidate` is checked in a checkboxes submission. Accepts the
/// candidate-to-flag mapping shape sent by form hosts as well as a plain
/// list of checked values.
fn is_checked(value: Option<&Value>, candidate: &str) -> bool {
    match value {
        Some(Value::Object(map)) => map.get(candidate).is_some_and(is_truthy),
        Some(Value::Array(items)) => items
            .iter()
            .any(|item| item.as_str() == Some(candidate)),
        _ => false,
    }
}

/// Coerce the truthy/falsy shapes form hosts produce for checkbox inputs.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !matches!(s.as_str(), "" | "0" | "false" | "off"),
        _ => false,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
