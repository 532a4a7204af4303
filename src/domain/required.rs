use crate::domain::{LineItem, Scalar};
use crate::error::TemplateError;

pub fn required_text<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, TemplateError> {
    match value.as_deref() {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(TemplateError::MissingField(field)),
    }
}

pub fn required_scalar<'a>(
    value: &'a Option<Scalar>,
    field: &'static str,
) -> Result<&'a Scalar, TemplateError> {
    match value {
        Some(v) if !v.is_blank() => Ok(v),
        _ => Err(TemplateError::MissingField(field)),
    }
}

pub fn required_items<'a>(
    value: &'a Option<Vec<LineItem>>,
    field: &'static str,
) -> Result<&'a [LineItem], TemplateError> {
    match value {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(TemplateError::MissingField(field)),
    }
}

/// Gating fields: absent and empty both mean "leave the fragment out".
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Substitutes `default` only when the caller sent nothing at all.
pub fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}
