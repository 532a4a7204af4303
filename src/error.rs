pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;

    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by: {}", cause)?;
        current = cause.source();
    }

    Ok(())
}

#[derive(thiserror::Error)]
pub enum TemplateError {
    #[error("missing mandatory argument: {0}")]
    MissingField(&'static str),

    #[error("{field} is not a valid amount: {value:?}")]
    InvalidAmount { field: String, value: String },

    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("the payload does not match the template's fields")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("failed to render the email template")]
    Render(#[from] askama::Error),
}

impl std::fmt::Debug for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl TemplateError {
    /// The field a validation failure refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            TemplateError::MissingField(field) => Some(field),
            TemplateError::InvalidAmount { field, .. } => Some(field),
            _ => None,
        }
    }
}
