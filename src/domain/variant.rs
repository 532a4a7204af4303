use serde::{Deserialize, Serialize};

/// Visual layout for kinds that ship two looks over the same fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Header bar with the logo beside the title.
    #[default]
    Classic,
    /// Centred card with a stacked logo and footer.
    Compact,
}
