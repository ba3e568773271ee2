use serde::{Deserialize, Serialize};

/// Semantic type of the bound data column.
///
/// Drives default-format selection and field visibility. A binding that
/// carries no type tag is treated as `Number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataKind {
    #[default]
    Number,
    Date,
    Text,
    Boolean,
}

impl DataKind {
    /// True for the kinds that have a default format pattern.
    pub fn has_default_format(&self) -> bool {
        matches!(self, DataKind::Number | DataKind::Date)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, DataKind::Number)
    }
}
