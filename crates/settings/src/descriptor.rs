use crate::data_kind::DataKind;
use crate::viewport::Viewport;

/// Options supplied by the host on every data-binding refresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub viewport: Viewport,
    /// Semantic type of the bound column. Absent means `Number`.
    pub kind: Option<DataKind>,
    /// Whether descriptors may auto-hide fields for small viewports.
    pub auto_hide_enabled: bool,
}

impl ParseOptions {
    /// The effective kind, with the absent-tag fallback applied.
    pub fn effective_kind(&self) -> DataKind {
        self.kind.unwrap_or_default()
    }
}

/// A settings descriptor that reacts to data-binding refreshes.
pub trait Descriptor {
    /// Re-derive state from the current binding. Called once per settings
    /// refresh; must be safe to call repeatedly with the same options.
    fn parse(&mut self, options: &ParseOptions);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_kind_defaults_to_number() {
        let options = ParseOptions::default();
        assert_eq!(options.effective_kind(), DataKind::Number);

        let options = ParseOptions {
            kind: Some(DataKind::Date),
            ..ParseOptions::default()
        };
        assert_eq!(options.effective_kind(), DataKind::Date);
    }
}
