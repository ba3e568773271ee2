/// Closed set of fields a descriptor exposes to the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    FontSize,
    Format,
    DisplayUnits,
    Precision,
    Density,
}

impl FieldKey {
    pub const ALL: [FieldKey; 5] = [
        FieldKey::FontSize,
        FieldKey::Format,
        FieldKey::DisplayUnits,
        FieldKey::Precision,
        FieldKey::Density,
    ];

    /// Serialized key name, matching what the settings panel expects.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKey::FontSize => "fontSize",
            FieldKey::Format => "format",
            FieldKey::DisplayUnits => "displayUnits",
            FieldKey::Precision => "precision",
            FieldKey::Density => "percentile",
        }
    }

    pub fn from_name(name: &str) -> Option<FieldKey> {
        FieldKey::ALL.iter().copied().find(|key| key.name() == name)
    }
}

/// Value read out of a descriptor field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }
}

/// Per-field visibility map.
///
/// Fields start visible. Transitions only hide; no unhide operation
/// exists, so a type change never restores a previously hidden field.
#[derive(Debug, Clone)]
pub struct FieldVisibility {
    hidden: [bool; FieldKey::ALL.len()],
}

impl Default for FieldVisibility {
    fn default() -> Self {
        Self {
            hidden: [false; FieldKey::ALL.len()],
        }
    }
}

impl FieldVisibility {
    fn index(key: FieldKey) -> usize {
        match key {
            FieldKey::FontSize => 0,
            FieldKey::Format => 1,
            FieldKey::DisplayUnits => 2,
            FieldKey::Precision => 3,
            FieldKey::Density => 4,
        }
    }

    pub fn hide(&mut self, key: FieldKey) {
        self.hidden[Self::index(key)] = true;
    }

    pub fn is_visible(&self, key: FieldKey) -> bool {
        !self.hidden[Self::index(key)]
    }

    /// Keys that are still visible, in panel order.
    pub fn visible_keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        FieldKey::ALL
            .iter()
            .copied()
            .filter(move |key| self.is_visible(*key))
    }
}
