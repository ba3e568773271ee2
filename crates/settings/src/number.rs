use crate::controls::{NumUpDown, Slider, TextInput};
use crate::data_kind::DataKind;
use crate::descriptor::{Descriptor, ParseOptions};
use crate::fields::{FieldKey, FieldValue, FieldVisibility};
use crate::sizing::SizingSettings;

pub const DATE_DEFAULT_FORMAT: &str = "%M/%d/yyyy";
pub const NUMBER_DEFAULT_FORMAT: &str = "#,0.00";

pub const MIN_PRECISION: u32 = 0;
pub const MAX_PRECISION: u32 = 17;
pub const MAX_DENSITY: u32 = 100;

/// Display units selector value; 0 means auto.
pub const DISPLAY_UNITS_AUTO: u32 = 0;

/// Derived fallback format, distinct from "not yet computed".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DefaultFormat {
    /// No derivation has happened for the current binding.
    #[default]
    Unset,
    /// Type-appropriate fallback pattern.
    Pattern(String),
    /// The bound kind has no format concept. Still counts as derived:
    /// once stored, a later binding with a formattable kind will not
    /// re-derive (see `apply_default_format`).
    NotApplicable,
}

impl DefaultFormat {
    pub fn is_unset(&self) -> bool {
        matches!(self, DefaultFormat::Unset)
    }

    pub fn pattern(&self) -> Option<&str> {
        match self {
            DefaultFormat::Pattern(p) => Some(p),
            _ => None,
        }
    }
}

/// Numeric-formatting settings descriptor.
///
/// Resolves the effective format string from layered sources
/// (explicit input > column metadata > derived default) and hides
/// fields that do not apply to the bound data kind.
#[derive(Debug, Clone)]
pub struct NumberSettings {
    pub sizing: SizingSettings,

    /// User-entered format string; opaque, never validated here.
    pub format: TextInput,
    /// Format carried by the bound column's metadata.
    column_format: Option<String>,
    default_format: DefaultFormat,

    pub display_units: u32,
    pub precision: NumUpDown,
    pub density: Slider,

    hide_numeric_by_type: bool,
    visibility: FieldVisibility,
}

impl Default for NumberSettings {
    fn default() -> Self {
        Self::new(false)
    }
}

impl NumberSettings {
    pub fn new(hide_numeric_by_type: bool) -> Self {
        Self {
            sizing: SizingSettings::default(),
            format: TextInput::new(""),
            column_format: None,
            default_format: DefaultFormat::Unset,
            display_units: DISPLAY_UNITS_AUTO,
            precision: NumUpDown::new(0, MIN_PRECISION, MAX_PRECISION),
            density: Slider::new(MAX_DENSITY, MAX_DENSITY),
            hide_numeric_by_type,
            visibility: FieldVisibility::default(),
        }
    }

    /// Effective format: explicit > column > derived default, skipping
    /// empty strings. None when all three layers are unset.
    pub fn resolve_format(&self) -> Option<&str> {
        if let Some(explicit) = self.format.non_empty() {
            return Some(explicit);
        }
        if let Some(column) = self.column_format.as_deref() {
            if !column.is_empty() {
                return Some(column);
            }
        }
        self.default_format.pattern()
    }

    /// Records the column-metadata format. An absent or empty value is
    /// ignored; this is intentionally not a clear operation.
    pub fn set_column_format(&mut self, format: Option<&str>) {
        match format {
            Some(f) if !f.is_empty() => self.column_format = Some(f.to_string()),
            _ => {}
        }
    }

    pub fn column_format(&self) -> Option<&str> {
        self.column_format.as_deref()
    }

    pub fn default_format(&self) -> &DefaultFormat {
        &self.default_format
    }

    pub fn is_field_visible(&self, key: FieldKey) -> bool {
        self.visibility.is_visible(key)
    }

    pub fn visibility(&self) -> &FieldVisibility {
        &self.visibility
    }

    /// Closed-key accessor for the settings panel. `Format` reads the
    /// precedence-resolved value, not the raw stored field. Fields with
    /// no current value yield None.
    pub fn value_by_key(&self, key: FieldKey) -> Option<FieldValue> {
        match key {
            FieldKey::Format => self.resolve_format().map(|f| FieldValue::Text(f.to_string())),
            FieldKey::FontSize => Some(FieldValue::Number(self.sizing.font_size.value as f64)),
            FieldKey::DisplayUnits => Some(FieldValue::Number(self.display_units as f64)),
            FieldKey::Precision => Some(FieldValue::Number(self.precision.value as f64)),
            FieldKey::Density => Some(FieldValue::Number(self.density.value as f64)),
        }
    }

    /// Write-once per binding: no-op unless no derivation has happened
    /// yet. A first derivation for a kind without a format concept stores
    /// `NotApplicable`, which also satisfies the guard from then on.
    fn apply_default_format(&mut self, kind: DataKind) {
        if !self.default_format.is_unset() {
            return;
        }

        match kind {
            DataKind::Date => {
                self.default_format = DefaultFormat::Pattern(DATE_DEFAULT_FORMAT.to_string());

                // For dates the default is also the initially displayed
                // value, unless the user already typed one.
                if self.format.value.is_none() {
                    self.format.value = Some(DATE_DEFAULT_FORMAT.to_string());
                }
            }
            DataKind::Number => {
                self.default_format = DefaultFormat::Pattern(NUMBER_DEFAULT_FORMAT.to_string());
            }
            _ => {
                self.default_format = DefaultFormat::NotApplicable;
            }
        }
    }

    /// Both checks run on every parse; each only ever hides.
    fn hide_fields_by_kind(&mut self, kind: DataKind) {
        if self.hide_numeric_by_type && !kind.is_numeric() {
            self.visibility.hide(FieldKey::DisplayUnits);
            self.visibility.hide(FieldKey::Precision);
        }

        if !kind.has_default_format() {
            self.visibility.hide(FieldKey::Format);
        }
    }
}

impl Descriptor for NumberSettings {
    fn parse(&mut self, options: &ParseOptions) {
        self.sizing.parse(options, &mut self.visibility);

        let kind = options.effective_kind();
        self.apply_default_format(kind);
        self.hide_fields_by_kind(kind);
    }
}
