// Input-control value types backing the settings panel.
//
// Range enforcement lives here, in the control setters, so descriptors
// never observe an out-of-range value.

use serde::{Deserialize, Serialize};

/// Free-form text entry. The value is an opaque token; no syntax
/// validation is performed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextInput {
    pub value: Option<String>,
    pub placeholder: String,
}

impl TextInput {
    pub fn new(placeholder: &str) -> Self {
        Self {
            value: None,
            placeholder: placeholder.to_string(),
        }
    }

    /// The value, treating empty strings as unset.
    pub fn non_empty(&self) -> Option<&str> {
        match self.value.as_deref() {
            Some("") | None => None,
            Some(v) => Some(v),
        }
    }
}

/// Numeric stepper clamped to [min, max].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumUpDown {
    pub value: u32,
    pub min: u32,
    pub max: u32,
}

impl NumUpDown {
    pub fn new(value: u32, min: u32, max: u32) -> Self {
        let mut control = Self { value: min, min, max };
        control.set(value);
        control
    }

    /// Writes `value` clamped to [min, max]. Out-of-range input is never
    /// stored as-is.
    pub fn set(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }
}

/// Percentile slider clamped to [0, max].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    pub value: u32,
    pub max: u32,
}

impl Slider {
    pub fn new(value: u32, max: u32) -> Self {
        let mut control = Self { value: 0, max };
        control.set(value);
        control
    }

    pub fn set(&mut self, value: u32) {
        self.value = value.min(self.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_non_empty() {
        let mut input = TextInput::new("");
        assert_eq!(input.non_empty(), None);

        input.value = Some(String::new());
        assert_eq!(input.non_empty(), None);

        input.value = Some("#,0.00".to_string());
        assert_eq!(input.non_empty(), Some("#,0.00"));
    }

    #[test]
    fn test_num_up_down_clamps_above_max() {
        let mut control = NumUpDown::new(0, 0, 17);
        control.set(42);
        assert_eq!(control.value, 17);
    }

    #[test]
    fn test_num_up_down_clamps_below_min() {
        let mut control = NumUpDown::new(4, 2, 17);
        control.set(0);
        assert_eq!(control.value, 2);
    }

    #[test]
    fn test_num_up_down_new_clamps_initial_value() {
        let control = NumUpDown::new(99, 0, 17);
        assert_eq!(control.value, 17);
    }

    #[test]
    fn test_slider_clamps_to_max() {
        let mut slider = Slider::new(100, 100);
        slider.set(250);
        assert_eq!(slider.value, 100);

        slider.set(30);
        assert_eq!(slider.value, 30);
    }
}
