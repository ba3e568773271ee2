use crate::controls::NumUpDown;
use crate::descriptor::ParseOptions;
use crate::fields::{FieldKey, FieldVisibility};
use crate::viewport::Viewport;

pub const MIN_FONT_SIZE: u32 = 8;
pub const MAX_FONT_SIZE: u32 = 72;
pub const DEFAULT_FONT_SIZE: u32 = 8;

/// Below this viewport the font-size field is auto-hidden.
pub const MIN_VISIBLE_VIEWPORT: Viewport = Viewport {
    width: 200.0,
    height: 100.0,
};

/// Font sizing with viewport-driven auto-hide.
///
/// This is the base configuration step: descriptors embedding it run its
/// `parse` before their own derivations.
#[derive(Debug, Clone)]
pub struct SizingSettings {
    pub font_size: NumUpDown,
}

impl Default for SizingSettings {
    fn default() -> Self {
        Self {
            font_size: NumUpDown::new(DEFAULT_FONT_SIZE, MIN_FONT_SIZE, MAX_FONT_SIZE),
        }
    }
}

impl SizingSettings {
    /// Applies the auto-hide rule against the given visibility map.
    /// Hide-only: a later, larger viewport does not re-show the field.
    pub fn parse(&mut self, options: &ParseOptions, visibility: &mut FieldVisibility) {
        if options.auto_hide_enabled && !MIN_VISIBLE_VIEWPORT.fits_within(&options.viewport) {
            visibility.hide(FieldKey::FontSize);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(width: f32, height: f32, auto_hide: bool) -> ParseOptions {
        ParseOptions {
            viewport: Viewport::new(width, height),
            kind: None,
            auto_hide_enabled: auto_hide,
        }
    }

    #[test]
    fn test_small_viewport_hides_font_size() {
        let mut sizing = SizingSettings::default();
        let mut visibility = FieldVisibility::default();

        sizing.parse(&options(120.0, 60.0, true), &mut visibility);
        assert!(!visibility.is_visible(FieldKey::FontSize));
    }

    #[test]
    fn test_large_viewport_keeps_font_size_visible() {
        let mut sizing = SizingSettings::default();
        let mut visibility = FieldVisibility::default();

        sizing.parse(&options(800.0, 600.0, true), &mut visibility);
        assert!(visibility.is_visible(FieldKey::FontSize));
    }

    #[test]
    fn test_auto_hide_disabled_never_hides() {
        let mut sizing = SizingSettings::default();
        let mut visibility = FieldVisibility::default();

        sizing.parse(&options(10.0, 10.0, false), &mut visibility);
        assert!(visibility.is_visible(FieldKey::FontSize));
    }

    #[test]
    fn test_no_reshow_after_viewport_grows() {
        let mut sizing = SizingSettings::default();
        let mut visibility = FieldVisibility::default();

        sizing.parse(&options(120.0, 60.0, true), &mut visibility);
        sizing.parse(&options(800.0, 600.0, true), &mut visibility);
        assert!(!visibility.is_visible(FieldKey::FontSize));
    }

    #[test]
    fn test_default_font_size_in_bounds() {
        let sizing = SizingSettings::default();
        assert_eq!(sizing.font_size.value, DEFAULT_FONT_SIZE);
        assert_eq!(sizing.font_size.min, MIN_FONT_SIZE);
        assert_eq!(sizing.font_size.max, MAX_FONT_SIZE);
    }
}
