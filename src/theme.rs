//! Editor theme selection and the fixed prompter palette.

use crate::config::ThemeMode;
use iced::{Color, Theme as IcedTheme};

/// Theme for the editor view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::Light,
            Theme::Dark => IcedTheme::Dark,
        }
    }
}

/// Display mode always renders light text on black regardless of theme.
pub mod prompter {
    use super::Color;

    pub const BACKGROUND: Color = Color::BLACK;
    pub const TEXT: Color = Color::WHITE;
    pub const GUIDE: Color = Color {
        r: 0.94,
        g: 0.27,
        b: 0.27,
        a: 0.8,
    };
    pub const INDICATOR_BACKDROP: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 0.18,
    };
    pub const GUIDE_WIDTH: f32 = 2.0;
    pub const INDICATOR_RADIUS: f32 = 44.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_maps_to_dark() {
        assert_eq!(IcedTheme::from(Theme::from(ThemeMode::Night)), IcedTheme::Dark);
        assert_eq!(IcedTheme::from(Theme::from(ThemeMode::Day)), IcedTheme::Light);
    }
}
