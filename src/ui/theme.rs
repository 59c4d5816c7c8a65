//! Color palettes for the two display modes.

use iced::Color;

use crate::theme::ThemeMode;

/// A resolved color palette.
#[derive(Debug, Clone)]
pub struct Palette {
    pub mode: ThemeMode,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub subtext: Color,
    pub accent: Color,
    pub accent_text: Color,
    pub border: Color,
    pub toggle_off: Color,
}

impl Palette {
    /// Parse a hex color string like "#c7221a" to iced Color.
    pub fn from_hex(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() >= 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(128) as f32 / 255.0;
            let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(128) as f32 / 255.0;
            let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(128) as f32 / 255.0;
            Color::from_rgb(r, g, b)
        } else {
            Color::from_rgb(0.5, 0.5, 0.5)
        }
    }

    /// Create a color with alpha transparency.
    pub fn with_alpha(color: Color, alpha: f32) -> Color {
        Color::from_rgba(color.r, color.g, color.b, alpha)
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: Self::from_hex("#091540"),
            surface: Self::from_hex("#212636"),
            text: Self::from_hex("#fbfdfe"),
            subtext: Self::from_hex("#c7c7c7"),
            accent: Self::from_hex("#f25c54"),
            accent_text: Self::from_hex("#09153e"),
            border: Self::from_hex("#535868"),
            toggle_off: Self::from_hex("#535868"),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: Self::from_hex("#ebf2fc"),
            surface: Self::from_hex("#fbfdfe"),
            text: Self::from_hex("#09153e"),
            subtext: Self::from_hex("#535868"),
            accent: Self::from_hex("#c7221a"),
            accent_text: Self::from_hex("#fbfdfe"),
            border: Self::from_hex("#d6e2f5"),
            toggle_off: Self::from_hex("#c7c7c7"),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let color = Palette::from_hex("#ff0000");
        assert_eq!(color, Color::from_rgb(1.0, 0.0, 0.0));
        assert_eq!(Palette::from_hex("zz"), Color::from_rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_for_mode() {
        assert_eq!(Palette::for_mode(ThemeMode::Light).mode, ThemeMode::Light);
        assert_eq!(Palette::for_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
    }
}
