//! Card palette, with optional per-color overrides from the user config.

use ratatui::style::Color;

use crate::config::ThemeConfig;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,   // Heading, active card border
    pub text: Color,     // Primary text
    pub text_dim: Color, // Footer hints
    pub notice: Color,   // Status notice text and its box border
    pub inactive: Color, // Outer chrome
}

impl Default for Theme {
    fn default() -> Self {
        // Catppuccin-inspired fallback palette
        Self {
            accent: Color::Rgb(250, 179, 135),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            notice: Color::Rgb(137, 180, 250),
            inactive: Color::Rgb(88, 91, 112),
        }
    }
}

impl Theme {
    /// Build the palette, applying any hex overrides from the config.
    /// Unparsable values keep the default color.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let defaults = Self::default();

        let pick = |value: &Option<String>, fallback: Color| {
            value
                .as_deref()
                .and_then(Self::parse_hex_color)
                .unwrap_or(fallback)
        };

        Self {
            accent: pick(&config.accent, defaults.accent),
            text: pick(&config.text, defaults.text),
            text_dim: pick(&config.text_dim, defaults.text_dim),
            notice: pick(&config.notice, defaults.notice),
            inactive: pick(&config.inactive, defaults.inactive),
        }
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');

        // Length checks below count bytes; multibyte input must not reach
        // the byte slicing
        if !s.is_ascii() {
            return None;
        }

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_hex() {
        assert_eq!(
            Theme::parse_hex_color("#FFC107"),
            Some(Color::Rgb(255, 193, 7))
        );
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(Theme::parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn rejects_junk() {
        assert_eq!(Theme::parse_hex_color("not-a-color"), None);
        assert_eq!(Theme::parse_hex_color("#12345"), None);
        assert_eq!(Theme::parse_hex_color(""), None);
        // Two 3-byte chars: 6 bytes, but not hex digits
        assert_eq!(Theme::parse_hex_color("#日本"), None);
        assert_eq!(Theme::parse_hex_color("#é0"), None);
    }

    #[test]
    fn multibyte_override_falls_back() {
        let config = ThemeConfig {
            accent: Some("#日本".to_string()),
            ..Default::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.accent, Theme::default().accent);
    }

    #[test]
    fn overrides_apply_and_junk_falls_back() {
        let config = ThemeConfig {
            accent: Some("#102030".to_string()),
            text: Some("nope".to_string()),
            ..Default::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.accent, Color::Rgb(16, 32, 48));
        assert_eq!(theme.text, Theme::default().text);
        assert_eq!(theme.notice, Theme::default().notice);
    }
}
