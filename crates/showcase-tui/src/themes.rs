//! Built-in palettes and user color overrides

use ratatui::style::Color;
use showcase_core::config::{ThemeColorOverrides, ThemeConfig};

use crate::theme::Theme;

/// Names accepted by `ui.theme.name`
pub const AVAILABLE_THEMES: [&str; 5] =
    ["gruvbox-dark", "nord", "dracula", "one-dark", "monokai"];

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => Some(Color::Rgb(
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Resolve the configured theme, falling back to gruvbox-dark
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => Theme::default(),
        "nord" => nord(),
        "dracula" => dracula(),
        "one-dark" | "onedark" => one_dark(),
        "monokai" => monokai(),
        other => {
            tracing::warn!(
                "Unknown theme '{}', using gruvbox-dark (available: {})",
                other,
                AVAILABLE_THEMES.join(", ")
            );
            Theme::default()
        }
    };

    apply_overrides(base, &config.colors)
}

fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 8] = [
        (&overrides.bg0, &mut theme.bg0),
        (&overrides.fg0, &mut theme.fg0),
        (&overrides.accent, &mut theme.accent),
        (&overrides.selection, &mut theme.selection),
        (&overrides.gradient_start, &mut theme.gradient_start),
        (&overrides.gradient_end, &mut theme.gradient_end),
        (&overrides.error, &mut theme.error),
        (&overrides.success, &mut theme.success),
    ];

    for (hex, slot) in slots {
        let Some(hex) = hex else { continue };
        match parse_hex_color(hex) {
            Some(color) => *slot = color,
            None => tracing::warn!("Ignoring invalid theme color '{}'", hex),
        }
    }
    theme
}

fn nord() -> Theme {
    Theme {
        bg0: Color::Rgb(0x2e, 0x34, 0x40),
        bg1: Color::Rgb(0x3b, 0x42, 0x52),
        bg2: Color::Rgb(0x43, 0x4c, 0x5e),
        bg3: Color::Rgb(0x4c, 0x56, 0x6a),
        fg0: Color::Rgb(0xec, 0xef, 0xf4),
        fg1: Color::Rgb(0xe5, 0xe9, 0xf0),
        grey0: Color::Rgb(0x4c, 0x56, 0x6a),
        grey1: Color::Rgb(0x61, 0x6e, 0x88),
        grey2: Color::Rgb(0xd8, 0xde, 0xe9),
        red: Color::Rgb(0xbf, 0x61, 0x6a),
        orange: Color::Rgb(0xd0, 0x87, 0x70),
        yellow: Color::Rgb(0xeb, 0xcb, 0x8b),
        green: Color::Rgb(0xa3, 0xbe, 0x8c),
        aqua: Color::Rgb(0x8f, 0xbc, 0xbb),
        blue: Color::Rgb(0x88, 0xc0, 0xd0),
        purple: Color::Rgb(0xb4, 0x8e, 0xad),
        selection: Color::Rgb(0x43, 0x4c, 0x5e),
        backdrop: Color::Rgb(0x1c, 0x20, 0x28),
        gradient_start: Color::Rgb(0x88, 0xc0, 0xd0),
        gradient_end: Color::Rgb(0xb4, 0x8e, 0xad),
        error: Color::Rgb(0xbf, 0x61, 0x6a),
        success: Color::Rgb(0xa3, 0xbe, 0x8c),
        warning: Color::Rgb(0xd0, 0x87, 0x70),
        info: Color::Rgb(0x88, 0xc0, 0xd0),
        accent: Color::Rgb(0x8f, 0xbc, 0xbb),
    }
}

fn dracula() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2a, 0x36),
        bg1: Color::Rgb(0x21, 0x22, 0x2c),
        bg2: Color::Rgb(0x44, 0x47, 0x5a),
        bg3: Color::Rgb(0x62, 0x72, 0xa4),
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2),
        fg1: Color::Rgb(0xe9, 0xe9, 0xea),
        grey0: Color::Rgb(0x62, 0x72, 0xa4),
        grey1: Color::Rgb(0x5a, 0x5c, 0x6d),
        grey2: Color::Rgb(0x7a, 0x7c, 0x8d),
        red: Color::Rgb(0xff, 0x55, 0x55),
        orange: Color::Rgb(0xff, 0xb8, 0x6c),
        yellow: Color::Rgb(0xf1, 0xfa, 0x8c),
        green: Color::Rgb(0x50, 0xfa, 0x7b),
        aqua: Color::Rgb(0x8b, 0xe9, 0xfd),
        blue: Color::Rgb(0xbd, 0x93, 0xf9),
        purple: Color::Rgb(0xff, 0x79, 0xc6),
        selection: Color::Rgb(0x44, 0x47, 0x5a),
        backdrop: Color::Rgb(0x16, 0x17, 0x1e),
        gradient_start: Color::Rgb(0xbd, 0x93, 0xf9),
        gradient_end: Color::Rgb(0xff, 0x79, 0xc6),
        error: Color::Rgb(0xff, 0x55, 0x55),
        success: Color::Rgb(0x50, 0xfa, 0x7b),
        warning: Color::Rgb(0xff, 0xb8, 0x6c),
        info: Color::Rgb(0x8b, 0xe9, 0xfd),
        accent: Color::Rgb(0xbd, 0x93, 0xf9),
    }
}

fn one_dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2c, 0x34),
        bg1: Color::Rgb(0x21, 0x25, 0x2b),
        bg2: Color::Rgb(0x3e, 0x44, 0x51),
        bg3: Color::Rgb(0x4b, 0x52, 0x63),
        fg0: Color::Rgb(0xab, 0xb2, 0xbf),
        fg1: Color::Rgb(0xc8, 0xcc, 0xd4),
        grey0: Color::Rgb(0x5c, 0x63, 0x70),
        grey1: Color::Rgb(0x4b, 0x52, 0x63),
        grey2: Color::Rgb(0x7f, 0x84, 0x8e),
        red: Color::Rgb(0xe0, 0x6c, 0x75),
        orange: Color::Rgb(0xd1, 0x9a, 0x66),
        yellow: Color::Rgb(0xe5, 0xc0, 0x7b),
        green: Color::Rgb(0x98, 0xc3, 0x79),
        aqua: Color::Rgb(0x56, 0xb6, 0xc2),
        blue: Color::Rgb(0x61, 0xaf, 0xef),
        purple: Color::Rgb(0xc6, 0x78, 0xdd),
        selection: Color::Rgb(0x3e, 0x44, 0x51),
        backdrop: Color::Rgb(0x18, 0x1a, 0x1f),
        gradient_start: Color::Rgb(0x61, 0xaf, 0xef),
        gradient_end: Color::Rgb(0xc6, 0x78, 0xdd),
        error: Color::Rgb(0xe0, 0x6c, 0x75),
        success: Color::Rgb(0x98, 0xc3, 0x79),
        warning: Color::Rgb(0xd1, 0x9a, 0x66),
        info: Color::Rgb(0x61, 0xaf, 0xef),
        accent: Color::Rgb(0x56, 0xb6, 0xc2),
    }
}

fn monokai() -> Theme {
    Theme {
        bg0: Color::Rgb(0x27, 0x28, 0x22),
        bg1: Color::Rgb(0x3e, 0x3d, 0x32),
        bg2: Color::Rgb(0x49, 0x48, 0x3e),
        bg3: Color::Rgb(0x75, 0x71, 0x5e),
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2),
        fg1: Color::Rgb(0xd0, 0xd0, 0xc0),
        grey0: Color::Rgb(0x75, 0x71, 0x5e),
        grey1: Color::Rgb(0x5f, 0x5c, 0x4d),
        grey2: Color::Rgb(0x90, 0x8c, 0x77),
        red: Color::Rgb(0xf9, 0x26, 0x72),
        orange: Color::Rgb(0xfd, 0x97, 0x1f),
        yellow: Color::Rgb(0xe6, 0xdb, 0x74),
        green: Color::Rgb(0xa6, 0xe2, 0x2e),
        aqua: Color::Rgb(0x66, 0xd9, 0xef),
        blue: Color::Rgb(0x66, 0xd9, 0xef),
        purple: Color::Rgb(0xae, 0x81, 0xff),
        selection: Color::Rgb(0x3e, 0x3d, 0x32),
        backdrop: Color::Rgb(0x17, 0x18, 0x13),
        gradient_start: Color::Rgb(0x66, 0xd9, 0xef),
        gradient_end: Color::Rgb(0xf9, 0x26, 0x72),
        error: Color::Rgb(0xf9, 0x26, 0x72),
        success: Color::Rgb(0xa6, 0xe2, 0x2e),
        warning: Color::Rgb(0xfd, 0x97, 0x1f),
        info: Color::Rgb(0x66, 0xd9, 0xef),
        accent: Color::Rgb(0xae, 0x81, 0xff),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff5500"), Some(Color::Rgb(255, 85, 0)));
        assert_eq!(parse_hex_color("#f50"), Some(Color::Rgb(255, 85, 0)));
        assert_eq!(parse_hex_color("ff5500"), Some(Color::Rgb(255, 85, 0)));
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
    }

    #[test]
    fn test_parse_hex_color_rejects_multibyte() {
        assert!(parse_hex_color("#é1").is_none());
        assert!(parse_hex_color("ab€").is_none());
        assert!(parse_hex_color("+f+f+f").is_none());

        let config = ThemeConfig {
            colors: ThemeColorOverrides {
                accent: Some("#é1".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(load_theme(&config).accent, Theme::default().accent);
    }

    #[test]
    fn test_load_theme_default_and_unknown() {
        let theme = load_theme(&ThemeConfig::default());
        assert_eq!(theme.bg0, Color::Rgb(0x28, 0x28, 0x28));

        let config = ThemeConfig {
            name: "vaporwave".to_string(),
            ..Default::default()
        };
        assert_eq!(load_theme(&config).bg0, Theme::default().bg0);
    }

    #[test]
    fn test_every_listed_theme_loads() {
        for name in AVAILABLE_THEMES {
            let config = ThemeConfig {
                name: name.to_string(),
                ..Default::default()
            };
            // Fades need RGB endpoints
            assert!(matches!(load_theme(&config).bg0, Color::Rgb(..)), "{}", name);
        }
    }

    #[test]
    fn test_overrides_apply() {
        let config = ThemeConfig {
            name: "nord".to_string(),
            colors: ThemeColorOverrides {
                accent: Some("#ff0000".to_string()),
                error: Some("nope".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert_eq!(theme.accent, Color::Rgb(255, 0, 0));
        assert_eq!(theme.error, nord().error);
    }
}
