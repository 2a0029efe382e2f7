//! Color themes for the board and chrome: Classic, Dark, Green.

use ratatui::style::Color;

/// Builds a [`Color`] from a `0xRRGGBB` literal.
const fn rgb(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

/// A named color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIter)]
pub enum Theme {
    /// Light gray chrome, red X, blue O.
    #[default]
    Classic,
    /// Dark background with bright marks.
    Dark,
    /// Green-tinted light theme.
    Green,
}

/// Resolved colors for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Application background.
    pub bg: Color,
    /// Board background.
    pub board_bg: Color,
    /// Grid lines and regular text.
    pub line: Color,
    /// X marks.
    pub x_mark: Color,
    /// O marks.
    pub o_mark: Color,
    /// Winning-line highlight.
    pub highlight: Color,
    /// Status bar background.
    pub status_bg: Color,
    /// Toolbar and dialog background.
    pub panel_bg: Color,
}

impl Theme {
    /// Returns the display name, which is also the name stored in settings.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Dark => "Dark",
            Theme::Green => "Green",
        }
    }

    /// Looks a theme up by its stored name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        <Theme as strum::IntoEnumIterator>::iter()
            .find(|theme| theme.label().eq_ignore_ascii_case(name.trim()))
    }

    /// The next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::Classic => Theme::Dark,
            Theme::Dark => Theme::Green,
            Theme::Green => Theme::Classic,
        }
    }

    /// Resolved colors for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Classic => Palette {
                bg: rgb(0xf0f0f0),
                board_bg: rgb(0xffffff),
                line: rgb(0x333333),
                x_mark: rgb(0xd33c3c),
                o_mark: rgb(0x2b6cb0),
                highlight: rgb(0xffd54f),
                status_bg: rgb(0xe6e6e6),
                panel_bg: rgb(0xf7f7f7),
            },
            Theme::Dark => Palette {
                bg: rgb(0x2e2e2e),
                board_bg: rgb(0x1f1f1f),
                line: rgb(0xffffff),
                x_mark: rgb(0xff6b6b),
                o_mark: rgb(0x66d9ef),
                highlight: rgb(0xffaa00),
                status_bg: rgb(0x212121),
                panel_bg: rgb(0x2f2f2f),
            },
            Theme::Green => Palette {
                bg: rgb(0xe8f5e9),
                board_bg: rgb(0xffffff),
                line: rgb(0x2e7d32),
                x_mark: rgb(0x2e7d32),
                o_mark: rgb(0x1b5e20),
                highlight: rgb(0xa5d6a7),
                status_bg: rgb(0xc8e6c9),
                panel_bg: rgb(0xf1f8e9),
            },
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Theme::from_name("classic"), Some(Theme::Classic));
        assert_eq!(Theme::from_name("  DARK "), Some(Theme::Dark));
        assert_eq!(Theme::from_name("neon"), None);
    }

    #[test]
    fn test_next_cycles_through_all_themes() {
        let mut seen = vec![Theme::Classic];
        let mut theme = Theme::Classic;
        for _ in 0..2 {
            theme = theme.next();
            seen.push(theme);
        }
        for expected in Theme::iter() {
            assert!(seen.contains(&expected));
        }
        assert_eq!(theme.next(), Theme::Classic);
    }

    #[test]
    fn test_rgb_unpacks_channels() {
        assert_eq!(rgb(0xd33c3c), Color::Rgb(0xd3, 0x3c, 0x3c));
    }
}
