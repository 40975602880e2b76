use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Light/dark signal used to key every color lookup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub(crate) fn is_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

/// Raw hex color set for one color scheme.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) text: String,
    pub(crate) background: String,
    pub(crate) tint: String,
    pub(crate) icon: String,
    pub(crate) tab_icon_default: String,
    pub(crate) tab_icon_selected: String,
}

impl ColorPalette {
    pub(crate) fn light() -> Self {
        Self {
            text: String::from("#11181C"),
            background: String::from("#FFFFFF"),
            tint: String::from("#0A7EA4"),
            icon: String::from("#687076"),
            tab_icon_default: String::from("#687076"),
            tab_icon_selected: String::from("#0A7EA4"),
        }
    }

    pub(crate) fn dark() -> Self {
        Self {
            text: String::from("#ECEDEE"),
            background: String::from("#151718"),
            tint: String::from("#FFFFFF"),
            icon: String::from("#9BA1A6"),
            tab_icon_default: String::from("#9BA1A6"),
            tab_icon_selected: String::from("#FFFFFF"),
        }
    }
}

/// Parsed colors for one color scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SchemeColors {
    pub(crate) text: Color,
    pub(crate) background: Color,
    pub(crate) tint: Color,
    pub(crate) icon: Color,
    pub(crate) tab_icon_default: Color,
    pub(crate) tab_icon_selected: Color,
    /// Screen backdrop behind sections.
    pub(crate) surface: Color,
    /// Raised card background.
    pub(crate) card: Color,
    pub(crate) muted_text: Color,
    pub(crate) divider: Color,
}

impl SchemeColors {
    fn from_palette(palette: &ColorPalette, scheme: ColorScheme) -> Self {
        let (surface, card, muted_text, divider) = match scheme {
            ColorScheme::Light => (
                parse_hex_color("#F5F5F5"),
                parse_hex_color("#FFFFFF"),
                parse_hex_color("#666666"),
                parse_hex_color("#EEEEEE"),
            ),
            ColorScheme::Dark => (
                parse_hex_color("#121212"),
                parse_hex_color("#1E2022"),
                parse_hex_color("#9BA1A6"),
                parse_hex_color("#2A2D2F"),
            ),
        };

        Self {
            text: parse_hex_color(&palette.text),
            background: parse_hex_color(&palette.background),
            tint: parse_hex_color(&palette.tint),
            icon: parse_hex_color(&palette.icon),
            tab_icon_default: parse_hex_color(&palette.tab_icon_default),
            tab_icon_selected: parse_hex_color(&palette.tab_icon_selected),
            surface,
            card,
            muted_text,
            divider,
        }
    }
}

/// Fixed accent colors shared by both schemes.
pub(crate) mod accents {
    use iced::Color;

    pub(crate) const BADGE: Color = Color::from_rgb8(0xFF, 0x47, 0x57);
    pub(crate) const LINK: Color = Color::from_rgb8(0x1E, 0x90, 0xFF);
    pub(crate) const SCRIM: Color = Color::BLACK;
    pub(crate) const BUTTON_SURFACE: Color = Color::WHITE;
}

/// Color lookup keyed by the light/dark signal.
pub(crate) trait ThemeProvider {
    fn colors(&self, scheme: ColorScheme) -> &SchemeColors;
}

/// Application theme: the palette of both schemes plus the active one.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    scheme: ColorScheme,
    light: SchemeColors,
    dark: SchemeColors,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palettes(
            ColorScheme::Light,
            &ColorPalette::light(),
            &ColorPalette::dark(),
        )
    }
}

impl ThemeProvider for AppTheme {
    fn colors(&self, scheme: ColorScheme) -> &SchemeColors {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let colors = value.scheme_colors();
        let palette = Palette {
            background: colors.background,
            text: colors.text,
            primary: colors.tint,
            success: Color::from_rgb8(0x98, 0xC3, 0x79),
            danger: accents::BADGE,
            warning: Color::from_rgb8(0xE5, 0xC0, 0x7B),
        };

        let name = match value.scheme {
            ColorScheme::Light => "hikari-light",
            ColorScheme::Dark => "hikari-dark",
        };
        Theme::custom(String::from(name), palette)
    }
}

impl AppTheme {
    /// Build a theme from raw palettes for both schemes.
    pub(crate) fn from_palettes(
        scheme: ColorScheme,
        light: &ColorPalette,
        dark: &ColorPalette,
    ) -> Self {
        Self {
            scheme,
            light: SchemeColors::from_palette(light, ColorScheme::Light),
            dark: SchemeColors::from_palette(dark, ColorScheme::Dark),
        }
    }

    pub(crate) fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Colors of the active scheme.
    pub(crate) fn scheme_colors(&self) -> &SchemeColors {
        self.colors(self.scheme)
    }
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StyleOverrides {
    pub(crate) foreground: Option<Color>,
}

/// Theme props passed through App -> Screen -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }

    pub(crate) fn with_overrides(mut self, overrides: StyleOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Colors of the active scheme.
    pub(crate) fn colors(&self) -> &'a SchemeColors {
        self.theme.scheme_colors()
    }
}

/// Manages the current global theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new(scheme: ColorScheme) -> Self {
        let mut current = AppTheme::default();
        current.scheme = scheme;
        Self { current }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    /// Switch the active color scheme.
    pub(crate) fn set_scheme(&mut self, scheme: ColorScheme) {
        self.current.scheme = scheme;
    }
}

/// Parse a `#RRGGBB` hex string, falling back to magenta on malformed input.
pub(crate) fn parse_hex_color(value: &str) -> Color {
    try_parse_hex_color(value).unwrap_or(Color::from_rgb8(0xFF, 0x00, 0xFF))
}

fn try_parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).ok()
    };
    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
