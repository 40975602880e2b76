use iced::Font;
use iced::font::Weight;

const DEFAULT_UI_FONT_SIZE: f32 = 16.0;
const TITLE_SCALE: f32 = 2.0;
const SUBTITLE_SCALE: f32 = 1.25;
const CAPTION_SCALE: f32 = 0.75;

/// UI font configuration.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: DEFAULT_UI_FONT_SIZE,
        }
    }
}

/// Combined font configuration for body, headings and captions.
#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
}

impl FontsConfig {
    /// Build a font configuration around a base body size.
    pub(crate) fn with_size(size: f32) -> Self {
        Self {
            ui: UiFonts {
                size,
                ..UiFonts::default()
            },
        }
    }

    pub(crate) fn bold(&self) -> Font {
        Font {
            weight: Weight::Bold,
            ..self.ui.font_type
        }
    }

    pub(crate) fn semibold(&self) -> Font {
        Font {
            weight: Weight::Semibold,
            ..self.ui.font_type
        }
    }

    pub(crate) fn title_size(&self) -> f32 {
        self.ui.size * TITLE_SCALE
    }

    pub(crate) fn subtitle_size(&self) -> f32 {
        self.ui.size * SUBTITLE_SCALE
    }

    pub(crate) fn caption_size(&self) -> f32 {
        self.ui.size * CAPTION_SCALE
    }
}
