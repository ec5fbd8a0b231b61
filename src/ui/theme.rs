use ratatui::style::Color;

/// The two palettes the theme toggle switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub field_focus: Color,
    pub notice_bg: Color,
    pub notice_text: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xf5, 0xf5, 0xf4),
    text: Color::Rgb(0x1c, 0x19, 0x17),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    accent: Color::Rgb(0x25, 0x63, 0xeb),
    border: Color::Rgb(0x9c, 0xa3, 0xaf),
    field_focus: Color::Rgb(0x25, 0x63, 0xeb),
    notice_bg: Color::Rgb(0x1c, 0x19, 0x17),
    notice_text: Color::Rgb(0xf5, 0xf5, 0xf4),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x17, 0x17, 0x17),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    accent: Color::Rgb(0x60, 0xa5, 0xfa),
    border: Color::Rgb(0x40, 0x40, 0x40),
    field_focus: Color::Rgb(0x60, 0xa5, 0xfa),
    notice_bg: Color::Rgb(0xe5, 0xe5, 0xe5),
    notice_text: Color::Rgb(0x17, 0x17, 0x17),
};
