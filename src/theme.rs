//! Screen and print palettes.
//!
//! The screen palette is the dark infographic look; the print palette is
//! its light variant. Browsers print black-on-white and skip background
//! fills, so the print palette keeps everything in dark inks and drops
//! the decorative colors.

use ratzilla::ratatui::style::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Screen,
    Print,
}

/// Named color roles used across the render layer.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    /// Headline/branding accent.
    pub accent: Color,
    /// Secondary accent (card icons, odd chart bars).
    pub secondary: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    /// Salary figures.
    pub money: Color,
    /// Classroom-link highlights.
    pub link: Color,
    pub error: Color,
    pub bar_even: Color,
    pub bar_odd: Color,
    pub skeleton_dim: Color,
    pub skeleton_bright: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Screen => Palette {
            accent: Color::Cyan,
            secondary: Color::LightMagenta,
            text: Color::White,
            dim: Color::DarkGray,
            border: Color::DarkGray,
            money: Color::Green,
            link: Color::Yellow,
            error: Color::LightRed,
            bar_even: Color::Cyan,
            bar_odd: Color::LightMagenta,
            skeleton_dim: Color::DarkGray,
            skeleton_bright: Color::Gray,
        },
        Theme::Print => Palette {
            accent: Color::Black,
            secondary: Color::DarkGray,
            text: Color::Black,
            dim: Color::DarkGray,
            border: Color::Gray,
            money: Color::Black,
            link: Color::Black,
            error: Color::Black,
            bar_even: Color::Black,
            bar_odd: Color::DarkGray,
            skeleton_dim: Color::Gray,
            skeleton_bright: Color::Gray,
        },
    }
}
