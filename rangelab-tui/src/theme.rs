//! Parrot/neon theme tokens for the RangeLab TUI
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (progress track, focus)
//! - **Positive**: Neon green (committed selections)
//! - **Negative**: Hot pink (errors)
//! - **Warning**: Neon orange (held thumb, warnings)
//! - **Neutral**: Cool purple (labels)
//! - **Muted**: Steel blue (idle track, hints)

use ratatui::style::{Color, Modifier, Style};

/// Parrot/neon theme for RangeLab TUI
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (progress, focus)
    pub accent: Color,
    /// Neon green (committed values)
    pub positive: Color,
    /// Hot pink (errors)
    pub negative: Color,
    /// Neon orange (warnings, held thumb)
    pub warning: Color,
    /// Cool purple (labels)
    pub neutral: Color,
    /// Steel blue (muted text, idle track)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    /// Create the default Parrot/neon theme
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
        }
    }

    /// Thumb color: orange while held, cyan otherwise.
    pub fn thumb_color(&self, held: bool) -> Color {
        if held {
            self.warning
        } else {
            self.accent
        }
    }
}

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(Theme::default().positive)
}

pub fn negative() -> Style {
    Style::default().fg(Theme::default().negative)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn text() -> Style {
    Style::default().fg(Theme::default().text_primary)
}

pub fn neutral() -> Style {
    Style::default().fg(Theme::default().neutral)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn thumb(held: bool) -> Style {
    Style::default()
        .fg(Theme::default().thumb_color(held))
        .add_modifier(Modifier::BOLD)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        warning()
    } else {
        muted()
    }
}

pub fn tooltip() -> Style {
    let theme = Theme::default();
    Style::default().fg(theme.background).bg(theme.neutral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_thumb_color() {
        let theme = Theme::default();
        assert_eq!(theme.thumb_color(true), theme.warning);
        assert_eq!(theme.thumb_color(false), theme.accent);
    }
}
