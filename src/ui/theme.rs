//! Color themes for the screen
//!
//! Light and dark variants of the same screen, resolved from one boolean
//! into a single palette.

use ratatui::style::{Color, Modifier, Style};

use crate::agenda::Category;
use crate::state::ItemStatus;

/// Resolved color palette used by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub urgent: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub border: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            text: Color::Rgb(224, 222, 210),
            text_muted: Color::DarkGray,
            accent: Color::Rgb(125, 160, 220),
            success: Color::Rgb(140, 190, 120),
            warning: Color::Rgb(235, 180, 100),
            urgent: Color::Rgb(235, 100, 100),
            highlight_bg: Color::Rgb(70, 75, 140), // indigo
            highlight_fg: Color::Rgb(240, 240, 245),
            border: Color::Rgb(90, 90, 110),
        }
    }

    pub fn light() -> Self {
        Self {
            text: Color::Rgb(40, 40, 45),
            text_muted: Color::Rgb(130, 130, 140),
            accent: Color::Rgb(40, 80, 180),
            success: Color::Rgb(30, 130, 60),
            warning: Color::Rgb(180, 110, 20),
            urgent: Color::Rgb(190, 40, 40),
            highlight_bg: Color::Rgb(99, 102, 241), // indigo-500
            highlight_fg: Color::White,
            border: Color::Rgb(160, 160, 170),
        }
    }

    pub fn resolve(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    /// Style of the countdown readout.
    pub fn countdown_style(&self, urgent: bool) -> Style {
        let color = if urgent { self.urgent } else { self.accent };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Row style for an agenda item in the given status.
    pub fn item_style(&self, status: ItemStatus) -> Style {
        match status {
            ItemStatus::Current => Style::default()
                .fg(self.highlight_fg)
                .bg(self.highlight_bg)
                .add_modifier(Modifier::BOLD),
            ItemStatus::Past => Style::default()
                .fg(self.text_muted)
                .add_modifier(Modifier::DIM),
            ItemStatus::Upcoming => Style::default().fg(self.text),
        }
    }

    /// Badge text and style for an item status.
    pub fn status_badge(&self, status: ItemStatus) -> (&'static str, Style) {
        match status {
            ItemStatus::Current => (
                "ACTIVE",
                Style::default().fg(self.warning).add_modifier(Modifier::BOLD),
            ),
            ItemStatus::Past => ("COMPLETED", Style::default().fg(self.text_muted)),
            ItemStatus::Upcoming => ("UPCOMING", Style::default().fg(self.accent)),
        }
    }

    /// Accent color of an item's category tag.
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::General => self.text_muted,
            Category::Activity => self.warning,
        }
    }
}
