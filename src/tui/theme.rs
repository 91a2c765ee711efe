//! Styles that follow the story's tension.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::Tension;

/// From this level on, the story is dark and the accent turns red.
const DARK_FROM: u8 = 5;

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn normal() -> Style {
    Style::default().fg(Color::Gray)
}

/// Selected items and headings.
pub fn highlight(tension: Tension) -> Style {
    Style::default()
        .fg(accent(tension))
        .add_modifier(Modifier::BOLD)
}

pub fn accent(tension: Tension) -> Color {
    if tension.level() >= DARK_FROM {
        Color::Red
    } else {
        Color::LightMagenta
    }
}

/// A small bar showing how dark things have become.
pub fn gauge(tension: Tension) -> Line<'static> {
    let level = usize::from(tension.level());
    let rest = usize::from(Tension::MAX) - level;
    Line::from(vec![
        Span::styled("긴장도 ", muted()),
        Span::styled("■".repeat(level), Style::default().fg(accent(tension))),
        Span::styled("□".repeat(rest), muted()),
    ])
}
