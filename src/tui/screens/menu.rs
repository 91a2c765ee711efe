//! A vertical menu with a pointer, shared by screens that offer a few actions.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::model::Tension;
use crate::tui::theme;

pub struct Menu<T> {
    items: Vec<(String, T)>,
    selected: usize,
}

impl<T: Clone> Menu<T> {
    pub fn new(items: Vec<(String, T)>) -> Self {
        Self { items, selected: 0 }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    /// The value behind the highlighted item.
    pub fn select(&self) -> Option<T> {
        self.items.get(self.selected).map(|(_, value)| value.clone())
    }

    /// One line per item, the selected one pointed at and highlighted.
    pub fn lines(&self, tension: Tension) -> Vec<Line<'static>> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, (label, _))| {
                let (pointer, style): (&'static str, Style) = if i == self.selected {
                    ("› ", theme::highlight(tension))
                } else {
                    ("  ", theme::normal())
                };
                Line::from(vec![
                    Span::styled(pointer, style),
                    Span::styled(label.clone(), style),
                ])
            })
            .collect()
    }
}
