//! Game-over screen: the jumpscare, the reason, and a way back in.

use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::assets::{AssetLookup, AssetSlot};
use crate::model::{Event, Progress};
use crate::tui::theme;

use super::menu::Menu;
use super::title::image_lines;
use super::{body_block, chrome};

pub struct GameOverScreen {
    menu: Menu<Event>,
}

impl GameOverScreen {
    pub fn new() -> Self {
        Self {
            menu: Menu::new(vec![
                ("처음으로".to_string(), Event::Restart),
                ("다시 도전".to_string(), Event::Retry),
            ]),
        }
    }

    pub fn move_up(&mut self) {
        self.menu.move_up();
    }

    pub fn move_down(&mut self) {
        self.menu.move_down();
    }

    pub fn select(&self) -> Option<Event> {
        self.menu.select()
    }

    pub fn render(&self, frame: &mut Frame, progress: &Progress, assets: &dyn AssetLookup) {
        let body = chrome(frame, progress, "GAME OVER", " ↑↓ navigate  ⏎ select  q quit");
        let tension = progress.tracker.tension;

        let mut lines = vec![
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                progress.failure_reason().unwrap_or_default(),
                theme::normal(),
            )),
            Line::default(),
        ];
        lines.extend(image_lines(assets, AssetSlot::Jumpscare));
        lines.push(Line::default());
        lines.extend(self.menu.lines(tension));

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(body_block());
        frame.render_widget(paragraph, body);
    }
}
