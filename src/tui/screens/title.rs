//! Title screen: start or leave.

use ratatui::Frame;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::assets::{AssetLookup, AssetSlot};
use crate::model::{Event, Progress};
use crate::tui::theme;

use super::menu::Menu;
use super::{body_block, chrome};

pub struct TitleScreen {
    menu: Menu<Event>,
}

impl TitleScreen {
    pub fn new() -> Self {
        Self {
            menu: Menu::new(vec![
                ("💗 데이트 준비 시작하기".to_string(), Event::Start),
                ("❌ 종료하고 나가기".to_string(), Event::Exit),
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
        let body = chrome(
            frame,
            progress,
            "루시의 달콤살벌 데이트! 💗",
            " ↑↓ navigate  ⏎ select  q quit",
        );
        let tension = progress.tracker.tension;

        let mut lines = vec![
            Line::from(Span::styled("루시의 데이트 준비를 도와주세요!", theme::normal())),
            Line::default(),
        ];
        lines.extend(image_lines(assets, AssetSlot::Title));
        lines.push(Line::default());
        lines.extend(self.menu.lines(tension));

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(body_block());
        frame.render_widget(paragraph, body);
    }
}

/// The image path for a slot, or its placeholder, as muted lines.
pub(super) fn image_lines(assets: &dyn AssetLookup, slot: AssetSlot) -> Vec<Line<'static>> {
    let text = match assets.locate(slot) {
        Some(path) => format!("[image: {}]", path.display()),
        None => slot.placeholder(),
    };
    text.lines()
        .map(|l| Line::from(Span::styled(l.to_string(), theme::muted())))
        .collect()
}
