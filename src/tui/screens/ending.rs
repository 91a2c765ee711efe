//! Ending screen: which ending the playthrough earned.

use ratatui::Frame;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::model::Progress;
use crate::story::ending_text;
use crate::tui::theme;

use super::{body_block, chrome};

pub struct EndingScreen;

impl EndingScreen {
    pub fn render(frame: &mut Frame, progress: &Progress) {
        let body = chrome(frame, progress, "THE END", " ⏎ 처음으로  q quit");
        let tension = progress.tracker.tension;

        let mut lines = Vec::new();
        if let Some(ending) = progress.ending() {
            let (title, text) = ending_text(ending);
            lines.push(Line::from(Span::styled(title, theme::highlight(tension))));
            lines.push(Line::default());
            lines.extend(
                text.lines()
                    .map(|l| Line::from(Span::styled(l, theme::normal()))),
            );
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(body_block());
        frame.render_widget(paragraph, body);
    }
}
