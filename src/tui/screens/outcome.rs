//! Outcome screen: what the stage's picks added up to.

use ratatui::Frame;
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Wrap};

use crate::model::Progress;
use crate::tui::theme;

use super::{body_block, chrome, stage_title};

pub struct OutcomeScreen;

impl OutcomeScreen {
    pub fn render(frame: &mut Frame, progress: &Progress, final_stage: u8) {
        let body = chrome(
            frame,
            progress,
            &stage_title(progress, final_stage),
            " ⏎ 계속  q quit",
        );
        let text = progress.outcome_text().unwrap_or_default();
        let paragraph = Paragraph::new(Text::styled(text, theme::normal()))
            .wrap(Wrap { trim: false })
            .block(body_block());
        frame.render_widget(paragraph, body);
    }
}
