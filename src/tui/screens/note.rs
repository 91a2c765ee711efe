//! Note screen: Lucy's message for the stage.

use ratatui::Frame;
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Wrap};

use crate::model::{Progress, Stage};
use crate::tui::theme;

use super::{body_block, chrome, stage_title};

pub struct NoteScreen;

impl NoteScreen {
    pub fn render(frame: &mut Frame, progress: &Progress, stage: &Stage, final_stage: u8) {
        let body = chrome(
            frame,
            progress,
            &stage_title(progress, final_stage),
            " ⏎ 다음으로  q quit",
        );

        let note = Paragraph::new(Text::styled(
            stage.note_text(),
            theme::highlight(progress.tracker.tension),
        ))
        .wrap(Wrap { trim: false })
        .block(body_block());
        frame.render_widget(note, body);
    }
}
