//! Screen rendering and input handling.

mod choose;
mod ending;
mod gameover;
mod menu;
mod note;
mod outcome;
mod title;

pub use choose::ChooseScreen;
pub use ending::EndingScreen;
pub use gameover::GameOverScreen;
pub use note::NoteScreen;
pub use outcome::OutcomeScreen;
pub use title::TitleScreen;

use std::rc::Rc;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::model::Progress;

use super::theme;

/// Draws the parts every screen shares and returns the body area.
///
/// Layout: header (title + tension gauge), separator, body, help line.
fn chrome(frame: &mut Frame, progress: &Progress, title: &str, help: &str) -> Rect {
    let area = frame.area();
    let chunks: Rc<[Rect]> = Layout::vertical([
        Constraint::Length(3), // header
        Constraint::Length(1), // separator
        Constraint::Min(0),    // body
        Constraint::Length(1), // help
    ])
    .split(area);

    let tension = progress.tracker.tension;
    let header = Paragraph::new(vec![
        Line::from(Span::styled(title.to_string(), theme::highlight(tension))),
        theme::gauge(tension),
    ])
    .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
    frame.render_widget(header, chunks[0]);

    let sep = Paragraph::new(Line::from(Span::styled(
        "─".repeat(area.width.saturating_sub(4) as usize),
        theme::muted(),
    )))
    .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
    frame.render_widget(sep, chunks[1]);

    let help = Paragraph::new(Line::from(Span::styled(help.to_string(), theme::muted())));
    frame.render_widget(help, chunks[3]);

    chunks[2]
}

/// Header title for stage scenes.
fn stage_title(progress: &Progress, final_stage: u8) -> String {
    format!("Stage {} / {final_stage}", progress.stage)
}

/// Padding used for every body block.
fn body_block() -> Block<'static> {
    Block::default().padding(Padding::new(2, 2, 1, 0))
}
