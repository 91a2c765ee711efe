//! Application loop and screen routing.
//!
//! Keys become story events; the session decides what happens next. The
//! screen is rebuilt whenever the scene or stage changes, so cursor state
//! survives picks made on the same choose scene.

use std::io;

use crossterm::event::{self, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::assets::AssetLookup;
use crate::model::{Event, Scene};
use crate::session::Session;
use crate::story::Registry;

use super::screens::{
    ChooseScreen, EndingScreen, GameOverScreen, NoteScreen, OutcomeScreen, TitleScreen,
};

const FAREWELL: &str = "안녕… 다음에 또 놀자 💗";

/// Which screen is currently displayed.
enum Screen {
    Title(TitleScreen),
    Note,
    Choose(ChooseScreen),
    Outcome,
    GameOver(GameOverScreen),
    Ending,
}

/// How the loop ended.
enum Quit {
    /// The player picked the exit entry on the title.
    Exited,
    /// `q` from anywhere else.
    Aborted,
}

/// Runs the TUI event loop until the player leaves.
pub fn run(registry: &Registry, assets: &dyn AssetLookup) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, registry, assets);
    ratatui::restore();
    if let Quit::Exited = result? {
        println!("{FAREWELL}");
    }
    Ok(())
}

fn screen_for(session: &Session) -> Screen {
    let progress = session.progress();
    match progress.scene {
        Scene::Title => Screen::Title(TitleScreen::new()),
        Scene::Note => Screen::Note,
        Scene::Choose { .. } => {
            Screen::Choose(ChooseScreen::new(*session.registry().stage(progress.stage)))
        }
        Scene::Outcome { .. } => Screen::Outcome,
        Scene::GameOver { .. } => Screen::GameOver(GameOverScreen::new()),
        Scene::Ending { .. } => Screen::Ending,
    }
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    registry: &Registry,
    assets: &dyn AssetLookup,
) -> io::Result<Quit> {
    let mut session = Session::new(registry);
    let final_stage = registry.final_stage();
    let mut screen = screen_for(&session);

    loop {
        let progress = *session.progress();
        terminal.draw(|frame| match &screen {
            Screen::Title(s) => s.render(frame, &progress, assets),
            Screen::Note => {
                NoteScreen::render(frame, &progress, registry.stage(progress.stage), final_stage);
            }
            Screen::Choose(s) => s.render(frame, &progress, assets, final_stage),
            Screen::Outcome => OutcomeScreen::render(frame, &progress, final_stage),
            Screen::GameOver(s) => s.render(frame, &progress, assets),
            Screen::Ending => EndingScreen::render(frame, &progress),
        })?;

        let event::Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let story_event = match &mut screen {
            Screen::Title(title) => match key.code {
                KeyCode::Char('q') => Some(Event::Exit),
                KeyCode::Up | KeyCode::Char('k') => {
                    title.move_up();
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    title.move_down();
                    None
                }
                KeyCode::Enter => title.select(),
                _ => None,
            },
            Screen::Choose(choose) => match key.code {
                KeyCode::Char('q') => return Ok(Quit::Aborted),
                KeyCode::Up | KeyCode::Char('k') => {
                    choose.move_up();
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    choose.move_down();
                    None
                }
                KeyCode::Enter => choose.select(),
                KeyCode::Char(c) => c
                    .to_digit(10)
                    .and_then(|n| usize::try_from(n).ok())
                    .and_then(|n| choose.pick_number(n)),
                _ => None,
            },
            Screen::GameOver(over) => match key.code {
                KeyCode::Char('q') => return Ok(Quit::Aborted),
                KeyCode::Up | KeyCode::Char('k') => {
                    over.move_up();
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    over.move_down();
                    None
                }
                KeyCode::Enter => over.select(),
                _ => None,
            },
            Screen::Note | Screen::Outcome => match key.code {
                KeyCode::Char('q') => return Ok(Quit::Aborted),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Event::Advance),
                _ => None,
            },
            Screen::Ending => match key.code {
                KeyCode::Char('q') => return Ok(Quit::Aborted),
                KeyCode::Enter => Some(Event::Restart),
                _ => None,
            },
        };

        let Some(story_event) = story_event else {
            continue;
        };
        debug!(%story_event, "key mapped");
        if !session.dispatch(&story_event) {
            return Ok(Quit::Exited);
        }

        let next = session.progress();
        if next.scene.name() != progress.scene.name() || next.stage != progress.stage {
            screen = screen_for(&session);
        }
    }
}
