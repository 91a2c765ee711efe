//! Choose screen: the ominous picks (if any) above the outfit picks.
//!
//! The cursor walks one list: secondary entries first, then primary.
//! Number keys pick a primary entry directly.

use ratatui::Frame;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::accumulate::Slot;
use crate::assets::{AssetLookup, AssetSlot};
use crate::model::{Choice, Event, Progress, Stage};
use crate::tui::theme;

use super::title::image_lines;
use super::{body_block, chrome, stage_title};

pub struct ChooseScreen {
    stage: Stage,
    selected: usize,
}

impl ChooseScreen {
    pub fn new(stage: Stage) -> Self {
        Self { stage, selected: 0 }
    }

    fn secondary(&self) -> &'static [Choice] {
        match self.stage.secondary {
            Some(s) => s.choices,
            None => &[],
        }
    }

    fn entry(&self, index: usize) -> Option<(Slot, &'static Choice)> {
        let secondary = self.secondary();
        if let Some(choice) = secondary.get(index) {
            return Some((Slot::Secondary, choice));
        }
        self.stage
            .choices
            .get(index - secondary.len())
            .map(|choice| (Slot::Primary, choice))
    }

    fn len(&self) -> usize {
        self.secondary().len() + self.stage.choices.len()
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.len() {
            self.selected += 1;
        }
    }

    /// The pick behind the cursor.
    pub fn select(&self) -> Option<Event> {
        self.entry(self.selected).map(|(slot, choice)| pick(slot, choice))
    }

    /// The primary pick with the given 1-based number.
    pub fn pick_number(&self, number: usize) -> Option<Event> {
        let choice = self.stage.choices.get(number.checked_sub(1)?)?;
        Some(pick(Slot::Primary, choice))
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        progress: &Progress,
        assets: &dyn AssetLookup,
        final_stage: u8,
    ) {
        let body = chrome(
            frame,
            progress,
            &stage_title(progress, final_stage),
            " ↑↓ navigate  ⏎ pick  1-9 outfit  q quit",
        );
        let tension = progress.tracker.tension;
        let mut lines = Vec::new();
        let mut index = 0;

        if let Some(secondary) = self.stage.secondary {
            lines.push(Line::from(Span::styled(
                secondary.banner,
                theme::highlight(tension),
            )));
            for choice in secondary.choices {
                let picked = progress.pending_secondary() == Some(choice);
                lines.push(self.entry_line(index, choice.label, picked, progress));
                index += 1;
            }
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            self.stage.prompt,
            theme::highlight(tension),
        )));
        let status = if progress.pending_primary().is_some() {
            "✅ 옷 선택 완료"
        } else {
            "옷을 1개 골라줘."
        };
        lines.push(Line::from(Span::styled(status, theme::muted())));
        lines.push(Line::default());

        for (i, choice) in self.stage.choices.iter().enumerate() {
            let picked = progress.pending_primary() == Some(choice);
            let label = format!("{}. {}", i + 1, choice.label);
            lines.push(self.entry_line(index, &label, picked, progress));
            for line in image_lines(
                assets,
                AssetSlot::StageChoice {
                    stage: self.stage.number,
                    index: i + 1,
                },
            ) {
                let mut spans = vec![Span::raw("     ")];
                spans.extend(line.spans);
                lines.push(Line::from(spans));
            }
            index += 1;
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(body_block());
        frame.render_widget(paragraph, body);
    }

    fn entry_line(
        &self,
        index: usize,
        label: &str,
        picked: bool,
        progress: &Progress,
    ) -> Line<'static> {
        let tension = progress.tracker.tension;
        let (pointer, style): (&'static str, Style) = if index == self.selected {
            ("› ", theme::highlight(tension))
        } else {
            ("  ", theme::normal())
        };
        let mark = if picked { "✅ " } else { "" };
        Line::from(vec![
            Span::styled(pointer, style),
            Span::styled(format!("{mark}{label}"), style),
        ])
    }
}

fn pick(slot: Slot, choice: &Choice) -> Event {
    let key = choice.key.to_string();
    match slot {
        Slot::Primary => Event::PickPrimary(key),
        Slot::Secondary => Event::PickSecondary(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::Registry;

    #[test]
    fn cursor_walks_secondary_before_primary() {
        let stage = *Registry::builtin().unwrap().stage(2);
        let mut screen = ChooseScreen::new(stage);
        let first_secondary = stage.secondary.map(|s| s.choices[0].key);
        assert_eq!(
            screen.select(),
            first_secondary.map(|k| Event::PickSecondary(k.to_string()))
        );

        for _ in 0..screen.len() {
            screen.move_down();
        }
        let last = stage.choices[stage.choices.len() - 1].key;
        assert_eq!(screen.select(), Some(Event::PickPrimary(last.to_string())));
    }

    #[test]
    fn plain_stage_starts_on_primary() {
        let stage = *Registry::builtin().unwrap().stage(1);
        let screen = ChooseScreen::new(stage);
        assert_eq!(
            screen.select(),
            Some(Event::PickPrimary(stage.choices[0].key.to_string()))
        );
    }

    #[test]
    fn number_keys_pick_primary_choices() {
        let stage = *Registry::builtin().unwrap().stage(1);
        let screen = ChooseScreen::new(stage);
        assert_eq!(
            screen.pick_number(2),
            Some(Event::PickPrimary(stage.choices[1].key.to_string()))
        );
        assert_eq!(screen.pick_number(0), None);
        assert_eq!(screen.pick_number(99), None);
    }
}
