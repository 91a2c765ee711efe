//! Scene routing: the state machine that moves a playthrough between scenes.
//!
//! ```text
//! title → note → choose → outcome → note (next stage)
//!                   │                 └→ ending (after the final stage)
//!                   └→ gameover → title (restart) | note, stage 1 (retry)
//! ```
//!
//! [`transition`] is pure: it takes the current progress and one event and
//! returns the next progress. Events that make no sense in the current
//! scene leave the progress untouched.

use tracing::{debug, warn};

use crate::accumulate::{self, Resolution, Slot};
use crate::ending;
use crate::model::{Event, Progress, Scene, Tracker};
use crate::story::Registry;

/// What the presentation layer should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Render the scene described by this progress.
    Render(Progress),

    /// Stop rendering; the player left from the title.
    Exit,
}

impl Transition {
    /// The progress to render, if the story continues.
    pub fn progress(self) -> Option<Progress> {
        match self {
            Self::Render(p) => Some(p),
            Self::Exit => None,
        }
    }
}

/// Computes the next progress for one event.
#[must_use]
pub fn transition(registry: &Registry, progress: Progress, event: &Event) -> Transition {
    let next = match (progress.scene, event) {
        (Scene::Title, Event::Start) => Progress {
            scene: Scene::Note,
            stage: 1,
            ..progress
        },
        (Scene::Title, Event::Exit) => return Transition::Exit,

        (Scene::Note, Event::Advance) => Progress {
            scene: Scene::CHOOSING,
            ..progress
        },

        (Scene::Choose { .. }, Event::PickPrimary(key)) => {
            pick(registry, progress, Slot::Primary, key)
        }
        (Scene::Choose { .. }, Event::PickSecondary(key)) => {
            pick(registry, progress, Slot::Secondary, key)
        }

        (Scene::Outcome { .. }, Event::Advance) if progress.stage < registry.final_stage() => {
            Progress {
                scene: Scene::Note,
                stage: progress.stage + 1,
                ..progress
            }
        }
        (Scene::Outcome { .. }, Event::Advance) => Progress {
            scene: Scene::Ending {
                ending: ending::resolve(progress.tracker.flags),
            },
            ..progress
        },

        (Scene::GameOver { .. } | Scene::Ending { .. }, Event::Restart) => Progress::default(),
        (Scene::GameOver { .. }, Event::Retry) => Progress {
            scene: Scene::Note,
            stage: 1,
            tracker: Tracker::default(),
        },

        (scene, event) => {
            debug!(scene = scene.name(), %event, "event ignored in this scene");
            progress
        }
    };

    Transition::Render(next)
}

/// Records a pick, applies its effects, and resolves the stage if it can.
fn pick(registry: &Registry, progress: Progress, slot: Slot, key: &str) -> Progress {
    let Scene::Choose { primary, secondary } = progress.scene else {
        return progress;
    };
    let stage = registry.stage(progress.stage);

    let Some(choice) = accumulate::lookup(stage, slot, key) else {
        warn!(stage = stage.number, ?slot, key, "no such choice");
        return progress;
    };

    // A slot is filled once per stage visit.
    let filled = match slot {
        Slot::Primary => primary,
        Slot::Secondary => secondary,
    };
    if let Some(existing) = filled {
        debug!(stage = stage.number, ?slot, kept = existing.key, key, "slot already picked");
        return progress;
    }

    let mut tracker = progress.tracker;
    accumulate::apply(&mut tracker, choice);

    let (primary, secondary) = match slot {
        Slot::Primary => (Some(choice), secondary),
        Slot::Secondary => (primary, Some(choice)),
    };

    let scene = match accumulate::resolve(stage, primary, secondary) {
        Resolution::Pending => Scene::Choose { primary, secondary },
        Resolution::Outcome(text) => Scene::Outcome { text },
        Resolution::GameOver(reason) => Scene::GameOver { reason },
    };

    Progress {
        scene,
        tracker,
        ..progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{Choice, Ending, Flags, Secondary, Stage, Tension};

    fn registry() -> &'static Registry {
        Registry::builtin().unwrap()
    }

    /// Feeds events one by one, panicking on an unexpected exit.
    fn play(start: Progress, events: &[&str]) -> Progress {
        events.iter().fold(start, |progress, text| {
            let event: Event = text.parse().unwrap();
            transition(registry(), progress, &event)
                .progress()
                .unwrap_or_else(|| panic!("unexpected exit on '{text}'"))
        })
    }

    fn at_stage(stage: u8, scene: Scene) -> Progress {
        Progress {
            scene,
            stage,
            ..Progress::default()
        }
    }

    #[test]
    fn start_goes_to_first_note() {
        let p = play(Progress::default(), &["start"]);
        assert_eq!(p.scene, Scene::Note);
        assert_eq!(p.stage, 1);
    }

    #[test]
    fn exit_from_title_halts() {
        assert_eq!(
            transition(registry(), Progress::default(), &Event::Exit),
            Transition::Exit
        );
    }

    #[test]
    fn note_advances_to_empty_choose() {
        let p = play(at_stage(3, Scene::Note), &["advance"]);
        assert_eq!(p.scene, Scene::CHOOSING);
        assert_eq!(p.pending_primary(), None);
        assert_eq!(p.pending_secondary(), None);
    }

    #[test]
    fn plain_stage_advances_on_primary_alone() {
        let p = play(at_stage(1, Scene::CHOOSING), &["primary:2"]);
        assert_eq!(p.outcome_text(), Some("깔끔하고 예쁘다… 오늘은 이걸로 😊"));
    }

    #[test]
    fn ominous_stage_waits_for_primary_after_secondary() {
        let p = play(at_stage(2, Scene::CHOOSING), &["secondary:ignore"]);
        assert!(matches!(p.scene, Scene::Choose { .. }));
        assert_eq!(p.pending_secondary().map(|c| c.key), Some("ignore"));
        // Secondary effects apply right away.
        assert_eq!(p.tracker.flags.ignored_warnings, 1);
        assert_eq!(p.tracker.tension.level(), 1);
    }

    #[test]
    fn ominous_stage_waits_for_secondary_after_primary() {
        let p = play(at_stage(2, Scene::CHOOSING), &["primary:4"]);
        assert!(matches!(p.scene, Scene::Choose { .. }));
        assert_eq!(p.pending_primary().map(|c| c.key), Some("4"));
    }

    #[test]
    fn ominous_outcome_shows_secondary_text_but_keeps_primary_effects() {
        let p = play(
            at_stage(2, Scene::CHOOSING),
            &["secondary:ignore", "primary:4"],
        );
        assert_eq!(p.outcome_text(), Some("착각이겠지. 귀찮아…"));
        assert_eq!(p.tracker.flags.ignored_warnings, 2);
        assert_eq!(p.tracker.tension.level(), 2);
    }

    #[test]
    fn picking_a_filled_slot_again_is_ignored() {
        let once = play(at_stage(2, Scene::CHOOSING), &["secondary:ignore"]);
        let twice = play(once, &["secondary:ignore", "secondary:door_peek"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let before = at_stage(2, Scene::CHOOSING);
        assert_eq!(play(before, &["primary:9", "secondary:1"]), before);
    }

    #[test]
    fn terminal_secondary_goes_to_gameover_with_reason() {
        let p = play(at_stage(7, Scene::CHOOSING), &["secondary:open", "primary:1"]);
        assert_eq!(p.failure_reason(), Some("문 밖에서 누군가 웃고 있었어."));
        assert_eq!(p.scene.name(), "gameover");
    }

    #[test]
    fn outcome_advances_to_next_note() {
        let p = play(
            at_stage(4, Scene::Outcome { text: "x" }),
            &["advance"],
        );
        assert_eq!(p.scene, Scene::Note);
        assert_eq!(p.stage, 5);
        assert_eq!(p.outcome_text(), None);
    }

    #[test]
    fn final_outcome_resolves_ending() {
        let mut start = at_stage(8, Scene::Outcome { text: "x" });
        start.tracker.flags = Flags {
            ignored_warnings: 4,
            ..Flags::default()
        };
        let p = play(start, &["advance"]);
        assert_eq!(p.ending(), Some(Ending::C));
    }

    #[test]
    fn restart_from_gameover_resets_everything() {
        let over = play(
            at_stage(7, Scene::CHOOSING),
            &["primary:4", "secondary:lights"],
        );
        assert!(over.tracker.tension > Tension::default());

        let p = play(over, &["restart"]);
        assert_eq!(p, Progress::default());
        assert_eq!(p.scene, Scene::Title);
        assert_eq!(p.stage, 1);
        assert_eq!(p.tracker, Tracker::default());
    }

    #[test]
    fn retry_from_gameover_lands_on_first_note() {
        let over = play(
            at_stage(7, Scene::CHOOSING),
            &["primary:4", "secondary:open"],
        );
        let p = play(over, &["retry"]);
        assert_eq!(p.scene, Scene::Note);
        assert_eq!(p.stage, 1);
        assert_eq!(p.tracker, Tracker::default());
    }

    #[test]
    fn restart_from_ending_returns_to_title() {
        let p = play(
            at_stage(8, Scene::Ending { ending: Ending::B }),
            &["restart"],
        );
        assert_eq!(p, Progress::default());
    }

    #[test]
    fn events_out_of_place_change_nothing() {
        let cases = [
            (Progress::default(), "advance"),
            (at_stage(2, Scene::Note), "primary:1"),
            (at_stage(2, Scene::CHOOSING), "advance"),
            (at_stage(2, Scene::Outcome { text: "x" }), "retry"),
            (at_stage(8, Scene::Ending { ending: Ending::A }), "retry"),
        ];
        for (progress, text) in cases {
            assert_eq!(play(progress, &[text]), progress, "{text}");
        }
    }

    #[test]
    fn tension_never_decreases_and_clamps() {
        let events = [
            "start", "advance", "primary:4", "advance", "advance", "secondary:ignore",
            "primary:4", "advance", "advance", "secondary:ignore", "primary:4", "advance",
            "advance", "secondary:ignore", "primary:4", "advance", "advance",
            "secondary:ignore", "primary:4", "advance", "advance", "secondary:go_out",
            "primary:4",
        ];
        let mut progress = Progress::default();
        let mut last = progress.tracker.tension;
        for text in events {
            progress = play(progress, &[text]);
            assert!(progress.tracker.tension >= last, "{text}");
            last = progress.tracker.tension;
        }
        assert_eq!(last.level(), Tension::MAX);
    }

    #[test]
    fn careful_run_reaches_ending_a() {
        let events = [
            "start", "advance", "primary:1", "advance", // stage 1
            "advance", "secondary:door_peek", "primary:1", "advance", // stage 2
            "advance", "secondary:door_check", "primary:1", "advance", // stage 3
            "advance", "secondary:listen", "primary:1", "advance", // stage 4
            "advance", "secondary:curtain", "primary:1", "advance", // stage 5
            "advance", "secondary:stay", "primary:1", "advance", // stage 6
            "advance", "secondary:hold", "primary:1", "advance", // stage 7
            "advance", "secondary:end_a", "primary:1", "advance", // stage 8
        ];
        let p = play(Progress::default(), &events);
        assert_eq!(p.tracker.flags.ignored_warnings, 0);
        assert!(p.tracker.flags.stayed_home);
        assert_eq!(p.ending(), Some(Ending::A));
    }

    #[test]
    fn reckless_run_reaches_ending_c() {
        let mut events = vec!["start", "advance", "primary:4", "advance"];
        for _ in 2..=5 {
            events.extend(["advance", "secondary:ignore", "primary:4", "advance"]);
        }
        events.extend(["advance", "secondary:go_out", "primary:4", "advance"]);
        events.extend(["advance", "secondary:hold", "primary:4", "advance"]);
        events.extend(["advance", "secondary:end_c", "primary:4", "advance"]);

        let p = play(Progress::default(), &events);
        assert_eq!(p.ending(), Some(Ending::C));
    }

    #[test]
    fn both_terminal_prefers_secondary_reason() {
        const PRIMARY: &[Choice] = &[Choice::new("1", "p", "p", &[]).fatal("primary")];
        const SECONDARY: &[Choice] = &[Choice::new("s", "s", "s", &[]).fatal("secondary")];
        let registry = Registry::new(vec![Stage {
            number: 1,
            note: "",
            prompt: "",
            choices: PRIMARY,
            secondary: Some(Secondary {
                banner: "",
                flash: None,
                choices: SECONDARY,
            }),
        }])
        .unwrap();

        let mut progress = at_stage(1, Scene::CHOOSING);
        for event in [Event::PickPrimary("1".into()), Event::PickSecondary("s".into())] {
            progress = transition(&registry, progress, &event).progress().unwrap();
        }
        assert_eq!(progress.failure_reason(), Some("secondary"));
    }
}
