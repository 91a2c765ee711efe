//! Output formatting for CLI display.

use std::fmt::Write;

use crate::model::{Choice, Effect, Flag, Stage};

/// Format a stage and its choices for human-readable display.
pub(super) fn format_stage(stage: &Stage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Stage {}", stage.number);
    let _ = writeln!(out, "  note:   {}", one_line(&stage.note_text()));
    let _ = writeln!(out, "  prompt: {}", one_line(stage.prompt));

    if let Some(secondary) = stage.secondary {
        let _ = writeln!(out, "  banner: {}", one_line(secondary.banner));
        for choice in secondary.choices {
            let _ = writeln!(out, "    ! {}", format_choice(choice));
        }
    }
    for choice in stage.choices {
        let _ = writeln!(out, "    - {}", format_choice(choice));
    }
    out
}

fn format_choice(choice: &Choice) -> String {
    let mut line = format!("[{}] {}", choice.key, choice.label);
    let effects = format_effects(choice.effects);
    if !effects.is_empty() {
        let _ = write!(line, "  ({effects})");
    }
    if let Some(reason) = choice.failure {
        let _ = write!(line, "  GAME OVER: {}", one_line(reason));
    }
    line
}

pub(super) fn format_effects(effects: &[Effect]) -> String {
    effects
        .iter()
        .map(|e| match e {
            Effect::SetFlag(flag) => format!("sets {}", flag_name(*flag)),
            Effect::IncrementIgnored(n) => format!("ignored +{n}"),
            Effect::AddTension(n) => format!("tension +{n}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn flag_name(flag: Flag) -> &'static str {
    match flag {
        Flag::CheckedDoor => "checked-door",
        Flag::LookedWindow => "looked-window",
        Flag::StayedHome => "stayed-home",
    }
}

/// Collapse multi-line story text onto one line.
fn one_line(text: &str) -> String {
    text.lines().map(str::trim).collect::<Vec<_>>().join(" / ")
}
