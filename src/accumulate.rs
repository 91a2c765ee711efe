//! Choice accumulation: collecting a stage's picks and deciding what they add up to.
//!
//! A stage with ominous (secondary) choices needs one of those and one
//! outfit (primary) choice before it resolves. Effects are applied the
//! moment each choice is picked; resolution only decides where the story
//! goes next.

use tracing::debug;

use crate::model::{Choice, Stage, Tracker};

/// Shown when a choice has no text of its own.
pub const PLACEHOLDER: &str = "…";

/// Which half of a stage a pick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Primary,
    Secondary,
}

/// What a stage's picks add up to so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Still waiting for a required pick.
    Pending,

    /// All picks made; show this text.
    Outcome(&'static str),

    /// A terminal choice was picked; the playthrough ends with this reason.
    GameOver(&'static str),
}

/// Applies every effect of a freshly picked choice, in order.
pub fn apply(tracker: &mut Tracker, choice: &Choice) {
    for effect in choice.effects {
        tracker.apply(*effect);
    }
    debug!(
        key = choice.key,
        tension = tracker.tension.level(),
        ignored = tracker.flags.ignored_warnings,
        "applied choice"
    );
}

/// Looks up the choice a pick refers to in the given half of the stage.
pub fn lookup(stage: &Stage, slot: Slot, key: &str) -> Option<&'static Choice> {
    match slot {
        Slot::Primary => stage.primary(key),
        Slot::Secondary => stage.secondary_choice(key),
    }
}

/// Decides whether the picks made so far resolve the stage.
///
/// When the stage has secondary choices, the outcome text is the
/// secondary pick's, even though the primary pick's effects still count.
/// If both picks are terminal, the secondary's reason wins.
#[must_use]
pub fn resolve(
    stage: &Stage,
    primary: Option<&Choice>,
    secondary: Option<&Choice>,
) -> Resolution {
    let needs_secondary = stage.has_secondary();

    let Some(primary) = primary else {
        return Resolution::Pending;
    };
    let secondary = match secondary {
        Some(s) if needs_secondary => Some(s),
        None if needs_secondary => return Resolution::Pending,
        _ => None,
    };

    if let Some(reason) = secondary
        .and_then(|s| s.failure)
        .or(primary.failure)
    {
        return Resolution::GameOver(non_empty(reason));
    }

    let shown = secondary.unwrap_or(primary);
    Resolution::Outcome(non_empty(shown.outcome))
}

fn non_empty(text: &'static str) -> &'static str {
    if text.is_empty() { PLACEHOLDER } else { text }
}
