//! Choice types: the atomic picks a player makes at each stage.
//!
//! Choices are static story data. They never change once defined and
//! carry their consequences as plain data rather than callbacks, so the
//! accumulator can interpret them in one place.

use serde::Serialize;

/// A single pick offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    /// Unique within the list the choice belongs to.
    pub key: &'static str,

    /// What the player sees on the button.
    pub label: &'static str,

    /// Text shown on the outcome scene when this choice decides it.
    pub outcome: &'static str,

    /// Consequences, applied in order the moment the choice is picked.
    pub effects: &'static [Effect],

    /// Present when picking this choice ends the playthrough.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<&'static str>,
}

impl Choice {
    /// A non-terminal choice.
    #[must_use]
    pub const fn new(
        key: &'static str,
        label: &'static str,
        outcome: &'static str,
        effects: &'static [Effect],
    ) -> Self {
        Self {
            key,
            label,
            outcome,
            effects,
            failure: None,
        }
    }

    /// Marks the choice as terminal with the given game-over reason.
    #[must_use]
    pub const fn fatal(mut self, reason: &'static str) -> Self {
        self.failure = Some(reason);
        self
    }
}

/// A consequence of picking a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Effect {
    /// Raise a story flag.
    SetFlag(Flag),

    /// The player brushed off a warning sign.
    IncrementIgnored(u8),

    /// The atmosphere darkens. Clamped by the tracker.
    AddTension(u8),
}

/// Boolean story flags a choice can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Flag {
    CheckedDoor,
    LookedWindow,
    StayedHome,
}
