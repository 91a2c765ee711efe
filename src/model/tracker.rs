//! Progress tracking: tension and story flags accumulated over a playthrough.

use serde::Serialize;

use super::{Effect, Flag};

/// How dark the story has become, from 0 (sweet) to [`Tension::MAX`].
///
/// Only ever grows; additions saturate at the maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Tension(u8);

impl Tension {
    pub const MAX: u8 = 8;

    pub fn level(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn raised_by(self, delta: u8) -> Self {
        Self(self.0.saturating_add(delta).min(Self::MAX))
    }
}

/// Flags read once at the end to pick an ending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flags {
    pub checked_door: bool,
    pub looked_window: bool,
    pub stayed_home: bool,
    pub ignored_warnings: u32,
}

impl Flags {
    pub fn set(&mut self, flag: Flag) {
        match flag {
            Flag::CheckedDoor => self.checked_door = true,
            Flag::LookedWindow => self.looked_window = true,
            Flag::StayedHome => self.stayed_home = true,
        }
    }
}

/// The mutable half of a playthrough: everything choices can change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracker {
    pub tension: Tension,
    pub flags: Flags,
}

impl Tracker {
    /// Applies a single effect.
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::SetFlag(flag) => self.flags.set(flag),
            Effect::IncrementIgnored(n) => {
                self.flags.ignored_warnings = self.flags.ignored_warnings.saturating_add(n.into());
            }
            Effect::AddTension(n) => self.tension = self.tension.raised_by(n),
        }
    }
}
