//! Progress types: where a playthrough stands.

use serde::Serialize;

use super::{Choice, Tracker};

/// Which full-screen state the story is in.
///
/// Scene-specific data lives on the variant, so a pending pick can only
/// exist while choosing and an outcome only while showing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "scene", rename_all = "camelCase")]
pub enum Scene {
    #[default]
    Title,

    /// Lucy's note for the current stage.
    Note,

    /// Waiting for the picks the current stage requires.
    Choose {
        #[serde(skip_serializing_if = "Option::is_none")]
        primary: Option<&'static Choice>,
        #[serde(skip_serializing_if = "Option::is_none")]
        secondary: Option<&'static Choice>,
    },

    /// The combined result of the stage's picks.
    Outcome { text: &'static str },

    /// A terminal pick ended the playthrough.
    #[serde(rename = "gameover")]
    GameOver { reason: &'static str },

    /// The story reached its end.
    Ending { ending: Ending },
}

impl Scene {
    /// A choose scene with no picks made yet.
    pub const CHOOSING: Self = Self::Choose {
        primary: None,
        secondary: None,
    };

    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Note => "note",
            Self::Choose { .. } => "choose",
            Self::Outcome { .. } => "outcome",
            Self::GameOver { .. } => "gameover",
            Self::Ending { .. } => "ending",
        }
    }
}

/// Which of the three endings the player reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ending {
    /// Lucy stayed home and called for help.
    A,
    /// Lucy pretended not to hear, to the end.
    B,
    /// Too many warnings ignored.
    C,
}

/// Everything that describes one playthrough at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    #[serde(flatten)]
    pub scene: Scene,
    pub stage: u8,
    #[serde(flatten)]
    pub tracker: Tracker,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            scene: Scene::Title,
            stage: 1,
            tracker: Tracker::default(),
        }
    }
}

impl Progress {
    pub fn pending_primary(&self) -> Option<&'static Choice> {
        match self.scene {
            Scene::Choose { primary, .. } => primary,
            _ => None,
        }
    }

    pub fn pending_secondary(&self) -> Option<&'static Choice> {
        match self.scene {
            Scene::Choose { secondary, .. } => secondary,
            _ => None,
        }
    }

    pub fn outcome_text(&self) -> Option<&'static str> {
        match self.scene {
            Scene::Outcome { text } => Some(text),
            _ => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&'static str> {
        match self.scene {
            Scene::GameOver { reason } => Some(reason),
            _ => None,
        }
    }

    pub fn ending(&self) -> Option<Ending> {
        match self.scene {
            Scene::Ending { ending } => Some(ending),
            _ => None,
        }
    }
}
