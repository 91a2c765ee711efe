//! Stage types: one step of the narrative.

use serde::Serialize;

use super::Choice;

/// One step of the story: what Lucy says, and what the player may pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    /// 1-based position in the story.
    pub number: u8,

    /// Lucy's note, shown on the note scene.
    pub note: &'static str,

    /// The question above the primary (outfit) choices.
    pub prompt: &'static str,

    /// The mandatory outfit picks, in display order.
    pub choices: &'static [Choice],

    /// Ominous picks that must also be made before the stage resolves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Secondary>,
}

/// The ominous half of a stage.
///
/// The flash can only exist alongside secondary choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Secondary {
    /// Shown above the secondary choices.
    pub banner: &'static str,

    /// Appended to the note text, from stage 2 onward.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<&'static str>,

    pub choices: &'static [Choice],
}

impl Stage {
    /// Whether the stage requires a secondary pick before it resolves.
    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some_and(|s| !s.choices.is_empty())
    }

    /// Looks up a primary choice by key.
    pub fn primary(&self, key: &str) -> Option<&'static Choice> {
        self.choices.iter().find(|c| c.key == key)
    }

    /// Looks up a secondary choice by key.
    pub fn secondary_choice(&self, key: &str) -> Option<&'static Choice> {
        self.secondary
            .and_then(|s| s.choices.iter().find(|c| c.key == key))
    }

    /// The note text as displayed, including the flash when there is one.
    pub fn note_text(&self) -> String {
        match self.secondary.and_then(|s| s.flash) {
            Some(flash) if self.number >= 2 => format!("{}\n\n(잠깐) {flash}", self.note),
            _ => self.note.to_string(),
        }
    }
}
