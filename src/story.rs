//! The stage registry: static story data, looked up by stage number.
//!
//! The built-in story lives in [`data`]. Every registry, built-in or
//! custom, is validated on construction.

mod data;

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::model::{Choice, Stage};

pub use data::ending_text;

/// Ways a set of stages can fail to form a playable story.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoryError {
    #[error("a story needs at least one stage")]
    Empty,

    #[error("stage at position {position} is numbered {found}, expected {expected}")]
    OutOfOrder {
        position: usize,
        expected: usize,
        found: u8,
    },

    #[error("stage {0} has no primary choices")]
    NoPrimaryChoices(u8),

    #[error("stage {0} declares secondary choices but lists none")]
    EmptySecondary(u8),

    #[error("stage {stage} repeats choice key '{key}'")]
    DuplicateKey { stage: u8, key: &'static str },
}

static BUILTIN: LazyLock<Result<Registry, StoryError>> =
    LazyLock::new(|| Registry::new(data::STAGES.to_vec()));

/// An ordered, immutable set of stages numbered from 1.
#[derive(Debug, Clone)]
pub struct Registry {
    stages: Vec<Stage>,
}

impl Registry {
    /// Builds a registry from the given stages, checking that they form a story.
    pub fn new(stages: Vec<Stage>) -> Result<Self, StoryError> {
        let registry = Self { stages };
        registry.validate()?;
        Ok(registry)
    }

    /// The reference story, validated the first time it is asked for.
    pub fn builtin() -> Result<&'static Self, StoryError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Looks up a stage by number.
    ///
    /// Numbers outside the registered range fall back to the first stage.
    pub fn stage(&self, number: u8) -> &Stage {
        usize::from(number)
            .checked_sub(1)
            .and_then(|i| self.stages.get(i))
            .unwrap_or(&self.stages[0])
    }

    /// Number of the last stage; finishing it leads to an ending.
    #[allow(clippy::cast_possible_truncation)] // Validation keeps numbering within u8.
    pub fn final_stage(&self) -> u8 {
        self.stages.len() as u8
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Checks every structural rule the router relies on.
    pub fn validate(&self) -> Result<(), StoryError> {
        if self.stages.is_empty() {
            return Err(StoryError::Empty);
        }

        for (i, stage) in self.stages.iter().enumerate() {
            if usize::from(stage.number) != i + 1 {
                return Err(StoryError::OutOfOrder {
                    position: i,
                    expected: i + 1,
                    found: stage.number,
                });
            }

            if stage.choices.is_empty() {
                return Err(StoryError::NoPrimaryChoices(stage.number));
            }

            let secondary: &[Choice] = match stage.secondary {
                Some(s) if s.choices.is_empty() => {
                    return Err(StoryError::EmptySecondary(stage.number));
                }
                Some(s) => s.choices,
                None => &[],
            };

            // Keys are unique within each list and never shared across the two.
            let mut seen = HashSet::new();
            for choice in stage.choices.iter().chain(secondary) {
                if !seen.insert(choice.key) {
                    return Err(StoryError::DuplicateKey {
                        stage: stage.number,
                        key: choice.key,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{Effect, Secondary};

    const PLAIN: &[Choice] = &[Choice::new("1", "one", "first", &[Effect::AddTension(1)])];
    const CLASH: &[Choice] = &[Choice::new("1", "clash", "clash", &[])];

    fn stage(number: u8) -> Stage {
        Stage {
            number,
            note: "note",
            prompt: "prompt",
            choices: PLAIN,
            secondary: None,
        }
    }

    #[test]
    fn builtin_story_is_valid() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.final_stage(), 8);
        assert_eq!(registry.stages(), &data::STAGES[..]);
    }

    #[test]
    fn builtin_data_goes_through_construction_checks() {
        let mut stages = data::STAGES.to_vec();
        stages[2].secondary = Some(Secondary {
            banner: "banner",
            flash: None,
            choices: CLASH,
        });
        assert_eq!(
            Registry::new(stages).unwrap_err(),
            StoryError::DuplicateKey { stage: 3, key: "1" }
        );

        let mut stages = data::STAGES.to_vec();
        stages.swap(0, 1);
        assert!(matches!(
            Registry::new(stages),
            Err(StoryError::OutOfOrder { position: 0, .. })
        ));
    }

    #[test]
    fn builtin_stages_have_four_outfits() {
        for stage in Registry::builtin().unwrap().stages() {
            assert_eq!(stage.choices.len(), 4, "stage {}", stage.number);
        }
    }

    #[test]
    fn builtin_secondary_lists_hold_two_to_four() {
        for stage in Registry::builtin().unwrap().stages() {
            if let Some(secondary) = stage.secondary {
                assert!(
                    (2..=4).contains(&secondary.choices.len()),
                    "stage {}",
                    stage.number
                );
            }
        }
    }

    #[test]
    fn stage_lookup_by_number() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.stage(5).number, 5);
        assert_eq!(registry.stage(8).number, 8);
    }

    #[test]
    fn out_of_range_falls_back_to_first_stage() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.stage(0).number, 1);
        assert_eq!(registry.stage(9).number, 1);
        assert_eq!(registry.stage(u8::MAX).number, 1);
    }

    #[test]
    fn rejects_empty_story() {
        assert_eq!(Registry::new(vec![]).unwrap_err(), StoryError::Empty);
    }

    #[test]
    fn rejects_gaps_in_numbering() {
        let err = Registry::new(vec![stage(1), stage(3)]).unwrap_err();
        assert_eq!(
            err,
            StoryError::OutOfOrder {
                position: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn rejects_stage_without_primary_choices() {
        let mut s = stage(1);
        s.choices = &[];
        assert_eq!(
            Registry::new(vec![s]).unwrap_err(),
            StoryError::NoPrimaryChoices(1)
        );
    }

    #[test]
    fn rejects_empty_secondary_list() {
        let mut s = stage(1);
        s.secondary = Some(Secondary {
            banner: "banner",
            flash: None,
            choices: &[],
        });
        assert_eq!(
            Registry::new(vec![s]).unwrap_err(),
            StoryError::EmptySecondary(1)
        );
    }

    #[test]
    fn rejects_secondary_key_shared_with_primary() {
        let mut s = stage(1);
        s.secondary = Some(Secondary {
            banner: "banner",
            flash: None,
            choices: CLASH,
        });
        assert_eq!(
            Registry::new(vec![s]).unwrap_err(),
            StoryError::DuplicateKey { stage: 1, key: "1" }
        );
    }

    #[test]
    fn flash_is_appended_to_note_from_stage_two() {
        let registry = Registry::builtin().unwrap();
        assert!(registry.stage(2).note_text().contains("(잠깐) 현관 쪽에서"));
        assert_eq!(registry.stage(1).note_text(), registry.stage(1).note);
    }
}
