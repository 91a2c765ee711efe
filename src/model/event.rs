//! Events: the signals the presentation layer sends into the story.
//!
//! How an event was produced (key press, script line, CLI argument) is
//! none of the router's business. Text form, used by scripts and `replay`:
//!
//! ```text
//! start | exit | advance | restart | retry
//! primary:<key> | secondary:<key>
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One player action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "key", rename_all = "camelCase")]
pub enum Event {
    /// Begin a playthrough from the title.
    Start,

    /// Leave from the title.
    Exit,

    /// Move past a note or an outcome.
    Advance,

    /// Pick an outfit choice by key.
    PickPrimary(String),

    /// Pick an ominous choice by key.
    PickSecondary(String),

    /// Back to the title with everything reset.
    Restart,

    /// After a game over: straight back to stage 1.
    Retry,
}

/// Errors from parsing the text form of an [`Event`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseEventError {
    #[error("unknown event: {0}")]
    Unknown(String),

    #[error("missing choice key in '{0}'")]
    MissingKey(String),
}

impl FromStr for Event {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some((kind, key)) = s.split_once(':') {
            let key = key.trim();
            if key.is_empty() {
                return Err(ParseEventError::MissingKey(s.to_string()));
            }
            return match kind.trim() {
                "primary" | "p" => Ok(Self::PickPrimary(key.to_string())),
                "secondary" | "s" => Ok(Self::PickSecondary(key.to_string())),
                _ => Err(ParseEventError::Unknown(s.to_string())),
            };
        }

        match s {
            "start" => Ok(Self::Start),
            "exit" => Ok(Self::Exit),
            "advance" | "next" => Ok(Self::Advance),
            "restart" => Ok(Self::Restart),
            "retry" => Ok(Self::Retry),
            "primary" | "secondary" => Err(ParseEventError::MissingKey(s.to_string())),
            _ => Err(ParseEventError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Exit => f.write_str("exit"),
            Self::Advance => f.write_str("advance"),
            Self::PickPrimary(key) => write!(f, "primary:{key}"),
            Self::PickSecondary(key) => write!(f, "secondary:{key}"),
            Self::Restart => f.write_str("restart"),
            Self::Retry => f.write_str("retry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_events() {
        assert_eq!("start".parse::<Event>().unwrap(), Event::Start);
        assert_eq!(" advance ".parse::<Event>().unwrap(), Event::Advance);
        assert_eq!("next".parse::<Event>().unwrap(), Event::Advance);
        assert_eq!("retry".parse::<Event>().unwrap(), Event::Retry);
    }

    #[test]
    fn parses_picks_with_keys() {
        assert_eq!(
            "primary:1".parse::<Event>().unwrap(),
            Event::PickPrimary("1".into())
        );
        assert_eq!(
            "s:door_peek".parse::<Event>().unwrap(),
            Event::PickSecondary("door_peek".into())
        );
    }

    #[test]
    fn rejects_pick_without_key() {
        assert_eq!(
            "primary:".parse::<Event>().unwrap_err(),
            ParseEventError::MissingKey("primary:".into())
        );
        assert_eq!(
            "secondary".parse::<Event>().unwrap_err(),
            ParseEventError::MissingKey("secondary".into())
        );
    }

    #[test]
    fn rejects_unknown_event() {
        let err = "dance".parse::<Event>().unwrap_err();
        assert_eq!(err.to_string(), "unknown event: dance");
    }

    #[test]
    fn display_matches_text_form() {
        for text in ["start", "exit", "primary:3", "secondary:ignore", "restart"] {
            assert_eq!(text.parse::<Event>().unwrap().to_string(), text);
        }
    }
}
