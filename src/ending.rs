//! Ending resolution: which ending a finished playthrough earns.

use crate::model::{Ending, Flags};

/// Picks the ending from the final flags.
///
/// Only restraint plus staying home earns A; heavy negligence earns C;
/// everything else lands on B. Tension is not consulted.
#[must_use]
pub fn resolve(flags: Flags) -> Ending {
    if flags.ignored_warnings <= 1 && flags.stayed_home {
        Ending::A
    } else if flags.ignored_warnings >= 4 {
        Ending::C
    } else {
        Ending::B
    }
}
