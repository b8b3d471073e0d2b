//! Mascot feedback: remediation hints and moods.

use crate::quest::Verdict;
use pyquest_types::FailureKind;
use serde::{Deserialize, Serialize};

/// How Sage the owl reacts on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MascotMood {
    Idle,
    Thinking,
    Excited,
    Encouraging,
    Celebrating,
}

const SYNTAX_HINTS: &[&str] = &[
    "Check your spelling and punctuation. Every quote and bracket needs a partner!",
    "Python is picky about how things are written. Look closely at the line I pointed to.",
    "Almost there! A tiny typo is hiding somewhere on that line.",
];

const RUNTIME_HINTS: &[&str] = &[
    "Make sure every magic box (variable) is created before you use it.",
    "Did you spell the variable name exactly the same way both times?",
    "Math spells only work on numbers. Is one of your values a word?",
];

const LOGIC_HINTS: &[&str] = &[
    "Your spell ran, but the result isn't quite right. Read the quest again!",
    "Compare your output with what the quest asks for, letter by letter.",
    "Close! Try changing the values and cast the spell again.",
];

const UNKNOWN_HINTS: &[&str] = &[
    "Something unexpected happened. Try resetting the code and going step by step.",
    "Even great wizards get stuck. Peek at the hint below!",
    "Take a deep breath and try the spell one more time.",
];

/// All remediation hints for a failure kind.
pub fn hints(kind: FailureKind) -> &'static [&'static str] {
    match kind {
        FailureKind::Syntax => SYNTAX_HINTS,
        FailureKind::Runtime => RUNTIME_HINTS,
        FailureKind::Logic => LOGIC_HINTS,
        FailureKind::Unknown => UNKNOWN_HINTS,
    }
}

/// Pick one hint. The caller supplies `pick` (a counter, a random number),
/// which wraps around the list.
pub fn hint(kind: FailureKind, pick: usize) -> &'static str {
    let list = hints(kind);
    list[pick % list.len()]
}

/// Mascot reaction to a quest verdict.
pub fn mood_for(verdict: &Verdict) -> MascotMood {
    match verdict {
        Verdict::Passed => MascotMood::Celebrating,
        Verdict::Ran => MascotMood::Excited,
        Verdict::Mismatch { .. } => MascotMood::Thinking,
        Verdict::Failed { .. } => MascotMood::Encouraging,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_hints() {
        for kind in FailureKind::ALL {
            assert!(hints(kind).len() >= 3, "{kind} needs hints");
        }
    }

    #[test]
    fn test_hint_pick_wraps() {
        let kind = FailureKind::Runtime;
        assert_eq!(hint(kind, 0), hint(kind, hints(kind).len()));
        assert_ne!(hint(kind, 0), hint(kind, 1));
    }
}
