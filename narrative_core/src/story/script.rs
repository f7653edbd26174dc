//! Dialogue script: the line sequences the story reads through.

use serde::{Deserialize, Serialize};

/// Lines shown during the intro and the first level's dialogue.
///
/// The last `level0` line is the name-entry prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    pub intro: Vec<String>,
    pub level0: Vec<String>,
}

impl Script {
    /// Index of the name-entry line in `level0`.
    pub fn name_entry_index(&self) -> usize {
        self.level0.len().saturating_sub(1)
    }
}

impl Default for Script {
    fn default() -> Self {
        let intro = [
            "The screen flickers. Somewhere behind the glass, two voices wake up.",
            "They were never meant to leave the game they were written for.",
            "But the game is breaking, and the walls between worlds grow thin.",
        ];
        let level0 = [
            "A narrow corridor of light opens in front of you.",
            "A stranger blocks the way, studying you in silence.",
            "\"Before you step beyond the screen, tell me: who are you?\"",
        ];
        Self {
            intro: intro.iter().map(|line| line.to_string()).collect(),
            level0: level0.iter().map(|line| line.to_string()).collect(),
        }
    }
}
