//! Word entries and difficulty tiers

use crate::error::WordListError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Difficulty tier of a word, derived upstream from corpus frequency.
///
/// Serialized in lowercase (`"beginner"`, `"intermediate"`, `"advanced"`),
/// which is also the form used by the word-list files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = WordListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(WordListError::InvalidArgument(format!(
                "Unknown difficulty level '{}' (expected beginner, intermediate or advanced)",
                other
            ))),
        }
    }
}

/// A single lexical item from a language's word list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Opaque key of the record in the backing resource, unique per language
    pub key: String,
    /// Lemmatized surface form
    pub word: String,
    pub difficulty: Difficulty,
}
