//! Random sampling of words without replacement
//!
//! Sampling draws a uniformly random subset of the eligible entries, where
//! eligibility is either "every entry" or "every entry of one difficulty
//! tier". Requests larger than the eligible set are rejected up front, never
//! truncated.

use crate::entry::{Difficulty, WordEntry};
use crate::error::{WordListError, WordListResult};
use crate::store::WordList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draw `count` distinct words from `entries`, optionally restricted to one tier
///
/// The words are returned in the order of the random draw. `entries` is
/// only read.
///
/// # Errors
///
/// `InsufficientData` if `count` exceeds the number of eligible entries
/// (including the case of an empty tier). A `count` of zero always succeeds
/// with an empty result.
pub fn sample_words<R: Rng + ?Sized>(
    entries: &[WordEntry],
    count: usize,
    difficulty: Option<Difficulty>,
    rng: &mut R,
) -> WordListResult<Vec<String>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let eligible: Vec<&WordEntry> = match difficulty {
        Some(tier) => entries.iter().filter(|e| e.difficulty == tier).collect(),
        None => entries.iter().collect(),
    };

    if count > eligible.len() {
        return Err(WordListError::InsufficientData {
            requested: count,
            available: eligible.len(),
            difficulty,
        });
    }

    let words = rand::seq::index::sample(rng, eligible.len(), count)
        .into_iter()
        .map(|i| eligible[i].word.clone())
        .collect();

    Ok(words)
}

/// Owner of a random source for repeated sampling
///
/// `WordSampler::new()` seeds from OS entropy; `WordSampler::seeded` gives
/// reproducible draws.
#[derive(Debug, Clone)]
pub struct WordSampler {
    rng: StdRng,
}

impl WordSampler {
    pub fn new() -> Self {
        WordSampler {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        WordSampler {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw `count` words from the whole list
    pub fn sample(&mut self, list: &WordList, count: usize) -> WordListResult<Vec<String>> {
        sample_words(list.entries(), count, None, &mut self.rng)
    }

    /// Draw `count` words of the given tier
    pub fn sample_by_difficulty(
        &mut self,
        list: &WordList,
        difficulty: Difficulty,
        count: usize,
    ) -> WordListResult<Vec<String>> {
        sample_words(list.entries(), count, Some(difficulty), &mut self.rng)
    }
}

impl Default for WordSampler {
    fn default() -> Self {
        Self::new()
    }
}
