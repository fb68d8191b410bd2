use rayon::prelude::*;
use smallvec::SmallVec;

use crate::ranking::Ranking;
use crate::signature::Signature;

/// A partial or complete cover: letter-disjoint member signatures plus their
/// union. Extension copies the members instead of sharing them; a cover holds
/// a handful of signatures at most, so the copy is a few machine words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cover {
    members: SmallVec<[Signature; 5]>,
    merged: Signature,
}

impl Cover {
    pub(crate) fn empty() -> Cover {
        Cover {
            members: SmallVec::new(),
            merged: Signature::EMPTY,
        }
    }

    /// Member signatures in the order they were added.
    pub fn members(&self) -> &[Signature] {
        &self.members
    }

    /// Union of all member signatures.
    pub fn merged(&self) -> Signature {
        self.merged
    }

    /// True if `signature` shares no letter with any member.
    pub fn admits(&self, signature: Signature) -> bool {
        self.merged.is_disjoint(signature)
    }

    /// A new cover with `signature` appended. Callers check `admits` first;
    /// this is what keeps the members pairwise disjoint.
    pub(crate) fn with(&self, signature: Signature) -> Cover {
        let mut members = self.members.clone();
        members.push(signature);
        Cover {
            members,
            merged: self.merged | signature,
        }
    }

    /// At most one of the letters ranked so far missing? `expected` is the
    /// union of the first `index + 1` ranked letters.
    fn keeps_pace(&self, expected: Signature, index: usize) -> bool {
        (self.merged & expected).count() as usize >= index
    }
}

/// Snapshot handed to the observer after each search step.
#[derive(Clone, Copy, Debug)]
pub struct StepReport {
    /// The letter just processed, as a single-letter signature.
    pub letter: Signature,
    /// Candidates introduced at this step (the letter's bucket size).
    pub candidates: usize,
    /// Working covers surviving the step.
    pub survivors: usize,
}

/// Find every letter-disjoint cover missing at most one ranked letter.
pub fn search(ranking: &Ranking) -> Vec<Cover> {
    search_with(ranking, |_| {})
}

/// Like [`search`], reporting each step to `observe` as it completes.
///
/// The working set starts as a single empty cover. Each step unions the
/// current letter into the expected coverage, carries forward covers that
/// have fallen at most one letter behind it, and extends covers with the
/// letter's bucket candidates under the same test. The comparison is against
/// the cumulative expected coverage, so the one-letter allowance is global
/// across the whole run, not per step: a cover that misses a second ranked
/// letter dies on the spot. The final step's filter doubles as the final
/// prune, so every returned cover misses at most one letter of the whole
/// ranked alphabet.
pub fn search_with<F>(ranking: &Ranking, mut observe: F) -> Vec<Cover>
where
    F: FnMut(StepReport),
{
    let mut covers = vec![Cover::empty()];
    let mut expected = Signature::EMPTY;

    for (index, step) in ranking.steps().iter().enumerate() {
        expected = expected | step.letter();

        // Survival and extension of each cover is independent of every other
        // cover, so the working set is partitioned across threads and the
        // per-cover results concatenated.
        let next: Vec<Cover> = covers
            .par_iter()
            .flat_map_iter(|cover| {
                let carried = cover.keeps_pace(expected, index).then(|| cover.clone());
                let extended = step
                    .bucket()
                    .iter()
                    .filter(move |&&signature| cover.admits(signature))
                    .map(move |&signature| cover.with(signature))
                    .filter(move |next| next.keeps_pace(expected, index));
                carried.into_iter().chain(extended)
            })
            .collect();
        covers = next;

        observe(StepReport {
            letter: step.letter(),
            candidates: step.bucket().len(),
            survivors: covers.len(),
        });
    }

    covers
}
