use itertools::Itertools;

use crate::signature::Signature;

/// One step of the search: a letter, how many candidates contain it, and the
/// candidates introduced at this step (those for which it is the rarest
/// contained letter).
pub struct Step {
    letter: Signature,
    count: usize,
    bucket: Vec<Signature>,
}

impl Step {
    /// The letter, as a single-letter signature.
    pub fn letter(&self) -> Signature {
        self.letter
    }

    /// Candidates containing the letter anywhere.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Candidates whose pivot this letter is.
    pub fn bucket(&self) -> &[Signature] {
        &self.bucket
    }
}

/// The alphabet ordered by ascending candidate frequency, rarest first.
///
/// Rare letters constrain the branching factor most, so processing them first
/// gives each pruning step the most leverage. Each candidate lands in exactly
/// one bucket: that of the first ranked letter it contains.
pub struct Ranking {
    steps: Vec<Step>,
}

impl Ranking {
    /// Rank the full alphabet.
    pub fn new(candidates: &[Signature]) -> Ranking {
        Ranking::over(Signature::ALL, candidates)
    }

    /// Rank only the letters of `alphabet`. Candidates containing none of
    /// them stay out of every bucket and never enter the search.
    pub fn over(alphabet: Signature, candidates: &[Signature]) -> Ranking {
        let ordered = alphabet
            .letters()
            .map(|letter| {
                let letter = Signature::of_letter(letter as u8);
                let count = candidates.iter().filter(|c| !c.is_disjoint(letter)).count();
                (letter, count)
            })
            // Ascending by count, ties alphabetical.
            .sorted_by_key(|&(letter, count)| (count, letter))
            .collect_vec();

        let mut steps = ordered
            .into_iter()
            .map(|(letter, count)| Step {
                letter,
                count,
                bucket: Vec::new(),
            })
            .collect_vec();

        for &candidate in candidates {
            if let Some(step) = steps.iter_mut().find(|s| !s.letter.is_disjoint(candidate)) {
                step.bucket.push(candidate);
            }
        }

        Ranking { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signatures(words: &[&str]) -> Vec<Signature> {
        words.iter().map(|w| Signature::of_word(w)).collect()
    }

    #[test]
    fn rarest_letters_come_first_with_alphabetical_ties() {
        let candidates = signatures(&["abcde", "abcdf"]);
        let ranking = Ranking::over(Signature::of_word("abcdef"), &candidates);
        let letters: String = ranking.steps().iter().map(|s| s.letter().letter()).collect();
        // e and f appear once, a-d twice; ties break alphabetically.
        assert_eq!(letters, "efabcd");
        let counts: Vec<usize> = ranking.steps().iter().map(|s| s.count()).collect();
        assert_eq!(counts, [1, 1, 2, 2, 2, 2]);
    }

    #[test]
    fn unused_letters_rank_ahead_of_used_ones() {
        let candidates = signatures(&["abcde"]);
        let ranking = Ranking::new(&candidates);
        // The 21 letters outside the word all count zero and sort first.
        assert_eq!(ranking.steps()[0].letter().letter(), 'f');
        assert_eq!(ranking.steps()[20].letter().letter(), 'z');
        assert_eq!(ranking.steps()[21].letter().letter(), 'a');
        assert_eq!(ranking.steps().len(), 26);
    }

    #[test]
    fn each_candidate_lands_in_the_bucket_of_its_rarest_letter() {
        let candidates = signatures(&["abcde", "abcdf"]);
        let ranking = Ranking::over(Signature::of_word("abcdef"), &candidates);
        // Order is e, f, a, b, c, d: "abcde" pivots on e, "abcdf" on f.
        assert_eq!(ranking.steps()[0].bucket(), [Signature::of_word("abcde")]);
        assert_eq!(ranking.steps()[1].bucket(), [Signature::of_word("abcdf")]);
        for step in &ranking.steps()[2..] {
            assert!(step.bucket().is_empty());
        }
    }

    #[test]
    fn buckets_partition_the_candidate_set() {
        let candidates = signatures(&["abcde", "fghij", "aghij", "klmno"]);
        let ranking = Ranking::new(&candidates);
        let bucketed: usize = ranking.steps().iter().map(|s| s.bucket().len()).sum();
        assert_eq!(bucketed, candidates.len());
    }

    #[test]
    fn candidates_outside_the_alphabet_stay_unbucketed() {
        let candidates = signatures(&["vwxyz"]);
        let ranking = Ranking::over(Signature::of_word("ab"), &candidates);
        assert!(ranking.steps().iter().all(|s| s.bucket().is_empty()));
    }
}
